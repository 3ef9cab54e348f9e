pub mod alias;
pub mod command;
pub mod constant;
pub mod dispatcher;
pub mod error;
pub mod memory;
pub mod mutator;
mod parser;
pub mod reply;
pub mod service;

#[cfg(test)]
mod tests {
    use crate::alias::AliasTable;
    use crate::dispatcher::Dispatcher;
    use crate::dispatcher::Incoming;
    use crate::error::Error;
    use crate::memory::MemoryGuild;
    use crate::service::MockRoleService;
    use crate::service::Role;
    use mockall::predicate::always;
    use mockall::predicate::eq;

    const BOT: u64 = 10;
    const USER: u64 = 20;
    const CHANNEL: u64 = 30;
    const OTHER_CHANNEL: u64 = 31;
    const GUILD: u64 = 40;
    const EVERYONE: u64 = 100;
    const FRONTEND: u64 = 101;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(BOT, Some(CHANNEL), AliasTable::default())
    }

    fn msg(content: &str) -> Incoming<'_> {
        Incoming {
            author_id: USER,
            channel_id: CHANNEL,
            guild_id: GUILD,
            content,
        }
    }

    fn guild_roles() -> Vec<Role> {
        vec![
            Role::new(EVERYONE, "@everyone"),
            Role::new(FRONTEND, "Frontend Developer"),
        ]
    }

    fn untouched() -> MockRoleService {
        let mut service = MockRoleService::new();
        service.expect_guild_roles().never();
        service.expect_member_roles().never();
        service.expect_add_role().never();
        service.expect_remove_role().never();
        service
    }

    #[tokio::test]
    async fn assign_then_already_have() {
        let mut service = MockRoleService::new();
        service
            .expect_guild_roles()
            .with(eq(GUILD))
            .times(2)
            .returning(|_| Ok(guild_roles()));
        service
            .expect_member_roles()
            .with(eq(GUILD), eq(USER))
            .times(1)
            .returning(|_, _| Ok(vec![EVERYONE]));
        service
            .expect_member_roles()
            .with(eq(GUILD), eq(USER))
            .times(1)
            .returning(|_, _| Ok(vec![EVERYONE, FRONTEND]));
        service
            .expect_add_role()
            .with(eq(GUILD), eq(USER), eq(FRONTEND))
            .times(1)
            .returning(|_, _, _| Ok(()));
        service.expect_remove_role().never();

        let dispatcher = dispatcher();
        let first = dispatcher
            .dispatch(&service, &msg(".iam frontend"))
            .await
            .unwrap();
        assert!(first.contains("✅"), "{}", first);
        assert!(first.contains("Frontend Developer"), "{}", first);
        assert!(first.contains("assigned"), "{}", first);

        let second = dispatcher
            .dispatch(&service, &msg(".iam frontend"))
            .await
            .unwrap();
        assert!(second.contains("✅"), "{}", second);
        assert!(second.contains("already have"), "{}", second);
    }

    #[tokio::test]
    async fn role_missing_from_guild() {
        let mut service = MockRoleService::new();
        service
            .expect_guild_roles()
            .times(1)
            .returning(|_| Ok(guild_roles()));
        service.expect_member_roles().never();
        service.expect_add_role().never();
        service.expect_remove_role().never();

        let reply = dispatcher()
            .dispatch(&service, &msg(".iam backend"))
            .await
            .unwrap();
        assert!(reply.contains("❌"), "{}", reply);
        assert!(reply.contains("not found"), "{}", reply);
        assert!(reply.contains("Backend Developer"), "{}", reply);
    }

    #[tokio::test]
    async fn unknown_alias_lists_every_key() {
        let service = untouched();
        let dispatcher = dispatcher();
        let reply = dispatcher
            .dispatch(&service, &msg(".iam unknownrole"))
            .await
            .unwrap();
        assert!(reply.starts_with("❌"), "{}", reply);
        assert!(reply.contains("`unknownrole`"), "{}", reply);
        let lowered = reply.to_lowercase();
        for key in dispatcher.aliases().keys() {
            assert!(lowered.contains(key), "`{}` missing from {}", key, reply);
        }

        let reply = dispatcher
            .dispatch(&service, &msg(".iamnot Front End"))
            .await
            .unwrap();
        assert!(reply.contains("`Front End` not found"), "{}", reply);
    }

    #[tokio::test]
    async fn missing_argument_shows_usage() {
        let service = untouched();
        let dispatcher = dispatcher();
        let reply = dispatcher.dispatch(&service, &msg(".iam")).await.unwrap();
        assert!(reply.starts_with("Usage: `.iam <role>`"), "{}", reply);
        assert!(reply.contains("Student"), "{}", reply);
        let reply = dispatcher
            .dispatch(&service, &msg(".iamnot   "))
            .await
            .unwrap();
        assert!(reply.starts_with("Usage: `.iamnot <role>`"), "{}", reply);
        assert!(reply.contains("Student"), "{}", reply);
    }

    #[tokio::test]
    async fn ignore_own_messages() {
        let service = untouched();
        let own = Incoming {
            author_id: BOT,
            ..msg(".iam frontend")
        };
        assert_eq!(None, dispatcher().dispatch(&service, &own).await);
    }

    #[tokio::test]
    async fn ignore_other_channels() {
        let service = untouched();
        let elsewhere = Incoming {
            channel_id: OTHER_CHANNEL,
            ..msg(".iam frontend")
        };
        assert_eq!(None, dispatcher().dispatch(&service, &elsewhere).await);

        let unset = Dispatcher::new(BOT, None, AliasTable::default());
        assert_eq!(None, unset.dispatch(&service, &msg(".iam frontend")).await);
        assert_eq!(None, unset.dispatch(&service, &msg(".help")).await);
    }

    #[tokio::test]
    async fn ignore_non_commands() {
        let service = untouched();
        let dispatcher = dispatcher();
        for content in ["hello", "iam frontend", ".roll 2d6", ".", "", " .iam frontend"] {
            assert_eq!(
                None,
                dispatcher.dispatch(&service, &msg(content)).await,
                "`{}`",
                content
            );
        }
    }

    #[tokio::test]
    async fn help_lists_commands_and_aliases() {
        let service = untouched();
        let dispatcher = dispatcher();
        let reply = dispatcher.dispatch(&service, &msg(".HELP")).await.unwrap();
        for command in ["`.iam <role>`", "`.iamnot <role>`", "`.help`"] {
            assert!(reply.contains(command), "{}", reply);
        }
        for (key, name) in dispatcher.aliases().iter() {
            assert!(
                reply.contains(&format!("`{}` → {}", crate::alias::title_case(key), name)),
                "{}",
                reply
            );
        }
        assert!(
            reply.contains("`.iam Backend` - Assigns \"Backend Developer\" role"),
            "{}",
            reply
        );
        assert!(
            reply.contains("`.iamnot Backend` - Removes \"Backend Developer\" role"),
            "{}",
            reply
        );
    }

    #[tokio::test]
    async fn guild_fetch_failure() {
        let mut service = MockRoleService::new();
        service
            .expect_guild_roles()
            .times(1)
            .returning(|_| Err(Error::Service("Unknown Guild".to_owned())));
        service.expect_member_roles().never();
        service.expect_add_role().never();
        let reply = dispatcher()
            .dispatch(&service, &msg(".iam frontend"))
            .await
            .unwrap();
        assert_eq!("❌ Error: Could not access server information.", reply);
    }

    #[tokio::test]
    async fn member_fetch_failure() {
        let mut service = MockRoleService::new();
        service
            .expect_guild_roles()
            .returning(|_| Ok(guild_roles()));
        service
            .expect_member_roles()
            .times(1)
            .returning(|_, _| Err(Error::Service("Unknown Member".to_owned())));
        service.expect_remove_role().never();
        let reply = dispatcher()
            .dispatch(&service, &msg(".iamnot frontend"))
            .await
            .unwrap();
        assert_eq!("❌ Error: Could not access your member information.", reply);
    }

    #[tokio::test]
    async fn permission_failure_explains_hierarchy() {
        let mut service = MockRoleService::new();
        service
            .expect_guild_roles()
            .returning(|_| Ok(guild_roles()));
        service
            .expect_member_roles()
            .returning(|_, _| Ok(vec![FRONTEND]));
        service
            .expect_remove_role()
            .with(always(), always(), eq(FRONTEND))
            .times(1)
            .returning(|_, _, _| Err(Error::Service("HTTP 403 Forbidden".to_owned())));
        let reply = dispatcher()
            .dispatch(&service, &msg(".iamnot FRONTEND"))
            .await
            .unwrap();
        assert!(reply.starts_with("❌"), "{}", reply);
        assert!(reply.contains("permission to remove"), "{}", reply);
        assert!(reply.contains("higher than the target role"), "{}", reply);
    }

    #[tokio::test]
    async fn other_failure_is_reported() {
        let mut service = MockRoleService::new();
        service
            .expect_guild_roles()
            .returning(|_| Ok(guild_roles()));
        service.expect_member_roles().returning(|_, _| Ok(vec![]));
        service
            .expect_add_role()
            .times(1)
            .returning(|_, _, _| Err(Error::Service("Unknown Member".to_owned())));
        let reply = dispatcher()
            .dispatch(&service, &msg(".iam Frontend"))
            .await
            .unwrap();
        assert_eq!("❌ Error assigning role: Unknown Member", reply);
    }

    #[tokio::test]
    async fn other_removal_failure_is_reported() {
        let mut service = MockRoleService::new();
        service
            .expect_guild_roles()
            .returning(|_| Ok(guild_roles()));
        service
            .expect_member_roles()
            .returning(|_, _| Ok(vec![EVERYONE, FRONTEND]));
        service.expect_add_role().never();
        service
            .expect_remove_role()
            .with(eq(GUILD), eq(USER), eq(FRONTEND))
            .times(1)
            .returning(|_, _, _| Err(Error::Service("Unknown Member".to_owned())));
        let reply = dispatcher()
            .dispatch(&service, &msg(".iamnot frontend"))
            .await
            .unwrap();
        assert_eq!("❌ Error removing role: Unknown Member", reply);
    }

    #[tokio::test]
    async fn role_name_matches_ignoring_case() {
        let mut service = MockRoleService::new();
        service
            .expect_guild_roles()
            .returning(|_| Ok(vec![Role::new(7, "student")]));
        service.expect_member_roles().returning(|_, _| Ok(vec![]));
        service
            .expect_add_role()
            .with(eq(GUILD), eq(USER), eq(7))
            .times(1)
            .returning(|_, _, _| Ok(()));
        let reply = dispatcher()
            .dispatch(&service, &msg(".iam student"))
            .await
            .unwrap();
        assert_eq!("✅ Role `Student` has been assigned to you!", reply);
    }

    #[tokio::test]
    async fn memory_guild_idempotent_assignment() {
        let dispatcher = dispatcher();
        let guild = MemoryGuild::from_aliases(GUILD, dispatcher.aliases());
        for key in dispatcher.aliases().keys() {
            let command = format!(".iam {}", key);
            let first = dispatcher.dispatch(&guild, &msg(&command)).await.unwrap();
            assert!(first.contains("has been assigned"), "{}", first);
            let second = dispatcher.dispatch(&guild, &msg(&command)).await.unwrap();
            assert!(second.contains("already have"), "{}", second);
        }
        assert_eq!(vec![1, 2, 3, 4, 5], guild.roles_of(USER).unwrap());
    }

    #[tokio::test]
    async fn memory_guild_remove_never_assigned() {
        let dispatcher = dispatcher();
        let guild = MemoryGuild::from_aliases(GUILD, dispatcher.aliases());
        for key in dispatcher.aliases().keys() {
            let reply = dispatcher
                .dispatch(&guild, &msg(&format!(".iamnot {}", key)))
                .await
                .unwrap();
            assert!(reply.contains("don't have"), "{}", reply);
        }
        assert!(guild.roles_of(USER).unwrap().is_empty());
    }

    #[tokio::test]
    async fn memory_guild_case_variants_resolve_alike() {
        let dispatcher = dispatcher();
        let guild = MemoryGuild::from_aliases(GUILD, dispatcher.aliases());
        let first = dispatcher
            .dispatch(&guild, &msg(".iam Frontend"))
            .await
            .unwrap();
        assert!(first.contains("`Frontend Developer` has been assigned"), "{}", first);
        for content in [".iam frontend", ".IAM FRONTEND", ".iam   fRoNtEnD  "] {
            let reply = dispatcher.dispatch(&guild, &msg(content)).await.unwrap();
            assert!(reply.contains("already have the role `Frontend Developer`"), "{}", reply);
        }
        let removed = dispatcher
            .dispatch(&guild, &msg(".iamnot FRONTEND"))
            .await
            .unwrap();
        assert!(removed.contains("has been removed"), "{}", removed);
        assert!(guild.roles_of(USER).unwrap().is_empty());
    }

    #[tokio::test]
    async fn memory_guild_protected_role() {
        let dispatcher = dispatcher();
        // Aliases are sorted, `student` is the fifth role
        let guild = MemoryGuild::from_aliases(GUILD, dispatcher.aliases())
            .with_member(USER, [5])
            .protect(5);
        let reply = dispatcher
            .dispatch(&guild, &msg(".iamnot student"))
            .await
            .unwrap();
        assert!(reply.contains("permission to remove"), "{}", reply);
        assert_eq!(vec![5], guild.roles_of(USER).unwrap());
    }

    #[test]
    fn permission_markers() {
        assert!(Error::Forbidden("nope".to_owned()).is_permission());
        assert!(Error::Service("Missing Permissions".to_owned()).is_permission());
        assert!(Error::Service("http status 403".to_owned()).is_permission());
        assert!(Error::Other("FORBIDDEN".to_owned()).is_permission());
        assert!(!Error::Service("Unknown Member".to_owned()).is_permission());
        assert!(!Error::Config("403".to_owned()).is_permission());
    }
}
