use crate::constant::CMD_IAM;
use crate::constant::CMD_IAMNOT;
use crate::reply;
use crate::service::RoleService;
use tracing::error;
use tracing::info;
use tracing::warn;

/// Membership change requested by a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Assign,
    Remove,
}

impl Action {
    /// Command word triggering the action
    pub fn command(&self) -> &'static str {
        match self {
            Action::Assign => CMD_IAM,
            Action::Remove => CMD_IAMNOT,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Action::Assign => "assign",
            Action::Remove => "remove",
        }
    }

    pub fn gerund(&self) -> &'static str {
        match self {
            Action::Assign => "assigning",
            Action::Remove => "removing",
        }
    }
}

/// Fetch the guild and the member, check the membership and mutate it
///
/// Every step either advances or returns the reply explaining why it stopped,
/// nothing is retried.
pub async fn apply<S: RoleService + ?Sized>(
    service: &S,
    guild_id: u64,
    user_id: u64,
    role_name: &str,
    action: Action,
) -> String {
    let roles = match service.guild_roles(guild_id).await {
        Ok(roles) => roles,
        Err(why) => {
            warn!("Could not get roles of guild `{}`: {}", guild_id, why);
            return reply::guild_unavailable();
        }
    };
    let wanted = role_name.to_lowercase();
    let Some(role) = roles.iter().find(|role| role.name.to_lowercase() == wanted) else {
        return reply::role_not_found(role_name);
    };
    let held = match service.member_roles(guild_id, user_id).await {
        Ok(held) => held,
        Err(why) => {
            warn!("Could not get member `{}` of guild `{}`: {}", user_id, guild_id, why);
            return reply::member_unavailable();
        }
    };
    match (action, held.contains(&role.id)) {
        (Action::Assign, true) => return reply::already_have(role_name),
        (Action::Remove, false) => return reply::dont_have(role_name),
        _ => (),
    }
    let result = match action {
        Action::Assign => service.add_role(guild_id, user_id, role.id).await,
        Action::Remove => service.remove_role(guild_id, user_id, role.id).await,
    };
    match result {
        Ok(()) => {
            info!(
                "Role `{}` {} member `{}`",
                role.name,
                match action {
                    Action::Assign => "assigned to",
                    Action::Remove => "removed from",
                },
                user_id
            );
            reply::done(action, role_name)
        }
        Err(why) => {
            error!("Error {} role `{}`: {}", action.gerund(), role.name, why);
            if why.is_permission() {
                reply::permission_denied(action)
            } else {
                reply::mutation_failed(action, &why)
            }
        }
    }
}
