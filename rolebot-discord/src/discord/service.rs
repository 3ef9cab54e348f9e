use rolebot_lib::error::Error;
use rolebot_lib::error::Result;
use rolebot_lib::service::Role;
use rolebot_lib::service::RoleService;
use serenity::async_trait;
use serenity::http::Http;
use serenity::http::HttpError;
use std::sync::Arc;

/// Discord JSON error code for `Missing Permissions`
const MISSING_PERMISSIONS: isize = 50013;
const FORBIDDEN: u16 = 403;
const AUDIT_REASON: &str = "Self-assigned role command";

/// Role operations backed by the Discord REST API
pub(crate) struct DiscordRoles {
    http: Arc<Http>,
}

impl DiscordRoles {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

fn is_forbidden(status: u16, code: isize) -> bool {
    status == FORBIDDEN || code == MISSING_PERMISSIONS
}

fn classify(why: serenity::Error) -> Error {
    if let serenity::Error::Http(error) = &why {
        if let HttpError::UnsuccessfulRequest(response) = error.as_ref() {
            if is_forbidden(response.status_code.as_u16(), response.error.code) {
                return Error::Forbidden(response.error.message.clone());
            }
        }
    }
    Error::Service(why.to_string())
}

#[async_trait]
impl RoleService for DiscordRoles {
    async fn guild_roles(&self, guild_id: u64) -> Result<Vec<Role>> {
        let roles = self
            .http
            .get_guild_roles(guild_id)
            .await
            .map_err(classify)?;
        Ok(roles
            .into_iter()
            .map(|role| Role::new(*role.id.as_u64(), role.name))
            .collect())
    }

    async fn member_roles(&self, guild_id: u64, user_id: u64) -> Result<Vec<u64>> {
        let member = self
            .http
            .get_member(guild_id, user_id)
            .await
            .map_err(classify)?;
        Ok(member.roles.iter().map(|role_id| *role_id.as_u64()).collect())
    }

    async fn add_role(&self, guild_id: u64, user_id: u64, role_id: u64) -> Result<()> {
        self.http
            .add_member_role(guild_id, user_id, role_id, Some(AUDIT_REASON))
            .await
            .map_err(classify)
    }

    async fn remove_role(&self, guild_id: u64, user_id: u64, role_id: u64) -> Result<()> {
        self.http
            .remove_member_role(guild_id, user_id, role_id, Some(AUDIT_REASON))
            .await
            .map_err(classify)
    }
}
