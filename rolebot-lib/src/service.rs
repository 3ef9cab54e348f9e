use crate::error::Result;
use async_trait::async_trait;

/// A guild role as seen by the bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: u64,
    pub name: String,
}

impl Role {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Role {
            id,
            name: name.into(),
        }
    }
}

/// Platform operations needed to assign and remove roles
///
/// Nothing is cached by callers, every command fetches a fresh snapshot of
/// the guild roles and of the member roles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleService: Send + Sync {
    /// Fetch every role of a guild, in guild order
    async fn guild_roles(&self, guild_id: u64) -> Result<Vec<Role>>;

    /// Fetch the ids of the roles held by a guild member
    async fn member_roles(&self, guild_id: u64, user_id: u64) -> Result<Vec<u64>>;

    async fn add_role(&self, guild_id: u64, user_id: u64, role_id: u64) -> Result<()>;

    async fn remove_role(&self, guild_id: u64, user_id: u64, role_id: u64) -> Result<()>;
}
