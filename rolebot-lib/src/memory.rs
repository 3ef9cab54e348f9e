use crate::alias::AliasTable;
use crate::error::Error;
use crate::error::Result;
use crate::service::Role;
use crate::service::RoleService;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::MutexGuard;

const FORBIDDEN: &str = "403 Forbidden: Missing Permissions";

/// In-memory guild, every user is a member of it
pub struct MemoryGuild {
    id: u64,
    roles: Vec<Role>,
    protected: HashSet<u64>,
    members: Mutex<HashMap<u64, BTreeSet<u64>>>,
}

impl MemoryGuild {
    pub fn new(id: u64, roles: Vec<Role>) -> Self {
        MemoryGuild {
            id,
            roles,
            protected: HashSet::new(),
            members: Mutex::new(HashMap::new()),
        }
    }

    /// Guild holding one role per alias, ids start at 1 in alias order
    pub fn from_aliases(id: u64, aliases: &AliasTable) -> Self {
        let roles = aliases
            .iter()
            .zip(1..)
            .map(|((_, name), role_id)| Role::new(role_id, name))
            .collect();
        Self::new(id, roles)
    }

    pub fn with_member(self, user_id: u64, roles: impl IntoIterator<Item = u64>) -> Self {
        if let Ok(mut members) = self.members.lock() {
            members.insert(user_id, roles.into_iter().collect());
        }
        self
    }

    /// Mark a role as placed above the bot, mutating it is forbidden
    pub fn protect(mut self, role_id: u64) -> Self {
        self.protected.insert(role_id);
        self
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Role ids held by a user, sorted
    pub fn roles_of(&self, user_id: u64) -> Result<Vec<u64>> {
        Ok(self
            .members()?
            .get(&user_id)
            .map(|roles| roles.iter().copied().collect())
            .unwrap_or_default())
    }

    fn members(&self) -> Result<MutexGuard<'_, HashMap<u64, BTreeSet<u64>>>> {
        self.members
            .lock()
            .map_err(|e| Error::Other(format!("poisoned member map: {e}")))
    }

    fn check_guild(&self, guild_id: u64) -> Result<()> {
        if guild_id == self.id {
            Ok(())
        } else {
            Err(Error::Service(format!("Unknown Guild `{guild_id}`")))
        }
    }

    fn check_role(&self, role_id: u64) -> Result<()> {
        if !self.roles.iter().any(|role| role.id == role_id) {
            Err(Error::Service(format!("Unknown Role `{role_id}`")))
        } else if self.protected.contains(&role_id) {
            Err(Error::Forbidden(FORBIDDEN.to_owned()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RoleService for MemoryGuild {
    async fn guild_roles(&self, guild_id: u64) -> Result<Vec<Role>> {
        self.check_guild(guild_id)?;
        Ok(self.roles.clone())
    }

    async fn member_roles(&self, guild_id: u64, user_id: u64) -> Result<Vec<u64>> {
        self.check_guild(guild_id)?;
        self.roles_of(user_id)
    }

    async fn add_role(&self, guild_id: u64, user_id: u64, role_id: u64) -> Result<()> {
        self.check_guild(guild_id)?;
        self.check_role(role_id)?;
        self.members()?.entry(user_id).or_default().insert(role_id);
        Ok(())
    }

    async fn remove_role(&self, guild_id: u64, user_id: u64, role_id: u64) -> Result<()> {
        self.check_guild(guild_id)?;
        self.check_role(role_id)?;
        if let Some(roles) = self.members()?.get_mut(&user_id) {
            roles.remove(&role_id);
        }
        Ok(())
    }
}
