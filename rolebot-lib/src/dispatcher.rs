use crate::alias::AliasTable;
use crate::command::Command;
use crate::mutator;
use crate::mutator::Action;
use crate::reply;
use crate::service::RoleService;
use tracing::debug;

/// One inbound chat message
#[derive(Debug, Clone, Copy)]
pub struct Incoming<'a> {
    pub author_id: u64,
    pub channel_id: u64,
    pub guild_id: u64,
    pub content: &'a str,
}

/// Routes commands posted in the command channel to their handlers
///
/// Built once at startup and never mutated, so it can serve overlapping
/// message events without locking.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    bot_id: u64,
    channel_id: Option<u64>,
    aliases: AliasTable,
}

impl Dispatcher {
    /// Without a command channel every message is ignored
    pub fn new(bot_id: u64, channel_id: Option<u64>, aliases: AliasTable) -> Self {
        Dispatcher {
            bot_id,
            channel_id,
            aliases,
        }
    }

    pub fn channel_id(&self) -> Option<u64> {
        self.channel_id
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Handle a message, returning the reply to post in its channel if any
    pub async fn dispatch<S: RoleService + ?Sized>(
        &self,
        service: &S,
        msg: &Incoming<'_>,
    ) -> Option<String> {
        if msg.author_id == self.bot_id || Some(msg.channel_id) != self.channel_id {
            return None;
        }
        let command = Command::parse(msg.content)?;
        debug!("Got command `{:?}` by user `{}`", command, msg.author_id);
        Some(match command {
            Command::Help => reply::help(&self.aliases),
            Command::Iam(args) => self.role_command(service, msg, &args, Action::Assign).await,
            Command::IamNot(args) => self.role_command(service, msg, &args, Action::Remove).await,
        })
    }

    async fn role_command<S: RoleService + ?Sized>(
        &self,
        service: &S,
        msg: &Incoming<'_>,
        args: &[String],
        action: Action,
    ) -> String {
        if args.is_empty() {
            return reply::usage(action, &self.aliases);
        }
        match self.aliases.resolve(args) {
            Some(name) => mutator::apply(service, msg.guild_id, msg.author_id, name, action).await,
            None => reply::unknown_alias(&args.join(" "), &self.aliases),
        }
    }
}
