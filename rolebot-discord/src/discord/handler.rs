use super::service::DiscordRoles;
use rolebot_lib::dispatcher::Dispatcher;
use rolebot_lib::dispatcher::Incoming;
use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::event::ResumedEvent;
use serenity::model::gateway::Ready;
use serenity::prelude::Context;
use serenity::prelude::EventHandler;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;

pub(crate) struct Handler {
    dispatcher: Dispatcher,
}

impl Handler {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        // Direct messages have no guild and no roles to give
        let Some(guild_id) = msg.guild_id else {
            return;
        };
        let incoming = Incoming {
            author_id: *msg.author.id.as_u64(),
            channel_id: *msg.channel_id.as_u64(),
            guild_id: *guild_id.as_u64(),
            content: &msg.content,
        };
        let service = DiscordRoles::new(ctx.http.clone());
        if let Some(reply) = self.dispatcher.dispatch(&service, &incoming).await {
            if let Err(why) = msg.channel_id.say(&ctx.http, &reply).await {
                error!("Could not reply in channel `{}`: {:?}", msg.channel_id, why);
            }
        }
    }

    async fn ready(&self, _: Context, ready: Ready) {
        info!("Connected as `{}`", ready.user.name);
        match self.dispatcher.channel_id() {
            Some(channel_id) => info!("Listening for commands in channel `{}`", channel_id),
            None => warn!("No command channel configured, every command will be ignored"),
        }
    }

    async fn resume(&self, _: Context, _: ResumedEvent) {
        debug!("Resumed");
    }
}
