mod config;
mod handler;
mod service;

use config::Config;
use handler::Handler;
use rolebot_lib::dispatcher::Dispatcher;
use serenity::http::Http;
use serenity::prelude::GatewayIntents;
use serenity::Client;
use std::path::Path;
use tracing::info;
use tracing_unwrap::ResultExt;

pub async fn run(roles: Option<&Path>) {
    let config = Config::load(roles).expect_or_log("Invalid configuration");

    let http = Http::new(&config.token);

    let bot = http
        .get_current_user()
        .await
        .expect_or_log("Could not access bot account");
    info!("Running as `{}#{:04}`", bot.name, bot.discriminator);

    let dispatcher = Dispatcher::new(*bot.id.as_u64(), config.channel_id, config.aliases);

    let intents = GatewayIntents::non_privileged()
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.token, intents)
        .event_handler(Handler::new(dispatcher))
        .await
        .expect_or_log("Error creating client");

    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect_or_log("Could not register Ctrl+C handler");
        info!("Shutting down");
        shard_manager.lock().await.shutdown_all().await;
    });

    client.start().await.expect_or_log("Client error");
}
