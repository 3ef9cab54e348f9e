use rolebot_lib::alias::AliasTable;
use rolebot_lib::error::Error;
use rolebot_lib::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;
use tracing::debug;
use tracing::warn;

const ENV_TOKEN: &str = "DISCORD_BOT_TOKEN";
const ENV_CHANNEL: &str = "SET_ROLE_CHANNEL_ID";

/// Layout of a role alias file
///
/// ```ron
/// (
///     roles: {
///         "frontend": "Frontend Developer",
///         "student": "Student",
///     },
/// )
/// ```
#[derive(Deserialize)]
struct RoleFile {
    roles: BTreeMap<String, String>,
}

pub(crate) struct Config {
    pub(crate) token: String,
    pub(crate) channel_id: Option<u64>,
    pub(crate) aliases: AliasTable,
}

impl Config {
    /// Read the environment (and `.env` when present) plus the optional role file
    pub(crate) fn load(roles: Option<&Path>) -> Result<Self> {
        if dotenv::dotenv().is_err() {
            debug!("No `.env` file");
        }
        let token = env::var(ENV_TOKEN)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| Error::Config(format!("env var `{}` is not set", ENV_TOKEN)))?;
        let channel_id = parse_channel(env::var(ENV_CHANNEL).ok().as_deref());
        let aliases = match roles {
            Some(path) => load_aliases(path)?,
            None => AliasTable::default(),
        };
        Ok(Config {
            token,
            channel_id,
            aliases,
        })
    }
}

fn parse_channel(value: Option<&str>) -> Option<u64> {
    let value = value?.trim();
    match value.parse::<u64>() {
        Ok(channel_id) => Some(channel_id),
        Err(_) => {
            warn!("Env var `{}` is not a channel id: `{}`", ENV_CHANNEL, value);
            None
        }
    }
}

fn load_aliases(path: &Path) -> Result<AliasTable> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("could not read `{}`: {}", path.display(), e)))?;
    parse_aliases(&text)
}

fn parse_aliases(text: &str) -> Result<AliasTable> {
    let file: RoleFile =
        ron::from_str(text).map_err(|e| Error::Config(format!("invalid role file: {}", e)))?;
    AliasTable::new(file.roles)
}
