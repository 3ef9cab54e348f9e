use crate::alias::title_case;
use crate::alias::AliasTable;
use crate::constant::CMD_HELP;
use crate::constant::CMD_IAM;
use crate::constant::CMD_IAMNOT;
use crate::constant::EMOJI_ERR;
use crate::constant::EMOJI_OK;
use crate::constant::PREFIX_SIGIL;
use crate::error::Error;
use crate::mutator::Action;
use itertools::Itertools;

pub fn usage(action: Action, aliases: &AliasTable) -> String {
    format!(
        "Usage: `{}{} <role>` - Available roles: {}",
        PREFIX_SIGIL,
        action.command(),
        aliases.titled_keys()
    )
}

pub fn unknown_alias(input: &str, aliases: &AliasTable) -> String {
    format!(
        "{} Role `{}` not found. Available roles: {}",
        EMOJI_ERR,
        input,
        aliases.titled_keys()
    )
}

pub fn guild_unavailable() -> String {
    format!("{} Error: Could not access server information.", EMOJI_ERR)
}

pub fn member_unavailable() -> String {
    format!("{} Error: Could not access your member information.", EMOJI_ERR)
}

pub fn role_not_found(name: &str) -> String {
    format!("{} Role `{}` not found.", EMOJI_ERR, name)
}

pub fn already_have(name: &str) -> String {
    format!("{} You already have the role `{}`!", EMOJI_OK, name)
}

pub fn dont_have(name: &str) -> String {
    format!("{} You don't have the role `{}`.", EMOJI_ERR, name)
}

pub fn permission_denied(action: Action) -> String {
    format!(
        "{} Error: Bot doesn't have permission to {} this role. \
         Please make sure the bot's role is higher than the target role in the server settings.",
        EMOJI_ERR,
        action.verb()
    )
}

pub fn mutation_failed(action: Action, error: &Error) -> String {
    format!("{} Error {} role: {}", EMOJI_ERR, action.gerund(), error)
}

pub fn done(action: Action, name: &str) -> String {
    match action {
        Action::Assign => format!("{} Role `{}` has been assigned to you!", EMOJI_OK, name),
        Action::Remove => format!("{} Role `{}` has been removed from you!", EMOJI_OK, name),
    }
}

/// Command syntax, alias table and a few examples
pub fn help(aliases: &AliasTable) -> String {
    let table = aliases
        .iter()
        .map(|(key, name)| format!("`{}` → {}", title_case(key), name))
        .join("\n");
    let mut examples = Vec::new();
    let mut entries = aliases.iter();
    if let Some((key, name)) = entries.next() {
        examples.push(example(CMD_IAM, key, "Assigns", name));
        if let Some((other_key, other_name)) = entries.next() {
            examples.push(example(CMD_IAM, other_key, "Assigns", other_name));
        }
        examples.push(example(CMD_IAMNOT, key, "Removes", name));
    }
    format!(
        "**Bot Commands:**\n\n\
         `{p}{iam} <role>` - Assign yourself a role\n\
         `{p}{iamnot} <role>` - Remove a role from yourself\n\
         `{p}{help}` - Show this help message\n\n\
         **Available Roles:**\n{table}\n\n\
         **Examples:**\n{examples}",
        p = PREFIX_SIGIL,
        iam = CMD_IAM,
        iamnot = CMD_IAMNOT,
        help = CMD_HELP,
        table = table,
        examples = examples.join("\n"),
    )
}

fn example(command: &str, key: &str, verb: &str, name: &str) -> String {
    format!(
        "`{}{} {}` - {} \"{}\" role",
        PREFIX_SIGIL,
        command,
        title_case(key),
        verb,
        name
    )
}
