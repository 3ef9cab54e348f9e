use crate::constant::CMD_HELP;
use crate::constant::CMD_IAM;
use crate::constant::CMD_IAMNOT;
use crate::constant::PREFIX_SIGIL;
use crate::parser::Parser;

/// Recognized commands with their positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Iam(Vec<String>),
    IamNot(Vec<String>),
    Help,
}

impl Command {
    /// Parse a message text, `None` when it is not a known command
    pub fn parse(content: &str) -> Option<Self> {
        if !content.starts_with(PREFIX_SIGIL) {
            return None;
        }
        let (name, args) = Parser::split(content).ok()?;
        match name.as_str() {
            CMD_IAM => Some(Self::Iam(args)),
            CMD_IAMNOT => Some(Self::IamNot(args)),
            CMD_HELP => Some(Self::Help),
            _ => None,
        }
    }
}
