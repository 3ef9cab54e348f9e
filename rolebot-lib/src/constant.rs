/// Leading character of every command
pub const PREFIX_SIGIL: char = '.';

pub const CMD_IAM: &str = "iam";
pub const CMD_IAMNOT: &str = "iamnot";
pub const CMD_HELP: &str = "help";

pub const EMOJI_OK: &str = "✅";
pub const EMOJI_ERR: &str = "❌";

/// Default short name to role name table
pub const DEFAULT_ALIASES: [(&str, &str); 5] = [
    ("frontend", "Frontend Developer"),
    ("backend", "Backend Developer"),
    ("fullstack", "Fullstack Developer"),
    ("mobile", "Mobile Developer"),
    ("student", "Student"),
];
