mod helper;
use helper::ReplHelper;

use colored::Colorize;
use futures::executor::block_on;
use rolebot_lib::alias::AliasTable;
use rolebot_lib::constant::CMD_HELP;
use rolebot_lib::constant::CMD_IAM;
use rolebot_lib::constant::CMD_IAMNOT;
use rolebot_lib::constant::EMOJI_ERR;
use rolebot_lib::constant::PREFIX_SIGIL;
use rolebot_lib::dispatcher::Dispatcher;
use rolebot_lib::dispatcher::Incoming;
use rolebot_lib::memory::MemoryGuild;
use rustyline::error::ReadlineError;
use rustyline::highlight::MatchingBracketHighlighter;
use rustyline::hint::HistoryHinter;
use rustyline::CompletionType;
use rustyline::Config;
use rustyline::EditMode;
use rustyline::Editor;
use rustyline::Result;
use termimad::crossterm::style::Color;
use termimad::MadSkin;

const HISTORY_FILE: &str = "history";

const BOT_ID: u64 = 0;
const USER_ID: u64 = 1;
const CHANNEL_ID: u64 = 1;
const GUILD_ID: u64 = 1;

fn main() -> Result<()> {
    let aliases = AliasTable::default();
    let guild = MemoryGuild::from_aliases(GUILD_ID, &aliases);
    let dispatcher = Dispatcher::new(BOT_ID, Some(CHANNEL_ID), aliases);

    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();
    let words = [CMD_IAM, CMD_IAMNOT, CMD_HELP]
        .iter()
        .map(|command| format!("{}{}", PREFIX_SIGIL, command))
        .chain(dispatcher.aliases().keys().map(str::to_owned))
        .collect();
    let helper = ReplHelper {
        words,
        highlighter: MatchingBracketHighlighter::new(),
        hinter: HistoryHinter {},
        colored: "".to_owned(),
    };
    let mut skin = MadSkin::default();
    skin.bold.set_fg(Color::Yellow);
    skin.inline_code.set_fg(Color::Magenta);
    let mut rline = Editor::with_config(config)?;
    rline.set_helper(Some(helper));
    if rline.load_history(HISTORY_FILE).is_err() {
        eprintln!("{}", "repl: warn: no previous history".bold().yellow());
    }
    for role in guild.roles() {
        eprintln!(
            "{}",
            format!("repl: guild role {} `{}`", role.id, role.name).dimmed()
        );
    }
    let mut count = 1u64;
    loop {
        let prompt = format!("repl: {}> ", count);
        rline.helper_mut().expect("repl: panic: no helper").colored =
            prompt.bold().green().to_string();
        let readline = rline.readline(&prompt);
        match readline {
            Ok(line) => {
                rline.add_history_entry(line.as_str())?;
                let incoming = Incoming {
                    author_id: USER_ID,
                    channel_id: CHANNEL_ID,
                    guild_id: GUILD_ID,
                    content: line.trim_end(),
                };
                match block_on(dispatcher.dispatch(&guild, &incoming)) {
                    Some(reply) if reply.starts_with(EMOJI_ERR) => {
                        eprintln!("{}", reply.bold().red())
                    }
                    Some(reply) => println!("{}", skin.term_text(&reply)),
                    None if !line.trim().is_empty() => {
                        eprintln!("{}", "repl: info: ignored".dimmed())
                    }
                    None => (),
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("{}", "repl: signal: CTRL-C".bold().yellow());
                break;
            }
            Err(ReadlineError::Eof) => {
                eprintln!("{}", "repl: signal: CTRL-D".bold().yellow());
                break;
            }
            Err(error) => {
                eprintln!("{}", format!("repl: error: `{:?}`", error).bold().red());
                break;
            }
        }
        count += 1;
    }
    rline.append_history(HISTORY_FILE)
}
