use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;
use std::path::PathBuf;

const ROLEBOT_AUTHOR: &str = crate_authors!();
const ROLEBOT_VERSION: &str = crate_version!();
const ROLEBOT_ABOUT: &str = crate_description!();
const ROLEBOT_FLAG_D_SHORT: char = 'd';
const ROLEBOT_FLAG_D_HELP: &str = "Enable Debug logging";
const ROLEBOT_FLAG_R_SHORT: char = 'r';
const ROLEBOT_FLAG_R_HELP: &str = "Load the role aliases from a RON file";

#[derive(Parser, Debug)]
#[command(author = ROLEBOT_AUTHOR, version = ROLEBOT_VERSION, about = ROLEBOT_ABOUT)]
pub struct Args {
    #[arg(short = ROLEBOT_FLAG_D_SHORT, long, help = ROLEBOT_FLAG_D_HELP, action)]
    pub debug: bool,
    #[arg(short = ROLEBOT_FLAG_R_SHORT, long, help = ROLEBOT_FLAG_R_HELP, value_name = "FILE")]
    pub roles: Option<PathBuf>,
}
