use std::path::PathBuf;

use clap::Parser;

#[derive(Default, Debug, Parser)]
#[command(name = crate::APP_NAME)]
#[command(about = "Parse `git status --porcelain=v2 --branch -z` output into TOML")]
pub struct Args {
    /// File holding the status output. Reads stdin when omitted.
    pub input: Option<PathBuf>,
    /// Use this config file instead of the default location
    #[clap(long)]
    pub config: Option<PathBuf>,
    /// Fail on malformed entry lines instead of skipping them
    #[clap(long, action)]
    pub strict: bool,
    /// Enable logging to 'gitstatus.log'
    #[clap(long, action)]
    pub log: bool,

    #[clap(long, action)]
    /// Print version
    pub version: bool,
}
