use clap::Parser;
use git_version::git_version;
use gitstatus::{LOG_FILE_NAME, Res, cli::Args, config, error::Error};
use std::io;

pub fn main() -> Res<()> {
    let args = Args::parse();

    if args.version {
        println!("gitstatus {}", git_version!(fallback = "unknown"));
        return Ok(());
    }

    let config = config::init_config(args.config.as_deref())?;

    if args.log {
        simple_logging::log_to_file(LOG_FILE_NAME, config.log.level)
            .map_err(Error::OpenLogFile)?;
    }

    gitstatus::run(&args, &config, &mut io::stdout().lock())
}
