pub mod cli;
pub mod config;
pub mod error;
pub mod git;

use std::{
    fs::File,
    io::{self, Write},
};

pub use error::Error;
pub use git::{
    parse::ParseOptions,
    parse_status, parse_status_with,
    status::{Rename, RenameKind, Status},
};

pub const APP_NAME: &str = "gitstatus";
pub const LOG_FILE_NAME: &str = "gitstatus.log";

pub type Res<T> = Result<T, Box<dyn std::error::Error>>;

/// Parses the status output named by `args` and writes it to `out` as TOML.
pub fn run(args: &cli::Args, config: &config::Config, out: &mut impl Write) -> Res<()> {
    let mut options = config.parse.clone();
    if args.strict {
        options.strict_entries = true;
    }

    let status = match &args.input {
        Some(path) => {
            log::debug!("Reading status from {:?}", path);
            parse_status_with(File::open(path).map_err(Error::OpenInput)?, &options)?
        }
        None => {
            log::debug!("Reading status from stdin");
            parse_status_with(io::stdin().lock(), &options)?
        }
    };

    log::debug!("Writing status");
    let text = toml::to_string(&status).map_err(Error::SerializeStatus)?;
    out.write_all(text.as_bytes())?;

    Ok(())
}
