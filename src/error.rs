use std::{fmt::Display, io, num::ParseIntError, path::PathBuf};

#[derive(Debug)]
pub enum Error {
    ReadStatus(io::Error),
    MissingTerminator,
    RecordTooLong(usize),
    InvalidUtf8(String),
    MalformedHeader(String),
    ParseCount {
        field: &'static str,
        value: String,
        err: ParseIntError,
    },
    MalformedEntry(String),
    MissingRenameSource(String),
    OpenInput(io::Error),
    MissingConfig(PathBuf),
    Config(figment::Error),
    OpenLogFile(io::Error),
    SerializeStatus(toml::ser::Error),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ReadStatus(e) | Error::OpenInput(e) | Error::OpenLogFile(e) => Some(e),
            Error::ParseCount { err, .. } => Some(err),
            Error::Config(e) => Some(e),
            Error::SerializeStatus(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ReadStatus(e) => f.write_fmt(format_args!("Couldn't read status: {}", e)),
            Error::MissingTerminator => {
                f.write_str("Status output doesn't end with a terminating NUL byte")
            }
            Error::RecordTooLong(max) => f.write_fmt(format_args!(
                "Status record exceeds the maximum length of {} bytes",
                max
            )),
            Error::InvalidUtf8(text) => {
                f.write_fmt(format_args!("Status record isn't valid UTF-8: {:?}", text))
            }
            Error::MalformedHeader(line) => {
                f.write_fmt(format_args!("Malformed header line: {:?}", line))
            }
            Error::ParseCount { field, value, err } => f.write_fmt(format_args!(
                "Couldn't parse {} count {:?}: {}",
                field, value, err
            )),
            Error::MalformedEntry(line) => {
                f.write_fmt(format_args!("Malformed entry line: {:?}", line))
            }
            Error::MissingRenameSource(path) => f.write_fmt(format_args!(
                "Status output ends before the source path of {:?}",
                path
            )),
            Error::OpenInput(e) => f.write_fmt(format_args!("Couldn't open input: {}", e)),
            Error::MissingConfig(path) => {
                f.write_fmt(format_args!("Config file {:?} doesn't exist", path))
            }
            Error::Config(e) => f.write_fmt(format_args!("Configuration error: {}", e)),
            Error::OpenLogFile(e) => f.write_fmt(format_args!("Couldn't open log file: {}", e)),
            Error::SerializeStatus(e) => {
                f.write_fmt(format_args!("Couldn't serialize status: {}", e))
            }
        }
    }
}
