use std::io::Read;

use crate::error::Error;
use parse::ParseOptions;
use status::Status;

pub mod parse;
pub mod status;

/// Parses the output of `git status --porcelain=v2 --branch -z`.
///
/// The stream is read one record at a time and must end with a NUL byte.
/// Decoding stops at the first error.
pub fn parse_status<R: Read>(reader: R) -> Result<Status, Error> {
    parse_status_with(reader, &ParseOptions::default())
}

pub fn parse_status_with<R: Read>(reader: R, options: &ParseOptions) -> Result<Status, Error> {
    log::debug!("Parsing status with {:?}", options);
    parse::status::parse(reader, options)
}
