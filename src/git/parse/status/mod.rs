use std::{
    io::{BufReader, Read},
    mem,
    str::FromStr,
};

use itertools::Itertools;

use super::{ParseOptions, nul::NulRecords};
use crate::{
    error::Error,
    git::status::{Rename, RenameKind, Status},
};

mod header;

/// A porcelain v2 record, classified by its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Record<'a> {
    Header(&'a str),
    Ordinary(&'a str),
    RenameCopy(&'a str),
    Unmerged(&'a str),
    Untracked(&'a str),
    Ignored(&'a str),
    Unknown(&'a str),
}

impl<'a> Record<'a> {
    fn classify(line: &'a str) -> Self {
        match line.chars().next() {
            Some('#') => Record::Header(line),
            Some('1') => Record::Ordinary(line),
            Some('2') => Record::RenameCopy(line),
            Some('u') => Record::Unmerged(line),
            Some('?') => Record::Untracked(line),
            Some('!') => Record::Ignored(line),
            _ => Record::Unknown(line),
        }
    }
}

/// What the next record is expected to be. In `-z` mode the source path
/// of a rename or copy follows its entry as a record of its own.
enum Expect {
    Record,
    RenameSource(Rename),
    SkippedSource(String),
}

struct Decoder<'o> {
    options: &'o ParseOptions,
    status: Status,
    expect: Expect,
}

pub(crate) fn parse<R: Read>(reader: R, options: &ParseOptions) -> Result<Status, Error> {
    let mut decoder = Decoder {
        options,
        status: Status::default(),
        expect: Expect::Record,
    };

    let records = NulRecords::new(
        BufReader::new(reader),
        options.max_record_len,
        !options.strict_entries,
    );

    for record in records {
        decoder.decode(&record?)?;
    }

    decoder.finish()
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s.as_bytes(), &ParseOptions::default())
    }
}

impl Decoder<'_> {
    fn decode(&mut self, line: &str) -> Result<(), Error> {
        match mem::replace(&mut self.expect, Expect::Record) {
            Expect::Record => (),
            Expect::RenameSource(mut rename) => {
                rename.from = line.to_string();
                self.status.renames.push(rename);
                return Ok(());
            }
            Expect::SkippedSource(_) => return Ok(()),
        }

        let record = Record::classify(line);
        log::trace!("Decoding {:?}", record);

        let result = match record {
            Record::Header(line) => return header::decode(&mut self.status, line),
            Record::Ordinary(line) => self.ordinary(line),
            Record::RenameCopy(line) => self.rename_copy(line),
            Record::Unmerged(line) => self.unmerged(line),
            Record::Untracked(line) => {
                entry_path(line, "? ").map(|path| self.status.push_untracked(path))
            }
            Record::Ignored(line) => {
                entry_path(line, "! ").map(|path| self.status.push_ignored(path))
            }
            Record::Unknown(line) => {
                log::debug!("Skipping unknown record {:?}", line);
                Ok(())
            }
        };

        match result {
            Err(Error::MalformedEntry(entry)) if !self.options.strict_entries => {
                log::warn!("Skipping malformed entry {:?}", entry);
                if matches!(record, Record::RenameCopy(_)) {
                    self.expect = Expect::SkippedSource(entry);
                }
                Ok(())
            }
            result => result,
        }
    }

    /// `1 <XY> <sub> <mH> <mI> <mW> <hH> <hI> <path>`
    fn ordinary(&mut self, line: &str) -> Result<(), Error> {
        let (_, xy, _sub, _mh, _mi, _mw, _hh, _hi, path) = line
            .splitn(9, ' ')
            .collect_tuple()
            .ok_or_else(|| malformed(line))?;

        let (x, y) = change_codes(xy).ok_or_else(|| malformed(line))?;
        if path.is_empty() {
            return Err(malformed(line));
        }

        self.status.count_change(x);
        self.status.count_change(y);
        Ok(())
    }

    /// `2 <XY> <sub> <mH> <mI> <mW> <hH> <hI> <X><score> <path>`
    fn rename_copy(&mut self, line: &str) -> Result<(), Error> {
        let (_, xy, _sub, _mh, _mi, _mw, _hh, _hi, score, path) = line
            .splitn(10, ' ')
            .collect_tuple()
            .ok_or_else(|| malformed(line))?;

        let (x, y) = change_codes(xy).ok_or_else(|| malformed(line))?;
        let (kind, score) = rename_score(score).ok_or_else(|| malformed(line))?;
        if path.is_empty() {
            return Err(malformed(line));
        }

        self.status.count_change(x);
        self.status.count_change(y);
        self.expect = Expect::RenameSource(Rename {
            kind,
            score,
            from: String::new(),
            to: path.to_string(),
        });
        Ok(())
    }

    /// `u <XY> <sub> <m1> <m2> <m3> <mW> <h1> <h2> <h3> <path>`
    fn unmerged(&mut self, line: &str) -> Result<(), Error> {
        let (_, xy, _sub, _m1, _m2, _m3, _mw, _h1, _h2, _h3, path) = line
            .splitn(11, ' ')
            .collect_tuple()
            .ok_or_else(|| malformed(line))?;

        if change_codes(xy).is_none() || path.is_empty() {
            return Err(malformed(line));
        }

        self.status.push_conflicted(path);
        Ok(())
    }

    fn finish(self) -> Result<Status, Error> {
        match self.expect {
            Expect::Record => Ok(self.status),
            Expect::RenameSource(rename) => Err(Error::MissingRenameSource(rename.to)),
            Expect::SkippedSource(line) => Err(Error::MissingRenameSource(line)),
        }
    }
}

fn change_codes(xy: &str) -> Option<(char, char)> {
    xy.chars().collect_tuple()
}

/// `R100`, `C75`
fn rename_score(field: &str) -> Option<(RenameKind, u8)> {
    let kind = match field.chars().next()? {
        'R' => RenameKind::Renamed,
        'C' => RenameKind::Copied,
        _ => return None,
    };

    let score = field[1..].parse().ok().filter(|score| *score <= 100)?;
    Some((kind, score))
}

fn entry_path<'a>(line: &'a str, prefix: &str) -> Result<&'a str, Error> {
    line.strip_prefix(prefix)
        .filter(|path| !path.is_empty())
        .ok_or_else(|| malformed(line))
}

fn malformed(line: &str) -> Error {
    Error::MalformedEntry(line.to_string())
}
