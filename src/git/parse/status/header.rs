use itertools::Itertools;

use crate::{error::Error, git::status::Status};

const INITIAL: &str = "(initial)";
const DETACHED: &str = "(detached)";

/// Decodes a `# <key> <value>` line. Unknown keys are skipped.
pub(super) fn decode(status: &mut Status, line: &str) -> Result<(), Error> {
    let Some(header) = line.strip_prefix("# ") else {
        log::debug!("Skipping header {:?}", line);
        return Ok(());
    };

    let (key, value) = header.split_once(' ').unwrap_or((header, ""));

    match key {
        "branch.oid" => branch_oid(status, line, value),
        "branch.head" => branch_head(status, line, value),
        "branch.upstream" => branch_upstream(status, line, value),
        "branch.ab" => branch_ab(status, line, value),
        "stash" => {
            status.stash_count = parse_count(line, "stash", value)?;
            Ok(())
        }
        _ => {
            log::debug!("Skipping unknown header {:?}", key);
            Ok(())
        }
    }
}

fn branch_oid(status: &mut Status, line: &str, value: &str) -> Result<(), Error> {
    if value == INITIAL {
        status.is_initial = true;
        status.commit.clear();
        return Ok(());
    }

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed(line));
    }

    status.is_initial = false;
    status.commit = value.to_string();
    Ok(())
}

fn branch_head(status: &mut Status, line: &str, value: &str) -> Result<(), Error> {
    if value == DETACHED {
        status.is_detached = true;
        status.local_branch.clear();
        return Ok(());
    }

    if value.is_empty() {
        return Err(malformed(line));
    }

    status.is_detached = false;
    status.local_branch = value.to_string();
    Ok(())
}

fn branch_upstream(status: &mut Status, line: &str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(malformed(line));
    }

    status.remote_branch = value.to_string();
    Ok(())
}

/// `+<ahead> -<behind>`
fn branch_ab(status: &mut Status, line: &str, value: &str) -> Result<(), Error> {
    let (ahead, behind) = value
        .split(' ')
        .collect_tuple()
        .ok_or_else(|| malformed(line))?;

    let ahead = ahead.strip_prefix('+').ok_or_else(|| malformed(line))?;
    let behind = behind.strip_prefix('-').ok_or_else(|| malformed(line))?;

    let ahead = parse_count(line, "ahead", ahead)?;
    let behind = parse_count(line, "behind", behind)?;

    status.ahead = ahead;
    status.behind = behind;
    Ok(())
}

fn parse_count(line: &str, field: &'static str, value: &str) -> Result<u32, Error> {
    // `u32::from_str` would accept a sign here
    if value.starts_with(['+', '-']) {
        return Err(malformed(line));
    }

    value.parse().map_err(|err| Error::ParseCount {
        field,
        value: value.to_string(),
        err,
    })
}

fn malformed(line: &str) -> Error {
    Error::MalformedHeader(line.to_string())
}
