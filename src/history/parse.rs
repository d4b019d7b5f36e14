use crate::error::{BugkingError, Result};
use crate::model::{CommitRecord, IgnoreSet};

/// Line that opens and closes every entry in `svn log` output.
pub const SEPARATOR: &str =
    "------------------------------------------------------------------------";

const HEADER_LINE: usize = 0;
const MESSAGE_LINE: usize = 2;

/// Split log text into per-commit blocks.
///
/// Scans from the end toward the start; every separator closes the block that
/// runs up to the previously found separator. The final line is the closing
/// separator of well-formed output and never belongs to a block, so blocks
/// come out last entry first.
pub fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let lines: Vec<&str> = text
        .trim()
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();

    let mut blocks = Vec::new();
    let mut end = lines.len() - 1;
    for i in (0..end).rev() {
        if lines[i] == SEPARATOR {
            blocks.push(lines[i + 1..end].to_vec());
            end = i;
        }
    }
    blocks
}

/// Parse one window's log text into records, dropping ignored authors.
pub fn parse_log(text: &str, ignore: &IgnoreSet) -> Result<Vec<CommitRecord>> {
    let mut records = Vec::new();
    for (index, block) in split_blocks(text).iter().enumerate() {
        let record = parse_block(index, block)?;
        if ignore.contains(&record.author) {
            continue;
        }
        records.push(record);
    }
    Ok(records)
}

fn parse_block(index: usize, block: &[&str]) -> Result<CommitRecord> {
    if block.len() <= MESSAGE_LINE {
        return Err(BugkingError::MalformedBlock {
            index,
            reason: format!("expected at least {} lines, found {}", MESSAGE_LINE + 1, block.len()),
        });
    }

    let header: Vec<&str> = block[HEADER_LINE].split('|').map(str::trim).collect();
    let [revision, author, date, ..] = header.as_slice() else {
        return Err(BugkingError::MalformedBlock {
            index,
            reason: format!("header has {} fields: '{}'", header.len(), block[HEADER_LINE]),
        });
    };

    Ok(CommitRecord {
        revision: revision.to_string(),
        author: author.to_string(),
        date: date.to_string(),
        message: block[MESSAGE_LINE].to_string(),
    })
}
