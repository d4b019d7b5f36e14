use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const SCHEMA_VERSION: u32 = 1;

/// Authors dropped unless `--ignore` says otherwise.
pub const DEFAULT_IGNORED_AUTHORS: &[&str] = &["mlsvn_builder"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub revision: String,
    pub author: String,
    pub date: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorCount {
    pub author: String,
    pub commits: usize,
}

/// One calendar day bounded by two hour-of-day values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub day: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Window {
    pub fn revision_range(&self) -> String {
        format!(
            "{{{}}}:{{{}}}",
            crate::util::svn_timestamp(&self.start),
            crate::util::svn_timestamp(&self.end)
        )
    }
}

/// Authors whose commits never show up in any output.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    authors: HashSet<String>,
}

impl IgnoreSet {
    pub fn new<I, S>(authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            authors: authors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, author: &str) -> bool {
        self.authors.contains(author)
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORED_AUTHORS.iter().copied())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository: String,
    pub since: String,
    pub start_hour: u32,
    pub end_hour: u32,
    pub commits: Vec<CommitRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository: String,
    pub since: String,
    pub start_hour: u32,
    pub end_hour: u32,
    pub authors: Vec<AuthorCount>,
}
