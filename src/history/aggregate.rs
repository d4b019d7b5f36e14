use crate::model::{AuthorCount, CommitRecord};
use std::collections::HashMap;

/// Commits per author, fewest first. Ties keep first-seen order.
pub fn rank_authors(records: &[CommitRecord]) -> Vec<AuthorCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tally: Vec<AuthorCount> = Vec::new();

    for record in records {
        match index.get(record.author.as_str()) {
            Some(&i) => tally[i].commits += 1,
            None => {
                index.insert(&record.author, tally.len());
                tally.push(AuthorCount {
                    author: record.author.clone(),
                    commits: 1,
                });
            }
        }
    }

    tally.sort_by_key(|c| c.commits);
    tally
}

/// Keep records whose author contains `needle`, ignoring case.
pub fn filter_by_author(records: Vec<CommitRecord>, needle: Option<&str>) -> Vec<CommitRecord> {
    let Some(needle) = needle else {
        return records;
    };
    let needle = needle.to_lowercase();
    records
        .into_iter()
        .filter(|r| r.author.to_lowercase().contains(&needle))
        .collect()
}
