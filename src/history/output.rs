use super::window::QueryConfig;
use crate::model::{AuthorCount, CommitRecord, ListOutput, RankOutput, SCHEMA_VERSION};
use anyhow::Result;
use chrono::Utc;
use console::style;

pub const NO_COMMITS: &str = "No commits found between the specified hours since the specified date.";

pub fn output_list(records: &[CommitRecord], config: &QueryConfig) -> Result<()> {
    if records.is_empty() {
        println!("{NO_COMMITS}");
        return Ok(());
    }

    println!(
        "{}",
        style(format!(
            "List of last commits between {}:00 and {}:00 since {}:",
            config.start_hour, config.end_hour, config.since
        ))
        .bold()
    );
    for record in records {
        println!("Date: {}", record.date);
        println!("Message: {}", record.message);
        println!("Author: {}", record.author);
        println!("{}", "-".repeat(30));
    }
    Ok(())
}

pub fn output_rank(tally: &[AuthorCount]) -> Result<()> {
    if tally.is_empty() {
        println!("{NO_COMMITS}");
        return Ok(());
    }

    for entry in tally {
        println!("{}:{}", entry.author, entry.commits);
    }
    Ok(())
}

pub fn output_list_json(records: &[CommitRecord], config: &QueryConfig) -> Result<()> {
    let output = ListOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository: config.repository.clone(),
        since: config.since.clone(),
        start_hour: config.start_hour,
        end_hour: config.end_hour,
        commits: records.to_vec(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_rank_json(tally: &[AuthorCount], config: &QueryConfig) -> Result<()> {
    let output = RankOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository: config.repository.clone(),
        since: config.since.clone(),
        start_hour: config.start_hour,
        end_hour: config.end_hour,
        authors: tally.to_vec(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
