use super::parse::parse_log;
use crate::error::{BugkingError, Result};
use crate::model::{CommitRecord, IgnoreSet, Window};
use crate::svn::LogBackend;
use crate::util::{at_hour, parse_day};
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

/// Everything one run needs to know about what to query.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    pub repository: String,
    pub since: String,
    pub start_hour: u32,
    pub end_hour: u32,
    pub ignore: IgnoreSet,
}

/// Daily windows from `since` through `today` inclusive.
pub fn windows(since: NaiveDate, today: NaiveDate, start_hour: u32, end_hour: u32) -> Vec<Window> {
    since
        .iter_days()
        .take_while(|day| *day <= today)
        .map(|day| Window {
            day,
            start: at_hour(day, start_hour),
            end: at_hour(day, end_hour),
        })
        .collect()
}

/// Query every daily window and concatenate the records in day order.
///
/// Fails before touching the backend when the start date does not parse or
/// lies after `today`. A failed fetch aborts the whole run.
pub fn collect_commits<B: LogBackend>(
    backend: &B,
    config: &QueryConfig,
    today: NaiveDate,
    show_progress: bool,
) -> Result<Vec<CommitRecord>> {
    let since = parse_day(&config.since)?;
    if since > today {
        return Err(BugkingError::FutureDate(since));
    }
    if config.start_hour > config.end_hour {
        warn!(
            start_hour = config.start_hour,
            end_hour = config.end_hour,
            "start hour is after end hour, each window is inverted"
        );
    }

    let windows = windows(since, today, config.start_hour, config.end_hour);

    let pb = if show_progress {
        ProgressBar::new(windows.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut records = Vec::new();
    for window in &windows {
        pb.set_message(window.day.to_string());
        let text = match backend.fetch_log(&config.repository, window) {
            Ok(text) => text,
            Err(e) => {
                pb.abandon();
                return Err(e);
            }
        };
        let day_records = parse_log(&text, &config.ignore)?;
        debug!(day = %window.day, commits = day_records.len(), "window parsed");
        records.extend(day_records);
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(days = windows.len(), commits = records.len(), "history collected");
    Ok(records)
}
