use super::{
    collect_commits, filter_by_author, output_list, output_list_json, output_rank,
    output_rank_json, rank_authors, Mode, QueryConfig,
};
use crate::svn::SvnClient;
use anyhow::Context;
use chrono::Local;
use std::io::IsTerminal;

pub fn exec(
    config: QueryConfig,
    svn: SvnClient,
    mode: Mode,
    author: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let show_progress = !json && std::io::stderr().is_terminal();

    let records = collect_commits(&svn, &config, today, show_progress)
        .context("Failed to query commit history")?;
    let records = filter_by_author(records, author);

    match (mode, json) {
        (Mode::Rank, true) => output_rank_json(&rank_authors(&records), &config),
        (Mode::Rank, false) => output_rank(&rank_authors(&records)),
        (Mode::List, true) => output_list_json(&records, &config),
        (Mode::List, false) => output_list(&records, &config),
    }
}
