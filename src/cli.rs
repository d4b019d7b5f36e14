use crate::history::{Mode, QueryConfig};
use crate::model::IgnoreSet;
use crate::svn::SvnClient;
use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bugking")]
#[command(about = "List or rank svn commits made inside a daily time window")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Repository URL passed to svn log")]
    pub repository: String,

    #[arg(help = "First day to query (YYYY-MM-DD)")]
    pub since: String,

    #[arg(help = "Window start hour (0-23)", value_parser = clap::value_parser!(u32).range(0..24))]
    pub start_hour: u32,

    #[arg(help = "Window end hour (0-23)", value_parser = clap::value_parser!(u32).range(0..24))]
    pub end_hour: u32,

    #[arg(help = "Output mode: 'rank' tallies commits per author, anything else lists them")]
    pub mode: Option<String>,

    #[arg(long = "ignore", value_name = "AUTHOR", help = "Author to leave out (repeatable, replaces the default list)")]
    pub ignore: Vec<String>,

    #[arg(long, help = "Only keep authors containing this text (case-insensitive)")]
    pub author: Option<String>,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,

    #[arg(long, value_name = "PATH", help = "svn executable to run", default_value = "svn")]
    pub svn: PathBuf,

    #[arg(short, long, help = "Log each svn invocation to stderr")]
    pub verbose: bool,
}

impl Cli {
    /// Missing positionals print usage on stdout and exit with status 1.
    pub fn parse() -> Self {
        match <Self as Parser>::try_parse() {
            Ok(cli) => cli,
            Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
                println!(
                    "Please provide a repository url, a date in the format YYYY-MM-DD, a start hour and an end hour."
                );
                println!("{}", Self::command().render_usage());
                std::process::exit(1);
            }
            Err(e) => e.exit(),
        }
    }

    pub fn query_config(&self) -> QueryConfig {
        let ignore = if self.ignore.is_empty() {
            IgnoreSet::default()
        } else {
            IgnoreSet::new(self.ignore.iter().cloned())
        };

        QueryConfig {
            repository: self.repository.clone(),
            since: self.since.clone(),
            start_hour: self.start_hour,
            end_hour: self.end_hour,
            ignore,
        }
    }

    pub fn execute(self) -> Result<()> {
        let config = self.query_config();
        let mode = Mode::from_token(self.mode.as_deref());
        crate::history::exec(
            config,
            SvnClient::new(&self.svn),
            mode,
            self.author.as_deref(),
            self.json,
        )
    }
}
