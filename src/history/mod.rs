pub mod aggregate;
pub mod exec;
pub mod output;
pub mod parse;
pub mod window;

pub use aggregate::{filter_by_author, rank_authors};
pub use exec::exec;
pub use output::{output_list, output_list_json, output_rank, output_rank_json};
pub use parse::{parse_log, split_blocks, SEPARATOR};
pub use window::{collect_commits, windows, QueryConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    List,
    Rank,
}

impl Mode {
    /// `rank` selects the tally; anything else lists commits.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("rank") => Mode::Rank,
            _ => Mode::List,
        }
    }
}
