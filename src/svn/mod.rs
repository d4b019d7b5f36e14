pub mod client;

pub use client::SvnClient;

use crate::error::Result;
use crate::model::Window;

/// Source of raw `svn log` text for one window.
pub trait LogBackend {
    fn fetch_log(&self, repository: &str, window: &Window) -> Result<String>;
}
