pub mod cli;
pub mod error;
pub mod history;
pub mod model;
pub mod svn;
pub mod util;
