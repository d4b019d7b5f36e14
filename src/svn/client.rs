use super::LogBackend;
use crate::error::{BugkingError, Result};
use crate::model::Window;
use std::ffi::OsString;
use std::process::Command;
use tracing::debug;

/// Runs the `svn` executable directly, without a shell.
pub struct SvnClient {
    program: OsString,
}

impl SvnClient {
    pub fn new<P: Into<OsString>>(program: P) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }
}

impl Default for SvnClient {
    fn default() -> Self {
        Self::new("svn")
    }
}

impl LogBackend for SvnClient {
    fn fetch_log(&self, repository: &str, window: &Window) -> Result<String> {
        let range = window.revision_range();
        debug!(program = ?self.program, repository, %range, "running svn log");

        let output = Command::new(&self.program)
            .arg("log")
            .arg(repository)
            .arg("-r")
            .arg(&range)
            .output()?;

        if !output.status.success() {
            let status = output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            return Err(BugkingError::CommandFailed {
                range,
                status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
