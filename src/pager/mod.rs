//! Full-screen text presentation through an external viewer.

use std::ffi::OsString;
use std::io::Write;

use tempfile::Builder;
use tokio::process::Command;

use crate::app::{GazetteError, Result};

/// Presents text through an external full-screen viewer, read-only with
/// line numbers and no wrapping. Each call writes a scoped temp file that
/// is removed when the call returns, on every path.
pub struct Pager {
    program: OsString,
    args: Vec<OsString>,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            program: "nvim".into(),
            args: vec!["-R".into(), "+set nowrap".into(), "+set number".into()],
        }
    }
}

impl Pager {
    #[cfg(test)]
    fn with_program(program: &str) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Blocks until the viewer exits. The viewer's own exit status is not
    /// interpreted; only a failure to launch it is an error.
    pub async fn present(&self, text: &str) -> Result<()> {
        let mut file = Builder::new().suffix(".txt").tempfile()?;
        file.write_all(text.as_bytes())?;
        file.flush()?;

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(file.path())
            .status()
            .await
            .map_err(|e| {
                GazetteError::Pager(format!(
                    "failed to launch {}: {e}",
                    self.program.to_string_lossy()
                ))
            })?;

        if !status.success() {
            tracing::debug!(?status, "viewer exited with non-zero status");
        }

        Ok(())
    }
}
