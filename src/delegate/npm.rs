use crate::delegate::VersionWriter;
use crate::domain::Version;
use crate::error::{BumpError, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Default program used to write the version back
pub const DEFAULT_PROGRAM: &str = "npm";

/// Runs `<program> version --no-commit-hooks --no-git-tag-version <version>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpmVersionWriter {
    program: String,
}

impl NpmVersionWriter {
    /// Create a writer that invokes the given program (normally `npm`)
    pub fn new(program: impl Into<String>) -> Self {
        NpmVersionWriter {
            program: program.into(),
        }
    }

    /// Program this writer invokes
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program for `version`
    pub fn args(version: &Version) -> Vec<String> {
        vec![
            "version".to_string(),
            "--no-commit-hooks".to_string(),
            "--no-git-tag-version".to_string(),
            version.to_string(),
        ]
    }
}

impl Default for NpmVersionWriter {
    fn default() -> Self {
        NpmVersionWriter::new(DEFAULT_PROGRAM)
    }
}

impl VersionWriter for NpmVersionWriter {
    /// Run the tool in `root` and wait for it.
    ///
    /// Output is inherited so the tool's own messages reach the terminal.
    /// A non-zero exit becomes [`BumpError::DelegateFailure`] carrying the
    /// exit code unchanged.
    fn set_version(&self, root: &Path, version: &Version) -> Result<()> {
        let args = Self::args(version);
        debug!(
            program = %self.program,
            args = ?args,
            cwd = %root.display(),
            "running version writer"
        );

        let status = Command::new(&self.program)
            .args(&args)
            .current_dir(root)
            .status()
            .map_err(|source| BumpError::DelegateSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(BumpError::DelegateFailure {
                program: self.program.clone(),
                code: status.code(),
            });
        }

        Ok(())
    }
}
