use crate::delegate::VersionWriter;
use crate::domain::Version;
use crate::error::{BumpError, Result};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Mock writer for testing without spawning the external tool
pub struct MockVersionWriter {
    calls: RefCell<Vec<(PathBuf, Version)>>,
    fail_with_code: Option<i32>,
}

impl MockVersionWriter {
    /// Create a writer that always succeeds
    pub fn new() -> Self {
        MockVersionWriter {
            calls: RefCell::new(Vec::new()),
            fail_with_code: None,
        }
    }

    /// Create a writer that always fails as if the tool exited with `code`
    pub fn failing(code: i32) -> Self {
        MockVersionWriter {
            calls: RefCell::new(Vec::new()),
            fail_with_code: Some(code),
        }
    }

    /// Every `(root, version)` pair this writer was asked to apply
    pub fn calls(&self) -> Vec<(PathBuf, Version)> {
        self.calls.borrow().clone()
    }
}

impl Default for MockVersionWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionWriter for MockVersionWriter {
    fn set_version(&self, root: &Path, version: &Version) -> Result<()> {
        self.calls
            .borrow_mut()
            .push((root.to_path_buf(), *version));

        match self.fail_with_code {
            Some(code) => Err(BumpError::DelegateFailure {
                program: "mock".to_string(),
                code: Some(code),
            }),
            None => Ok(()),
        }
    }
}
