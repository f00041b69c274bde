//! External version-writer abstraction
//!
//! Persisting the new version into the manifest is delegated to an external
//! package-management tool. This module keeps that collaborator behind the
//! [VersionWriter] trait so the bump workflow can be exercised without
//! spawning processes.
//!
//! - [npm::NpmVersionWriter]: runs `npm version` as a child process
//! - [mock::MockVersionWriter]: records calls, optionally fails

pub mod mock;
pub mod npm;

pub use mock::MockVersionWriter;
pub use npm::NpmVersionWriter;

use crate::domain::Version;
use crate::error::Result;
use std::path::Path;

/// Sets the version string in a project's manifest, without committing or
/// tagging.
///
/// Implementations treat the write as a single opaque step: either it
/// succeeds, or the error describes why the tool failed. No retries.
pub trait VersionWriter {
    /// Write `version` into the manifest of the project rooted at `root`
    fn set_version(&self, root: &Path, version: &Version) -> Result<()>;
}
