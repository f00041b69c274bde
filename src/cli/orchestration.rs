//! Main workflow orchestration logic
//!
//! Reads the current version from the manifest, computes the next one and
//! hands it to a [`VersionWriter`]. Argument parsing stays in `main.rs`, so
//! the workflow can be driven programmatically and tested with a mock writer.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::delegate::VersionWriter;
use crate::domain::{BumpPolicy, Channel, Version};
use crate::error::Result;
use crate::manifest;

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Project root holding `package.json`
    pub root: PathBuf,

    /// Requested channel transition
    pub policy: BumpPolicy,

    /// Compute the new version without invoking the writer
    pub dry_run: bool,
}

/// Version change computed from the manifest, not yet written
#[derive(Debug, Clone, PartialEq)]
pub struct BumpPlan {
    /// Manifest the current version was read from
    pub manifest: PathBuf,

    /// Version found in the manifest
    pub previous: Version,

    /// Version computed by the bump
    pub new: Version,
}

impl BumpPlan {
    /// Directory the writer runs in: the one holding the manifest
    pub fn project_dir(&self) -> &Path {
        self.manifest.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Version found in the manifest
    pub previous: Version,

    /// Version computed by the bump
    pub new: Version,

    /// Channel the new version belongs to
    pub channel: Channel,

    /// Whether the writer was invoked
    pub applied: bool,
}

/// Read the manifest under `args.root` and compute the next version.
///
/// Nothing is written.
pub fn plan_bump(args: &BumpWorkflowArgs) -> Result<BumpPlan> {
    let manifest = manifest::manifest_path(&args.root);
    let previous = manifest::read_manifest_version(&manifest)?;
    let new = previous.bump(args.policy)?;
    debug!(%previous, %new, policy = %args.policy, "computed new version");

    Ok(BumpPlan {
        manifest,
        previous,
        new,
    })
}

/// Hand a computed plan to `writer`, unless dry-running.
///
/// The writer runs in the manifest's own directory, so the file it rewrites
/// is the file the version was read from.
pub fn apply_bump<W: VersionWriter>(
    args: &BumpWorkflowArgs,
    plan: &BumpPlan,
    writer: &W,
) -> Result<WorkflowResult> {
    if !args.dry_run {
        writer.set_version(plan.project_dir(), &plan.new)?;
    }

    Ok(WorkflowResult {
        previous: plan.previous,
        new: plan.new,
        channel: plan.new.channel(),
        applied: !args.dry_run,
    })
}

/// Main bump workflow
///
/// 1. Read and parse the current version from `<root>/package.json`
/// 2. Compute the next version for the policy
/// 3. Unless dry-running, delegate the write to `writer`
///
/// Any failure before step 3 leaves the writer uncalled.
pub fn run_bump_workflow<W: VersionWriter>(
    args: &BumpWorkflowArgs,
    writer: &W,
) -> Result<WorkflowResult> {
    let plan = plan_bump(args)?;
    apply_bump(args, &plan, writer)
}
