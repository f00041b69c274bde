//! User interface module - terminal output for the bump workflow.
//!
//! - `formatter` - Pure formatting functions

pub mod formatter;

pub use formatter::{
    display_dry_run, display_error, display_proposed_version, display_status, display_success,
    format_proposed_version,
};
