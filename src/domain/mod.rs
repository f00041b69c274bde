//! Domain logic - pure version rules independent of files and processes

pub mod policy;
pub mod version;

pub use policy::{BumpPolicy, Channel};
pub use version::Version;
