pub mod cli;
pub mod config;
pub mod delegate;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod ui;

pub use error::{BumpError, Result};
