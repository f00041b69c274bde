use crate::error::{BumpError, Result};
use std::fmt;

/// Release line a version belongs to, encoded by minor parity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Even minor
    Release,
    /// Odd minor
    PreRelease,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Release => write!(f, "release"),
            Channel::PreRelease => write!(f, "pre-release"),
        }
    }
}

/// Which channel transition the caller asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpPolicy {
    Release,
    PreRelease,
}

impl BumpPolicy {
    /// Build a policy from the two mutually exclusive CLI flags.
    ///
    /// Exactly one flag must be set.
    pub fn from_flags(release: bool, pre_release: bool) -> Result<Self> {
        match (release, pre_release) {
            (true, false) => Ok(BumpPolicy::Release),
            (false, true) => Ok(BumpPolicy::PreRelease),
            (true, true) => Err(BumpError::usage(
                "--release and --pre-release are mutually exclusive",
            )),
            (false, false) => Err(BumpError::usage(
                "one of --release or --pre-release is required",
            )),
        }
    }

    /// The channel a version lands on after a bump with this policy
    pub fn channel(&self) -> Channel {
        match self {
            BumpPolicy::Release => Channel::Release,
            BumpPolicy::PreRelease => Channel::PreRelease,
        }
    }
}

impl fmt::Display for BumpPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.channel().fmt(f)
    }
}
