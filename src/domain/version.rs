use crate::domain::policy::{BumpPolicy, Channel};
use crate::error::{BumpError, Result};
use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse version from a manifest string (e.g., "1.2.3" -> Version(1,2,3))
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split('.').collect();
        if parts.len() != 3 {
            return Err(BumpError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                raw
            )));
        }

        let major = parse_component(parts[0], "major")?;
        let minor = parse_component(parts[1], "minor")?;
        let patch = parse_component(parts[2], "patch")?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Release line for this version: even minor is a release, odd minor a pre-release
    pub fn channel(&self) -> Channel {
        if self.minor % 2 == 0 {
            Channel::Release
        } else {
            Channel::PreRelease
        }
    }

    /// Compute the next version for the given policy.
    ///
    /// When the current line already matches the requested channel the patch
    /// is incremented; otherwise the minor moves to the next line and the
    /// patch resets. Major is never touched.
    pub fn bump(&self, policy: BumpPolicy) -> Result<Self> {
        if self.channel() == policy.channel() {
            let patch = self.patch.checked_add(1).ok_or_else(|| overflow(self, "patch"))?;
            Ok(Version {
                major: self.major,
                minor: self.minor,
                patch,
            })
        } else {
            let minor = self.minor.checked_add(1).ok_or_else(|| overflow(self, "minor"))?;
            Ok(Version {
                major: self.major,
                minor,
                patch: 0,
            })
        }
    }
}

fn parse_component(part: &str, name: &str) -> Result<u32> {
    // u32::from_str accepts a leading '+', which is not valid here
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BumpError::version(format!(
            "Invalid {} version: '{}'",
            name, part
        )));
    }
    part.parse::<u32>()
        .map_err(|_| BumpError::version(format!("Invalid {} version: '{}'", name, part)))
}

fn overflow(version: &Version, component: &str) -> BumpError {
    BumpError::version(format!(
        "Cannot bump {}: {} component would overflow",
        version, component
    ))
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl std::str::FromStr for Version {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}
