//! Semantic version triple with an opaque flags byte.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const COMPONENT_NAMES: [&str; 3] = ["major", "minor", "patch"];

/// A `major.minor.patch` version.
///
/// The meaning of `flags` belongs to the generator; this crate only carries it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "VersionRepr")]
pub struct Version {
    pub flags: u8,
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl Version {
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self::with_flags(0, major, minor, patch)
    }

    pub const fn with_flags(flags: u8, major: u16, minor: u16, patch: u16) -> Self {
        Self {
            flags,
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Errors from parsing a version string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVersionError {
    #[error("version string is empty")]
    Empty,

    #[error("invalid {component} version component '{value}'")]
    InvalidComponent {
        component: &'static str,
        value: String,
    },

    #[error("expected at most 3 version components, found {0}")]
    TooManyComponents(usize),
}

impl FromStr for Version {
    type Err = ParseVersionError;

    /// Accepts `1`, `1.2`, `1.2.3`, optionally prefixed with `v` or `V`.
    /// Missing components are zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let text = trimmed.strip_prefix(&['v', 'V'][..]).unwrap_or(trimmed);
        if text.is_empty() {
            return Err(ParseVersionError::Empty);
        }

        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() > COMPONENT_NAMES.len() {
            return Err(ParseVersionError::TooManyComponents(parts.len()));
        }

        let mut numbers = [0u16; 3];
        for (index, part) in parts.iter().enumerate() {
            numbers[index] = part
                .parse()
                .map_err(|_| ParseVersionError::InvalidComponent {
                    component: COMPONENT_NAMES[index],
                    value: (*part).to_string(),
                })?;
        }

        Ok(Self::new(numbers[0], numbers[1], numbers[2]))
    }
}

/// Accepted input shapes: `"1.2.3"` or `{ major = 1, minor = 2, patch = 3 }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum VersionRepr {
    Text(String),
    Fields {
        #[serde(default)]
        flags: u8,
        major: u16,
        #[serde(default)]
        minor: u16,
        #[serde(default)]
        patch: u16,
    },
}

impl TryFrom<VersionRepr> for Version {
    type Error = ParseVersionError;

    fn try_from(repr: VersionRepr) -> Result<Self, Self::Error> {
        match repr {
            VersionRepr::Text(text) => text.parse(),
            VersionRepr::Fields {
                flags,
                major,
                minor,
                patch,
            } => Ok(Self::with_flags(flags, major, minor, patch)),
        }
    }
}
