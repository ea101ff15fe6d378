//! Conversion from four-part platform version numbers
//!
//! Platform versions use `major.minor.build.revision`. The build number plays
//! the role of the patch component and the revision becomes build metadata.

use std::fmt;
use std::str::FromStr;

use crate::version::{SemanticVersion, VersionError};

/// A `major.minor[.build[.revision]]` version as used by many platforms.
///
/// `None` marks an undefined build or revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPartVersion {
    pub major: u64,
    pub minor: u64,
    pub build: Option<u64>,
    pub revision: Option<u64>,
}

impl FourPartVersion {
    pub fn new(major: u64, minor: u64, build: Option<u64>, revision: Option<u64>) -> Self {
        FourPartVersion {
            major,
            minor,
            build,
            revision,
        }
    }
}

impl From<FourPartVersion> for SemanticVersion {
    fn from(version: FourPartVersion) -> Self {
        let build = version.revision.map(|r| r.to_string()).unwrap_or_default();
        SemanticVersion::concrete(version.major, version.minor, version.build.unwrap_or(0), build)
    }
}

impl FromStr for FourPartVersion {
    type Err = VersionError;

    /// Accepts two to four dot-separated numbers
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(VersionError::Empty);
        }

        let invalid = || VersionError::InvalidFormat(s.to_string());

        let parts = s
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                part.parse::<u64>()
                    .map_err(|_| VersionError::ComponentOutOfRange(part.to_string()))
            })
            .collect::<Result<Vec<u64>, VersionError>>()?;

        match parts.as_slice() {
            [major, minor] => Ok(Self::new(*major, *minor, None, None)),
            [major, minor, build] => Ok(Self::new(*major, *minor, Some(*build), None)),
            [major, minor, build, revision] => {
                Ok(Self::new(*major, *minor, Some(*build), Some(*revision)))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for FourPartVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(build) = self.build {
            write!(f, ".{}", build)?;
            if let Some(revision) = self.revision {
                write!(f, ".{}", revision)?;
            }
        }
        Ok(())
    }
}
