//! Semantic version value with wildcard components

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Marker used for a wildcard component
pub const WILDCARD: &str = "*";

/// Broad error categories shared by version and range errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Text does not satisfy the version grammar or its invariants
    Format,
    /// Required text was empty or whitespace-only
    Argument,
    /// A range query could not be tokenized or parsed
    Syntax,
}

/// Error type for version parsing and construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("The version string is empty or only consists of whitespace")]
    Empty,
    #[error("Invalid version string \"{0}\"")]
    InvalidFormat(String),
    #[error("Invalid version string \"{version}\": no {component} version was given")]
    MissingComponent {
        version: String,
        component: &'static str,
    },
    #[error("Invalid version string \"{0}\": components can't have values after a wildcard")]
    ValueAfterWildcard(String),
    #[error("Version component \"{0}\" is out of range")]
    ComponentOutOfRange(String),
}

impl VersionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VersionError::Empty => ErrorKind::Argument,
            _ => ErrorKind::Format,
        }
    }
}

lazy_static! {
    static ref VERSION_RE: Regex = Regex::new(
        r"^(?P<major>0|[1-9][0-9]*|\*)(?:\.(?P<minor>0|[1-9][0-9]*|\*)(?:\.(?P<patch>0|[1-9][0-9]*|\*))?)?(?:-(?P<pre>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*|\*))?(?:\+(?P<build>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*|\*))?$"
    ).unwrap();
    static ref IDENTIFIERS_RE: Regex =
        Regex::new(r"^(?:[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*|\*)$").unwrap();
}

/// An immutable semantic version (SemVer 2.0) whose numeric components and
/// prerelease may be wildcards.
///
/// A `None` numeric component is a `*` wildcard. A `*` prerelease matches any
/// prerelease. A `*` build is discarded at construction since build metadata
/// never takes part in comparisons.
///
/// Equality, ordering and hashing follow precedence rules and ignore build
/// metadata (see the `ordering` module). A wildcard compares equal to any value
/// in its position, so versions holding wildcards act as match patterns and
/// should not be used as map keys.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    major: Option<u64>,
    minor: Option<u64>,
    patch: Option<u64>,
    prerelease: String,
    build: String,
    has_wildcard: bool,
}

impl SemanticVersion {
    /// Create a version from its components.
    ///
    /// The prerelease and build must each be dot-separated identifiers or `*`,
    /// the rendered form must satisfy the version grammar, and no component may
    /// carry a value once an earlier one is a wildcard. Build metadata after a
    /// numeric wildcard is discarded.
    pub fn new(
        major: Option<u64>,
        minor: Option<u64>,
        patch: Option<u64>,
        prerelease: impl Into<String>,
        build: impl Into<String>,
    ) -> Result<Self, VersionError> {
        let prerelease = prerelease.into();
        let build = build.into();

        for identifiers in [&prerelease, &build] {
            if !identifiers.is_empty() && !IDENTIFIERS_RE.is_match(identifiers) {
                return Err(VersionError::InvalidFormat(identifiers.clone()));
            }
        }

        let numeric_wildcard = major.is_none() || minor.is_none() || patch.is_none();

        // Rendering stops at a numeric wildcard, so a build there would never be seen
        let build = if build == WILDCARD || numeric_wildcard {
            String::new()
        } else {
            build
        };

        let has_wildcard = numeric_wildcard || prerelease == WILDCARD;

        let version = SemanticVersion {
            major,
            minor,
            patch,
            prerelease,
            build,
            has_wildcard,
        };

        let rendered = version.to_string();
        if !VERSION_RE.is_match(&rendered) {
            return Err(VersionError::InvalidFormat(rendered));
        }

        version.check_wildcard_order()?;

        Ok(version)
    }

    /// Create a version without wildcards or prerelease.
    pub fn release(major: u64, minor: u64, patch: u64) -> Self {
        Self::concrete(major, minor, patch, String::new())
    }

    /// Components are plain numbers and the build, if any, is a digit run or
    /// otherwise grammar-conformant, so no validation is needed.
    pub(crate) fn concrete(major: u64, minor: u64, patch: u64, build: String) -> Self {
        SemanticVersion {
            major: Some(major),
            minor: Some(minor),
            patch: Some(patch),
            prerelease: String::new(),
            build,
            has_wildcard: false,
        }
    }

    /// The first public API version, `1.0.0`
    pub fn base_version() -> Self {
        Self::release(1, 0, 0)
    }

    /// Parse a version string.
    ///
    /// Minor and patch may only be omitted after a wildcard: `*`, `1.*` and
    /// `1.2.*` are valid, `1` and `1.2` are not.
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        if version.trim().is_empty() {
            return Err(VersionError::Empty);
        }

        let caps = VERSION_RE
            .captures(version)
            .ok_or_else(|| VersionError::InvalidFormat(version.to_string()))?;

        let major = parse_component(caps.name("major").map(|m| m.as_str()))
            .ok_or_else(|| VersionError::InvalidFormat(version.to_string()))??;

        // Minor can be missing only if major is a wildcard, which makes minor one too
        let minor = match parse_component(caps.name("minor").map(|m| m.as_str())) {
            Some(minor) => minor?,
            None if major.is_some() => {
                return Err(VersionError::MissingComponent {
                    version: version.to_string(),
                    component: "minor",
                })
            }
            None => None,
        };

        let patch = match parse_component(caps.name("patch").map(|m| m.as_str())) {
            Some(patch) => patch?,
            None if minor.is_some() => {
                return Err(VersionError::MissingComponent {
                    version: version.to_string(),
                    component: "patch",
                })
            }
            None => None,
        };

        let prerelease = caps.name("pre").map_or("", |m| m.as_str());
        if !prerelease.is_empty() && patch.is_none() && prerelease != WILDCARD {
            return Err(VersionError::ValueAfterWildcard(version.to_string()));
        }

        let build = caps.name("build").map_or("", |m| m.as_str());

        Self::new(major, minor, patch, prerelease, build)
    }

    /// Parse a version string, returning `None` instead of an error
    pub fn try_parse(version: &str) -> Option<Self> {
        Self::parse(version).ok()
    }

    /// Check whether a string is a valid version
    pub fn is_version(version: &str) -> bool {
        Self::parse(version).is_ok()
    }

    /// Major component, `None` for a wildcard
    pub fn major(&self) -> Option<u64> {
        self.major
    }

    /// Minor component, `None` for a wildcard
    pub fn minor(&self) -> Option<u64> {
        self.minor
    }

    /// Patch component, `None` for a wildcard
    pub fn patch(&self) -> Option<u64> {
        self.patch
    }

    /// Prerelease identifiers, `*` or empty
    pub fn prerelease(&self) -> &str {
        &self.prerelease
    }

    /// Build metadata, possibly empty
    pub fn build(&self) -> &str {
        &self.build
    }

    /// Whether any component is a wildcard
    pub fn has_wildcard(&self) -> bool {
        self.has_wildcard
    }

    fn check_wildcard_order(&self) -> Result<(), VersionError> {
        let mut wildcards = vec![self.major.is_none(), self.minor.is_none(), self.patch.is_none()];
        if !self.prerelease.is_empty() {
            wildcards.push(self.prerelease == WILDCARD);
        }

        let has_value_after_wildcard = wildcards
            .iter()
            .skip_while(|wildcard| !**wildcard)
            .any(|wildcard| !*wildcard);

        if has_value_after_wildcard {
            return Err(VersionError::ValueAfterWildcard(self.to_string()));
        }

        Ok(())
    }
}

/// Outer `None` means the group did not match, inner `None` means wildcard.
fn parse_component(value: Option<&str>) -> Option<Result<Option<u64>, VersionError>> {
    let value = value?;
    if value == WILDCARD {
        return Some(Ok(None));
    }
    Some(
        value
            .parse::<u64>()
            .map(Some)
            .map_err(|_| VersionError::ComponentOutOfRange(value.to_string())),
    )
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(major) = self.major else {
            return f.write_str(WILDCARD);
        };
        write!(f, "{}.", major)?;

        let Some(minor) = self.minor else {
            return f.write_str(WILDCARD);
        };
        write!(f, "{}.", minor)?;

        let Some(patch) = self.patch else {
            return f.write_str(WILDCARD);
        };
        write!(f, "{}", patch)?;

        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SemanticVersion {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
