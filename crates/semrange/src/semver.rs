//! Semver facade providing high-level version operations

use crate::range::{RangeError, RangeParser, RangePredicate};
use crate::SemanticVersion;

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a range query
    pub fn satisfies(version: &str, range: &str) -> bool {
        let Some(version) = SemanticVersion::try_parse(version) else {
            return false;
        };

        match RangeParser::new().parse(range) {
            Ok(predicate) => predicate.matches(&version),
            Err(_) => false,
        }
    }

    /// Return all versions that satisfy the given range, in input order
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let predicate = match RangeParser::new().parse(range) {
            Ok(p) => p,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter(|v| {
                SemanticVersion::try_parse(v)
                    .map(|version| predicate.matches(&version))
                    .unwrap_or(false)
            })
            .map(|v| v.to_string())
            .collect()
    }

    /// Parse a range query and return a reusable representation
    pub fn parse_range(range: &str) -> Result<RangePredicate, RangeError> {
        RangeParser::new().parse(range)
    }

    /// Check a version against a pre-parsed range
    pub fn satisfies_parsed(version: &str, range: &RangePredicate) -> bool {
        SemanticVersion::try_parse(version)
            .map(|version| range.matches(&version))
            .unwrap_or(false)
    }

    /// Sort versions in ascending order, dropping invalid ones.
    ///
    /// Wildcard patterns sort after every version they could match, e.g.
    /// `1.9.9 < 1.* < 2.0.0`.
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort), dropping invalid ones
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(SemanticVersion, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| match SemanticVersion::parse(v) {
                Ok(version) => Some((version, i)),
                Err(e) => {
                    log::warn!("Skipping \"{}\" while sorting: {}", v, e);
                    None
                }
            })
            .collect();

        // Wildcards make precedence non-transitive, so sort by the total order.
        // Stable sort keeps equal versions in input order.
        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = a.total_cmp(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
