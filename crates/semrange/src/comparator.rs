//! Version comparison utilities over strings

use crate::range::Operator;
use crate::SemanticVersion;

/// Comparator for comparing version strings.
///
/// Any input that fails to parse makes the comparison false.
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, ">", version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, ">=", version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "<", version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "<=", version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "==", version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "!=", version2)
    }

    /// Compare version1 to version2 using the given comparison operator
    pub fn compare(version1: &str, operator: &str, version2: &str) -> bool {
        let Some(op) = Operator::lookup(operator).filter(Operator::is_comparison) else {
            return false;
        };

        match (
            SemanticVersion::try_parse(version1),
            SemanticVersion::try_parse(version2),
        ) {
            (Some(left), Some(right)) => op.accepts(left.precedence_cmp(&right)),
            _ => false,
        }
    }
}
