//! Precedence ordering for semantic versions
//!
//! Versions are compared field by field (major, minor, patch, prerelease) and
//! build metadata is ignored. A wildcard matches any value in its position.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::version::{SemanticVersion, WILDCARD};

/// Compare two versions by precedence.
pub fn compare(left: &SemanticVersion, right: &SemanticVersion) -> Ordering {
    compare_component(left.major(), right.major())
        .then_with(|| compare_component(left.minor(), right.minor()))
        .then_with(|| compare_component(left.patch(), right.patch()))
        .then_with(|| compare_prerelease(left.prerelease(), right.prerelease()))
}

/// A wildcard is equal to anything, concrete values compare numerically
fn compare_component(left: Option<u64>, right: Option<u64>) -> Ordering {
    match (left, right) {
        (Some(l), Some(r)) => l.cmp(&r),
        _ => Ordering::Equal,
    }
}

/// A release outranks any of its prereleases, and a `*` prerelease matches
/// everything including the absence of one.
fn compare_prerelease(left: &str, right: &str) -> Ordering {
    if left == WILDCARD || right == WILDCARD {
        return Ordering::Equal;
    }

    match (left.is_empty(), right.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => compare_identifiers(left, right),
    }
}

/// Compare two dot-separated identifier lists.
///
/// Numeric identifiers compare numerically and rank below alphanumeric ones,
/// alphanumeric identifiers compare case-insensitively in ASCII order. When
/// every shared identifier ties, the longer list ranks higher.
pub fn compare_identifiers(left: &str, right: &str) -> Ordering {
    let left_parts: Vec<&str> = left.split('.').filter(|p| !p.is_empty()).collect();
    let right_parts: Vec<&str> = right.split('.').filter(|p| !p.is_empty()).collect();

    for (l, r) in left_parts.iter().zip(right_parts.iter()) {
        let ordering = match (numeric_identifier(l), numeric_identifier(r)) {
            (Some(l), Some(r)) => l.cmp(&r),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => l
                .bytes()
                .map(|b| b.to_ascii_lowercase())
                .cmp(r.bytes().map(|b| b.to_ascii_lowercase())),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    left_parts.len().cmp(&right_parts.len())
}

/// A total order over versions, wildcards included.
///
/// Concrete versions order exactly as in [`compare`]. A wildcard component
/// sorts after every concrete value in its position, and a `*` prerelease sorts
/// after the release.
pub fn total_cmp(left: &SemanticVersion, right: &SemanticVersion) -> Ordering {
    total_component(left.major(), right.major())
        .then_with(|| total_component(left.minor(), right.minor()))
        .then_with(|| total_component(left.patch(), right.patch()))
        .then_with(|| prerelease_rank(left.prerelease()).cmp(&prerelease_rank(right.prerelease())))
        .then_with(|| match (left.prerelease(), right.prerelease()) {
            ("", _) | (_, "") | (WILDCARD, _) | (_, WILDCARD) => Ordering::Equal,
            (l, r) => compare_identifiers(l, r),
        })
}

fn total_component(left: Option<u64>, right: Option<u64>) -> Ordering {
    match (left, right) {
        (Some(l), Some(r)) => l.cmp(&r),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Prereleases, then the release, then `*`
fn prerelease_rank(prerelease: &str) -> u8 {
    match prerelease {
        WILDCARD => 2,
        "" => 1,
        _ => 0,
    }
}

fn numeric_identifier(identifier: &str) -> Option<u64> {
    if identifier.bytes().all(|b| b.is_ascii_digit()) {
        identifier.parse().ok()
    } else {
        None
    }
}

impl SemanticVersion {
    /// Compare by precedence, see [`compare`]
    pub fn precedence_cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }

    /// Compare with a total order that is safe for sorting, see [`total_cmp`]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        total_cmp(self, other)
    }

    /// Field-by-field equality including build metadata.
    ///
    /// Unlike `==`, wildcards only equal wildcards and builds must match.
    /// Prerelease and build are compared case-insensitively.
    pub fn strict_eq(&self, other: &Self) -> bool {
        self.major() == other.major()
            && self.minor() == other.minor()
            && self.patch() == other.patch()
            && self.prerelease().eq_ignore_ascii_case(other.prerelease())
            && self.build().eq_ignore_ascii_case(other.build())
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for SemanticVersion {}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Precedence order with wildcard matching.
///
/// Wildcard values make this order non-transitive: `1.0.0 == 1.*` and
/// `1.* == 1.5.0` while `1.0.0 < 1.5.0`. Sort collections that may hold
/// wildcards with [`SemanticVersion::total_cmp`] instead.
impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

/// Hashes the numeric components and the lowercased prerelease.
///
/// Consistent with `==` for versions without wildcards. A wildcard equals
/// values that hash differently (`1.*` and `1.5.9`), so the `Hash`/`Eq`
/// contract does not hold for wildcard values and they must not be used as map
/// keys.
impl Hash for SemanticVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major().hash(state);
        self.minor().hash(state);
        self.patch().hash(state);
        for b in self.prerelease().bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn v(version: &str) -> SemanticVersion {
        SemanticVersion::parse(version).unwrap()
    }

    fn hash_of(version: &SemanticVersion) -> u64 {
        let mut hasher = DefaultHasher::new();
        version.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_compare_numeric_components() {
        assert_eq!(compare(&v("1.0.0"), &v("1.0.0")), Ordering::Equal);
        assert_eq!(compare(&v("1.0.0"), &v("2.0.0")), Ordering::Less);
        assert_eq!(compare(&v("1.0.0"), &v("1.1.0")), Ordering::Less);
        assert_eq!(compare(&v("1.1.0"), &v("1.1.1")), Ordering::Less);
        assert_eq!(compare(&v("1.10.0"), &v("1.9.0")), Ordering::Greater);
    }

    #[test]
    fn test_compare_ignores_build() {
        assert_eq!(compare(&v("1.1.0+abc"), &v("1.1.0")), Ordering::Equal);
        assert_eq!(compare(&v("1.1.0"), &v("1.1.0+abc")), Ordering::Equal);
        assert_eq!(compare(&v("1.1.0+abc"), &v("1.1.0+xyz")), Ordering::Equal);
        assert_eq!(compare(&v("1.1.0-rc.1+abc"), &v("1.1.0-rc.2")), Ordering::Less);
    }

    #[test]
    fn test_compare_wildcard_components() {
        assert_eq!(compare(&v("1.1.*"), &v("1.1.1")), Ordering::Equal);
        assert_eq!(compare(&v("1.*"), &v("1.5.9")), Ordering::Equal);
        assert_eq!(compare(&v("*"), &v("7.0.0-beta")), Ordering::Equal);
        assert_eq!(compare(&v("1.0.*"), &v("1.1.0")), Ordering::Less);
        assert_eq!(compare(&v("2.*"), &v("1.9.9")), Ordering::Greater);
    }

    #[test]
    fn test_wildcard_absorption_via_new() {
        let wildcard = SemanticVersion::new(Some(1), None, None, "", "").unwrap();
        let concrete = SemanticVersion::new(Some(1), Some(5), Some(9), "", "").unwrap();
        assert_eq!(wildcard, concrete);

        let patch_wildcard = SemanticVersion::new(Some(1), Some(0), None, "", "").unwrap();
        assert!(patch_wildcard < v("1.1.0"));
    }

    #[test]
    fn test_compare_prerelease_wildcard() {
        assert_eq!(compare(&v("1.1.0-*"), &v("1.1.0-alpha")), Ordering::Equal);
        assert_eq!(compare(&v("1.1.0-alpha"), &v("1.1.0-*")), Ordering::Equal);
        assert_eq!(compare(&v("1.1.0-*"), &v("1.1.0")), Ordering::Equal);
        assert_eq!(compare(&v("1.1.0-*"), &v("1.1.0-*")), Ordering::Equal);
    }

    #[test]
    fn test_prerelease_precedence() {
        assert!(v("1.0.0-alpha") < v("1.0.0"));
        assert!(v("1.0.0-alpha") < v("1.0.0-alpha.1"));
        assert!(v("1.0.0-alpha.1") < v("1.0.0-alpha.beta"));
        assert!(v("1.0.0-alpha.23") > v("1.0.0-alpha.5"));

        let chain = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ];
        for pair in chain.windows(2) {
            assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_compare_identifiers() {
        assert_eq!(compare_identifiers("alpha", "ALPHA"), Ordering::Equal);
        assert_eq!(compare_identifiers("alpha", "beta"), Ordering::Less);
        assert_eq!(compare_identifiers("1", "alpha"), Ordering::Less);
        assert_eq!(compare_identifiers("alpha", "1"), Ordering::Greater);
        assert_eq!(compare_identifiers("2", "10"), Ordering::Less);
        assert_eq!(compare_identifiers("a.b", "a"), Ordering::Greater);
        assert_eq!(compare_identifiers("a.1", "a.1"), Ordering::Equal);
        assert_eq!(compare_identifiers("rc-1", "rc-2"), Ordering::Less);
    }

    #[test]
    fn test_total_order_on_concrete_versions() {
        let versions: Vec<SemanticVersion> = [
            "0.0.1",
            "0.1.0-rc.1",
            "0.1.0",
            "1.0.0-alpha",
            "1.0.0-alpha+build",
            "1.0.0",
            "1.0.0+other",
            "1.2.0",
        ]
        .into_iter()
        .map(v)
        .collect();

        for a in &versions {
            for b in &versions {
                let outcomes = [a < b, a == b, a > b];
                assert_eq!(outcomes.iter().filter(|x| **x).count(), 1, "{a} vs {b}");
                assert_eq!(a.cmp(b), b.cmp(a).reverse());
            }
        }
    }

    #[test]
    fn test_sort() {
        let mut versions = vec![v("1.0.0"), v("0.1.0"), v("1.0.0-rc.1"), v("0.9.12")];
        versions.sort();
        let sorted: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
        assert_eq!(sorted, vec!["0.1.0", "0.9.12", "1.0.0-rc.1", "1.0.0"]);
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        assert_eq!(hash_of(&v("1.0.0-foo+bar")), hash_of(&v("1.0.0-foo+bar")));
        assert_eq!(hash_of(&v("1.0.0-foo+bar")), hash_of(&v("1.0.0-foo+baz")));
        assert_eq!(hash_of(&v("1.0.0-Foo")), hash_of(&v("1.0.0-foo")));
        assert_eq!(v("1.0.0-Foo"), v("1.0.0-foo"));
        assert_ne!(hash_of(&v("1.0.0-foo")), hash_of(&v("2.0.0-foo")));
        assert_ne!(hash_of(&v("1.0.0")), hash_of(&v("2.0.0")));
    }

    #[test]
    fn test_hash_of_wildcards_follows_fields() {
        // Wildcards equal concrete values but hash by their own fields
        assert_eq!(v("1.*"), v("1.5.9"));
        assert_ne!(hash_of(&v("1.*")), hash_of(&v("1.5.9")));
        assert_eq!(v("1.0.0-*"), v("1.0.0"));
        assert_ne!(hash_of(&v("1.0.0-*")), hash_of(&v("1.0.0")));

        assert_eq!(hash_of(&v("1.*")), hash_of(&v("1.*")));
        assert_eq!(hash_of(&v("1.2.*+build")), hash_of(&v("1.2.*")));
    }

    #[test]
    fn test_total_cmp_places_wildcards_after_concrete_values() {
        assert_eq!(total_cmp(&v("1.9.9"), &v("1.*")), Ordering::Less);
        assert_eq!(total_cmp(&v("1.*"), &v("2.0.0")), Ordering::Less);
        assert_eq!(total_cmp(&v("1.2.*"), &v("1.*")), Ordering::Less);
        assert_eq!(total_cmp(&v("99.0.0"), &v("*")), Ordering::Less);
        assert_eq!(total_cmp(&v("1.0.0-rc.1"), &v("1.0.0")), Ordering::Less);
        assert_eq!(total_cmp(&v("1.0.0"), &v("1.0.0-*")), Ordering::Less);
        assert_eq!(total_cmp(&v("1.0.0-*"), &v("1.0.1")), Ordering::Less);
        assert_eq!(total_cmp(&v("1.*"), &v("1.*")), Ordering::Equal);
        assert_eq!(total_cmp(&v("1.0.0+a"), &v("1.0.0+b")), Ordering::Equal);
    }

    #[test]
    fn test_total_cmp_is_a_total_order() {
        let versions: Vec<SemanticVersion> = [
            "*", "1.*", "1.0.*", "1.0.0", "1.0.0-*", "1.0.0-alpha", "1.0.0-alpha.1",
            "1.5.0", "1.5.*", "2.*", "2.0.0-rc.1", "2.0.0", "0.9.9",
        ]
        .into_iter()
        .map(v)
        .collect();

        for a in &versions {
            for b in &versions {
                assert_eq!(total_cmp(a, b), total_cmp(b, a).reverse(), "{a} vs {b}");
                for c in &versions {
                    if total_cmp(a, b) != Ordering::Greater && total_cmp(b, c) != Ordering::Greater {
                        assert_ne!(total_cmp(a, c), Ordering::Greater, "{a} <= {b} <= {c}");
                    }
                }
            }
        }

        let concrete: Vec<&SemanticVersion> = versions.iter().filter(|v| !v.has_wildcard()).collect();
        for a in &concrete {
            for b in &concrete {
                assert_eq!(total_cmp(a, b), compare(a, b), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_strict_eq() {
        assert!(v("1.0.0-foo+bar").strict_eq(&v("1.0.0-FOO+BAR")));
        assert!(!v("1.0.0-foo+bar").strict_eq(&v("1.0.0-foo+baz")));
        assert!(!v("1.*").strict_eq(&v("1.5.9")));
        assert_eq!(v("1.*"), v("1.5.9"));
    }
}
