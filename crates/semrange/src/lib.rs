//! Semantic versions with wildcards and boolean range queries
//!
//! This crate provides an immutable SemVer 2.0 version type whose numeric
//! components and prerelease may be `*` wildcards, precedence ordering with
//! wildcard matching, and a small expression engine compiling queries such as
//! `>=1.2.0 && <2.0.0 || 3.*` into reusable predicates.

mod comparator;
mod convert;
mod ordering;
pub mod range;
mod semver;
mod version;

pub use comparator::Comparator;
pub use convert::FourPartVersion;
pub use ordering::{compare, compare_identifiers, total_cmp};
pub use range::{Operator, RangeError, RangeParser, RangePredicate};
pub use semver::Semver;
pub use version::{ErrorKind, SemanticVersion, VersionError, WILDCARD};
