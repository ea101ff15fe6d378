//! Compiled range predicate

use std::fmt;
use std::str::FromStr;

use super::{Operator, RangeError, RangeParser};
use crate::ordering::compare;
use crate::version::SemanticVersion;

/// Condition tree produced by the parser
#[derive(Debug, Clone)]
pub(crate) enum Expr {
    /// The version under test compared against a literal
    Compare(Operator, SemanticVersion),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    fn evaluate(&self, version: &SemanticVersion) -> bool {
        match self {
            Expr::Compare(op, literal) => op.accepts(compare(version, literal)),
            Expr::Not(inner) => !inner.evaluate(version),
            Expr::And(left, right) => left.evaluate(version) && right.evaluate(version),
            Expr::Or(left, right) => left.evaluate(version) || right.evaluate(version),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Compare(op, literal) => write!(f, "{}{}", op, literal),
            Expr::Not(inner) => match inner.as_ref() {
                Expr::Compare(..) | Expr::Not(_) => write!(f, "!({})", inner),
                Expr::And(..) | Expr::Or(..) => write!(f, "!{}", inner),
            },
            Expr::And(left, right) => write!(f, "({} && {})", left, right),
            Expr::Or(left, right) => write!(f, "({} || {})", left, right),
        }
    }
}

/// A parsed range query, reusable for any number of evaluations.
///
/// Evaluation is pure, so a predicate can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct RangePredicate {
    expr: Expr,
}

impl RangePredicate {
    pub(crate) fn new(expr: Expr) -> Self {
        RangePredicate { expr }
    }

    /// Parse a range query with a fresh parser
    pub fn parse(range: &str) -> Result<Self, RangeError> {
        RangeParser::new().parse(range)
    }

    /// Check whether a version satisfies the range
    pub fn matches(&self, version: &SemanticVersion) -> bool {
        self.expr.evaluate(version)
    }

    /// Keep the versions that satisfy the range, preserving their order
    pub fn filter<'a, I>(&self, versions: I) -> Vec<&'a SemanticVersion>
    where
        I: IntoIterator<Item = &'a SemanticVersion>,
    {
        versions.into_iter().filter(|v| self.matches(v)).collect()
    }

    /// Convert into a plain closure
    pub fn into_fn(self) -> impl Fn(&SemanticVersion) -> bool + Send + Sync + 'static {
        move |version: &SemanticVersion| self.matches(version)
    }
}

impl fmt::Display for RangePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

impl FromStr for RangePredicate {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
