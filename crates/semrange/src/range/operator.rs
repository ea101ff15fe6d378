//! Operator table for range queries

use std::cmp::Ordering;
use std::fmt;

/// Operators recognised in a range query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Logical or (||)
    OrElse,
    /// Logical and (&&)
    AndAlso,
    /// Not equal (!=)
    NotEqual,
    /// Equal (==)
    Equal,
    /// Less than (<)
    LessThan,
    /// Greater than (>)
    GreaterThan,
    /// Less than or equal (<=)
    LessOrEqual,
    /// Greater than or equal (>=)
    GreaterOrEqual,
    /// Logical not (!)
    Not,
}

impl Operator {
    /// Look up an operator by its exact textual form
    pub fn lookup(s: &str) -> Option<Self> {
        match s {
            "||" => Some(Operator::OrElse),
            "&&" => Some(Operator::AndAlso),
            "!=" => Some(Operator::NotEqual),
            "==" => Some(Operator::Equal),
            "<" => Some(Operator::LessThan),
            ">" => Some(Operator::GreaterThan),
            "<=" => Some(Operator::LessOrEqual),
            ">=" => Some(Operator::GreaterOrEqual),
            "!" => Some(Operator::Not),
            _ => None,
        }
    }

    /// Match the operator at the start of `input`, preferring two-character
    /// operators. Returns the operator and its length in bytes.
    pub fn scan(input: &str) -> Option<(Self, usize)> {
        if let Some(op) = input.get(..2).and_then(Self::lookup) {
            return Some((op, 2));
        }
        input.get(..1).and_then(Self::lookup).map(|op| (op, 1))
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::OrElse => "||",
            Operator::AndAlso => "&&",
            Operator::NotEqual => "!=",
            Operator::Equal => "==",
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::LessOrEqual => "<=",
            Operator::GreaterOrEqual => ">=",
            Operator::Not => "!",
        }
    }

    /// Binding tier, lower binds tighter
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::OrElse => 3,
            Operator::AndAlso => 2,
            _ => 1,
        }
    }

    /// Number of operands consumed when the operator is reduced
    pub fn arity(&self) -> usize {
        match self {
            Operator::Not => 1,
            _ => 2,
        }
    }

    /// Whether this operator compares the version under test to a literal
    pub fn is_comparison(&self) -> bool {
        !matches!(self, Operator::OrElse | Operator::AndAlso | Operator::Not)
    }

    /// Prefix operators stand before their operand(s): `!` and the comparisons,
    /// whose left operand is the implicit version under test.
    pub fn is_prefix(&self) -> bool {
        !matches!(self, Operator::OrElse | Operator::AndAlso)
    }

    /// Decide a comparison from the ordering of the version under test against
    /// the literal. Always false for the boolean connectives.
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::NotEqual => ordering != Ordering::Equal,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::LessOrEqual => ordering != Ordering::Greater,
            Operator::GreaterOrEqual => ordering != Ordering::Less,
            Operator::OrElse | Operator::AndAlso | Operator::Not => false,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
