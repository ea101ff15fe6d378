//! Shunting-yard parser turning a range query into a predicate

use super::predicate::Expr;
use super::{Operator, RangeError, RangePredicate, TokenKind, Tokenizer};
use crate::version::SemanticVersion;

/// Entry on the operand stack
#[derive(Debug)]
enum Operand {
    /// The version under test, supplied at evaluation time
    Subject,
    Literal(SemanticVersion),
    Condition(Expr),
}

/// Entry on the operator stack, with the byte offset it came from
#[derive(Debug, Clone, Copy)]
enum Symbol {
    Operator(Operator, usize),
    OpenParen(usize),
}

/// Parses range queries such as `>=1.2.0 && <2.0.0` or `!(1.* || 2.0.0)`.
///
/// `||` binds loosest, then `&&`, then `!` and the comparisons. A version
/// without a comparison operator is an equality test, so `1.0.0 || 2.0.0`
/// reads as `==1.0.0 || ==2.0.0`.
///
/// The parser keeps its stacks between calls to reuse their allocations, and
/// clears them at the start of every parse. Parsing takes `&mut self`, so one
/// instance can't be used for overlapping calls.
#[derive(Debug, Default)]
pub struct RangeParser {
    operands: Vec<Operand>,
    operators: Vec<Symbol>,
}

impl RangeParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a range query into a reusable predicate
    pub fn parse(&mut self, range: &str) -> Result<RangePredicate, RangeError> {
        if range.trim().is_empty() {
            return Err(RangeError::Empty);
        }

        self.operands.clear();
        self.operators.clear();

        let result = self.run(range);

        self.operands.clear();
        self.operators.clear();

        let predicate = result?;
        log::debug!("Compiled range \"{}\" into {}", range, predicate);
        Ok(predicate)
    }

    /// Parse a range query and return it as a ready-to-call closure
    pub fn evaluate(
        &mut self,
        range: &str,
    ) -> Result<impl Fn(&SemanticVersion) -> bool + Send + Sync + 'static, RangeError> {
        Ok(self.parse(range)?.into_fn())
    }

    fn run(&mut self, range: &str) -> Result<RangePredicate, RangeError> {
        let mut after_comparison = false;

        for token in Tokenizer::new(range) {
            let token = token?;
            match token.kind {
                TokenKind::Version(version) => {
                    if !after_comparison {
                        self.push_operator(Operator::Equal, token.position)?;
                    }
                    self.operands.push(Operand::Subject);
                    self.operands.push(Operand::Literal(version));
                    after_comparison = false;
                }
                TokenKind::Operator(op) => {
                    self.push_operator(op, token.position)?;
                    after_comparison = op.is_comparison();
                }
                TokenKind::OpenParen => {
                    self.operators.push(Symbol::OpenParen(token.position));
                    after_comparison = false;
                }
                TokenKind::CloseParen => {
                    self.close_paren(token.position)?;
                    after_comparison = false;
                }
            }
        }

        while let Some(symbol) = self.operators.pop() {
            match symbol {
                Symbol::Operator(op, position) => self.reduce(op, position)?,
                Symbol::OpenParen(position) => {
                    return Err(RangeError::UnclosedParenthesis { position })
                }
            }
        }

        match (self.operands.pop(), self.operands.is_empty()) {
            (Some(Operand::Condition(expr)), true) => Ok(RangePredicate::new(expr)),
            _ => Err(RangeError::Malformed {
                position: range.len(),
                reason: "expression does not reduce to a single condition".to_string(),
            }),
        }
    }

    /// Reduce every operator on the stack that binds at least as tightly as
    /// `op`, then push `op`. Prefix operators have nothing to their left yet,
    /// so they are pushed directly.
    fn push_operator(&mut self, op: Operator, position: usize) -> Result<(), RangeError> {
        if !op.is_prefix() {
            while let Some(&Symbol::Operator(top, top_position)) = self.operators.last() {
                if top.precedence() > op.precedence() {
                    break;
                }
                self.operators.pop();
                self.reduce(top, top_position)?;
            }
        }

        self.operators.push(Symbol::Operator(op, position));
        Ok(())
    }

    fn close_paren(&mut self, position: usize) -> Result<(), RangeError> {
        loop {
            match self.operators.pop() {
                Some(Symbol::Operator(op, op_position)) => self.reduce(op, op_position)?,
                Some(Symbol::OpenParen(_)) => return Ok(()),
                None => return Err(RangeError::UnmatchedParenthesis { position }),
            }
        }
    }

    /// Pop the operands `op` needs, combine them and push the result
    fn reduce(&mut self, op: Operator, position: usize) -> Result<(), RangeError> {
        log::trace!("Reducing `{}` at position {}", op, position);

        let malformed = |reason: String| RangeError::Malformed { position, reason };

        if self.operands.len() < op.arity() {
            return Err(malformed(format!("`{}` is missing an operand", op)));
        }

        let condition = if op.is_comparison() {
            let literal = self.operands.pop();
            let subject = self.operands.pop();
            match (subject, literal) {
                (Some(Operand::Subject), Some(Operand::Literal(version))) => Expr::Compare(op, version),
                _ => return Err(malformed(format!("`{}` must be followed by a version", op))),
            }
        } else if op == Operator::Not {
            match self.operands.pop() {
                Some(Operand::Condition(inner)) => Expr::Not(Box::new(inner)),
                _ => return Err(malformed("`!` must be followed by a condition".to_string())),
            }
        } else {
            let right = self.operands.pop();
            let left = self.operands.pop();
            match (left, right) {
                (Some(Operand::Condition(left)), Some(Operand::Condition(right))) => {
                    if op == Operator::AndAlso {
                        Expr::And(Box::new(left), Box::new(right))
                    } else {
                        Expr::Or(Box::new(left), Box::new(right))
                    }
                }
                _ => return Err(malformed(format!("`{}` needs a condition on both sides", op))),
            }
        };

        self.operands.push(Operand::Condition(condition));
        Ok(())
    }
}
