//! Arithmetic over symbolic metric references.

use super::ExprError;
use super::lexer::{Spanned, Token, tokenize};
use crate::metrics::MetricValue;
use compact_str::CompactString;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Literal(MetricValue),
    Reference(CompactString),
    Negate(Box<Self>),
    Binary(BinaryOp, Box<Self>, Box<Self>),
}

/// A requested metric column: either a single reference such as `CYCLOMATIC` or an
/// arithmetic combination such as `(CYCLOMATIC + PARAMS) / 2`.
///
/// Supports numeric literals, the four binary operators with the usual
/// precedence, unary sign, and parentheses. Nothing else is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: Node,
    references: Vec<CompactString>,
}

impl Expression {
    /// Parses an expression. Surrounding whitespace is not part of the expression's text.
    pub fn parse(source: &str) -> Result<Self, ExprError> {
        let source = source.trim();
        let tokens = tokenize(source)?;
        if tokens.is_empty() {
            return Err(ExprError::Empty);
        }

        let mut parser = Parser { tokens: &tokens, position: 0 };
        let root = parser.expression()?;
        if let Some(extra) = parser.peek() {
            return Err(unexpected(extra));
        }

        let mut references: Vec<CompactString> = Vec::new();
        for spanned in &tokens {
            if let Token::Reference(name) = spanned.token
                && !references.iter().any(|r| r == name)
            {
                references.push(CompactString::from(name));
            }
        }

        Ok(Self {
            source: source.to_string(),
            root,
            references,
        })
    }

    /// The expression text, which doubles as the report column name.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Distinct metric references in order of first appearance.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.references.iter().map(CompactString::as_str)
    }

    /// Evaluates the expression, substituting each reference with the raw value `lookup` returns for it.
    ///
    /// A reference with no recorded value counts as `0`.
    pub fn evaluate<'a>(&self, lookup: impl Fn(&str) -> Option<&'a str>) -> Result<MetricValue, ExprError> {
        eval(&self.root, &lookup)
    }
}

fn eval<'a>(node: &Node, lookup: &impl Fn(&str) -> Option<&'a str>) -> Result<MetricValue, ExprError> {
    match node {
        Node::Literal(value) => Ok(*value),
        Node::Reference(name) => match lookup(name) {
            None => Ok(MetricValue::Int(0)),
            Some(raw) => MetricValue::parse(raw).ok_or_else(|| ExprError::NonNumericValue {
                reference: name.to_string(),
                value: raw.to_string(),
            }),
        },
        Node::Negate(inner) => Ok(eval(inner, lookup)?.negate()),
        Node::Binary(op, lhs, rhs) => {
            let lhs = eval(lhs, lookup)?;
            let rhs = eval(rhs, lookup)?;
            match op {
                BinaryOp::Add => Ok(lhs.add(rhs)),
                BinaryOp::Subtract => Ok(lhs.subtract(rhs)),
                BinaryOp::Multiply => Ok(lhs.multiply(rhs)),
                BinaryOp::Divide => lhs.divide(rhs).ok_or(ExprError::DivisionByZero),
            }
        }
    }
}

fn unexpected(spanned: &Spanned<'_>) -> ExprError {
    ExprError::UnexpectedToken {
        token: spanned.token.to_string(),
        offset: spanned.offset,
    }
}

/// Recursive-descent parser over the token stream.
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := unary (('*' | '/') unary)*
/// unary      := ('+' | '-') unary | NUMBER | REFERENCE | '(' expression ')'
/// ```
struct Parser<'t, 's> {
    tokens: &'t [Spanned<'s>],
    position: usize,
}

impl<'t, 's> Parser<'t, 's> {
    fn peek(&self) -> Option<&'t Spanned<'s>> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<&'t Spanned<'s>> {
        let next = self.peek();
        if next.is_some() {
            self.position += 1;
        }
        next
    }

    fn expression(&mut self) -> Result<Node, ExprError> {
        let mut node = self.term()?;
        while let Some(op) = self.peek().and_then(|s| match s.token {
            Token::Plus => Some(BinaryOp::Add),
            Token::Minus => Some(BinaryOp::Subtract),
            _ => None,
        }) {
            self.position += 1;
            let rhs = self.term()?;
            node = Node::Binary(op, Box::new(node), Box::new(rhs));
        }
        Ok(node)
    }

    fn term(&mut self) -> Result<Node, ExprError> {
        let mut node = self.unary()?;
        while let Some(op) = self.peek().and_then(|s| match s.token {
            Token::Star => Some(BinaryOp::Multiply),
            Token::Slash => Some(BinaryOp::Divide),
            _ => None,
        }) {
            self.position += 1;
            let rhs = self.unary()?;
            node = Node::Binary(op, Box::new(node), Box::new(rhs));
        }
        Ok(node)
    }

    fn unary(&mut self) -> Result<Node, ExprError> {
        let Some(spanned) = self.advance() else {
            return Err(ExprError::UnexpectedEnd);
        };

        match spanned.token {
            Token::Plus => self.unary(),
            Token::Minus => Ok(Node::Negate(Box::new(self.unary()?))),
            Token::Number(text) => MetricValue::parse(text)
                .map(Node::Literal)
                .ok_or_else(|| ExprError::InvalidNumber { text: text.to_string() }),
            Token::Reference(name) => Ok(Node::Reference(CompactString::from(name))),
            Token::LParen => {
                let inner = self.expression()?;
                match self.advance() {
                    Some(Spanned { token: Token::RParen, .. }) => Ok(inner),
                    Some(other) => Err(unexpected(other)),
                    None => Err(ExprError::UnexpectedEnd),
                }
            }
            Token::Star | Token::Slash | Token::RParen => Err(unexpected(spanned)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn eval_with(source: &str, values: &[(&str, &str)]) -> Result<MetricValue, ExprError> {
        let values: HashMap<&str, &str> = values.iter().copied().collect();
        Expression::parse(source)?.evaluate(|reference| values.get(reference).copied())
    }

    #[test]
    fn test_single_reference() {
        assert_eq!(eval_with("CYCLOMATIC", &[("CYCLOMATIC", "3")]).unwrap(), MetricValue::Int(3));
    }

    #[test]
    fn test_precedence_and_grouping() {
        let values = [("A", "2"), ("B", "3"), ("C", "4")];
        assert_eq!(eval_with("A+B*C", &values).unwrap(), MetricValue::Int(14));
        assert_eq!(eval_with("(A+B)*C", &values).unwrap(), MetricValue::Int(20));
        assert_eq!(eval_with("A-B-C", &values).unwrap(), MetricValue::Int(-5));
        assert_eq!(eval_with("C/A/A", &values).unwrap(), MetricValue::Int(1));
    }

    #[test]
    fn test_missing_reference_counts_as_zero() {
        let with_zero = eval_with("A+0", &[("A", "5")]).unwrap();
        let with_missing = eval_with("A+B", &[("A", "5")]).unwrap();
        assert_eq!(with_missing, with_zero);
        assert_eq!(eval_with("B", &[]).unwrap(), MetricValue::Int(0));
    }

    #[test]
    fn test_fractional_values_stay_fractional() {
        assert_eq!(eval_with("A+B", &[("A", "1.5"), ("B", "2")]).unwrap(), MetricValue::Float(3.5));
        assert_eq!(eval_with("A/B", &[("A", "3.0"), ("B", "2")]).unwrap(), MetricValue::Float(1.5));
    }

    #[test]
    fn test_integer_division_rounds_down() {
        assert_eq!(eval_with("A/B", &[("A", "3"), ("B", "2")]).unwrap(), MetricValue::Int(1));
        assert_eq!(eval_with("-A/B", &[("A", "7"), ("B", "2")]).unwrap(), MetricValue::Int(-4));
        assert_eq!(eval_with("A/B", &[("A", "6"), ("B", "2")]).unwrap(), MetricValue::Int(3));
    }

    #[test]
    fn test_unary_sign() {
        assert_eq!(eval_with("-A", &[("A", "4")]).unwrap(), MetricValue::Int(-4));
        assert_eq!(eval_with("A--B", &[("A", "4"), ("B", "-2")]).unwrap(), MetricValue::Int(2));
        assert_eq!(eval_with("+A*-2", &[("A", "4")]).unwrap(), MetricValue::Int(-8));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval_with("A/B", &[("A", "4")]).unwrap_err(), ExprError::DivisionByZero);
        assert_eq!(eval_with("A/(B-B)", &[("A", "4"), ("B", "1.5")]).unwrap_err(), ExprError::DivisionByZero);
    }

    #[test]
    fn test_non_numeric_value() {
        assert_eq!(
            eval_with("A+1", &[("A", "n/a")]).unwrap_err(),
            ExprError::NonNumericValue {
                reference: "A".to_string(),
                value: "n/a".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_expressions() {
        assert_eq!(Expression::parse("").unwrap_err(), ExprError::Empty);
        assert_eq!(Expression::parse("   ").unwrap_err(), ExprError::Empty);
        assert_eq!(Expression::parse("A+").unwrap_err(), ExprError::UnexpectedEnd);
        assert_eq!(Expression::parse("(A+B").unwrap_err(), ExprError::UnexpectedEnd);
        assert_eq!(
            Expression::parse("A B").unwrap_err(),
            ExprError::UnexpectedToken {
                token: "B".to_string(),
                offset: 2
            }
        );
        assert_eq!(
            Expression::parse("A+)").unwrap_err(),
            ExprError::UnexpectedToken {
                token: ")".to_string(),
                offset: 2
            }
        );
        assert_eq!(
            Expression::parse("1.2.3").unwrap_err(),
            ExprError::InvalidNumber { text: "1.2.3".to_string() }
        );
    }

    #[test]
    fn test_source_is_trimmed() {
        let expr = Expression::parse("  CYCLOMATIC + PARAMS ").unwrap();
        assert_eq!(expr.source(), "CYCLOMATIC + PARAMS");
    }

    #[test]
    fn test_references_are_distinct_and_ordered() {
        let expr = Expression::parse("B*A+B/(C-A)").unwrap();
        let references: Vec<_> = expr.references().collect();
        assert_eq!(references, ["B", "A", "C"]);
    }

    #[test]
    fn test_constant_expression_has_no_references() {
        let expr = Expression::parse("2*(3+4)").unwrap();
        assert_eq!(expr.references().count(), 0);
        assert_eq!(expr.evaluate(|_| None).unwrap(), MetricValue::Int(14));
    }
}
