//! Arithmetic expressions over symbolic metric references.
//!
//! Every requested report column is an [`Expression`]. The simplest one is a bare
//! reference such as `CYCLOMATIC`; richer ones combine references and numeric
//! literals with `+`, `-`, `*`, `/`, unary sign, and parentheses.
//!
//! Expressions are parsed once, when the request is read, by a small
//! recursive-descent parser. The grammar admits nothing but arithmetic, so no
//! request can trigger anything other than the computation of a number.
//!
//! Before any metric values are loaded, [`resolve_references`] maps each reference
//! to its metric kind identifier, which both validates the request and tells the
//! metric table loader which rows to keep. During aggregation every expression is
//! evaluated once per entity via [`Expression::evaluate`].

mod expr_error;
mod expression;
mod lexer;
mod resolver;

pub(super) const LOG_TARGET: &str = "      expr";

pub use expr_error::ExprError;
pub use expression::Expression;
pub use resolver::{parse_expressions, parse_requested, resolve_references};
