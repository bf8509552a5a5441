use thiserror::Error;

/// Ways a metric expression can fail to parse or evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("unexpected '{token}' at offset {offset}")]
    UnexpectedToken { token: String, offset: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("'{name}' is not a valid metric reference")]
    InvalidReference { name: String },

    #[error("invalid number '{text}'")]
    InvalidNumber { text: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("metric '{reference}' has non-numeric value '{value}'")]
    NonNumericValue { reference: String, value: String },
}
