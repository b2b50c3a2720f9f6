pub type EvalResult<T> = Result<T, EvalError>;

/// Everything that can go wrong while turning one expression into a number.
///
/// Every variant is deterministic: evaluating the same input again yields the
/// same error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("empty expression")]
    EmptyExpression,
    #[error("unknown or invalid symbol: '{0}'")]
    UnknownSymbol(String),
    #[error("not enough operands for '{0}'")]
    InsufficientOperands(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("unsupported operator: {0}")]
    UnsupportedOperator(String),
    /// Holds how many values were left on the stack once every token was used.
    #[error("invalid expression ({0} values left on the stack)")]
    InvalidExpression(usize),
}
