use crate::polynomial::poly_engine::MAX_EXPONENT;
use std::fmt;

/// Error types for parsing, dividing and configuring polynomials
#[derive(Debug, Clone, PartialEq)]
pub enum PolyError {
    /// coefficient or exponent text that does not convert to a number
    InvalidNumber { token: String, reason: String },
    /// fragment of the normalized input that is not a term (strict parsing only)
    UnexpectedInput { position: usize, fragment: String },
    /// long division by the empty (zero) polynomial
    DivisionByZero,
    /// a power above `MAX_EXPONENT`, either parsed or produced by multiplication or integration
    ExponentOverflow { exponent: u64 },
    /// malformed settings document or setting value
    Config(String),
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PolyError::InvalidNumber { token, reason } => {
                write!(f, "Invalid number '{}': {}", token, reason)
            }
            PolyError::UnexpectedInput { position, fragment } => {
                write!(
                    f,
                    "Unexpected input at position {}: '{}'",
                    position, fragment
                )
            }
            PolyError::DivisionByZero => write!(f, "Division by the zero polynomial"),
            PolyError::ExponentOverflow { exponent } => write!(
                f,
                "Exponent {} exceeds the largest supported power {}",
                exponent, MAX_EXPONENT
            ),
            PolyError::Config(msg) => write!(f, "Invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for PolyError {}
