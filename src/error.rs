use std::fmt;

use strided_view::StridedError;

use crate::dtype::DType;

/// Which buffer of the call an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Input,
    Output,
}

impl Operand {
    /// Position of the buffer in the seven-argument call.
    pub fn position(self) -> usize {
        match self {
            Operand::Input => 2,
            Operand::Output => 5,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Input => f.write_str("input"),
            Operand::Output => f.write_str("output"),
        }
    }
}

/// Coarse classification of [`InvError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong number of call arguments.
    Arity,
    /// An argument has the wrong shape: non-integer length or stride, or a
    /// buffer that is not an array-like of the declared dtype.
    TypeArgument,
    /// Unknown dtype, or a dtype pair without a kernel.
    UnsupportedType,
    /// A buffer is too short for the requested walk.
    Bounds,
    /// A kernel was handed storage it does not handle.
    Internal,
}

/// Errors that can occur while applying a strided inverse.
///
/// Every error is raised before the output buffer is modified.
#[derive(Debug, thiserror::Error)]
pub enum InvError {
    #[error("invalid number of arguments: expected {expected}, found {found}")]
    Arity { expected: usize, found: usize },

    #[error("invalid argument {position}: {reason}")]
    TypeArgument { position: usize, reason: String },

    #[error("unsupported dtype: {0:?}")]
    UnsupportedType(String),

    #[error("unsupported dtype pair: {input} -> {output}")]
    UnsupportedPair { input: DType, output: DType },

    #[error("{operand} buffer too short")]
    Bounds {
        operand: Operand,
        #[source]
        source: StridedError,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

impl InvError {
    /// Error class, ignoring the variant's payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            InvError::Arity { .. } => ErrorKind::Arity,
            InvError::TypeArgument { .. } => ErrorKind::TypeArgument,
            InvError::UnsupportedType(_) | InvError::UnsupportedPair { .. } => {
                ErrorKind::UnsupportedType
            }
            InvError::Bounds { .. } => ErrorKind::Bounds,
            InvError::Internal(_) => ErrorKind::Internal,
        }
    }
}

/// Convenience alias for `Result<T, InvError>`.
pub type Result<T> = std::result::Result<T, InvError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_kind_classification() {
        let pair = InvError::UnsupportedPair {
            input: DType::Float64,
            output: DType::Uint8,
        };
        assert_eq!(pair.kind(), ErrorKind::UnsupportedType);
        assert_eq!(pair.to_string(), "unsupported dtype pair: float64 -> uint8");
        assert_eq!(
            InvError::UnsupportedType("beep".into()).kind(),
            ErrorKind::UnsupportedType
        );
        assert_eq!(
            InvError::Arity { expected: 7, found: 0 }.kind(),
            ErrorKind::Arity
        );
    }

    #[test]
    fn test_bounds_carries_source() {
        let err = InvError::Bounds {
            operand: Operand::Output,
            source: StridedError::InsufficientLength { len: 3, required: 10 },
        };
        assert_eq!(err.kind(), ErrorKind::Bounds);
        assert_eq!(err.to_string(), "output buffer too short");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_internal_kind() {
        assert_eq!(InvError::Internal("x".into()).kind(), ErrorKind::Internal);
    }
}
