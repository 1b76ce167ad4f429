use crate::dtype::DType;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Chain operations need at least two operands.
    InsufficientOperands {
        got: usize,
    },
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    DTypeMismatch {
        expected: DType,
        got: DType,
    },
    InvalidArgument(String),
    IndexOutOfBounds {
        index: (usize, usize),
        dims: (usize, usize),
    },
    //
    BufferShared,
    External {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientOperands { got } => {
                write!(f, "Insufficient operands: expected at least 2 matrices, got {}", got)
            }
            Self::DimensionMismatch { lhs, rhs } => {
                write!(f, "Dimension mismatch: {}x{} vs {}x{}", lhs.0, lhs.1, rhs.0, rhs.1)
            }
            Self::DTypeMismatch { expected, got } => {
                write!(f, "DType mismatch: expected {}, got {}", expected.as_str(), got.as_str())
            }
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::IndexOutOfBounds { index, dims } => {
                write!(
                    f,
                    "Index out of bounds: ({}, {}) is out of bounds for a {}x{} matrix",
                    index.0, index.1, dims.0, dims.1
                )
            }
            Self::BufferShared => write!(f, "Buffer is shared"),
            Self::External { message } => {
                write!(f, "External error: {}", message)
            }
        }
    }
}

impl std::error::Error for Error {}
