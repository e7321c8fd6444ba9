use crate::dtype::DType;
use thiserror::Error;

/// The broad classes callers match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Shape,
    Index,
    GraphState,
    Argument,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("incompatible shapes for {op}: {lhs:?} and {rhs:?}")]
    IncompatibleShapes {
        op: &'static str,
        lhs: Vec<usize>,
        rhs: Vec<usize>,
    },
    #[error("invalid shape: {0}")]
    InvalidShape(String),
    #[error("dimension {dim} out of bounds for tensor of rank {ndim}")]
    DimensionOutOfBounds { dim: isize, ndim: usize },

    #[error("index {index} out of bounds for size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("dtype mismatch: expected {expected}, got {got}")]
    DTypeMismatch { expected: DType, got: DType },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("backward without a seed needs a single-element output, got shape {shape:?}")]
    NonScalarBackward { shape: Vec<usize> },
    #[error("node {0} does not require gradients")]
    NoGradient(usize),
    #[error("gradients are already populated; call zero_grad() or enable accumulate_grads")]
    GradientsNotCleared,
    #[error("node {index} does not belong to this graph")]
    UnknownNode { index: usize },
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IncompatibleShapes { .. } | Self::InvalidShape(_) | Self::DimensionOutOfBounds { .. } => {
                ErrorCategory::Shape
            }
            Self::IndexOutOfBounds { .. } => ErrorCategory::Index,
            Self::DTypeMismatch { .. } | Self::InvalidArgument(_) => ErrorCategory::Argument,
            Self::NonScalarBackward { .. } | Self::NoGradient(_) | Self::GradientsNotCleared | Self::UnknownNode { .. } => {
                ErrorCategory::GraphState
            }
        }
    }

    pub fn incompatible(op: &'static str, lhs: &[usize], rhs: &[usize]) -> Self {
        Self::IncompatibleShapes {
            op,
            lhs: lhs.to_vec(),
            rhs: rhs.to_vec(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
