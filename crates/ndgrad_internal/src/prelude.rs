pub use crate::autograd::{functional, gradcheck::gradcheck, Graph, GraphConfig, NodeId, Op};
pub use crate::core::{
    config::TensorConfig,
    device::Device,
    dtype::*,
    error::{Error, ErrorCategory, Result},
    scalar::Scalar,
};
pub use crate::tensor::Tensor;
