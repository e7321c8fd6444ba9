//! Reverse-mode automatic differentiation over [`ndgrad_tensor::Tensor`].
//!
//! A [`Graph`] owns every node created while building a computation. Each
//! operation computes its value eagerly and, when any input tracks
//! gradients, records an [`Op`] so [`Graph::backward`] can replay the
//! vector-Jacobian products in reverse.

mod backward;
pub mod config;
pub mod functional;
pub mod gradcheck;
mod graph;
mod node;
pub mod op;
mod ops;

pub use config::GraphConfig;
pub use graph::Graph;
pub use node::{Node, NodeId};
pub use op::Op;
