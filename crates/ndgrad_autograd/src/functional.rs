//! Small compositions of graph ops.

use crate::{node::NodeId, Graph};
use ndgrad_core::error::Result;

/// `x @ w + b`, with `b` broadcast over the rows.
pub fn linear(graph: &mut Graph, x: NodeId, w: NodeId, b: Option<NodeId>) -> Result<NodeId> {
    let y = graph.matmul(x, w)?;
    match b {
        Some(b) => graph.add(y, b),
        None => Ok(y),
    }
}

pub fn relu(graph: &mut Graph, x: NodeId) -> Result<NodeId> {
    graph.clamp(x, 0.0)
}
