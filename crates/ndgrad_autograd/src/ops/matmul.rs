use crate::{node::NodeId, op::Op, Graph};
use ndgrad_core::error::Result;

impl Graph {
    /// (m, k) x (k, n) -> (m, n).
    pub fn matmul(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId> {
        self.record(Op::MatMul { lhs, rhs })
    }

    /// Inner product of two equal-length vectors, as a rank-0 node.
    pub fn dot(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId> {
        self.record(Op::Dot { lhs, rhs })
    }
}
