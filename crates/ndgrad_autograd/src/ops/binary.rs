use crate::{node::NodeId, op::Op, Graph};
use ndgrad_core::error::Result;

// Elementwise ops broadcast their operands; gradients are summed back to each
// operand's own shape.
impl Graph {
    pub fn add(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId> {
        self.record(Op::Add { lhs, rhs })
    }

    pub fn sub(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId> {
        self.record(Op::Sub { lhs, rhs })
    }

    pub fn mul(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId> {
        self.record(Op::Mul { lhs, rhs })
    }

    pub fn div(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId> {
        self.record(Op::Div { lhs, rhs })
    }
}
