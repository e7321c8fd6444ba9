use crate::{node::NodeId, op::Op, Graph};
use ndgrad_core::error::Result;

impl Graph {
    pub fn neg(&mut self, input: NodeId) -> Result<NodeId> {
        self.record(Op::Neg { input })
    }

    pub fn exp(&mut self, input: NodeId) -> Result<NodeId> {
        self.record(Op::Exp { input })
    }

    /// Elementwise `max(x, min)`. The gradient is zero where `x <= min`.
    pub fn clamp(&mut self, input: NodeId, min: f64) -> Result<NodeId> {
        self.record(Op::Clamp { input, min })
    }

    pub fn relu(&mut self, input: NodeId) -> Result<NodeId> {
        self.clamp(input, 0.0)
    }
}
