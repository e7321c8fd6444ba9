use crate::{node::NodeId, op::Op, Graph};
use ndgrad_core::error::Result;

impl Graph {
    /// Sum of every element, as a rank-0 node.
    pub fn sum(&mut self, input: NodeId) -> Result<NodeId> {
        self.record(Op::Sum { input })
    }

    /// Mean of every element, as a rank-0 node.
    pub fn mean(&mut self, input: NodeId) -> Result<NodeId> {
        self.record(Op::Mean { input })
    }
}
