use crate::{node::NodeId, op::Op, Graph};
use ndgrad_core::error::Result;

impl Graph {
    pub fn broadcast_to(&mut self, input: NodeId, shape: &[usize]) -> Result<NodeId> {
        self.record(Op::BroadcastTo {
            input,
            shape: shape.to_vec(),
        })
    }

    pub fn reshape(&mut self, input: NodeId, shape: &[usize]) -> Result<NodeId> {
        self.record(Op::Reshape {
            input,
            shape: shape.to_vec(),
        })
    }

    /// Swaps the last two dimensions.
    pub fn transpose(&mut self, input: NodeId) -> Result<NodeId> {
        self.record(Op::Transpose { input })
    }
}
