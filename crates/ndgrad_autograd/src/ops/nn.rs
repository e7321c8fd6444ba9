use crate::{node::NodeId, op::Op, Graph};
use ndgrad_core::error::Result;

impl Graph {
    pub fn softmax(&mut self, input: NodeId, dim: isize) -> Result<NodeId> {
        self.record(Op::Softmax { input, dim })
    }

    pub fn log_softmax(&mut self, input: NodeId, dim: isize) -> Result<NodeId> {
        self.record(Op::LogSoftmax { input, dim })
    }

    /// Negative mean log-likelihood of `targets` under rows of log-probabilities.
    pub fn nll_loss(&mut self, input: NodeId, targets: &[usize]) -> Result<NodeId> {
        self.record(Op::NllLoss {
            input,
            targets: targets.to_vec(),
        })
    }

    /// Fused log-softmax and NLL over raw logits.
    pub fn cross_entropy_loss(&mut self, input: NodeId, targets: &[usize]) -> Result<NodeId> {
        self.record(Op::CrossEntropy {
            input,
            targets: targets.to_vec(),
        })
    }
}
