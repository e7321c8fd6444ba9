use crate::op::Op;
use ndgrad_tensor::Tensor;
use std::fmt;

/// Handle to a node inside one [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) graph: usize,
    pub(crate) index: usize,
}

impl NodeId {
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.index)
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) value: Tensor,
    pub(crate) requires_grad: bool,
    pub(crate) grad: Option<Tensor>,
    pub(crate) op: Option<Op>,
}

impl Node {
    pub fn value(&self) -> &Tensor {
        &self.value
    }
    pub fn requires_grad(&self) -> bool {
        self.requires_grad
    }
    pub fn grad(&self) -> Option<&Tensor> {
        self.grad.as_ref()
    }
    /// The recorded operation. `None` for leaves and for outputs of
    /// operations whose inputs do not track gradients.
    pub fn op(&self) -> Option<&Op> {
        self.op.as_ref()
    }
    pub fn is_leaf(&self) -> bool {
        self.op.is_none()
    }
}
