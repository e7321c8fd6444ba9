use crate::{
    config::GraphConfig,
    node::{Node, NodeId},
    op::Op,
};
use ndgrad_core::error::{Error, Result};
use ndgrad_tensor::Tensor;
use std::sync::atomic::{AtomicUsize, Ordering};

static GRAPH_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Arena of nodes built by eager forward operations.
///
/// Nodes are only ever appended, so every op refers to strictly older nodes
/// and the graph cannot contain a cycle.
#[derive(Debug)]
pub struct Graph {
    id: usize,
    pub(crate) nodes: Vec<Node>,
    config: GraphConfig,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            id: GRAPH_COUNTER.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a node holding caller data.
    pub fn leaf(&mut self, tensor: Tensor, requires_grad: bool) -> NodeId {
        self.push(Node {
            value: tensor,
            requires_grad,
            grad: None,
            op: None,
        })
    }

    /// A leaf that never tracks gradients.
    pub fn constant(&mut self, tensor: Tensor) -> NodeId {
        self.leaf(tensor, false)
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        if id.graph != self.id {
            return Err(Error::UnknownNode { index: id.index });
        }
        self.nodes.get(id.index).ok_or(Error::UnknownNode { index: id.index })
    }

    pub fn value(&self, id: NodeId) -> Result<&Tensor> {
        Ok(&self.node(id)?.value)
    }

    /// The accumulated gradient, or `None` if no backward pass has reached the node.
    pub fn grad(&self, id: NodeId) -> Result<Option<&Tensor>> {
        Ok(self.node(id)?.grad.as_ref())
    }

    pub fn requires_grad(&self, id: NodeId) -> Result<bool> {
        Ok(self.node(id)?.requires_grad)
    }

    pub fn op(&self, id: NodeId) -> Result<Option<&Op>> {
        Ok(self.node(id)?.op.as_ref())
    }

    /// The recorded op's name, or `"leaf"`.
    pub fn op_name(&self, id: NodeId) -> Result<&'static str> {
        Ok(self.op(id)?.map_or("leaf", Op::name))
    }

    /// Clears every gradient slot.
    pub fn zero_grad(&mut self) {
        let cleared = self.nodes.iter_mut().filter_map(|node| node.grad.take()).count();
        log::debug!("zero_grad: cleared {} gradient slots", cleared);
    }

    /// Runs `op` forward and appends its output. The op is kept only when an
    /// input tracks gradients.
    pub(crate) fn record(&mut self, op: Op) -> Result<NodeId> {
        let inputs = op.inputs();
        let nodes = inputs.iter().map(|&id| self.node(id)).collect::<Result<Vec<_>>>()?;
        let values: Vec<&Tensor> = nodes.iter().map(|node| &node.value).collect();

        let value = op.forward(&values)?;
        let requires_grad = nodes.iter().any(|node| node.requires_grad);

        Ok(self.push(Node {
            value,
            requires_grad,
            grad: None,
            op: requires_grad.then_some(op),
        }))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId {
            graph: self.id,
            index: self.nodes.len(),
        };
        self.nodes.push(node);
        id
    }
}
