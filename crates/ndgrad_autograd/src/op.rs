use crate::node::NodeId;
use ndgrad_core::error::Result;
use ndgrad_tensor::Tensor;

/// The operation that produced a node, with its inputs and parameters.
///
/// `forward` computes the output from input values in the order returned by
/// [`Op::inputs`]; `backward` maps the upstream gradient to one gradient per
/// input, each with that input's shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Add { lhs: NodeId, rhs: NodeId },
    Sub { lhs: NodeId, rhs: NodeId },
    Mul { lhs: NodeId, rhs: NodeId },
    Div { lhs: NodeId, rhs: NodeId },
    MatMul { lhs: NodeId, rhs: NodeId },
    Dot { lhs: NodeId, rhs: NodeId },

    Neg { input: NodeId },
    Exp { input: NodeId },
    Clamp { input: NodeId, min: f64 },

    Sum { input: NodeId },
    Mean { input: NodeId },

    BroadcastTo { input: NodeId, shape: Vec<usize> },
    Reshape { input: NodeId, shape: Vec<usize> },
    Transpose { input: NodeId },

    Softmax { input: NodeId, dim: isize },
    LogSoftmax { input: NodeId, dim: isize },
    NllLoss { input: NodeId, targets: Vec<usize> },
    CrossEntropy { input: NodeId, targets: Vec<usize> },
}

impl Op {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Sub { .. } => "sub",
            Self::Mul { .. } => "mul",
            Self::Div { .. } => "div",
            Self::MatMul { .. } => "matmul",
            Self::Dot { .. } => "dot",
            Self::Neg { .. } => "neg",
            Self::Exp { .. } => "exp",
            Self::Clamp { .. } => "clamp",
            Self::Sum { .. } => "sum",
            Self::Mean { .. } => "mean",
            Self::BroadcastTo { .. } => "broadcast_to",
            Self::Reshape { .. } => "reshape",
            Self::Transpose { .. } => "transpose",
            Self::Softmax { .. } => "softmax",
            Self::LogSoftmax { .. } => "log_softmax",
            Self::NllLoss { .. } => "nll_loss",
            Self::CrossEntropy { .. } => "cross_entropy",
        }
    }

    pub fn inputs(&self) -> Vec<NodeId> {
        match *self {
            Self::Add { lhs, rhs }
            | Self::Sub { lhs, rhs }
            | Self::Mul { lhs, rhs }
            | Self::Div { lhs, rhs }
            | Self::MatMul { lhs, rhs }
            | Self::Dot { lhs, rhs } => vec![lhs, rhs],
            Self::Neg { input }
            | Self::Exp { input }
            | Self::Clamp { input, .. }
            | Self::Sum { input }
            | Self::Mean { input }
            | Self::BroadcastTo { input, .. }
            | Self::Reshape { input, .. }
            | Self::Transpose { input }
            | Self::Softmax { input, .. }
            | Self::LogSoftmax { input, .. }
            | Self::NllLoss { input, .. }
            | Self::CrossEntropy { input, .. } => vec![input],
        }
    }

    pub fn forward(&self, inputs: &[&Tensor]) -> Result<Tensor> {
        match self {
            Self::Add { .. } => inputs[0].add(inputs[1]),
            Self::Sub { .. } => inputs[0].sub(inputs[1]),
            Self::Mul { .. } => inputs[0].mul(inputs[1]),
            Self::Div { .. } => inputs[0].div(inputs[1]),
            Self::MatMul { .. } => inputs[0].matmul(inputs[1]),
            Self::Dot { .. } => inputs[0].dot(inputs[1]),
            Self::Neg { .. } => inputs[0].neg(),
            Self::Exp { .. } => inputs[0].exp(),
            Self::Clamp { min, .. } => inputs[0].clamp(*min),
            Self::Sum { .. } => inputs[0].sum_all(),
            Self::Mean { .. } => inputs[0].mean_all(),
            Self::BroadcastTo { shape, .. } => inputs[0].broadcast_to(shape),
            Self::Reshape { shape, .. } => inputs[0].reshape(shape),
            Self::Transpose { .. } => inputs[0].transpose(),
            Self::Softmax { dim, .. } => inputs[0].softmax(*dim),
            Self::LogSoftmax { dim, .. } => inputs[0].log_softmax(*dim),
            Self::NllLoss { targets, .. } => inputs[0].nll_loss(targets),
            Self::CrossEntropy { targets, .. } => inputs[0].cross_entropy(targets),
        }
    }

    /// Vector-Jacobian product. `output` is this op's forward value and `grad`
    /// the upstream gradient with the same shape.
    pub fn backward(&self, inputs: &[&Tensor], output: &Tensor, grad: &Tensor) -> Result<Vec<Tensor>> {
        let grads = match self {
            Self::Add { .. } => {
                let (a, b) = (inputs[0], inputs[1]);
                vec![grad.sum_to_shape(a.shape())?, grad.sum_to_shape(b.shape())?]
            }
            Self::Sub { .. } => {
                let (a, b) = (inputs[0], inputs[1]);
                vec![grad.sum_to_shape(a.shape())?, grad.neg()?.sum_to_shape(b.shape())?]
            }
            Self::Mul { .. } => {
                let (a, b) = (inputs[0], inputs[1]);
                vec![
                    grad.mul(b)?.sum_to_shape(a.shape())?,
                    grad.mul(a)?.sum_to_shape(b.shape())?,
                ]
            }
            Self::Div { .. } => {
                // d(a/b)/db = -(a/b)/b
                let (a, b) = (inputs[0], inputs[1]);
                vec![
                    grad.div(b)?.sum_to_shape(a.shape())?,
                    grad.mul(output)?.div(b)?.neg()?.sum_to_shape(b.shape())?,
                ]
            }
            Self::MatMul { .. } => {
                let (a, b) = (inputs[0], inputs[1]);
                vec![grad.matmul(&b.transpose()?)?, a.transpose()?.matmul(grad)?]
            }
            Self::Dot { .. } => {
                let (a, b) = (inputs[0], inputs[1]);
                vec![b.mul(grad)?, a.mul(grad)?]
            }
            Self::Neg { .. } => vec![grad.neg()?],
            Self::Exp { .. } => vec![grad.mul(output)?],
            Self::Clamp { min, .. } => vec![grad.mul(&inputs[0].gt_mask(*min)?)?],
            Self::Sum { .. } => vec![grad.broadcast_to(inputs[0].shape())?],
            Self::Mean { .. } => {
                let input = inputs[0];
                vec![grad.broadcast_to(input.shape())?.scale(1.0 / input.size() as f64)?]
            }
            Self::BroadcastTo { .. } => vec![grad.sum_to_shape(inputs[0].shape())?],
            Self::Reshape { .. } => vec![grad.reshape(inputs[0].shape())?],
            Self::Transpose { .. } => vec![grad.transpose()?],
            Self::Softmax { dim, .. } => {
                // s * (g - sum(g * s))
                let dot = grad.mul(output)?.sum(*dim, true)?;
                vec![output.mul(&grad.sub(&dot)?)?]
            }
            Self::LogSoftmax { dim, .. } => {
                // g - softmax * sum(g)
                let total = grad.sum(*dim, true)?;
                vec![grad.sub(&output.exp()?.mul(&total)?)?]
            }
            Self::NllLoss { targets, .. } => vec![inputs[0].nll_loss_grad(targets, grad.item()?)?],
            Self::CrossEntropy { targets, .. } => {
                // g * (softmax - onehot) / rows
                let logits = inputs[0];
                let rows = if logits.ndim() == 1 { 1 } else { logits.shape()[0] };
                let g = grad.item()?;
                let probs = logits.softmax(-1)?.scale(g / rows as f64)?;
                vec![probs.add(&logits.nll_loss_grad(targets, g)?)?]
            }
        };
        Ok(grads)
    }
}
