//! Finite-difference verification of backward rules.

use crate::{node::NodeId, Graph};
use ndgrad_core::error::{Error, Result};
use ndgrad_tensor::Tensor;

/// Largest disagreement between analytic and numeric gradients.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GradCheckReport {
    pub max_abs_error: f64,
    /// `|analytic - numeric| / max(|analytic|, |numeric|, 1)`.
    pub max_rel_error: f64,
    pub checked: usize,
}

impl GradCheckReport {
    pub fn passes(&self, tolerance: f64) -> bool {
        self.max_rel_error <= tolerance
    }
}

/// Compares `backward` against central differences with step `eps` for every
/// element of every input.
///
/// `build` receives a fresh graph and one leaf per input and must return a
/// single-element node.
pub fn gradcheck<F>(inputs: &[Tensor], eps: f64, build: F) -> Result<GradCheckReport>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId>,
{
    if eps.is_nan() || eps <= 0.0 {
        return Err(Error::InvalidArgument(format!("gradcheck step must be positive, got {}", eps)));
    }

    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = inputs.iter().map(|t| graph.leaf(t.clone(), true)).collect();
    let out = build(&mut graph, &leaves)?;
    graph.backward(out, None)?;

    let mut report = GradCheckReport::default();
    for (i, (input, &leaf)) in inputs.iter().zip(&leaves).enumerate() {
        let analytic = match graph.grad(leaf)? {
            Some(grad) => grad.to_flatten_vec::<f64>()?,
            None => vec![0.0; input.size()],
        };
        let base = input.to_flatten_vec::<f64>()?;

        for (j, &a) in analytic.iter().enumerate() {
            let mut shifted = base.clone();
            shifted[j] = base[j] + eps;
            let plus = evaluate(inputs, i, &shifted, &build)?;
            shifted[j] = base[j] - eps;
            let minus = evaluate(inputs, i, &shifted, &build)?;
            let numeric = (plus - minus) / (2.0 * eps);

            let abs = (a - numeric).abs();
            let rel = abs / a.abs().max(numeric.abs()).max(1.0);
            report.max_abs_error = report.max_abs_error.max(abs);
            report.max_rel_error = report.max_rel_error.max(rel);
            report.checked += 1;
        }
    }

    log::debug!("gradcheck: {:?}", report);
    Ok(report)
}

/// Forward value with input `replace` swapped for `data`.
fn evaluate<F>(inputs: &[Tensor], replace: usize, data: &[f64], build: &F) -> Result<f64>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId>,
{
    let mut graph = Graph::new();
    let mut leaves = Vec::with_capacity(inputs.len());
    for (i, input) in inputs.iter().enumerate() {
        let tensor = if i == replace {
            Tensor::from_vec(data.to_vec(), input.shape(), input.config())?
        } else {
            input.clone()
        };
        leaves.push(graph.constant(tensor));
    }
    let out = build(&mut graph, &leaves)?;
    graph.value(out)?.item()
}
