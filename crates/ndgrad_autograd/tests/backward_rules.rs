mod utils;

use approx::assert_relative_eq;
use ndgrad_autograd::Graph;
use ndgrad_core::{dtype::DType, error::Result};
use utils::{grad_vec, init_logger, setup_tensor};

mod test_functions {
    use super::*;

    pub fn add_broadcast_test(dtype: DType) -> Result<()> {
        init_logger();
        let mut graph = Graph::new();
        let a = graph.leaf(setup_tensor(vec![vec![1.0f32, 2.0, 3.0], vec![4.0, 5.0, 6.0]], dtype)?, true);
        let b = graph.leaf(setup_tensor(vec![1.0f32, 1.0, 1.0], dtype)?, true);
        let c = graph.add(a, b)?;
        let z = graph.sum(c)?;
        graph.backward(z, None)?;

        assert_eq!(graph.grad(a)?.map(|g| g.shape().to_vec()), Some(vec![2, 3]));
        assert_eq!(graph.grad(b)?.map(|g| g.shape().to_vec()), Some(vec![3]));
        assert_eq!(grad_vec(graph.grad(a)?)?, vec![1.0; 6]);
        assert_eq!(grad_vec(graph.grad(b)?)?, vec![2.0; 3]);
        Ok(())
    }

    pub fn sub_broadcast_test(dtype: DType) -> Result<()> {
        let mut graph = Graph::new();
        let a = graph.leaf(setup_tensor(vec![vec![1.0f32, 2.0, 3.0], vec![4.0, 5.0, 6.0]], dtype)?, true);
        let b = graph.leaf(setup_tensor(vec![vec![1.0f32], vec![2.0]], dtype)?, true);
        let c = graph.sub(a, b)?;
        let z = graph.sum(c)?;
        graph.backward(z, None)?;

        assert_eq!(graph.grad(b)?.map(|g| g.shape().to_vec()), Some(vec![2, 1]));
        assert_eq!(grad_vec(graph.grad(a)?)?, vec![1.0; 6]);
        assert_eq!(grad_vec(graph.grad(b)?)?, vec![-3.0, -3.0]);
        Ok(())
    }

    pub fn mul_broadcast_test(dtype: DType) -> Result<()> {
        let mut graph = Graph::new();
        let a = graph.leaf(setup_tensor(vec![vec![1.0f32, 2.0], vec![3.0, 4.0]], dtype)?, true);
        let b = graph.leaf(setup_tensor(vec![5.0f32, 6.0], dtype)?, true);
        let c = graph.mul(a, b)?;
        let z = graph.sum(c)?;
        graph.backward(z, None)?;

        assert_eq!(grad_vec(graph.grad(a)?)?, vec![5.0, 6.0, 5.0, 6.0]);
        assert_eq!(grad_vec(graph.grad(b)?)?, vec![4.0, 6.0]);
        Ok(())
    }

    pub fn div_test(dtype: DType) -> Result<()> {
        let mut graph = Graph::new();
        let a = graph.leaf(setup_tensor(vec![6.0f32, 8.0], dtype)?, true);
        let b = graph.leaf(setup_tensor(vec![2.0f32, 4.0], dtype)?, true);
        let c = graph.div(a, b)?;
        let z = graph.sum(c)?;
        graph.backward(z, None)?;

        assert_eq!(grad_vec(graph.grad(a)?)?, vec![0.5, 0.25]);
        assert_eq!(grad_vec(graph.grad(b)?)?, vec![-1.5, -0.5]);
        Ok(())
    }

    pub fn matmul_test(dtype: DType) -> Result<()> {
        let mut graph = Graph::new();
        let a = graph.leaf(setup_tensor(vec![vec![1.0f32, 2.0, 3.0], vec![4.0, 5.0, 6.0]], dtype)?, true);
        let b = graph.leaf(setup_tensor(vec![vec![1.0f32, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]], dtype)?, true);
        let c = graph.matmul(a, b)?;
        let z = graph.sum(c)?;
        graph.backward(z, None)?;

        // ones(2, 2) @ b^T and a^T @ ones(2, 2)
        assert_eq!(grad_vec(graph.grad(a)?)?, vec![3.0, 7.0, 11.0, 3.0, 7.0, 11.0]);
        assert_eq!(grad_vec(graph.grad(b)?)?, vec![5.0, 5.0, 7.0, 7.0, 9.0, 9.0]);
        Ok(())
    }

    pub fn clamp_test(dtype: DType) -> Result<()> {
        let mut graph = Graph::new();
        let x = graph.leaf(setup_tensor(vec![-1.0f32, 0.0, 2.0, 0.5], dtype)?, true);
        let y = graph.clamp(x, 0.0)?;
        let z = graph.sum(y)?;
        graph.backward(z, None)?;

        assert_eq!(graph.value(y)?.to_flatten_vec::<f32>()?, vec![0.0, 0.0, 2.0, 0.5]);
        assert_eq!(grad_vec(graph.grad(x)?)?, vec![0.0, 0.0, 1.0, 1.0]);
        Ok(())
    }

    pub fn neg_test(dtype: DType) -> Result<()> {
        let mut graph = Graph::new();
        let x = graph.leaf(setup_tensor(vec![1.0f32, -2.0], dtype)?, true);
        let y = graph.neg(x)?;
        let z = graph.sum(y)?;
        graph.backward(z, None)?;
        assert_eq!(grad_vec(graph.grad(x)?)?, vec![-1.0, -1.0]);
        Ok(())
    }

    pub fn mean_test(dtype: DType) -> Result<()> {
        let mut graph = Graph::new();
        let x = graph.leaf(setup_tensor(vec![vec![1.0f32, 2.0], vec![3.0, 4.0]], dtype)?, true);
        let m = graph.mean(x)?;
        assert_eq!(graph.value(m)?.item()?, 2.5);
        graph.backward(m, None)?;
        assert_eq!(grad_vec(graph.grad(x)?)?, vec![0.25; 4]);
        Ok(())
    }

    pub fn broadcast_to_test(dtype: DType) -> Result<()> {
        let mut graph = Graph::new();
        let x = graph.leaf(setup_tensor(vec![1.0f32, 2.0, 3.0], dtype)?, true);
        let y = graph.broadcast_to(x, &[2, 3])?;
        let z = graph.sum(y)?;
        graph.backward(z, None)?;
        assert_eq!(grad_vec(graph.grad(x)?)?, vec![2.0; 3]);
        Ok(())
    }

    pub fn reshape_transpose_test(dtype: DType) -> Result<()> {
        let mut graph = Graph::new();
        let x = graph.leaf(setup_tensor(vec![vec![0.0f32; 3]; 2], dtype)?, true);
        let w = graph.constant(setup_tensor(vec![vec![1.0f32, 2.0, 3.0], vec![4.0, 5.0, 6.0]], dtype)?);
        let r = graph.reshape(x, &[3, 2])?;
        let t = graph.transpose(r)?;
        let y = graph.mul(t, w)?;
        let z = graph.sum(y)?;
        graph.backward(z, None)?;

        assert_eq!(graph.grad(x)?.map(|g| g.shape().to_vec()), Some(vec![2, 3]));
        assert_eq!(grad_vec(graph.grad(x)?)?, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        Ok(())
    }

    pub fn nll_loss_test(dtype: DType) -> Result<()> {
        let mut graph = Graph::new();
        let logp = graph.leaf(setup_tensor(vec![vec![-1.0f32, -2.0, -3.0], vec![-0.5, -1.5, -4.0]], dtype)?, true);
        let loss = graph.nll_loss(logp, &[2, 0])?;
        assert_eq!(graph.value(loss)?.item()?, 1.75);
        graph.backward(loss, None)?;
        assert_eq!(grad_vec(graph.grad(logp)?)?, vec![0.0, 0.0, -0.5, -0.5, 0.0, 0.0]);
        Ok(())
    }

    pub fn seeded_test(dtype: DType) -> Result<()> {
        let mut graph = Graph::new();
        let a = graph.leaf(setup_tensor(vec![1.0f32, 2.0], dtype)?, true);
        let two = graph.constant(setup_tensor(2.0f32, dtype)?);
        let y = graph.mul(a, two)?;
        graph.backward(y, Some(&setup_tensor(vec![1.0f32, 3.0], dtype)?))?;
        assert_eq!(grad_vec(graph.grad(a)?)?, vec![2.0, 6.0]);
        assert!(graph.grad(two)?.is_none());
        Ok(())
    }
}

test_ops!([
    add_broadcast,
    sub_broadcast,
    mul_broadcast,
    div,
    matmul,
    clamp,
    neg,
    mean,
    broadcast_to,
    reshape_transpose,
    nll_loss,
    seeded
]);

#[test]
fn softmax_gradient_of_sum_vanishes() -> Result<()> {
    let mut graph = Graph::new();
    let x = graph.leaf(setup_tensor(vec![vec![0.1f64, -0.4, 2.0], vec![1.0, 1.0, 3.0]], DType::F64)?, true);
    let s = graph.softmax(x, -1)?;
    let z = graph.sum(s)?;
    graph.backward(z, None)?;
    for g in graph.grad(x)?.map(|g| g.to_flatten_vec::<f64>()).transpose()?.unwrap_or_default() {
        assert_relative_eq!(g, 0.0, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn log_softmax_gradient_of_sum() -> Result<()> {
    let mut graph = Graph::new();
    let values = setup_tensor(vec![1.0f64, 2.0, 3.0], DType::F64)?;
    let probs = values.softmax(0)?.to_flatten_vec::<f64>()?;
    let x = graph.leaf(values, true);
    let l = graph.log_softmax(x, 0)?;
    let z = graph.sum(l)?;
    graph.backward(z, None)?;

    let grad = graph.grad(x)?.map(|g| g.to_flatten_vec::<f64>()).transpose()?.unwrap_or_default();
    for (g, p) in grad.iter().zip(probs) {
        assert_relative_eq!(*g, 1.0 - 3.0 * p, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn exp_gradient_is_its_value() -> Result<()> {
    let mut graph = Graph::new();
    let x = graph.leaf(setup_tensor(vec![0.0f64, 1.0], DType::F64)?, true);
    let y = graph.exp(x)?;
    let z = graph.sum(y)?;
    graph.backward(z, None)?;
    let grad = graph.grad(x)?.map(|g| g.to_flatten_vec::<f64>()).transpose()?.unwrap_or_default();
    assert_relative_eq!(grad[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(grad[1], std::f64::consts::E, epsilon = 1e-12);
    Ok(())
}
