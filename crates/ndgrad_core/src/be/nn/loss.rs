use crate::{be::alloc_with, buffer::Buffer, scalar::Scalar};
use half::{bf16, f16};
use ndgrad_cpu::nn::loss::*;

/// Negative mean of the target log-probabilities. Targets must already be
/// checked against `classes`.
pub fn nll(rows: usize, classes: usize, input: &Buffer, targets: &[usize]) -> Scalar {
    match input {
        Buffer::BF16(x) => Scalar::BF16(nll_bf16(rows, classes, x, targets)),
        Buffer::F16(x) => Scalar::F16(nll_f16(rows, classes, x, targets)),
        Buffer::F32(x) => Scalar::F32(nll_f32(rows, classes, x, targets)),
        Buffer::F64(x) => Scalar::F64(nll_f64(rows, classes, x, targets)),
    }
}

pub fn nll_backward(rows: usize, classes: usize, targets: &[usize], scale: Scalar, like: &Buffer) -> Buffer {
    let len = rows * classes;
    let s = scale.as_f64();
    match like {
        Buffer::BF16(_) => {
            Buffer::BF16(alloc_with(len, |out| nll_backward_bf16(rows, classes, targets, bf16::from_f64(s), out)))
        }
        Buffer::F16(_) => {
            Buffer::F16(alloc_with(len, |out| nll_backward_f16(rows, classes, targets, f16::from_f64(s), out)))
        }
        Buffer::F32(_) => Buffer::F32(alloc_with(len, |out| nll_backward_f32(rows, classes, targets, s as f32, out))),
        Buffer::F64(_) => Buffer::F64(alloc_with(len, |out| nll_backward_f64(rows, classes, targets, s, out))),
    }
}
