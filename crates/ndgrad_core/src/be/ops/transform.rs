use crate::{be::alloc_with, buffer::Buffer};
use ndgrad_cpu::ops::transform::*;

/// Swaps the two trailing axes of `batch` row-major `(rows, cols)` matrices.
pub fn transpose(batch: usize, rows: usize, cols: usize, input: &Buffer) -> Buffer {
    let len = batch * rows * cols;
    match input {
        Buffer::BF16(x) => Buffer::BF16(alloc_with(len, |out| transpose_bf16(batch, rows, cols, x, out))),
        Buffer::F16(x) => Buffer::F16(alloc_with(len, |out| transpose_f16(batch, rows, cols, x, out))),
        Buffer::F32(x) => Buffer::F32(alloc_with(len, |out| transpose_f32(batch, rows, cols, x, out))),
        Buffer::F64(x) => Buffer::F64(alloc_with(len, |out| transpose_f64(batch, rows, cols, x, out))),
    }
}

/// `metadata` holds the output dims followed by the source strides.
pub fn strided_copy(num_els: usize, num_dims: usize, metadata: &[usize], input: &Buffer) -> Buffer {
    match input {
        Buffer::BF16(x) => Buffer::BF16(alloc_with(num_els, |out| strided_copy_bf16(num_els, num_dims, metadata, x, out))),
        Buffer::F16(x) => Buffer::F16(alloc_with(num_els, |out| strided_copy_f16(num_els, num_dims, metadata, x, out))),
        Buffer::F32(x) => Buffer::F32(alloc_with(num_els, |out| strided_copy_f32(num_els, num_dims, metadata, x, out))),
        Buffer::F64(x) => Buffer::F64(alloc_with(num_els, |out| strided_copy_f64(num_els, num_dims, metadata, x, out))),
    }
}
