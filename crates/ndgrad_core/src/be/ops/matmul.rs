use crate::{
    be::alloc_with,
    buffer::Buffer,
    error::{Error, Result},
};
use ndgrad_cpu::ops::matmul::*;

/// `metadata` is `[batch, m, k, n, a_batch_stride, b_batch_stride]`.
pub fn matmul(metadata: &[usize], a: &Buffer, b: &Buffer) -> Result<Buffer> {
    let len = metadata[0] * metadata[1] * metadata[3];
    let out = match (a, b) {
        (Buffer::BF16(a), Buffer::BF16(b)) => Buffer::BF16(alloc_with(len, |out| matmul_bf16(metadata, a, b, out))),
        (Buffer::F16(a), Buffer::F16(b)) => Buffer::F16(alloc_with(len, |out| matmul_f16(metadata, a, b, out))),
        (Buffer::F32(a), Buffer::F32(b)) => Buffer::F32(alloc_with(len, |out| matmul_f32(metadata, a, b, out))),
        (Buffer::F64(a), Buffer::F64(b)) => Buffer::F64(alloc_with(len, |out| matmul_f64(metadata, a, b, out))),
        _ => {
            return Err(Error::DTypeMismatch {
                expected: a.dtype(),
                got: b.dtype(),
            })
        }
    };
    Ok(out)
}
