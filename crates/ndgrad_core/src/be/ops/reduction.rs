use crate::{be::alloc_with, buffer::Buffer, scalar::Scalar};
use ndgrad_cpu::ops::reduction::*;

macro_rules! declare_dim_reduction {
    ($name:ident) => {
        paste::paste! {
            /// Reduces the middle axis of an input viewed as `(pre, dim, post)`.
            pub fn $name(pre: usize, dim: usize, post: usize, input: &Buffer) -> Buffer {
                let len = pre * post;
                match input {
                    Buffer::BF16(x) => Buffer::BF16(alloc_with(len, |out| [<$name _bf16>](pre, dim, post, x, out))),
                    Buffer::F16(x) => Buffer::F16(alloc_with(len, |out| [<$name _f16>](pre, dim, post, x, out))),
                    Buffer::F32(x) => Buffer::F32(alloc_with(len, |out| [<$name _f32>](pre, dim, post, x, out))),
                    Buffer::F64(x) => Buffer::F64(alloc_with(len, |out| [<$name _f64>](pre, dim, post, x, out))),
                }
            }
        }
    };
}

declare_dim_reduction!(sum_dim);
declare_dim_reduction!(max_dim);

pub fn sum_all(input: &Buffer) -> Scalar {
    match input {
        Buffer::BF16(x) => Scalar::BF16(sum_all_bf16(x)),
        Buffer::F16(x) => Scalar::F16(sum_all_f16(x)),
        Buffer::F32(x) => Scalar::F32(sum_all_f32(x)),
        Buffer::F64(x) => Scalar::F64(sum_all_f64(x)),
    }
}

/// `metadata` holds the input dims followed by the output strides, zero on
/// every collapsed axis.
pub fn sum_to_shape(out_len: usize, num_dims: usize, metadata: &[usize], input: &Buffer) -> Buffer {
    match input {
        Buffer::BF16(x) => Buffer::BF16(alloc_with(out_len, |out| sum_to_shape_bf16(num_dims, metadata, x, out))),
        Buffer::F16(x) => Buffer::F16(alloc_with(out_len, |out| sum_to_shape_f16(num_dims, metadata, x, out))),
        Buffer::F32(x) => Buffer::F32(alloc_with(out_len, |out| sum_to_shape_f32(num_dims, metadata, x, out))),
        Buffer::F64(x) => Buffer::F64(alloc_with(out_len, |out| sum_to_shape_f64(num_dims, metadata, x, out))),
    }
}
