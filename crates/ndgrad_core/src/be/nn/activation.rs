use crate::{be::alloc_with, buffer::Buffer};
use ndgrad_cpu::nn::activation::softmax::*;

macro_rules! declare_softmax_op {
    ($name:ident) => {
        paste::paste! {
            pub fn $name(pre: usize, dim: usize, post: usize, input: &Buffer) -> Buffer {
                let len = pre * dim * post;
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

declare_softmax_op!(softmax);
declare_softmax_op!(log_softmax);
