use crate::{be::alloc_with, buffer::Buffer, scalar::Scalar};
use half::{bf16, f16};
use ndgrad_cpu::ops::unary::*;

macro_rules! declare_unary_op {
    ($name:ident) => {
        paste::paste! {
            pub fn $name(input: &Buffer) -> Buffer {
                match input {
                    Buffer::BF16(x) => Buffer::BF16(alloc_with(x.len(), |out| [<$name _bf16>](x, out))),
                    Buffer::F16(x) => Buffer::F16(alloc_with(x.len(), |out| [<$name _f16>](x, out))),
                    Buffer::F32(x) => Buffer::F32(alloc_with(x.len(), |out| [<$name _f32>](x, out))),
                    Buffer::F64(x) => Buffer::F64(alloc_with(x.len(), |out| [<$name _f64>](x, out))),
                }
            }
        }
    };
}

// The scalar is converted to the buffer's element type.
macro_rules! declare_unary_scalar_op {
    ($name:ident) => {
        paste::paste! {
            pub fn $name(input: &Buffer, scalar: Scalar) -> Buffer {
                let s = scalar.as_f64();
                match input {
                    Buffer::BF16(x) => {
                        Buffer::BF16(alloc_with(x.len(), |out| [<$name _bf16>](x, bf16::from_f64(s), out)))
                    }
                    Buffer::F16(x) => {
                        Buffer::F16(alloc_with(x.len(), |out| [<$name _f16>](x, f16::from_f64(s), out)))
                    }
                    Buffer::F32(x) => Buffer::F32(alloc_with(x.len(), |out| [<$name _f32>](x, s as f32, out))),
                    Buffer::F64(x) => Buffer::F64(alloc_with(x.len(), |out| [<$name _f64>](x, s, out))),
                }
            }
        }
    };
}

declare_unary_op!(neg);
declare_unary_op!(exp);
declare_unary_op!(ln);
declare_unary_op!(recip);

declare_unary_scalar_op!(add_scalar);
declare_unary_scalar_op!(mul_scalar);
declare_unary_scalar_op!(clamp_min);
declare_unary_scalar_op!(clamp_max);
declare_unary_scalar_op!(gt_mask);
