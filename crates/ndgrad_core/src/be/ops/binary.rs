use crate::{
    be::alloc_with,
    buffer::Buffer,
    error::{Error, Result},
};
use ndgrad_cpu::ops::binary::*;

macro_rules! declare_binary_op {
    ($name:ident) => {
        paste::paste! {
            /// See [`ndgrad_cpu::ops::binary`] for the layout of `dims_and_strides`.
            pub fn $name(
                num_els: usize,
                num_dims: usize,
                dims_and_strides: Option<&[usize]>,
                lhs: &Buffer,
                rhs: &Buffer,
            ) -> Result<Buffer> {
                let out = match (lhs, rhs) {
                    (Buffer::BF16(l), Buffer::BF16(r)) => Buffer::BF16(alloc_with(num_els, |out| {
                        [<$name _bf16>](num_els, num_dims, dims_and_strides, l, r, out)
                    })),
                    (Buffer::F16(l), Buffer::F16(r)) => Buffer::F16(alloc_with(num_els, |out| {
                        [<$name _f16>](num_els, num_dims, dims_and_strides, l, r, out)
                    })),
                    (Buffer::F32(l), Buffer::F32(r)) => Buffer::F32(alloc_with(num_els, |out| {
                        [<$name _f32>](num_els, num_dims, dims_and_strides, l, r, out)
                    })),
                    (Buffer::F64(l), Buffer::F64(r)) => Buffer::F64(alloc_with(num_els, |out| {
                        [<$name _f64>](num_els, num_dims, dims_and_strides, l, r, out)
                    })),
                    _ => {
                        return Err(Error::DTypeMismatch {
                            expected: lhs.dtype(),
                            got: rhs.dtype(),
                        })
                    }
                };
                Ok(out)
            }
        }
    };
}

declare_binary_op!(add);
declare_binary_op!(sub);
declare_binary_op!(mul);
declare_binary_op!(div);
