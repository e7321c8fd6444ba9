use crate::{utils::broadcast::prepare_dims_and_strides, Tensor};
use ndgrad_core::{
    buffer::Buffer,
    error::{Error, Result},
    layout::Layout,
};

type BinaryKernel = fn(usize, usize, Option<&[usize]>, &Buffer, &Buffer) -> Result<Buffer>;

impl Tensor {
    pub fn add(&self, rhs: &Tensor) -> Result<Tensor> {
        self.binary_op("add", rhs, ndgrad_core::be::ops::binary::add)
    }

    pub fn sub(&self, rhs: &Tensor) -> Result<Tensor> {
        self.binary_op("sub", rhs, ndgrad_core::be::ops::binary::sub)
    }

    pub fn mul(&self, rhs: &Tensor) -> Result<Tensor> {
        self.binary_op("mul", rhs, ndgrad_core::be::ops::binary::mul)
    }

    pub fn div(&self, rhs: &Tensor) -> Result<Tensor> {
        self.binary_op("div", rhs, ndgrad_core::be::ops::binary::div)
    }

    fn binary_op(&self, op: &'static str, rhs: &Tensor, kernel: BinaryKernel) -> Result<Tensor> {
        if self.dtype() != rhs.dtype() {
            return Err(Error::DTypeMismatch {
                expected: self.dtype(),
                got: rhs.dtype(),
            });
        }

        let out_shape = Layout::broadcast_shape(op, self.shape(), rhs.shape())?;
        let dims_and_strides = prepare_dims_and_strides(self.shape(), rhs.shape(), &out_shape)?;
        let buffer = kernel(
            Layout::compute_size(&out_shape),
            out_shape.len(),
            dims_and_strides.as_deref(),
            self.buffer(),
            rhs.buffer(),
        )?;

        Ok(Tensor::from_parts(buffer, &out_shape))
    }
}
