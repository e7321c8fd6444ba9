use crate::Tensor;
use ndgrad_core::{
    dtype::DType,
    error::{Error, Result},
    layout::Layout,
};

impl Tensor {
    /// Same elements, new shape. Shares storage with `self`.
    pub fn reshape(&self, shape: &[usize]) -> Result<Tensor> {
        let size = Layout::compute_size(shape);
        if size != self.size() {
            return Err(Error::InvalidShape(format!(
                "cannot reshape {:?} (size {}) to {:?} (size {})",
                self.shape(),
                self.size(),
                shape,
                size
            )));
        }
        Ok(self.with_shape(shape))
    }

    /// Swaps the last two dimensions. Rank 0 and 1 tensors are returned unchanged.
    pub fn transpose(&self) -> Result<Tensor> {
        let ndim = self.ndim();
        if ndim < 2 {
            return Ok(self.clone());
        }

        let (rows, cols) = (self.shape()[ndim - 2], self.shape()[ndim - 1]);
        let batch = Layout::compute_size(&self.shape()[..ndim - 2]);
        let buffer = ndgrad_core::be::ops::transform::transpose(batch, rows, cols, self.buffer());

        let mut shape = self.shape().to_vec();
        shape.swap(ndim - 2, ndim - 1);
        Ok(Tensor::from_parts(buffer, &shape))
    }

    /// Removes `dim`, which must have size 1.
    pub fn squeeze(&self, dim: isize) -> Result<Tensor> {
        let dim = self.layout().resolve_dim(dim)?;
        if self.shape()[dim] != 1 {
            return Err(Error::InvalidShape(format!(
                "cannot squeeze dimension {} of size {} in {:?}",
                dim,
                self.shape()[dim],
                self.shape()
            )));
        }
        let mut shape = self.shape().to_vec();
        shape.remove(dim);
        Ok(self.with_shape(&shape))
    }

    /// Inserts a size-1 dimension at `dim`, which may equal the current rank.
    pub fn unsqueeze(&self, dim: isize) -> Result<Tensor> {
        let dim = Layout::resolve_dim_for(dim, self.ndim() + 1)?;
        let mut shape = self.shape().to_vec();
        shape.insert(dim, 1);
        Ok(self.with_shape(&shape))
    }

    pub fn to_dtype(&self, dtype: DType) -> Result<Tensor> {
        if dtype == self.dtype() {
            return Ok(self.clone());
        }
        Ok(Tensor::from_parts(self.buffer().cast(dtype), self.shape()))
    }
}
