use crate::{utils::broadcast::prepare_reduce_metadata, Tensor};
use ndgrad_core::{
    be::ops::reduction,
    buffer::Buffer,
    error::{Error, Result},
    layout::Layout,
    scalar::Scalar,
};

impl Tensor {
    /// Sums along `dim`, dropping it unless `keep_dim`.
    pub fn sum(&self, dim: isize, keep_dim: bool) -> Result<Tensor> {
        self.reduce_dim(dim, keep_dim, reduction::sum_dim)
    }

    /// Maximum along `dim`, dropping it unless `keep_dim`.
    pub fn max(&self, dim: isize, keep_dim: bool) -> Result<Tensor> {
        self.reduce_dim(dim, keep_dim, reduction::max_dim)
    }

    /// Sum of every element as a rank-0 tensor.
    pub fn sum_all(&self) -> Result<Tensor> {
        let total = reduction::sum_all(self.buffer());
        Ok(Tensor::from_parts(Buffer::from_scalar(total), &[]))
    }

    pub fn mean_all(&self) -> Result<Tensor> {
        if self.size() == 0 {
            return Err(Error::InvalidShape("mean of an empty tensor".into()));
        }
        self.sum_all()?.scale(1.0 / self.size() as f64)
    }

    pub fn max_all(&self) -> Result<Tensor> {
        if self.size() == 0 {
            return Err(Error::InvalidShape("max of an empty tensor".into()));
        }
        let buffer = reduction::max_dim(1, self.size(), 1, self.buffer());
        Ok(Tensor::from_parts(buffer, &[]))
    }

    /// Sums over the axes along which `shape` would be broadcast to this
    /// tensor's shape. The inverse of [`Tensor::broadcast_to`].
    pub fn sum_to_shape(&self, shape: &[usize]) -> Result<Tensor> {
        if self.shape() == shape {
            return Ok(self.clone());
        }

        let metadata = prepare_reduce_metadata(self.shape(), shape)
            .map_err(|_| Error::incompatible("sum_to_shape", self.shape(), shape))?;
        let buffer = reduction::sum_to_shape(Layout::compute_size(shape), self.ndim(), &metadata, self.buffer());
        Ok(Tensor::from_parts(buffer, shape))
    }

    fn reduce_dim(&self, dim: isize, keep_dim: bool, kernel: fn(usize, usize, usize, &Buffer) -> Buffer) -> Result<Tensor> {
        let dim = self.layout().resolve_dim(dim)?;
        let (pre, size, post) = self.layout().split_at_dim(dim);
        let buffer = kernel(pre, size, post, self.buffer());

        let mut shape = self.shape().to_vec();
        if keep_dim {
            shape[dim] = 1;
        } else {
            shape.remove(dim);
        }
        Ok(Tensor::from_parts(buffer, &shape))
    }

    pub(crate) fn scalar_of(&self, value: f64) -> Scalar {
        Scalar::new(value, self.dtype())
    }
}
