use crate::Tensor;
use ndgrad_core::{be::nn::activation, buffer::Buffer, error::Result};

impl Tensor {
    /// Numerically stable softmax along `dim`.
    pub fn softmax(&self, dim: isize) -> Result<Tensor> {
        self.along_dim(dim, activation::softmax)
    }

    /// `x - logsumexp(x)` along `dim`, computed with the max subtracted first.
    pub fn log_softmax(&self, dim: isize) -> Result<Tensor> {
        self.along_dim(dim, activation::log_softmax)
    }

    fn along_dim(&self, dim: isize, kernel: fn(usize, usize, usize, &Buffer) -> Buffer) -> Result<Tensor> {
        let dim = self.layout().resolve_dim(dim)?;
        let (pre, size, post) = self.layout().split_at_dim(dim);
        Ok(Tensor::from_parts(kernel(pre, size, post, self.buffer()), self.shape()))
    }
}
