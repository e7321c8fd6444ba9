use crate::Tensor;
use ndgrad_core::error::{Error, Result};

impl Tensor {
    /// (m, k) x (k, n) -> (m, n). Both operands must be rank 2.
    pub fn matmul(&self, rhs: &Tensor) -> Result<Tensor> {
        let (a, b) = (self.shape(), rhs.shape());
        if a.len() != 2 || b.len() != 2 || a[1] != b[0] {
            return Err(Error::incompatible("matmul", a, b));
        }
        self.matmul_kernel(rhs, [1, a[0], a[1], b[1], 0, 0], &[a[0], b[1]])
    }

    /// Batched (b, m, k) x (b, k, n) -> (b, m, n).
    ///
    /// Rank-2 operands and batches of size 1 are shared across the other
    /// operand's batch.
    pub fn bmm(&self, rhs: &Tensor) -> Result<Tensor> {
        let err = || Error::incompatible("bmm", self.shape(), rhs.shape());
        let as_batched = |shape: &[usize]| match *shape {
            [m, k] => Some((1, m, k)),
            [b, m, k] => Some((b, m, k)),
            _ => None,
        };

        let (ba, m, k) = as_batched(self.shape()).ok_or_else(err)?;
        let (bb, kb, n) = as_batched(rhs.shape()).ok_or_else(err)?;
        if k != kb || (ba != bb && ba != 1 && bb != 1) {
            return Err(err());
        }

        let batch = ba.max(bb);
        let a_bs = if ba == 1 { 0 } else { m * k };
        let b_bs = if bb == 1 { 0 } else { k * n };
        self.matmul_kernel(rhs, [batch, m, k, n, a_bs, b_bs], &[batch, m, n])
    }

    /// Inner product of two rank-1 tensors of equal length, as a rank-0 tensor.
    pub fn dot(&self, rhs: &Tensor) -> Result<Tensor> {
        if self.ndim() != 1 || rhs.ndim() != 1 || self.size() != rhs.size() {
            return Err(Error::incompatible("dot", self.shape(), rhs.shape()));
        }
        self.mul(rhs)?.sum_all()
    }

    fn matmul_kernel(&self, rhs: &Tensor, metadata: [usize; 6], out_shape: &[usize]) -> Result<Tensor> {
        let buffer = ndgrad_core::be::ops::matmul::matmul(&metadata, self.buffer(), rhs.buffer())?;
        Ok(Tensor::from_parts(buffer, out_shape))
    }
}
