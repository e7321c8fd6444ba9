use crate::Tensor;
use ndgrad_core::{error::Result, layout::Layout};

impl Tensor {
    /// Expands size-1 dims and prepends missing leading dims to reach `shape`.
    pub fn broadcast_to(&self, shape: &[usize]) -> Result<Tensor> {
        if self.shape() == shape {
            return Ok(self.clone());
        }

        let strides = Layout::broadcast_strides(self.shape(), shape)?;
        let mut metadata = shape.to_vec();
        metadata.extend(strides);

        let size = Layout::compute_size(shape);
        let buffer = ndgrad_core::be::ops::transform::strided_copy(size, shape.len(), &metadata, self.buffer());
        Ok(Tensor::from_parts(buffer, shape))
    }
}
