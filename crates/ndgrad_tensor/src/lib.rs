pub mod adapter;
mod creation;
mod display;
pub(crate) mod ops;
pub mod utils;
mod vec;

use ndgrad_core::{buffer::Buffer, config::TensorConfig, device::Device, dtype::DType, layout::Layout};
use std::sync::Arc;

/// A dense, row-major, immutable n-dimensional array.
///
/// Every operation returns a new tensor. Clones share storage.
#[derive(Clone)]
pub struct Tensor {
    buffer: Arc<Buffer>,
    layout: Layout,
    config: TensorConfig,
}

impl Tensor {
    /// Wraps `buffer` with `shape`. The caller guarantees the element counts agree.
    pub(crate) fn from_parts(buffer: Buffer, shape: &[usize]) -> Self {
        debug_assert_eq!(buffer.len(), Layout::compute_size(shape));
        let config = TensorConfig::new(buffer.dtype(), buffer.device());
        Self {
            buffer: Arc::new(buffer),
            layout: Layout::from_shape(shape),
            config,
        }
    }

    /// Same storage, new shape. Sizes must match.
    pub(crate) fn with_shape(&self, shape: &[usize]) -> Self {
        Self {
            buffer: Arc::clone(&self.buffer),
            layout: Layout::from_shape(shape),
            config: self.config,
        }
    }

    // data

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Whether both tensors read from the same storage.
    pub fn shares_storage(&self, other: &Tensor) -> bool {
        Arc::ptr_eq(&self.buffer, &other.buffer)
    }

    // metadata

    pub fn config(&self) -> TensorConfig {
        self.config
    }
    pub fn device(&self) -> Device {
        self.config.device
    }
    pub fn dtype(&self) -> DType {
        self.config.dtype
    }
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }
    pub fn strides(&self) -> &[usize] {
        self.layout.strides()
    }
    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }
    pub fn size(&self) -> usize {
        self.layout.size()
    }
    pub fn size_dim(&self, dim: usize) -> Option<usize> {
        self.layout.size_dim(dim)
    }
}

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.buffer == other.buffer
    }
}
