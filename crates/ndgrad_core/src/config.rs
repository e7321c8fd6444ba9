use crate::{device::Device, dtype::DType};

/// Element type and placement of a tensor, passed explicitly at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TensorConfig {
    pub dtype: DType,
    pub device: Device,
}

impl TensorConfig {
    pub fn new(dtype: DType, device: Device) -> Self {
        Self { dtype, device }
    }

    pub fn with_dtype(mut self, dtype: DType) -> Self {
        self.dtype = dtype;
        self
    }

    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }
}

impl From<DType> for TensorConfig {
    fn from(dtype: DType) -> Self {
        Self::default().with_dtype(dtype)
    }
}
