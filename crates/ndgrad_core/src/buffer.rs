use crate::{device::Device, dtype::DType, scalar::Scalar};
use half::{bf16, f16};
use ndgrad_cpu::Float;

/// Owned, typed element storage on the CPU.
#[derive(Debug, Clone, PartialEq)]
pub enum Buffer {
    BF16(Vec<bf16>),
    F16(Vec<f16>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

/// Applies `$body` to the inner `Vec` of any variant, binding it as `$data`.
#[macro_export]
macro_rules! map_buffer {
    ($buffer:expr, $data:ident => $body:expr) => {
        match $buffer {
            $crate::buffer::Buffer::BF16($data) => $body,
            $crate::buffer::Buffer::F16($data) => $body,
            $crate::buffer::Buffer::F32($data) => $body,
            $crate::buffer::Buffer::F64($data) => $body,
        }
    };
}

impl Buffer {
    pub fn zeros(len: usize, dtype: DType) -> Self {
        match dtype {
            DType::BF16 => Self::BF16(vec![bf16::ZERO; len]),
            DType::F16 => Self::F16(vec![f16::ZERO; len]),
            DType::F32 => Self::F32(vec![0.0; len]),
            DType::F64 => Self::F64(vec![0.0; len]),
        }
    }

    pub fn from_f64_slice(data: &[f64], dtype: DType) -> Self {
        match dtype {
            DType::BF16 => Self::BF16(data.iter().map(|&x| bf16::from_f64(x)).collect()),
            DType::F16 => Self::F16(data.iter().map(|&x| f16::from_f64(x)).collect()),
            DType::F32 => Self::F32(data.iter().map(|&x| x as f32).collect()),
            DType::F64 => Self::F64(data.to_vec()),
        }
    }

    /// A one-element buffer holding `scalar` in its own dtype.
    pub fn from_scalar(scalar: Scalar) -> Self {
        match scalar {
            Scalar::BF16(x) => Self::BF16(vec![x]),
            Scalar::F16(x) => Self::F16(vec![x]),
            Scalar::F32(x) => Self::F32(vec![x]),
            Scalar::F64(x) => Self::F64(vec![x]),
        }
    }

    pub fn dtype(&self) -> DType {
        match self {
            Self::BF16(_) => DType::BF16,
            Self::F16(_) => DType::F16,
            Self::F32(_) => DType::F32,
            Self::F64(_) => DType::F64,
        }
    }

    pub fn device(&self) -> Device {
        Device::CPU
    }

    pub fn len(&self) -> usize {
        map_buffer!(self, data => data.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get_f64(&self, index: usize) -> Option<f64> {
        map_buffer!(self, data => data.get(index).map(|x| Float::to_f64(*x)))
    }

    pub fn to_f64_vec(&self) -> Vec<f64> {
        map_buffer!(self, data => data.iter().map(|x| Float::to_f64(*x)).collect())
    }

    /// Converts every element to `T`.
    pub fn to_vec<T: Float>(&self) -> Vec<T> {
        map_buffer!(self, data => data.iter().map(|x| T::from_f64(Float::to_f64(*x))).collect())
    }

    pub fn cast(&self, dtype: DType) -> Self {
        if dtype == self.dtype() {
            return self.clone();
        }
        Self::from_f64_slice(&self.to_f64_vec(), dtype)
    }
}

macro_rules! impl_from_vec {
    ($($type:ident => $variant:ident),*) => {
        $(
            impl From<Vec<$type>> for Buffer {
                fn from(data: Vec<$type>) -> Self {
                    Self::$variant(data)
                }
            }
        )*
    };
}

impl_from_vec!(bf16 => BF16, f16 => F16, f32 => F32, f64 => F64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast_preserves_values() {
        let buffer = Buffer::from(vec![1.5f32, -2.0, 0.25]);
        let cast = buffer.cast(DType::F64);
        assert_eq!(cast.dtype(), DType::F64);
        assert_eq!(cast.to_f64_vec(), vec![1.5, -2.0, 0.25]);
        assert_eq!(buffer.cast(DType::BF16).to_vec::<f32>(), vec![1.5, -2.0, 0.25]);
    }

    #[test]
    fn zeros_and_lookup() {
        let buffer = Buffer::zeros(3, DType::F16);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.get_f64(2), Some(0.0));
        assert_eq!(buffer.get_f64(3), None);
    }
}
