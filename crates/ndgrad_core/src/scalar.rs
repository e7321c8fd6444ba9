use crate::dtype::DType;
use half::{bf16, f16};

/// A single value tagged with its element type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    BF16(bf16),
    F16(f16),
    F32(f32),
    F64(f64),
}

impl Scalar {
    pub fn new(value: f64, dtype: DType) -> Self {
        match dtype {
            DType::BF16 => Self::BF16(bf16::from_f64(value)),
            DType::F16 => Self::F16(f16::from_f64(value)),
            DType::F32 => Self::F32(value as f32),
            DType::F64 => Self::F64(value),
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

    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::BF16(x) => x.to_f64(),
            Self::F16(x) => x.to_f64(),
            Self::F32(x) => x as f64,
            Self::F64(x) => x,
        }
    }
}

macro_rules! impl_from_scalar {
    ($($type:ident => $variant:ident),*) => {
        $(
            impl From<$type> for Scalar {
                fn from(x: $type) -> Self {
                    Self::$variant(x)
                }
            }
        )*
    };
}

impl_from_scalar!(bf16 => BF16, f16 => F16, f32 => F32, f64 => F64);

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BF16(x) => write!(f, "{}", x),
            Self::F16(x) => write!(f, "{}", x),
            Self::F32(x) => write!(f, "{}", x),
            Self::F64(x) => write!(f, "{}", x),
        }
    }
}
