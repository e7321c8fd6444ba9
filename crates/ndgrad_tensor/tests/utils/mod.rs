#![allow(dead_code)]

use ndgrad_core::{config::TensorConfig, dtype::DType, error::Result};
use ndgrad_tensor::{adapter::TensorAdapter, Tensor};

pub fn setup_tensor<T: TensorAdapter>(data: T, dtype: DType) -> Result<Tensor> {
    Tensor::new_with_config(data, TensorConfig::from(dtype))
}

/// Absolute tolerance for values of magnitude around one.
pub fn tolerance(dtype: DType) -> f32 {
    match dtype {
        DType::BF16 => 2e-2,
        DType::F16 => 2e-3,
        DType::F32 => 1e-5,
        DType::F64 => 1e-10,
    }
}

pub fn assert_close(actual: &[f32], expected: &[f32], dtype: DType) {
    assert_eq!(actual.len(), expected.len(), "length mismatch: {:?} vs {:?}", actual, expected);
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            (a - e).abs() <= tolerance(dtype) * e.abs().max(1.0),
            "{:?} != {:?} for {}",
            actual,
            expected,
            dtype
        );
    }
}

#[macro_export]
macro_rules! test_ops {
    ([$($op:ident),*]) => {
        $(
            mod $op {
                use super::*;
                use paste::paste;

                paste! {
                    #[test]
                    fn bf16() -> Result<()> {
                        test_functions::[<$op _test>](DType::BF16)
                    }

                    #[test]
                    fn f16() -> Result<()> {
                        test_functions::[<$op _test>](DType::F16)
                    }

                    #[test]
                    fn f32() -> Result<()> {
                        test_functions::[<$op _test>](DType::F32)
                    }

                    #[test]
                    fn f64() -> Result<()> {
                        test_functions::[<$op _test>](DType::F64)
                    }
                }
            }
        )*
    };
}
