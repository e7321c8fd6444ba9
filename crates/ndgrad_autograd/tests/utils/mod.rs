#![allow(dead_code)]

use ndgrad_core::{config::TensorConfig, dtype::DType, error::Result};
use ndgrad_tensor::{adapter::TensorAdapter, Tensor};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn setup_tensor<T: TensorAdapter>(data: T, dtype: DType) -> Result<Tensor> {
    Tensor::new_with_config(data, TensorConfig::from(dtype))
}

pub fn grad_vec(grad: Option<&Tensor>) -> Result<Vec<f32>> {
    match grad {
        Some(grad) => grad.to_flatten_vec::<f32>(),
        None => panic!("expected a gradient"),
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
