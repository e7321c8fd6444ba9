mod utils;

use ndgrad_core::{
    config::TensorConfig,
    dtype::DType,
    error::{ErrorCategory, Result},
};
use ndgrad_tensor::Tensor;
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn new_infers_shape_and_dtype() -> Result<()> {
    let x = Tensor::new(vec![vec![1.0f64, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
    assert_eq!(x.shape(), &[2, 3]);
    assert_eq!(x.dtype(), DType::F64);
    assert_eq!(x.strides(), &[3, 1]);

    let s = Tensor::new(2.5f32)?;
    assert_eq!(s.ndim(), 0);
    assert_eq!(s.item()?, 2.5);
    Ok(())
}

#[test]
fn ragged_input_is_a_shape_error() {
    let err = Tensor::new(vec![vec![1.0f32, 2.0], vec![3.0]]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Shape);
}

#[test]
fn new_with_config_converts() -> Result<()> {
    let x = Tensor::new_with_config(vec![1.0f32, 2.0], TensorConfig::from(DType::F16))?;
    assert_eq!(x.dtype(), DType::F16);
    assert_eq!(x.to_flatten_vec::<f32>()?, vec![1.0, 2.0]);
    Ok(())
}

#[test]
fn from_vec_checks_size() -> Result<()> {
    let x = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], &[2, 2], TensorConfig::default())?;
    assert_eq!(x.get(&[1, 0])?, 3.0);

    let err = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[2, 2], TensorConfig::default()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Shape);
    Ok(())
}

#[test]
fn filled_constructors() -> Result<()> {
    let config = TensorConfig::default().with_dtype(DType::F64);
    assert_eq!(Tensor::zeros(&[2, 2], config).to_flatten_vec::<f64>()?, vec![0.0; 4]);
    assert_eq!(Tensor::ones(&[3], config).to_flatten_vec::<f64>()?, vec![1.0; 3]);
    assert_eq!(Tensor::full(&[2], 7.0, config).to_flatten_vec::<f64>()?, vec![7.0; 2]);

    let like = Tensor::ones_like(&Tensor::zeros(&[1, 3], config));
    assert_eq!(like.shape(), &[1, 3]);
    assert_eq!(like.dtype(), DType::F64);
    assert_eq!(Tensor::zeros_like(&like).to_flatten_vec::<f32>()?, vec![0.0; 3]);
    Ok(())
}

#[test]
fn arange_counts() -> Result<()> {
    let config = TensorConfig::default();
    assert_eq!(Tensor::arange(0.0, 5.0, 1.0, config)?.to_flatten_vec::<f32>()?, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(Tensor::arange(1.0, 0.0, -0.5, config)?.to_flatten_vec::<f32>()?, vec![1.0, 0.5]);
    assert_eq!(Tensor::arange(3.0, 3.0, 1.0, config)?.shape(), &[0]);
    assert!(Tensor::arange(0.0, 1.0, 0.0, config).is_err());
    Ok(())
}

#[test]
fn random_tensors_are_seeded() -> Result<()> {
    let config = TensorConfig::default().with_dtype(DType::F64);
    let a = Tensor::randn(&[4, 4], 0.0, 1.0, config, &mut StdRng::seed_from_u64(7))?;
    let b = Tensor::randn(&[4, 4], 0.0, 1.0, config, &mut StdRng::seed_from_u64(7))?;
    assert_eq!(a, b);

    let u = Tensor::rand_uniform(&[64], -0.5, 0.5, config, &mut StdRng::seed_from_u64(1))?;
    assert!(u.to_flatten_vec::<f64>()?.iter().all(|x| (-0.5..0.5).contains(x)));

    assert!(Tensor::rand_uniform(&[1], 1.0, 1.0, config, &mut StdRng::seed_from_u64(1)).is_err());
    assert!(Tensor::randn(&[1], 0.0, -1.0, config, &mut StdRng::seed_from_u64(1)).is_err());
    Ok(())
}

#[test]
fn element_access() -> Result<()> {
    let x = Tensor::new(vec![vec![1.0f32, 2.0], vec![3.0, 4.0]])?;
    assert_eq!(x.get(&[0, 1])?, 2.0);
    assert_eq!(x.get(&[2, 0]).unwrap_err().category(), ErrorCategory::Index);
    assert_eq!(x.get(&[0]).unwrap_err().category(), ErrorCategory::Shape);
    assert!(x.item().is_err());
    assert_eq!(x.to_vec2::<f32>()?, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    Ok(())
}

#[test]
fn clones_share_storage_and_compare_equal() -> Result<()> {
    let x = Tensor::new(vec![1.0f32, 2.0])?;
    let y = x.clone();
    assert!(x.shares_storage(&y));
    assert_eq!(x, y);
    assert_ne!(x, x.reshape(&[2, 1])?);
    assert_ne!(x, x.to_dtype(DType::F64)?);
    Ok(())
}
