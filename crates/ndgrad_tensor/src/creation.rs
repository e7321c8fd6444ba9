use crate::{adapter::TensorAdapter, Tensor};
use ndgrad_core::{
    buffer::Buffer,
    config::TensorConfig,
    cpu::Float,
    error::{Error, Result},
    layout::Layout,
};
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

impl Tensor {
    /// Builds a tensor from host data, keeping the data's own element type.
    pub fn new<T>(data: T) -> Result<Self>
    where
        T: TensorAdapter,
    {
        let config = TensorConfig::from(data.dtype());
        Self::new_with_config(data, config)
    }

    pub fn new_with_config<T>(data: T, config: TensorConfig) -> Result<Self>
    where
        T: TensorAdapter,
    {
        let shape = data.get_shape();
        let flat = data.to_flatten_vec()?;
        Self::from_vec(flat, &shape, config)
    }

    /// Builds a tensor of `shape` from row-major `data`, converted to `config.dtype`.
    pub fn from_vec<T: Float>(data: Vec<T>, shape: &[usize], config: TensorConfig) -> Result<Self> {
        let size = Layout::compute_size(shape);
        if data.len() != size {
            return Err(Error::InvalidShape(format!(
                "{} elements cannot fill shape {:?} of size {}",
                data.len(),
                shape,
                size
            )));
        }

        let values: Vec<f64> = data.into_iter().map(Float::to_f64).collect();
        Ok(Self::from_parts(Buffer::from_f64_slice(&values, config.dtype), shape))
    }

    pub fn zeros(shape: &[usize], config: TensorConfig) -> Self {
        Self::from_parts(Buffer::zeros(Layout::compute_size(shape), config.dtype), shape)
    }

    pub fn ones(shape: &[usize], config: TensorConfig) -> Self {
        Self::full(shape, 1.0, config)
    }

    pub fn full(shape: &[usize], value: f64, config: TensorConfig) -> Self {
        let values = vec![value; Layout::compute_size(shape)];
        Self::from_parts(Buffer::from_f64_slice(&values, config.dtype), shape)
    }

    pub fn scalar(value: f64, config: TensorConfig) -> Self {
        Self::full(&[], value, config)
    }

    pub fn zeros_like(other: &Tensor) -> Self {
        Self::zeros(other.shape(), other.config())
    }

    pub fn ones_like(other: &Tensor) -> Self {
        Self::ones(other.shape(), other.config())
    }

    /// Values `start, start + step, ...` strictly before `end`, as a rank-1 tensor.
    pub fn arange(start: f64, end: f64, step: f64, config: TensorConfig) -> Result<Self> {
        if step == 0.0 || !step.is_finite() {
            return Err(Error::InvalidArgument(format!("arange step must be finite and non-zero, got {}", step)));
        }

        let count = ((end - start) / step).ceil().max(0.0) as usize;
        let values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
        Ok(Self::from_parts(Buffer::from_f64_slice(&values, config.dtype), &[count]))
    }

    /// Samples uniformly from `[low, high)`.
    pub fn rand_uniform<R: Rng + ?Sized>(shape: &[usize], low: f64, high: f64, config: TensorConfig, rng: &mut R) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(Error::InvalidArgument(format!("rand_uniform needs finite low < high, got [{}, {})", low, high)));
        }

        let dist = Uniform::new(low, high);
        let values: Vec<f64> = (0..Layout::compute_size(shape)).map(|_| dist.sample(rng)).collect();
        Ok(Self::from_parts(Buffer::from_f64_slice(&values, config.dtype), shape))
    }

    /// Samples from a normal distribution with the given mean and standard deviation.
    pub fn randn<R: Rng + ?Sized>(shape: &[usize], mean: f64, std: f64, config: TensorConfig, rng: &mut R) -> Result<Self> {
        let dist = Normal::new(mean, std).map_err(|e| Error::InvalidArgument(format!("randn: {}", e)))?;
        let values: Vec<f64> = (0..Layout::compute_size(shape)).map(|_| dist.sample(rng)).collect();
        Ok(Self::from_parts(Buffer::from_f64_slice(&values, config.dtype), shape))
    }
}
