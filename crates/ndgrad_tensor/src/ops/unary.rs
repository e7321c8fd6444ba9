use crate::Tensor;
use ndgrad_core::{
    be::ops::unary,
    error::{Error, Result},
};

impl Tensor {
    pub fn neg(&self) -> Result<Tensor> {
        Ok(self.map(unary::neg))
    }

    pub fn exp(&self) -> Result<Tensor> {
        Ok(self.map(unary::exp))
    }

    pub fn ln(&self) -> Result<Tensor> {
        Ok(self.map(unary::ln))
    }

    pub fn recip(&self) -> Result<Tensor> {
        Ok(self.map(unary::recip))
    }

    /// Elementwise `max(x, min)`.
    pub fn clamp(&self, min: f64) -> Result<Tensor> {
        let min = self.scalar_of(min);
        Ok(self.map(|buffer| unary::clamp_min(buffer, min)))
    }

    /// Clamps into `[min, max]`.
    pub fn clip(&self, min: f64, max: f64) -> Result<Tensor> {
        if min > max {
            return Err(Error::InvalidArgument(format!("clip bounds out of order: [{}, {}]", min, max)));
        }
        let (min, max) = (self.scalar_of(min), self.scalar_of(max));
        Ok(self.map(|buffer| unary::clamp_max(&unary::clamp_min(buffer, min), max)))
    }

    pub fn relu(&self) -> Result<Tensor> {
        self.clamp(0.0)
    }

    /// 1 where `x > threshold`, else 0.
    pub fn gt_mask(&self, threshold: f64) -> Result<Tensor> {
        let threshold = self.scalar_of(threshold);
        Ok(self.map(|buffer| unary::gt_mask(buffer, threshold)))
    }

    pub fn scale(&self, factor: f64) -> Result<Tensor> {
        let factor = self.scalar_of(factor);
        Ok(self.map(|buffer| unary::mul_scalar(buffer, factor)))
    }

    pub fn add_scalar(&self, value: f64) -> Result<Tensor> {
        let value = self.scalar_of(value);
        Ok(self.map(|buffer| unary::add_scalar(buffer, value)))
    }

    fn map(&self, kernel: impl FnOnce(&ndgrad_core::buffer::Buffer) -> ndgrad_core::buffer::Buffer) -> Tensor {
        Tensor::from_parts(kernel(self.buffer()), self.shape())
    }
}
