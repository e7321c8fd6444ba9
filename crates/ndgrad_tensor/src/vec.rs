use crate::Tensor;
use ndgrad_core::{
    cpu::Float,
    error::{Error, Result},
};

impl Tensor {
    /// All elements in row-major order, converted to `T`.
    pub fn to_flatten_vec<T: Float>(&self) -> Result<Vec<T>> {
        Ok(self.buffer().to_vec())
    }

    pub fn to_vec2<T: Float>(&self) -> Result<Vec<Vec<T>>> {
        if self.ndim() != 2 {
            return Err(Error::InvalidShape(format!("to_vec2 needs a rank-2 tensor, got {:?}", self.shape())));
        }
        let cols = self.shape()[1];
        let flat = self.to_flatten_vec::<T>()?;
        if cols == 0 {
            return Ok(vec![Vec::new(); self.shape()[0]]);
        }
        Ok(flat.chunks(cols).map(|row| row.to_vec()).collect())
    }

    /// The value of a single-element tensor.
    pub fn item(&self) -> Result<f64> {
        if self.size() != 1 {
            return Err(Error::InvalidShape(format!(
                "item() needs a single-element tensor, got shape {:?}",
                self.shape()
            )));
        }
        self.get_flat(0)
    }

    /// The element at `indices`, one index per dimension.
    pub fn get(&self, indices: &[usize]) -> Result<f64> {
        if indices.len() != self.ndim() {
            return Err(Error::InvalidShape(format!(
                "{} indices given for a tensor of rank {}",
                indices.len(),
                self.ndim()
            )));
        }

        let mut offset = 0;
        for ((&index, &size), &stride) in indices.iter().zip(self.shape()).zip(self.strides()) {
            if index >= size {
                return Err(Error::IndexOutOfBounds { index, size });
            }
            offset += index * stride;
        }
        self.get_flat(offset)
    }

    fn get_flat(&self, offset: usize) -> Result<f64> {
        self.buffer().get_f64(offset).ok_or(Error::IndexOutOfBounds {
            index: offset,
            size: self.size(),
        })
    }
}
