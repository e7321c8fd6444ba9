use crate::error::{Error, Result};

/// Shape and row-major strides of a contiguous tensor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl Layout {
    pub fn from_shape(shape: &[usize]) -> Self {
        Self {
            shape: shape.to_vec(),
            strides: Self::compute_strides(shape),
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }
    pub fn size_dim(&self, dim: usize) -> Option<usize> {
        self.shape.get(dim).copied()
    }
    pub fn size(&self) -> usize {
        Self::compute_size(&self.shape)
    }
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Resolves a possibly negative axis against this layout's rank.
    pub fn resolve_dim(&self, dim: isize) -> Result<usize> {
        Self::resolve_dim_for(dim, self.ndim())
    }

    /// Splits the shape around `dim` into `(pre, dim, post)` element counts.
    pub fn split_at_dim(&self, dim: usize) -> (usize, usize, usize) {
        let pre = self.shape[..dim].iter().product();
        let post = self.shape[dim + 1..].iter().product();
        (pre, self.shape[dim], post)
    }

    // helper

    pub fn compute_strides(shape: &[usize]) -> Vec<usize> {
        if shape.is_empty() {
            return vec![];
        }

        let mut strides = vec![1; shape.len()];
        for i in (0..shape.len() - 1).rev() {
            strides[i] = strides[i + 1] * shape[i + 1];
        }
        strides
    }

    pub fn compute_size(shape: &[usize]) -> usize {
        shape.iter().product()
    }

    pub fn resolve_dim_for(dim: isize, ndim: usize) -> Result<usize> {
        let resolved = if dim < 0 { dim + ndim as isize } else { dim };
        if resolved < 0 || resolved as usize >= ndim {
            return Err(Error::DimensionOutOfBounds { dim, ndim });
        }
        Ok(resolved as usize)
    }

    /// Left-pads `shape` with ones up to `ndim`.
    pub fn pad_shape(shape: &[usize], ndim: usize) -> Vec<usize> {
        let mut padded = vec![1; ndim.saturating_sub(shape.len())];
        padded.extend_from_slice(shape);
        padded
    }

    /// The shape both operands broadcast to, aligning trailing dimensions.
    pub fn broadcast_shape(op: &'static str, lhs: &[usize], rhs: &[usize]) -> Result<Vec<usize>> {
        let ndim = lhs.len().max(rhs.len());
        let l = Self::pad_shape(lhs, ndim);
        let r = Self::pad_shape(rhs, ndim);

        l.iter()
            .zip(r.iter())
            .map(|(&a, &b)| match (a, b) {
                _ if a == b => Ok(a),
                (1, _) => Ok(b),
                (_, 1) => Ok(a),
                _ => Err(Error::incompatible(op, lhs, rhs)),
            })
            .collect()
    }

    /// Strides for reading `shape` as if it had shape `target`, zero on every
    /// stretched or prepended axis. Fails when `shape` cannot broadcast to `target`.
    pub fn broadcast_strides(shape: &[usize], target: &[usize]) -> Result<Vec<usize>> {
        if shape.len() > target.len() {
            return Err(Error::incompatible("broadcast_to", shape, target));
        }
        let padded = Self::pad_shape(shape, target.len());
        let strides = Self::compute_strides(&padded);

        padded
            .iter()
            .zip(target.iter())
            .zip(strides)
            .map(|((&s, &t), stride)| {
                if s == t {
                    Ok(if s == 1 { 0 } else { stride })
                } else if s == 1 {
                    Ok(0)
                } else {
                    Err(Error::incompatible("broadcast_to", shape, target))
                }
            })
            .collect()
    }
}
