use half::{bf16, f16};
use ndgrad_core::{
    cpu::Float,
    dtype::DType,
    error::{Error, Result},
};

/// Host data that can seed a tensor: scalars and nested `Vec`s up to rank 3.
pub trait TensorAdapter: Sized {
    type Elem: Float;

    fn to_flatten_vec(self) -> Result<Vec<Self::Elem>>;
    fn get_shape(&self) -> Vec<usize>;
    fn dtype(&self) -> DType;
}

fn ragged(shape: &[usize]) -> Error {
    Error::InvalidShape(format!("ragged nested data, expected every row to match {:?}", shape))
}

macro_rules! impl_tensor_adapter {
    ($t:ty, $dtype:expr) => {
        impl TensorAdapter for $t {
            type Elem = $t;

            fn to_flatten_vec(self) -> Result<Vec<$t>> {
                Ok(vec![self])
            }
            fn get_shape(&self) -> Vec<usize> {
                vec![]
            }
            fn dtype(&self) -> DType {
                $dtype
            }
        }

        impl TensorAdapter for Vec<$t> {
            type Elem = $t;

            fn to_flatten_vec(self) -> Result<Vec<$t>> {
                Ok(self)
            }
            fn get_shape(&self) -> Vec<usize> {
                vec![self.len()]
            }
            fn dtype(&self) -> DType {
                $dtype
            }
        }

        impl TensorAdapter for Vec<Vec<$t>> {
            type Elem = $t;

            fn to_flatten_vec(self) -> Result<Vec<$t>> {
                let shape = self.get_shape();
                let mut flat = Vec::with_capacity(shape.iter().product());
                for row in self {
                    if row.len() != shape[1] {
                        return Err(ragged(&shape));
                    }
                    flat.extend(row);
                }
                Ok(flat)
            }
            fn get_shape(&self) -> Vec<usize> {
                match self.first() {
                    Some(row) => vec![self.len(), row.len()],
                    None => vec![0, 0],
                }
            }
            fn dtype(&self) -> DType {
                $dtype
            }
        }

        impl TensorAdapter for Vec<Vec<Vec<$t>>> {
            type Elem = $t;

            fn to_flatten_vec(self) -> Result<Vec<$t>> {
                let shape = self.get_shape();
                let mut flat = Vec::with_capacity(shape.iter().product());
                for matrix in self {
                    if matrix.len() != shape[1] {
                        return Err(ragged(&shape));
                    }
                    for row in matrix {
                        if row.len() != shape[2] {
                            return Err(ragged(&shape));
                        }
                        flat.extend(row);
                    }
                }
                Ok(flat)
            }
            fn get_shape(&self) -> Vec<usize> {
                match self.first() {
                    Some(matrix) => vec![self.len(), matrix.len(), matrix.first().map_or(0, |row| row.len())],
                    None => vec![0, 0, 0],
                }
            }
            fn dtype(&self) -> DType {
                $dtype
            }
        }
    };
}

impl_tensor_adapter!(bf16, DType::BF16);
impl_tensor_adapter!(f16, DType::F16);
impl_tensor_adapter!(f32, DType::F32);
impl_tensor_adapter!(f64, DType::F64);
