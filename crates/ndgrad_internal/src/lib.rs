pub mod prelude;

pub use ndgrad_autograd as autograd;
pub use ndgrad_core as core;
pub use ndgrad_tensor as tensor;

pub use ndgrad_core::dtype::{bf16, bfloat16, f16, float16, float32, float64, half};
