pub mod activation;
pub mod binary;
pub mod broadcasting;
pub mod loss;
pub mod matmul;
pub mod reduction;
pub mod transform;
pub mod unary;
