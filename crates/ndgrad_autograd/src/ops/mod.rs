mod binary;
mod matmul;
mod nn;
mod reduction;
mod transform;
mod unary;
