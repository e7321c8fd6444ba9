//! Safe CPU kernels operating on contiguous slices.
//!
//! Every kernel is stamped once per supported element type (`bf16`, `f16`,
//! `f32`, `f64`) and named `<op>_<type>`, e.g. [`ops::binary::add_f32`].
//! Shape validation happens in the callers; kernels only assume the slice
//! lengths described in their docs.

pub mod float;
pub mod nn;
pub mod ops;
pub mod utils;

pub use float::Float;
