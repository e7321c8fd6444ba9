//! Backend dispatch from typed [`Buffer`](crate::buffer::Buffer)s to the
//! per-type kernels in `ndgrad_cpu`.
//!
//! Every entry point allocates its output, so callers never hold a buffer
//! that a kernel is still writing.

pub mod nn;
pub mod ops;

use ndgrad_cpu::Float;

pub(crate) fn alloc_with<T: Float>(len: usize, f: impl FnOnce(&mut [T])) -> Vec<T> {
    let mut out = vec![T::ZERO; len];
    f(&mut out);
    out
}
