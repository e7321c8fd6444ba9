use crate::{
    utils::{get_strided_index, is_contiguous},
    Float,
};
use half::{bf16, f16};
use rayon::prelude::*;

fn binary_map<T, F>(num_els: usize, num_dims: usize, dims_and_strides: Option<&[usize]>, lhs: &[T], rhs: &[T], out: &mut [T], op: F)
where
    T: Float,
    F: Fn(T, T) -> T + Sync,
{
    let out = &mut out[..num_els];

    let Some(metadata) = dims_and_strides else {
        out.par_iter_mut().enumerate().for_each(|(i, out_val)| {
            *out_val = op(lhs[i], rhs[i]);
        });
        return;
    };

    let dims = &metadata[..num_dims];
    let lhs_strides = &metadata[num_dims..2 * num_dims];
    let rhs_strides = &metadata[2 * num_dims..3 * num_dims];

    let lhs_cont = is_contiguous(num_dims, dims, lhs_strides);
    let rhs_cont = is_contiguous(num_dims, dims, rhs_strides);

    out.par_iter_mut().enumerate().for_each(|(i, out_val)| {
        let lhs_idx = if lhs_cont { i } else { get_strided_index(i, num_dims, dims, lhs_strides) };
        let rhs_idx = if rhs_cont { i } else { get_strided_index(i, num_dims, dims, rhs_strides) };
        *out_val = op(lhs[lhs_idx], rhs[rhs_idx]);
    });
}

macro_rules! binary_op {
    ($name:ident, $op:expr, [$($type:ident),* $(,)?]) => {
        paste::paste! {
            $(
                /// Elementwise kernel over `num_els` output elements.
                ///
                /// `dims_and_strides` is either `None` (both operands already have
                /// the output shape) or `3 * num_dims` values: the output dims
                /// followed by the lhs and rhs strides, zero on broadcast axes.
                pub fn [<$name _ $type>](
                    num_els: usize,
                    num_dims: usize,
                    dims_and_strides: Option<&[usize]>,
                    lhs: &[$type],
                    rhs: &[$type],
                    out: &mut [$type],
                ) {
                    binary_map(num_els, num_dims, dims_and_strides, lhs, rhs, out, $op)
                }
            )*
        }
    };
}

binary_op!(add, |a, b| a + b, [bf16, f16, f32, f64]);
binary_op!(sub, |a, b| a - b, [bf16, f16, f32, f64]);
binary_op!(mul, |a, b| a * b, [bf16, f16, f32, f64]);
binary_op!(div, |a, b| a / b, [bf16, f16, f32, f64]);
