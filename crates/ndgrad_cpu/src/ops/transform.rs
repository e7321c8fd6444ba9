use crate::{
    utils::{get_strided_index, is_contiguous},
    Float,
};
use half::{bf16, f16};
use rayon::prelude::*;

fn transpose_map<T: Float>(batch: usize, rows: usize, cols: usize, input: &[T], out: &mut [T]) {
    let mat = rows * cols;
    out[..batch * mat].par_iter_mut().enumerate().for_each(|(i, out_val)| {
        let b = i / mat.max(1);
        let r = i % mat.max(1);
        // out is (batch, cols, rows)
        let (c_idx, r_idx) = (r / rows.max(1), r % rows.max(1));
        *out_val = input[b * mat + r_idx * cols + c_idx];
    });
}

/// Materialises a strided view. `metadata` holds the output dims followed by
/// the source strides, which may be zero on broadcast axes.
fn strided_copy_map<T: Float>(num_els: usize, num_dims: usize, metadata: &[usize], input: &[T], out: &mut [T]) {
    let dims = &metadata[..num_dims];
    let strides = &metadata[num_dims..2 * num_dims];

    if is_contiguous(num_dims, dims, strides) {
        out[..num_els].copy_from_slice(&input[..num_els]);
        return;
    }

    out[..num_els].par_iter_mut().enumerate().for_each(|(i, out_val)| {
        *out_val = input[get_strided_index(i, num_dims, dims, strides)];
    });
}

macro_rules! transform_ops {
    ([$($type:ident),* $(,)?]) => {
        paste::paste! {
            $(
                pub fn [<transpose_ $type>](batch: usize, rows: usize, cols: usize, input: &[$type], out: &mut [$type]) {
                    transpose_map(batch, rows, cols, input, out)
                }

                pub fn [<strided_copy_ $type>](
                    num_els: usize,
                    num_dims: usize,
                    metadata: &[usize],
                    input: &[$type],
                    out: &mut [$type],
                ) {
                    strided_copy_map(num_els, num_dims, metadata, input, out)
                }
            )*
        }
    };
}

transform_ops!([bf16, f16, f32, f64]);
