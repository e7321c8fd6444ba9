use crate::{utils::get_strided_index, Float};
use half::{bf16, f16};
use rayon::prelude::*;

// Reductions over a single axis see the input as (pre, dim, post) and write
// pre * post outputs.

fn sum_dim_map<T: Float>(pre: usize, dim: usize, post: usize, input: &[T], out: &mut [T]) {
    out[..pre * post].par_iter_mut().enumerate().for_each(|(i, out_val)| {
        let (p, q) = (i / post.max(1), i % post.max(1));
        let base = p * dim * post + q;
        let mut acc = T::ZERO;
        for d in 0..dim {
            acc = acc + input[base + d * post];
        }
        *out_val = acc;
    });
}

fn max_dim_map<T: Float>(pre: usize, dim: usize, post: usize, input: &[T], out: &mut [T]) {
    out[..pre * post].par_iter_mut().enumerate().for_each(|(i, out_val)| {
        let (p, q) = (i / post.max(1), i % post.max(1));
        let base = p * dim * post + q;
        let mut acc = T::neg_infinity();
        for d in 0..dim {
            acc = acc.max_of(input[base + d * post]);
        }
        *out_val = acc;
    });
}

const SUM_CHUNK: usize = 4096;

/// Sums every element, accumulating in f64.
///
/// Partial sums over fixed chunks are combined in order, so the result does
/// not depend on the thread count.
fn sum_all_map<T: Float>(input: &[T]) -> T {
    let partials: Vec<f64> = input
        .par_chunks(SUM_CHUNK)
        .map(|chunk| chunk.iter().fold(0.0, |acc, x| acc + x.to_f64()))
        .collect();
    T::from_f64(partials.iter().sum())
}

/// Reduces `input` onto a smaller shape of the same rank.
///
/// `metadata` holds the input dims followed by the output strides, with a zero
/// stride on every axis that collapses to size 1.
fn sum_to_shape_map<T: Float>(num_dims: usize, metadata: &[usize], input: &[T], out: &mut [T]) {
    let dims = &metadata[..num_dims];
    let out_strides = &metadata[num_dims..2 * num_dims];
    let num_els: usize = dims.iter().product();

    out.fill(T::ZERO);
    for (i, &x) in input[..num_els].iter().enumerate() {
        let dst = get_strided_index(i, num_dims, dims, out_strides);
        out[dst] = out[dst] + x;
    }
}

macro_rules! reduction_ops {
    ([$($type:ident),* $(,)?]) => {
        paste::paste! {
            $(
                pub fn [<sum_dim_ $type>](pre: usize, dim: usize, post: usize, input: &[$type], out: &mut [$type]) {
                    sum_dim_map(pre, dim, post, input, out)
                }

                pub fn [<max_dim_ $type>](pre: usize, dim: usize, post: usize, input: &[$type], out: &mut [$type]) {
                    max_dim_map(pre, dim, post, input, out)
                }

                pub fn [<sum_all_ $type>](input: &[$type]) -> $type {
                    sum_all_map(input)
                }

                pub fn [<sum_to_shape_ $type>](num_dims: usize, metadata: &[usize], input: &[$type], out: &mut [$type]) {
                    sum_to_shape_map(num_dims, metadata, input, out)
                }
            )*
        }
    };
}

reduction_ops!([bf16, f16, f32, f64]);
