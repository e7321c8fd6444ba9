use crate::Float;
use half::{bf16, f16};
use rayon::prelude::*;

// Each pre-slice of `dim * post` elements is independent. Within it a lane is
// the `dim` values at stride `post`.

fn lane_max<T: Float>(chunk: &[T], dim: usize, post: usize, q: usize) -> T {
    (0..dim).fold(T::neg_infinity(), |acc, d| acc.max_of(chunk[d * post + q]))
}

fn softmax_map<T: Float>(pre: usize, dim: usize, post: usize, input: &[T], out: &mut [T]) {
    let lane = (dim * post).max(1);
    out[..pre * dim * post]
        .par_chunks_mut(lane)
        .zip(input[..pre * dim * post].par_chunks(lane))
        .for_each(|(out_chunk, in_chunk)| {
            for q in 0..post {
                let max = lane_max(in_chunk, dim, post, q);
                let mut total = T::ZERO;
                for d in 0..dim {
                    let e = (in_chunk[d * post + q] - max).exp();
                    out_chunk[d * post + q] = e;
                    total = total + e;
                }
                for d in 0..dim {
                    out_chunk[d * post + q] = out_chunk[d * post + q] / total;
                }
            }
        });
}

/// `x - max - ln(sum(exp(x - max)))` per lane.
fn log_softmax_map<T: Float>(pre: usize, dim: usize, post: usize, input: &[T], out: &mut [T]) {
    let lane = (dim * post).max(1);
    out[..pre * dim * post]
        .par_chunks_mut(lane)
        .zip(input[..pre * dim * post].par_chunks(lane))
        .for_each(|(out_chunk, in_chunk)| {
            for q in 0..post {
                let max = lane_max(in_chunk, dim, post, q);
                let mut total = T::ZERO;
                for d in 0..dim {
                    total = total + (in_chunk[d * post + q] - max).exp();
                }
                let log_total = max + total.ln();
                for d in 0..dim {
                    out_chunk[d * post + q] = in_chunk[d * post + q] - log_total;
                }
            }
        });
}

macro_rules! softmax_ops {
    ([$($type:ident),* $(,)?]) => {
        paste::paste! {
            $(
                pub fn [<softmax_ $type>](pre: usize, dim: usize, post: usize, input: &[$type], out: &mut [$type]) {
                    softmax_map(pre, dim, post, input, out)
                }

                pub fn [<log_softmax_ $type>](pre: usize, dim: usize, post: usize, input: &[$type], out: &mut [$type]) {
                    log_softmax_map(pre, dim, post, input, out)
                }
            )*
        }
    };
}

softmax_ops!([bf16, f16, f32, f64]);
