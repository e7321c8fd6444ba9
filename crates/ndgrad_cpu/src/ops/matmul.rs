use crate::Float;
use half::{bf16, f16};
use rayon::prelude::*;

/// `metadata` is `[batch, m, k, n, a_batch_stride, b_batch_stride]`.
///
/// Both operands are row-major and contiguous inside a batch. A batch stride of
/// zero reuses the same matrix for every batch.
fn matmul_map<T: Float>(metadata: &[usize], a: &[T], b: &[T], out: &mut [T]) {
    let (batch, m, k, n) = (metadata[0], metadata[1], metadata[2], metadata[3]);
    let (a_bs, b_bs) = (metadata[4], metadata[5]);

    let out = &mut out[..batch * m * n];
    if out.is_empty() {
        return;
    }

    out.par_chunks_mut(n.max(1)).enumerate().for_each(|(row, out_row)| {
        let batch_idx = row / m;
        let m_idx = row % m;
        let a_base = batch_idx * a_bs + m_idx * k;
        let b_base = batch_idx * b_bs;

        for (n_idx, out_val) in out_row.iter_mut().enumerate() {
            let mut acc = T::ZERO;
            for k_idx in 0..k {
                acc = acc + a[a_base + k_idx] * b[b_base + k_idx * n + n_idx];
            }
            *out_val = acc;
        }
    });
}

macro_rules! matmul_op {
    ([$($type:ident),* $(,)?]) => {
        paste::paste! {
            $(
                pub fn [<matmul_ $type>](metadata: &[usize], a: &[$type], b: &[$type], out: &mut [$type]) {
                    matmul_map(metadata, a, b, out)
                }
            )*
        }
    };
}

matmul_op!([bf16, f16, f32, f64]);
