use crate::Float;
use half::{bf16, f16};

/// `-mean_i input[i, targets[i]]` over `rows` rows of `classes` log-probabilities.
///
/// Callers check every target against `classes`.
fn nll_map<T: Float>(rows: usize, classes: usize, input: &[T], targets: &[usize]) -> T {
    if rows == 0 {
        return T::ZERO;
    }
    let total: f64 = targets[..rows]
        .iter()
        .enumerate()
        .map(|(i, &t)| input[i * classes + t].to_f64())
        .sum();
    T::from_f64(-total / rows as f64)
}

/// Writes `-scale / rows` at each `(i, targets[i])` and zero elsewhere.
fn nll_backward_map<T: Float>(rows: usize, classes: usize, targets: &[usize], scale: T, out: &mut [T]) {
    out[..rows * classes].fill(T::ZERO);
    if rows == 0 {
        return;
    }
    let value = -(scale / T::from_f64(rows as f64));
    for (i, &t) in targets[..rows].iter().enumerate() {
        out[i * classes + t] = value;
    }
}

macro_rules! loss_ops {
    ([$($type:ident),* $(,)?]) => {
        paste::paste! {
            $(
                pub fn [<nll_ $type>](rows: usize, classes: usize, input: &[$type], targets: &[usize]) -> $type {
                    nll_map(rows, classes, input, targets)
                }

                pub fn [<nll_backward_ $type>](
                    rows: usize,
                    classes: usize,
                    targets: &[usize],
                    scale: $type,
                    out: &mut [$type],
                ) {
                    nll_backward_map(rows, classes, targets, scale, out)
                }
            )*
        }
    };
}

loss_ops!([bf16, f16, f32, f64]);
