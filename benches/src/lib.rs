/// Benchmark sizes as (element count, label).
pub const SIZES: [(usize, &str); 3] = [(64, "small"), (4096, "medium"), (65536, "large")];

/// Square-ish dims holding at least `size` elements: rank 3 for small inputs,
/// rank 2 otherwise.
pub fn create_dims(size: usize) -> Vec<usize> {
    if size <= 64 {
        let dim = (size as f64).powf(1.0 / 3.0).ceil() as usize;
        vec![dim, dim, dim]
    } else {
        let dim = (size as f64).sqrt().ceil() as usize;
        vec![dim, dim]
    }
}

pub fn dims_label(dims: &[usize]) -> String {
    dims.iter().map(|d| d.to_string()).collect::<Vec<_>>().join("x")
}
