use crate::Tensor;
use std::fmt;

// Dims longer than twice this are elided to their first and last entries.
const EDGE_ITEMS: usize = 4;

fn visible_indices(len: usize) -> (Vec<usize>, bool) {
    if len <= EDGE_ITEMS * 2 {
        ((0..len).collect(), false)
    } else {
        ((0..EDGE_ITEMS).chain(len - EDGE_ITEMS..len).collect(), true)
    }
}

fn write_nested(f: &mut fmt::Formatter<'_>, data: &[f64], shape: &[usize], depth: usize, width: usize) -> fmt::Result {
    let Some((&len, rest)) = shape.split_first() else {
        return write!(f, "{:>width$.6}", data[0], width = width);
    };

    let inner: usize = rest.iter().product();
    let (indices, elided) = visible_indices(len);
    let separator = if rest.is_empty() { ", ".to_string() } else { format!(",\n{}", " ".repeat(depth + 1)) };

    write!(f, "[")?;
    for (n, &i) in indices.iter().enumerate() {
        if n > 0 {
            f.write_str(&separator)?;
        }
        if elided && n == EDGE_ITEMS {
            write!(f, "...")?;
            f.write_str(&separator)?;
        }
        write_nested(f, &data[i * inner..(i + 1) * inner], rest, depth + 1, width)?;
    }
    write!(f, "]")
}

fn compact(data: &[f64]) -> String {
    let (indices, elided) = visible_indices(data.len());
    let mut parts: Vec<String> = indices.iter().map(|&i| format!("{:.6}", data[i])).collect();
    if elided {
        parts.insert(EDGE_ITEMS, "...".to_string());
    }
    format!("[{}]", parts.join(", "))
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.buffer().to_f64_vec();
        if data.is_empty() {
            return write!(f, "[]");
        }
        let width = data.iter().map(|x| format!("{:.6}", x).len()).max().unwrap_or(0);
        write_nested(f, &data, self.shape(), 0, width)
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tensor(shape={:?}, device={}, dtype={}, data={})",
            self.shape(),
            self.device(),
            self.dtype(),
            compact(&self.buffer().to_f64_vec())
        )
    }
}
