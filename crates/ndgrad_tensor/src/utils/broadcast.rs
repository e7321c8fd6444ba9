use ndgrad_core::{error::Result, layout::Layout};

/// Kernel metadata for reading `lhs` and `rhs` at `out_shape`: the output
/// dims followed by each operand's broadcast strides. `None` when neither
/// operand needs broadcasting.
pub fn prepare_dims_and_strides(lhs_shape: &[usize], rhs_shape: &[usize], out_shape: &[usize]) -> Result<Option<Vec<usize>>> {
    if lhs_shape == out_shape && rhs_shape == out_shape {
        return Ok(None);
    }

    let mut metadata = Vec::with_capacity(3 * out_shape.len());
    metadata.extend_from_slice(out_shape);
    metadata.extend(Layout::broadcast_strides(lhs_shape, out_shape)?);
    metadata.extend(Layout::broadcast_strides(rhs_shape, out_shape)?);
    Ok(Some(metadata))
}

/// Metadata for summing a tensor of `shape` down to `target`: the input dims
/// followed by the target's strides, zero on collapsed axes.
pub fn prepare_reduce_metadata(shape: &[usize], target: &[usize]) -> Result<Vec<usize>> {
    let mut metadata = Vec::with_capacity(2 * shape.len());
    metadata.extend_from_slice(shape);
    metadata.extend(Layout::broadcast_strides(target, shape)?);
    Ok(metadata)
}
