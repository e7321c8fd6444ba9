use crate::{node::NodeId, Graph};
use ndgrad_core::error::{Error, Result};
use ndgrad_tensor::Tensor;
use std::collections::{hash_map::Entry, HashMap, HashSet};

impl Graph {
    /// Propagates gradients from `root` to every reachable node that tracks them.
    ///
    /// Without a seed the root must hold a single element and is seeded with
    /// one. Gradients are accumulated in scratch space and written to the
    /// nodes' slots only once the whole pass has succeeded.
    pub fn backward(&mut self, root: NodeId, seed: Option<&Tensor>) -> Result<()> {
        let root_node = self.node(root)?;
        if !root_node.requires_grad {
            return Err(Error::NoGradient(root.index));
        }

        let value = &root_node.value;
        let seed = match seed {
            Some(seed) => {
                if seed.shape() != value.shape() {
                    return Err(Error::incompatible("backward seed", seed.shape(), value.shape()));
                }
                if seed.dtype() != value.dtype() {
                    return Err(Error::DTypeMismatch {
                        expected: value.dtype(),
                        got: seed.dtype(),
                    });
                }
                seed.clone()
            }
            None if value.size() == 1 => Tensor::ones_like(value),
            None => {
                return Err(Error::NonScalarBackward {
                    shape: value.shape().to_vec(),
                })
            }
        };

        if !self.config().accumulate_grads && self.nodes.iter().any(|node| node.grad.is_some()) {
            return Err(Error::GradientsNotCleared);
        }

        let order = self.topo_order(root.index);
        log::debug!("backward from {}: {} reachable nodes", root, order.len());

        let mut pending: HashMap<usize, Tensor> = HashMap::new();
        pending.insert(root.index, seed);

        for &index in order.iter().rev() {
            let node = &self.nodes[index];
            let (Some(op), Some(grad)) = (&node.op, pending.get(&index)) else {
                continue;
            };
            log::trace!("backward through %{} ({})", index, op.name());

            let inputs = op.inputs();
            let values: Vec<&Tensor> = inputs.iter().map(|id| &self.nodes[id.index].value).collect();
            let grads = op.backward(&values, &node.value, grad)?;

            for (input, input_grad) in inputs.iter().zip(grads) {
                if !self.nodes[input.index].requires_grad {
                    continue;
                }
                match pending.entry(input.index) {
                    Entry::Occupied(mut entry) => {
                        let total = entry.get().add(&input_grad)?;
                        entry.insert(total);
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(input_grad);
                    }
                }
            }
        }

        let updates = pending
            .into_iter()
            .map(|(index, grad)| match &self.nodes[index].grad {
                Some(previous) => previous.add(&grad).map(|total| (index, total)),
                None => Ok((index, grad)),
            })
            .collect::<Result<Vec<_>>>()?;

        let written = updates.len();
        for (index, grad) in updates {
            self.nodes[index].grad = Some(grad);
        }
        log::debug!("backward from {}: wrote {} gradient slots", root, written);

        Ok(())
    }

    /// Post-order over nodes reachable from `root` through inputs that track
    /// gradients: every node comes after all of its inputs.
    fn topo_order(&self, root: usize) -> Vec<usize> {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        let mut stack = vec![(root, false)];

        while let Some((index, expanded)) = stack.pop() {
            if expanded {
                order.push(index);
                continue;
            }
            if !visited.insert(index) {
                continue;
            }
            stack.push((index, true));

            if let Some(op) = &self.nodes[index].op {
                for input in op.inputs() {
                    if self.nodes[input.index].requires_grad && !visited.contains(&input.index) {
                        stack.push((input.index, false));
                    }
                }
            }
        }

        order
    }
}
