use crate::Tensor;
use ndgrad_core::{
    be::nn::loss,
    buffer::Buffer,
    error::{Error, Result},
};

impl Tensor {
    /// `-mean_i self[i, targets[i]]` for a (rows, classes) tensor of
    /// log-probabilities. A rank-1 input is a single row.
    pub fn nll_loss(&self, targets: &[usize]) -> Result<Tensor> {
        let (rows, classes) = self.check_targets(targets)?;
        let value = loss::nll(rows, classes, self.buffer(), targets);
        Ok(Tensor::from_parts(Buffer::from_scalar(value), &[]))
    }

    /// Gradient of [`Tensor::nll_loss`] times `scale`: `-scale / rows` at each
    /// target position, zero elsewhere.
    pub fn nll_loss_grad(&self, targets: &[usize], scale: f64) -> Result<Tensor> {
        let (rows, classes) = self.check_targets(targets)?;
        let buffer = loss::nll_backward(rows, classes, targets, self.scalar_of(scale), self.buffer());
        Ok(Tensor::from_parts(buffer, self.shape()))
    }

    /// `nll_loss(log_softmax(self, -1), targets)` over raw logits.
    pub fn cross_entropy(&self, targets: &[usize]) -> Result<Tensor> {
        self.check_targets(targets)?;
        self.log_softmax(-1)?.nll_loss(targets)
    }

    fn check_targets(&self, targets: &[usize]) -> Result<(usize, usize)> {
        let (rows, classes) = match *self.shape() {
            [classes] => (1, classes),
            [rows, classes] => (rows, classes),
            _ => {
                return Err(Error::InvalidShape(format!(
                    "class scores must be rank 1 or 2, got {:?}",
                    self.shape()
                )))
            }
        };

        if targets.len() != rows {
            return Err(Error::incompatible("nll_loss", self.shape(), &[targets.len()]));
        }
        if let Some(&index) = targets.iter().find(|&&t| t >= classes) {
            return Err(Error::IndexOutOfBounds { index, size: classes });
        }
        Ok((rows, classes))
    }
}
