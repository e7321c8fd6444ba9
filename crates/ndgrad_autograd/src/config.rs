/// Behaviour of a [`Graph`](crate::Graph), fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GraphConfig {
    /// Sum repeated backward passes into populated gradient slots instead of
    /// rejecting them.
    pub accumulate_grads: bool,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accumulate_grads(mut self, accumulate_grads: bool) -> Self {
        self.accumulate_grads = accumulate_grads;
        self
    }
}
