pub use ndgrad_internal::*;
