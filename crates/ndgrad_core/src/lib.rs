pub mod be;
pub mod buffer;
pub mod config;
pub mod device;
pub mod dtype;
pub mod error;
pub mod layout;
pub mod scalar;

pub use ndgrad_cpu as cpu;
