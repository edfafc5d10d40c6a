//! Concrete calendar implementations.

/// Greece calendar.
pub mod greece;

pub use greece::Greece;
