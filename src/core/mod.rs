//! Core types for the stationary-kernel abstraction

pub mod error;
pub mod types;

pub use self::error::*;
pub use self::types::*;
