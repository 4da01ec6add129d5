//! Stationary kernel abstraction

pub mod binding;
pub mod matrix;
pub mod traits;

pub use self::binding::*;
pub use self::matrix::*;
pub use self::traits::*;
