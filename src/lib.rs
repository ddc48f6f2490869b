/*
    Top-level
*/

mod context;
mod error;

pub mod binary;
pub mod fixed;
pub mod ieee754;

pub use binary::{is_binary_str, BinaryString, Padding};
pub use context::*;
pub use error::*;
pub use fixed::{FixedContext, Policy};
pub use ieee754::Float64Bits;
