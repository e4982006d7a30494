pub mod greet;
pub mod render;

pub use crate::utils::error::Result;
