pub mod cli;
pub mod core;
pub mod directory;
pub mod errors;
pub mod loader;
pub mod requests;
pub mod validation;

pub use crate::core::types;
pub use requests::*;
