mod debug;
mod error;
mod stack;

pub use error::{Error, Result};
pub use stack::{StackU16, DEFAULT_CAPACITY};
