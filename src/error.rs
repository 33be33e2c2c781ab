use std::fmt;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `top` on a stack with no elements.
    EmptyStack,
    /// Tried to remove more elements than the stack holds.
    Underflow { requested: usize, len: usize },
    /// `set_top` may only lower the length.
    InvalidTruncation { requested: usize, len: usize },
    /// Raw slot access past the allocated buffer.
    OutOfBounds { index: usize, capacity: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::EmptyStack => write!(f, "empty stack"),
            Error::Underflow { requested, len } => {
                write!(f, "stack underflow: popping {requested} of {len} elements")
            }
            Error::InvalidTruncation { requested, len } => write!(
                f,
                "can't raise stack top from {len} to {requested} without pushing"
            ),
            Error::OutOfBounds { index, capacity } => {
                write!(f, "index {index} out of bounds (capacity {capacity})")
            }
        }
    }
}

impl std::error::Error for Error {}
