use std::fmt::{self, Debug};

use crate::{
    debug::{self, DebugHexWord, ROW_LEN},
    error::{Error, Result},
};

mod codec;

/// Slot count used when no positive initial capacity is given.
///
/// 128 words, i.e. 256 bytes of storage.
pub const DEFAULT_CAPACITY: usize = 128;

/// A growable stack of 16-bit words.
///
/// Storage doubles whenever a push finds it full, and never shrinks. Slots
/// between the top and the capacity keep whatever was last written there;
/// only `get`, `set` and `buffer` can see them.
#[derive(Clone)]
pub struct StackU16 {
    slots: Box<[u16]>,
    len: usize,
}

impl StackU16 {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// A capacity of zero falls back to `DEFAULT_CAPACITY`.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity > 0 {
            capacity
        } else {
            DEFAULT_CAPACITY
        };

        Self {
            slots: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Push the low 16 bits of `value`. Wider values wrap.
    pub fn push(&mut self, value: u32) -> &mut Self {
        if self.len == self.slots.len() {
            self.grow();
        }
        self.slots[self.len] = value as u16;
        self.len += 1;
        self
    }

    /// Double the storage, keeping the live elements at the low end.
    fn grow(&mut self) {
        let capacity = (self.slots.len() * 2).max(1);
        log::trace!("growing stack: {} -> {capacity} slots", self.slots.len());

        let mut slots = vec![0; capacity].into_boxed_slice();
        slots[..self.len].copy_from_slice(&self.slots[..self.len]);
        self.slots = slots;
    }

    pub fn pop(&mut self) -> Result<u16> {
        if self.len == 0 {
            return Err(Error::Underflow {
                requested: 1,
                len: 0,
            });
        }
        self.len -= 1;
        Ok(self.slots[self.len])
    }

    /// Drop `count` elements at once and return the bottom-most of them.
    ///
    /// The dropped slots are left as they were.
    pub fn multi_pop(&mut self, count: usize) -> Result<u16> {
        let len = self.len.checked_sub(count).ok_or(Error::Underflow {
            requested: count,
            len: self.len,
        })?;

        // With `count == 0` this reads one past the top, which may be past
        // the end of the buffer.
        let value = self.get(len)?;
        self.len = len;
        Ok(value)
    }

    pub fn top(&self) -> Result<u16> {
        match self.len {
            0 => Err(Error::EmptyStack),
            len => Ok(self.slots[len - 1]),
        }
    }

    pub fn peek(&self) -> Result<u16> {
        self.top()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Read any slot below the capacity, live or not.
    pub fn get(&self, index: usize) -> Result<u16> {
        self.slots.get(index).copied().ok_or(Error::OutOfBounds {
            index,
            capacity: self.capacity(),
        })
    }

    /// Overwrite any slot below the capacity with the low 16 bits of
    /// `value`. The length is untouched.
    pub fn set(&mut self, index: usize, value: u32) -> Result<()> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(Error::OutOfBounds { index, capacity })?;
        *slot = value as u16;
        Ok(())
    }

    /// Truncate the stack to `len` elements. Can't be used to grow it.
    pub fn set_top(&mut self, len: usize) -> Result<()> {
        if len > self.len {
            return Err(Error::InvalidTruncation {
                requested: len,
                len: self.len,
            });
        }
        self.len = len;
        Ok(())
    }

    /// The live elements, bottom first.
    pub fn as_slice(&self) -> &[u16] {
        &self.slots[..self.len]
    }

    /// The whole allocated storage, including slots above the top.
    pub fn buffer(&self) -> &[u16] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u16> {
        self.as_slice().iter()
    }
}

impl Default for StackU16 {
    fn default() -> Self {
        Self::new()
    }
}

/// Only the live elements are compared.
impl PartialEq for StackU16 {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for StackU16 {}

impl Extend<u16> for StackU16 {
    fn extend<I: IntoIterator<Item = u16>>(&mut self, iter: I) {
        for value in iter {
            self.push(value.into());
        }
    }
}

impl FromIterator<u16> for StackU16 {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<'a> IntoIterator for &'a StackU16 {
    type Item = &'a u16;
    type IntoIter = std::slice::Iter<'a, u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for StackU16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            let entries = self.iter().copied().map(DebugHexWord);
            return f.debug_list().entries(entries).finish();
        }

        // Hexdump of the live elements, `ROW_LEN` words per row.

        writeln!(f, "{} of {} slots", self.len, self.capacity())?;

        let mut prev_blank = false;
        for (i, line) in self.as_slice().chunks(ROW_LEN).enumerate() {
            // Skip runs of zero rows, marking where each one starts.
            if line.iter().all(|&word| word == 0) {
                if !prev_blank {
                    writeln!(f, "...")?;
                }
                prev_blank = true;
                continue;
            }
            prev_blank = false;

            write!(f, "{:04x}: ", i * ROW_LEN)?;
            debug::write_row(f, line)?;
            writeln!(f)?;
        }

        Ok(())
    }
}
