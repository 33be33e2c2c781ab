//! Byte-pair encoding of a stack's contents.
//!
//! Each live element becomes two code units, high byte first, bottom of the
//! stack first. There is no header, length prefix or terminator.

use super::StackU16;

impl StackU16 {
    /// Encode the live elements as big-endian byte pairs.
    pub fn encode(&self) -> Vec<u8> {
        self.iter().flat_map(|word| word.to_be_bytes()).collect()
    }

    /// Same as `encode`, but each byte becomes the char with that code point
    /// (`U+0000..=U+00FF`).
    pub fn encode_string(&self) -> String {
        self.encode().into_iter().map(char::from).collect()
    }

    /// Build a fresh default-capacity stack from byte pairs. An odd trailing
    /// byte is ignored.
    pub fn decode(bytes: &[u8]) -> Self {
        Self::decode_units(bytes.iter().copied().map(u32::from))
    }

    /// Decode the UTF-16 code units of `text` in pairs. Units wider than a
    /// byte are combined as `(hi << 8) | lo` and then wrap to 16 bits.
    pub fn decode_str(text: &str) -> Self {
        Self::decode_units(text.encode_utf16().map(u32::from))
    }

    fn decode_units(units: impl IntoIterator<Item = u32>) -> Self {
        let mut stack = Self::new();
        let mut units = units.into_iter();

        while let Some(hi) = units.next() {
            let Some(lo) = units.next() else {
                log::debug!("ignoring trailing code unit {hi:#04x}");
                break;
            };
            stack.push((hi << 8) | lo);
        }

        stack
    }
}
