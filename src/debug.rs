//! Helpers for Debug impls.

use std::fmt::{self, Debug};

/// Words per hexdump row.
pub(crate) const ROW_LEN: usize = 8;

pub(crate) struct DebugHexWord(pub u16);

impl Debug for DebugHexWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}", self.0)
    }
}

/// Write a row of up to `ROW_LEN` hex-formatted words, with an extra gap
/// between the two halves.
pub(crate) fn write_row(f: &mut fmt::Formatter<'_>, line: &[u16]) -> fmt::Result {
    debug_assert!(!line.is_empty() && line.len() <= ROW_LEN);

    write!(f, "{:04x}", line[0])?;
    for (i, word) in line.iter().enumerate().skip(1) {
        if i == ROW_LEN / 2 {
            write!(f, " ")?;
        }
        write!(f, " {word:04x}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row<'a>(&'a [u16]);

    impl Debug for Row<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_row(f, self.0)
        }
    }

    #[test]
    fn full_row_has_gap_in_the_middle() {
        let line = [0, 1, 2, 3, 0xff00, 0x00ff, 0xf00f, 0xffff];
        assert_eq!(
            format!("{:?}", Row(&line)),
            "0000 0001 0002 0003  ff00 00ff f00f ffff"
        );
    }

    #[test]
    fn short_row() {
        assert_eq!(format!("{:?}", Row(&[0xabc])), "0abc");
        assert_eq!(format!("{:?}", Row(&[1, 2, 3])), "0001 0002 0003");
    }

    #[test]
    fn hex_word() {
        assert_eq!(format!("{:?}", DebugHexWord(0xf)), "000f");
    }
}
