//! Human-friendly rendering of a built tree.
//!
//! One line per level, root first, every digest as `0x` hex. Display and
//! persistence of the output are the caller's concern; the engine only
//! produces the text.

use core::fmt;

use crate::{MerkleTree, hash::digest_to_hex};

impl fmt::Display for MerkleTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let levels = self.levels();
        let top = levels.len() - 1;
        for (height, level) in levels.iter().enumerate().rev() {
            let label = match height {
                h if h == top => "root",
                0 => "leaves",
                _ => "",
            };
            write!(f, "level {}", height)?;
            if !label.is_empty() {
                write!(f, " ({})", label)?;
            }
            write!(f, ":")?;
            for digest in level {
                write!(f, " {}", digest_to_hex(digest))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
