//! Comparison flags register

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// 3-bit flags register, laid out `0b00000LGE`.
///
/// At most one of Less-than/Greater-than/Equal is set at a time. The flags
/// are written only by the CMP operation and persist until the next CMP;
/// a fresh machine starts with all bits clear.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags(u8);

impl Flags {
    /// Less-than bit
    pub const LESS: u8 = 0b100;

    /// Greater-than bit
    pub const GREATER: u8 = 0b010;

    /// Equal bit
    pub const EQUAL: u8 = 0b001;

    /// All bits clear (the pre-comparison state)
    #[inline]
    pub fn clear() -> Self {
        Flags(0)
    }

    /// Flags resulting from comparing `a` against `b`
    pub fn compare(a: u8, b: u8) -> Self {
        match a.cmp(&b) {
            Ordering::Less => Flags(Self::LESS),
            Ordering::Greater => Flags(Self::GREATER),
            Ordering::Equal => Flags(Self::EQUAL),
        }
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_equal(self) -> bool {
        self.0 & Self::EQUAL != 0
    }

    #[inline]
    pub fn is_less(self) -> bool {
        self.0 & Self::LESS != 0
    }

    #[inline]
    pub fn is_greater(self) -> bool {
        self.0 & Self::GREATER != 0
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03b}", self.0)
    }
}
