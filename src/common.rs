use std::fmt::{self, Write};
use std::num::NonZeroU32;

pub type Int = i64;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

/// How the individual dice of a roll are combined into one result.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Variant {
    /// Sum every die.
    Sum,
    /// Fudge dice: each die is -1, 0 or +1, and the results are summed.
    Fudge,
    /// Keep only the highest die.
    Max,
    /// Keep only the lowest die.
    Min,
}

impl Variant {
    /// The sign prefix that selects this variant in notation, if any.
    pub const fn sign(self) -> Option<char> {
        match self {
            Self::Max => Some('+'),
            Self::Min => Some('-'),
            Self::Sum | Self::Fudge => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Sum => "sum",
            Self::Fudge => "fudge",
            Self::Max => "max",
            Self::Min => "min",
        };
        f.write_str(s)
    }
}

pub(crate) fn write_sign(variant: Variant, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match variant.sign() {
        Some(c) => f.write_char(c),
        None => Ok(()),
    }
}
