use crate::common::*;
use crate::parse::{InvalidNotation, Parser};
use std::fmt;

/// A validated dice roll: what to roll and how to combine the dice.
///
/// Descriptors are plain values. They can be cached and rolled any number of
/// times; rolling never modifies them.
///
/// Only [`Parser`] enforces a maximum count and number of sides. The
/// constructors below accept any non-zero value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RollDescriptor {
    variant: Variant,
    count: NonZeroUInt,
    sides: Option<NonZeroUInt>,
}

impl RollDescriptor {
    /// `NdX`: roll `count` dice with `sides` faces and add them up.
    ///
    /// Not bounded by [`Parser::max`]; rolling costs one draw per die.
    pub const fn sum(count: NonZeroUInt, sides: NonZeroUInt) -> Self {
        Self {
            variant: Variant::Sum,
            count,
            sides: Some(sides),
        }
    }

    /// `NdF`: roll `count` fudge dice.
    pub const fn fudge(count: NonZeroUInt) -> Self {
        Self {
            variant: Variant::Fudge,
            count,
            sides: None,
        }
    }

    /// `+NdX`: roll `count` dice and keep the highest.
    pub const fn max(count: NonZeroUInt, sides: NonZeroUInt) -> Self {
        Self {
            variant: Variant::Max,
            count,
            sides: Some(sides),
        }
    }

    /// `-NdX`: roll `count` dice and keep the lowest.
    pub const fn min(count: NonZeroUInt, sides: NonZeroUInt) -> Self {
        Self {
            variant: Variant::Min,
            count,
            sides: Some(sides),
        }
    }

    pub const fn variant(&self) -> Variant {
        self.variant
    }

    pub const fn count(&self) -> NonZeroUInt {
        self.count
    }

    /// Number of faces per die; `None` for fudge dice.
    pub const fn sides(&self) -> Option<NonZeroUInt> {
        self.sides
    }
}

impl fmt::Display for RollDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sign(self.variant, f)?;
        match self.sides {
            Some(sides) => write!(f, "{}d{}", self.count, sides),
            None => write!(f, "{}dF", self.count),
        }
    }
}

impl std::str::FromStr for RollDescriptor {
    type Err = InvalidNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new().parse(s)
    }
}
