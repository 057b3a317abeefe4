//! Dice notation for tabletop games.
//!
//! Parse `NdX`, `ND`, `NdF`, `+NdX` and `-NdX` into a [`RollDescriptor`],
//! then roll it against any [`Roller`].
//!
//! ```
//! let dice = jap_dice::parse("+2d20").unwrap();
//! assert_eq!(dice.variant(), jap_dice::Variant::Max);
//! let total = jap_dice::roll(&dice, &mut rand::thread_rng());
//! assert!((1..=20).contains(&total));
//! ```

mod common;
mod dice;
mod parse;
mod roll;

#[cfg(test)]
mod test_strategies;

pub use common::{Int, NonZeroUInt, UInt, Variant};
pub use dice::RollDescriptor;
pub use parse::{InvalidNotation, Parser, DEFAULT_MAX};
pub use roll::{roll, roll_with_observer, DefaultRoller, RollContext, Roller, SharedRoller};

/// Parses `s` with the default [`Parser`].
pub fn parse(s: &str) -> Result<RollDescriptor, InvalidNotation> {
    Parser::new().parse(s)
}

/// Checks `s` with the default [`Parser`] without building a descriptor.
pub fn check(s: &str) -> Result<(), InvalidNotation> {
    Parser::new().check(s)
}

/// Parses `s` and rolls it right away with the thread-local generator.
pub fn parse_and_roll(s: &str) -> Result<Int, InvalidNotation> {
    let dice = parse(s)?;
    Ok(roll(&dice, &mut rand::thread_rng()))
}
