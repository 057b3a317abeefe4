use crate::common::*;
use crate::dice::RollDescriptor;
use proptest::prelude::*;

fn nz(x: UInt) -> NonZeroUInt {
    NonZeroUInt::new(x).unwrap()
}

pub(crate) fn descriptor_strategy() -> impl Strategy<Value = RollDescriptor> {
    (1..=100u32, 1..=100u32, 0u8..4).prop_map(|(count, sides, variant)| {
        let (count, sides) = (nz(count), nz(sides));
        match variant {
            0 => RollDescriptor::sum(count, sides),
            1 => RollDescriptor::fudge(count),
            2 => RollDescriptor::max(count, sides),
            _ => RollDescriptor::min(count, sides),
        }
    })
}

fn well_formed_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("+"), Just("-")],
        0..=1200u32,
        prop_oneof![Just("d"), Just("D")],
        prop::option::of(0..=1200u32),
        prop_oneof![Just(""), Just("f"), Just("F")],
    )
        .prop_map(|(sign, count, dice, sides, fudge)| {
            let sides = sides.map(|x| x.to_string()).unwrap_or_default();
            format!("{}{}{}{}{}", sign, count, dice, sides, fudge)
        })
}

/// Mostly-plausible notation strings, valid and invalid alike.
pub(crate) fn notation_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        well_formed_strategy(),
        "[0-9+dDfFx \t-]{0,10}",
        ".{0,6}",
    ]
}
