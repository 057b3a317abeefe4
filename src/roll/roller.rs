use crate::common::{NonZeroUInt, UInt};
use rand::Rng;

/// A source of uniformly distributed random integers.
pub trait Roller {
    /// Returns a value in `0..bound`.
    fn draw(&mut self, bound: NonZeroUInt) -> UInt;
}

impl<R: Rng> Roller for R {
    fn draw(&mut self, bound: NonZeroUInt) -> UInt {
        self.gen_range(0..bound.get())
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;
