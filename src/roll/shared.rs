use super::{ctx::RollContext, roller::Roller};
use crate::common::*;
use crate::dice::RollDescriptor;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A [`RollContext`] that can be shared between threads.
///
/// Each roll holds the lock for all of its draws, so concurrent rolls never
/// interleave their dice.
#[derive(Debug)]
pub struct SharedRoller<R = StdRng> {
    ctx: Mutex<RollContext<R>>,
}

impl<R: Roller> SharedRoller<R> {
    pub fn new(roller: R) -> Self {
        Self {
            ctx: Mutex::new(RollContext::new(roller)),
        }
    }

    pub fn roll(&self, dice: &RollDescriptor) -> Int {
        self.lock().roll(dice)
    }

    pub fn roll_with_observer(&self, dice: &RollDescriptor, observe: impl FnMut(Int)) -> Int {
        self.lock().roll_with_observer(dice, observe)
    }

    pub fn into_roller(self) -> R {
        self.ctx
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_roller()
    }

    // A panic mid-roll cannot leave the generator in a bad state, so a
    // poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, RollContext<R>> {
        self.ctx.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SharedRoller {
    fn default() -> Self {
        Self::new(StdRng::from_entropy())
    }
}
