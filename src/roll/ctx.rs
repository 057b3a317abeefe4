use super::roller::Roller;
use crate::common::*;
use crate::dice::RollDescriptor;

pub type DefaultRoller = rand::rngs::ThreadRng;

const FUDGE_FACES: NonZeroUInt = match NonZeroUInt::new(3) {
    Some(x) => x,
    None => unreachable!(),
};

/// Rolls `dice` and returns the combined result.
pub fn roll<R: Roller + ?Sized>(dice: &RollDescriptor, roller: &mut R) -> Int {
    roll_with_observer(dice, roller, |_| ())
}

/// Like [`roll`], but also hands every die to `observe`, in the order the
/// dice were drawn.
///
/// Fudge dice are reported as -1, 0 or 1; all other dice as their face
/// value. Observing changes neither the result nor the number of draws.
pub fn roll_with_observer<R, F>(dice: &RollDescriptor, roller: &mut R, mut observe: F) -> Int
where
    R: Roller + ?Sized,
    F: FnMut(Int),
{
    let count = dice.count().get();
    let mut fold = |sides: NonZeroUInt, offset: Int, init: Int, combine: fn(Int, Int) -> Int| {
        (0..count).fold(init, |acc, _| {
            let die = Int::from(roller.draw(sides)) + offset;
            observe(die);
            combine(acc, die)
        })
    };

    match (dice.variant(), dice.sides()) {
        (Variant::Fudge, _) | (_, None) => fold(FUDGE_FACES, -1, 0, Int::saturating_add),
        (Variant::Sum, Some(sides)) => fold(sides, 1, 0, Int::saturating_add),
        // No die shows 0, so the first draw always wins. Ties keep the earlier die.
        (Variant::Max, Some(sides)) => {
            fold(sides, 1, 0, |best, die| if die > best { die } else { best })
        }
        (Variant::Min, Some(sides)) => {
            fold(sides, 1, Int::MAX, |worst, die| if die < worst { die } else { worst })
        }
    }
}

/// Owns a [`Roller`] and rolls dice with it.
///
/// The direct rolls (`sum`, `fudge`, `best`, `worst`) take any non-zero
/// count and sides; no parser maximum applies to them.
#[derive(Debug, Clone)]
pub struct RollContext<R = DefaultRoller> {
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(roller: R) -> Self {
        Self { roller }
    }

    pub fn into_roller(self) -> R {
        self.roller
    }

    pub fn roll(&mut self, dice: &RollDescriptor) -> Int {
        roll(dice, &mut self.roller)
    }

    pub fn roll_with_observer(&mut self, dice: &RollDescriptor, observe: impl FnMut(Int)) -> Int {
        roll_with_observer(dice, &mut self.roller, observe)
    }

    /// Rolls `count` dice with `sides` faces and returns their sum.
    pub fn sum(&mut self, count: NonZeroUInt, sides: NonZeroUInt) -> Int {
        self.roll(&RollDescriptor::sum(count, sides))
    }

    /// Rolls `count` fudge dice: positive for more pluses, negative for more minuses.
    pub fn fudge(&mut self, count: NonZeroUInt) -> Int {
        self.roll(&RollDescriptor::fudge(count))
    }

    /// Rolls `count` dice with `sides` faces and returns the best one.
    pub fn best(&mut self, count: NonZeroUInt, sides: NonZeroUInt) -> Int {
        self.roll(&RollDescriptor::max(count, sides))
    }

    /// Rolls `count` dice with `sides` faces and returns the worst one.
    pub fn worst(&mut self, count: NonZeroUInt, sides: NonZeroUInt) -> Int {
        self.roll(&RollDescriptor::min(count, sides))
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::roller::StepRoller;
    use crate::test_strategies::descriptor_strategy;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn nz(x: UInt) -> NonZeroUInt {
        NonZeroUInt::new(x).unwrap()
    }

    fn check(dice: RollDescriptor, roller: StepRoller, expected: Int, expected_dice: &[Int]) {
        let mut ctx = RollContext::new(roller);
        let mut seen = vec![];
        let actual = ctx.roll_with_observer(&dice, |die| seen.push(die));
        assert_eq!(actual, expected, "rolling {}", dice);
        assert_eq!(seen, expected_dice, "rolling {}", dice);
        assert_eq!(ctx.into_roller().draws, expected_dice.len());
    }

    #[test]
    fn test_roll_sum() {
        check(RollDescriptor::sum(nz(3), nz(6)), StepRoller::new(0, 1), 6, &[1, 2, 3]);
        check(RollDescriptor::sum(nz(2), nz(10)), StepRoller::new(9, 3), 10 + 3, &[10, 3]);
        check(RollDescriptor::sum(nz(5), nz(1)), StepRoller::new(7, 11), 5, &[1; 5]);
    }

    #[test]
    fn test_roll_fudge() {
        check(RollDescriptor::fudge(nz(4)), StepRoller::new(0, 1), -1, &[-1, 0, 1, -1]);
        check(RollDescriptor::fudge(nz(3)), StepRoller::new(2, 3), 3, &[1, 1, 1]);
    }

    #[test]
    fn test_roll_max() {
        check(RollDescriptor::max(nz(3), nz(20)), StepRoller::new(13, 5), 19, &[14, 19, 4]);
        check(RollDescriptor::max(nz(3), nz(20)), StepRoller::new(5, 0), 6, &[6, 6, 6]);
        check(RollDescriptor::max(nz(1), nz(1)), StepRoller::new(0, 0), 1, &[1]);
    }

    #[test]
    fn test_roll_min() {
        check(RollDescriptor::min(nz(3), nz(20)), StepRoller::new(13, 5), 4, &[14, 19, 4]);
        check(RollDescriptor::min(nz(1), nz(20)), StepRoller::new(19, 0), 20, &[20]);
        check(RollDescriptor::min(nz(2), nz(20)), StepRoller::new(0, 0), 1, &[1, 1]);
    }

    #[test]
    fn test_direct_rolls() {
        let mut ctx = RollContext::new(StepRoller::new(0, 1));
        assert_eq!(ctx.sum(nz(2), nz(10)), 1 + 2);
        assert_eq!(ctx.fudge(nz(2)), 1 - 1);
        assert_eq!(ctx.best(nz(2), nz(20)), 6);
        assert_eq!(ctx.worst(nz(2), nz(20)), 7);
    }

    #[test]
    fn test_roll_default_context() {
        let mut ctx = RollContext::default();
        for _ in 0..100 {
            let x = ctx.sum(nz(1), nz(6));
            assert!((1..=6).contains(&x));
        }
    }

    proptest! {
        #[test]
        fn test_roll_is_deterministic(seed: u64, dice in descriptor_strategy()) {
            let (mut first, mut second) = (vec![], vec![]);
            let a = roll_with_observer(&dice, &mut ChaCha8Rng::seed_from_u64(seed), |x| first.push(x));
            let b = roll_with_observer(&dice, &mut ChaCha8Rng::seed_from_u64(seed), |x| second.push(x));
            prop_assert_eq!(a, b);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_observer_does_not_change_result(seed: u64, dice in descriptor_strategy()) {
            let mut seen = vec![];
            let observed = roll_with_observer(&dice, &mut ChaCha8Rng::seed_from_u64(seed), |x| seen.push(x));
            let plain = roll(&dice, &mut ChaCha8Rng::seed_from_u64(seed));
            prop_assert_eq!(observed, plain);
            prop_assert_eq!(seen.len() as UInt, dice.count().get());

            let expected = match dice.variant() {
                Variant::Sum | Variant::Fudge => seen.iter().sum(),
                Variant::Max => *seen.iter().max().unwrap(),
                Variant::Min => *seen.iter().min().unwrap(),
            };
            prop_assert_eq!(observed, expected);
        }

        #[test]
        fn test_roll_ranges(seed: u64) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let d6 = roll(&RollDescriptor::sum(nz(1), nz(6)), &mut rng);
            prop_assert!((1..=6).contains(&d6));
            let fudge = roll(&RollDescriptor::fudge(nz(4)), &mut rng);
            prop_assert!((-4..=4).contains(&fudge));
            let sum = roll(&RollDescriptor::sum(nz(7), nz(12)), &mut rng);
            prop_assert!((7..=84).contains(&sum));
        }

        #[test]
        fn test_max_and_min_pick_from_two_draws(seed: u64) {
            let twenty = nz(20);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let first = Int::from(rng.draw(twenty)) + 1;
            let second = Int::from(rng.draw(twenty)) + 1;

            let best = roll(&RollDescriptor::max(nz(2), twenty), &mut ChaCha8Rng::seed_from_u64(seed));
            let worst = roll(&RollDescriptor::min(nz(2), twenty), &mut ChaCha8Rng::seed_from_u64(seed));
            prop_assert_eq!(best, first.max(second));
            prop_assert_eq!(worst, first.min(second));
        }
    }
}
