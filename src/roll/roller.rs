use crate::common::{Int, NonZeroUInt, UInt};
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// Where die faces come from. Any `rand::Rng` works, so callers can pass a
/// seeded generator to make evaluations reproducible.
pub trait Roller {
    /// Rolls `count` dice, each landing in `1..=sides`.
    fn roll(&mut self, count: usize, sides: NonZeroUInt) -> Vec<Int>;
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, count: usize, sides: NonZeroUInt) -> Vec<Int> {
        let high = Int::try_from(sides.get()).unwrap_or(Int::MAX);
        Uniform::new_inclusive(1, high)
            .sample_iter(self)
            .take(count)
            .collect()
    }
}

/// Yields `initial, initial + step, ...`, each wrapped into `1..=sides`.
#[cfg(test)]
pub(crate) struct StepRoller {
    next: UInt,
    step: UInt,
}

#[cfg(test)]
impl StepRoller {
    pub fn new(initial: NonZeroUInt, step: UInt) -> Self {
        Self {
            next: initial.get(),
            step,
        }
    }
}

#[cfg(test)]
impl Roller for StepRoller {
    fn roll(&mut self, count: usize, sides: NonZeroUInt) -> Vec<Int> {
        (0..count)
            .map(|_| {
                let face = (self.next - 1) % sides.get() + 1;
                self.next += self.step;
                face as Int
            })
            .collect()
    }
}
