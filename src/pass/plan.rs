//! Per-class length distribution for random passwords.

use super::charset::Class;
use super::error::{Error, Result};

/// How many characters to draw from each class, in [`Class::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionPlan {
    counts: [usize; 4],
}

impl DistributionPlan {
    #[inline]
    pub fn count(&self, class: Class) -> usize {
        self.counts[class.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Move counts that exceed their pool size onto classes with room left.
    ///
    /// Only needed when repeats are disallowed. The caller has already
    /// checked that the plan's total fits in the combined pools.
    pub fn fit_within(&mut self, sizes: [usize; 4]) {
        let mut excess = 0;
        for (count, &size) in self.counts.iter_mut().zip(&sizes) {
            if *count > size {
                excess += *count - size;
                *count = size;
            }
        }

        for (count, &size) in self.counts.iter_mut().zip(&sizes) {
            let take = excess.min(size - *count);
            *count += take;
            excess -= take;
        }

        debug_assert_eq!(excess, 0, "plan total exceeds combined pool size");
    }
}

/// Split `length` across classes in proportion to pool size.
///
/// `sizes` holds the pool size of each class in [`Class::ALL`] order, zero
/// for disabled classes. Lowercase always participates. Every enabled class
/// other than lowercase gets `max(1, floor(size * length / total))` slots and
/// lowercase takes the rest, which must leave it at least one.
pub fn plan(length: usize, sizes: [usize; 4]) -> Result<DistributionPlan> {
    debug_assert!(sizes[Class::Lower.index()] > 0, "lowercase pool is empty");

    let mut counts = shares(length, sizes);
    let others: usize = counts.iter().sum();
    if others >= length {
        return Err(Error::LengthTooShort {
            length,
            minimum: minimum_length(length, sizes),
        });
    }
    counts[Class::Lower.index()] = length - others;

    Ok(DistributionPlan { counts })
}

/// Slots for every enabled class except lowercase, which is left at zero.
fn shares(length: usize, sizes: [usize; 4]) -> [usize; 4] {
    let total: usize = sizes.iter().sum();
    let mut counts = [0usize; 4];
    for class in [Class::Upper, Class::Digit, Class::Symbol] {
        let size = sizes[class.index()];
        if size == 0 {
            continue;
        }
        let share = (size as u128 * length as u128 / total as u128) as usize;
        counts[class.index()] = share.max(1);
    }
    counts
}

/// Smallest length above `length` that leaves lowercase at least one slot.
///
/// Always terminates: the non-lowercase shares grow slower than the length
/// because the lowercase pool is never empty.
fn minimum_length(length: usize, sizes: [usize; 4]) -> usize {
    let enabled = sizes.iter().filter(|&&s| s > 0).count();
    let mut candidate = length.saturating_add(1).max(enabled);
    while shares(candidate, sizes).iter().sum::<usize>() >= candidate {
        candidate += 1;
    }
    candidate
}
