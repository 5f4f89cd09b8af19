//! Password, passphrase and PIN generation.

use std::collections::HashSet;
use std::hash::Hash;

use super::charset::{Class, Classes, Pools};
use super::error::{Error, Result};
use super::plan::plan;
use super::sample::{draw_one, insert_at};
use super::wordlist::Wordlist;
use crate::random::RandomSource;

/// Draws allowed per slot, as a multiple of the pool size, before giving up
/// on finding an unused unit.
pub const RETRY_FACTOR: usize = 64;

/// Generation engine over a fixed set of pools and an optional wordlist.
#[derive(Debug, Clone)]
pub struct Generator {
    pools: Pools,
    wordlist: Option<Wordlist>,
}

impl Generator {
    pub fn new(pools: Pools, wordlist: Wordlist) -> Self {
        Self {
            pools,
            wordlist: Some(wordlist),
        }
    }

    /// Generator for random passwords and PINs only; passphrases fail with
    /// [`Error::EmptyWordlist`].
    pub fn characters(pools: Pools) -> Self {
        Self {
            pools,
            wordlist: None,
        }
    }

    /// Memorable passphrase of `word_count` words joined by `separator`.
    pub fn human<R>(
        &self,
        rng: &mut R,
        word_count: usize,
        separator: &str,
        capitalize: bool,
        allow_repeat: bool,
    ) -> Result<String>
    where
        R: RandomSource + ?Sized,
    {
        let Some(wordlist) = &self.wordlist else {
            return Err(Error::EmptyWordlist);
        };
        let words = wordlist.as_slice();
        if !allow_repeat && word_count > words.len() {
            return Err(Error::TooManyUnits {
                unit: "word",
                requested: word_count,
                available: words.len(),
            });
        }

        let mut selected: Vec<&str> = Vec::with_capacity(word_count);
        let mut used = HashSet::with_capacity(if allow_repeat { 0 } else { word_count });
        for _ in 0..word_count {
            let word = draw_fresh(rng, words, &used, allow_repeat, "word")?;
            if !allow_repeat {
                used.insert(word);
            }
            selected.push(word.as_str());
        }

        let joined = selected.join(separator);
        if capitalize {
            Ok(title_case(&joined))
        } else {
            Ok(joined)
        }
    }

    /// Random password of exactly `length` characters drawing from lowercase
    /// plus the enabled classes, each enabled class appearing at least once.
    pub fn random<R>(
        &self,
        rng: &mut R,
        length: usize,
        classes: Classes,
        allow_repeat: bool,
    ) -> Result<String>
    where
        R: RandomSource + ?Sized,
    {
        let sizes = self.pools.sizes(classes);
        let available: usize = sizes.iter().sum();
        if !allow_repeat && length > available {
            return Err(Error::TooManyUnits {
                unit: "character",
                requested: length,
                available,
            });
        }

        let mut plan = plan(length, sizes)?;
        if !allow_repeat {
            plan.fit_within(sizes);
        }
        debug_assert_eq!(plan.total(), length);

        let mut result = Vec::with_capacity(length);
        let mut used = HashSet::with_capacity(if allow_repeat { 0 } else { length });
        for class in Class::ALL {
            let pool = self.pools.get(class).as_slice();
            for _ in 0..plan.count(class) {
                let c = draw_fresh(rng, pool, &used, allow_repeat, "character")?;
                if !allow_repeat {
                    used.insert(c);
                }
                insert_at(rng, &mut result, *c);
            }
        }

        Ok(result.into_iter().collect())
    }

    /// Numeric PIN of exactly `length` digits.
    pub fn pin<R>(&self, rng: &mut R, length: usize, allow_repeat: bool) -> Result<String>
    where
        R: RandomSource + ?Sized,
    {
        let digits = self.pools.get(Class::Digit).as_slice();
        if !allow_repeat && length > digits.len() {
            return Err(Error::TooManyUnits {
                unit: "digit",
                requested: length,
                available: digits.len(),
            });
        }

        let mut result = Vec::with_capacity(length);
        let mut used = HashSet::with_capacity(if allow_repeat { 0 } else { length });
        for _ in 0..length {
            let d = draw_fresh(rng, digits, &used, allow_repeat, "digit")?;
            if !allow_repeat {
                used.insert(d);
            }
            insert_at(rng, &mut result, *d);
        }

        Ok(result.into_iter().collect())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(Pools::default(), Wordlist::eff_large())
    }
}

/// Draw from `pool`, redrawing while the result is already in `used`.
fn draw_fresh<'a, T, R>(
    rng: &mut R,
    pool: &'a [T],
    used: &HashSet<&'a T>,
    allow_repeat: bool,
    unit: &'static str,
) -> Result<&'a T>
where
    T: Eq + Hash,
    R: RandomSource + ?Sized,
{
    if allow_repeat {
        return Ok(draw_one(rng, pool));
    }

    let attempts = pool.len().saturating_mul(RETRY_FACTOR);
    for _ in 0..attempts {
        let candidate = draw_one(rng, pool);
        if !used.contains(candidate) {
            return Ok(candidate);
        }
    }
    Err(Error::RetryExhausted { unit, attempts })
}

/// Uppercase the first letter of every word; a word starts after any
/// character that is not a letter or digit.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_boundary = true;
    for c in s.chars() {
        if at_boundary && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_boundary = !c.is_alphanumeric();
    }
    out
}
