//! Character pools for password generation.

use std::collections::HashSet;
use std::fmt;

use super::error::{Error, Result};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "~!@#$%^&*()_+`-={}|[]\\:\"<>?,./";

/// Character class of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl Class {
    /// Fixed draw order.
    pub const ALL: [Class; 4] = [Class::Lower, Class::Upper, Class::Digit, Class::Symbol];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Class::Lower => 0,
            Class::Upper => 1,
            Class::Digit => 2,
            Class::Symbol => 3,
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Class::Lower => "lowercase",
            Class::Upper => "uppercase",
            Class::Digit => "digit",
            Class::Symbol => "symbol",
        })
    }
}

/// Classes enabled for a random password. Lowercase always participates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classes {
    pub upper: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl Classes {
    #[cfg(test)]
    pub const fn all() -> Self {
        Self {
            upper: true,
            digit: true,
            symbol: true,
        }
    }

    pub const fn contains(self, class: Class) -> bool {
        match class {
            Class::Lower => true,
            Class::Upper => self.upper,
            Class::Digit => self.digit,
            Class::Symbol => self.symbol,
        }
    }
}

/// An immutable alphabet of distinct characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    fn parse(class: Class, s: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidPool { class, reason };

        if s.is_empty() {
            return Err(invalid("no characters".into()));
        }

        let mut seen = HashSet::new();
        let mut chars = Vec::with_capacity(s.len());
        for c in s.chars() {
            if c.is_whitespace() || c.is_control() {
                return Err(invalid(format!("{c:?} is not printable")));
            }
            if !seen.insert(c) {
                return Err(invalid(format!("{c:?} appears more than once")));
            }
            chars.push(c);
        }

        Ok(Self { chars })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

/// The four pools, validated to be disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pools {
    pools: [CharacterPool; 4],
}

impl Pools {
    pub fn new(lower: &str, upper: &str, digits: &str, symbols: &str) -> Result<Self> {
        let pools = [
            CharacterPool::parse(Class::Lower, lower)?,
            CharacterPool::parse(Class::Upper, upper)?,
            CharacterPool::parse(Class::Digit, digits)?,
            CharacterPool::parse(Class::Symbol, symbols)?,
        ];

        for (i, pool) in pools.iter().enumerate() {
            for (j, other) in pools.iter().enumerate().skip(i + 1) {
                if let Some(&c) = pool.as_slice().iter().find(|&&c| other.contains(c)) {
                    return Err(Error::InvalidPool {
                        class: Class::ALL[j],
                        reason: format!("{c:?} is already in the {} pool", Class::ALL[i]),
                    });
                }
            }
        }

        Ok(Self { pools })
    }

    /// Built-in pools with a custom symbol set.
    pub fn with_symbols(symbols: &str) -> Result<Self> {
        Self::new(LOWERCASE, UPPERCASE, DIGITS, symbols)
    }

    #[inline]
    pub fn get(&self, class: Class) -> &CharacterPool {
        &self.pools[class.index()]
    }

    /// Pool sizes in [`Class::ALL`] order, zero for disabled classes.
    pub fn sizes(&self, enabled: Classes) -> [usize; 4] {
        Class::ALL.map(|c| {
            if enabled.contains(c) {
                self.get(c).len()
            } else {
                0
            }
        })
    }
}

impl Default for Pools {
    fn default() -> Self {
        let pool = |s: &str| CharacterPool {
            chars: s.chars().collect(),
        };
        Self {
            pools: [pool(LOWERCASE), pool(UPPERCASE), pool(DIGITS), pool(SYMBOLS)],
        }
    }
}
