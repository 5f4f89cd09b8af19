//! Passphrase wordlists.

use std::collections::HashSet;

use chbs::word::BUILTIN_EFF_LARGE;

use super::error::{Error, Result};

/// Ordered list of distinct candidate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Build a wordlist, dropping repeated entries after their first occurrence.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| !w.is_empty())
            .filter(|w| seen.insert(w.clone()))
            .collect();

        if words.is_empty() {
            return Err(Error::EmptyWordlist);
        }
        Ok(Self { words })
    }

    /// The EFF large wordlist (7776 words).
    pub fn eff_large() -> Self {
        Self::new(BUILTIN_EFF_LARGE.lines()).expect("builtin wordlist is not empty")
    }

    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eff_large_is_loaded() {
        let list = Wordlist::eff_large();
        assert_eq!(list.as_slice().len(), 7776);
        assert!(list.as_slice().iter().all(|w| !w.is_empty() && w.trim() == w));
    }

    #[test]
    fn duplicates_are_dropped_in_order() {
        let list = Wordlist::new(["bravo", "alpha", "bravo", "", "charlie"]).unwrap();
        assert_eq!(list.as_slice(), &["bravo", "alpha", "charlie"]);
    }

    #[test]
    fn empty_wordlist_is_rejected() {
        assert_eq!(Wordlist::new(Vec::<String>::new()), Err(Error::EmptyWordlist));
        assert_eq!(Wordlist::new([""]), Err(Error::EmptyWordlist));
    }
}
