//! A single generation request.

use super::charset::Classes;
use super::error::Result;
use super::generate::Generator;
use crate::random::RandomSource;

/// What to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Memorable passphrase from the wordlist.
    Human {
        words: usize,
        separator: String,
        capitalize: bool,
    },
    /// Random characters from lowercase plus the enabled classes.
    Random { length: usize, classes: Classes },
    /// Digits only.
    Pin { length: usize },
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Human { .. } => "human",
            Mode::Random { .. } => "random",
            Mode::Pin { .. } => "pin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub mode: Mode,
    pub allow_repeat: bool,
}

impl Generator {
    /// Run one request against `rng`.
    pub fn generate<R>(&self, rng: &mut R, request: &Request) -> Result<String>
    where
        R: RandomSource + ?Sized,
    {
        match &request.mode {
            Mode::Human {
                words,
                separator,
                capitalize,
            } => self.human(rng, *words, separator, *capitalize, request.allow_repeat),
            Mode::Random { length, classes } => {
                self.random(rng, *length, *classes, request.allow_repeat)
            }
            Mode::Pin { length } => self.pin(rng, *length, request.allow_repeat),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::Error;

    #[test]
    fn dispatches_by_mode() {
        let generator = Generator::default();
        let mut rng = StdRng::seed_from_u64(1);

        let human = Request {
            mode: Mode::Human {
                words: 3,
                separator: "_".into(),
                capitalize: false,
            },
            allow_repeat: false,
        };
        assert_eq!(generator.generate(&mut rng, &human).unwrap().split('_').count(), 3);

        let random = Request {
            mode: Mode::Random {
                length: 12,
                classes: Classes::all(),
            },
            allow_repeat: false,
        };
        assert_eq!(generator.generate(&mut rng, &random).unwrap().chars().count(), 12);

        let pin = Request {
            mode: Mode::Pin { length: 6 },
            allow_repeat: true,
        };
        let out = generator.generate(&mut rng, &pin).unwrap();
        assert_eq!(out.len(), 6);
        assert!(out.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn passes_allow_repeat_through() {
        let generator = Generator::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut pin = Request {
            mode: Mode::Pin { length: 12 },
            allow_repeat: false,
        };
        assert!(matches!(
            generator.generate(&mut rng, &pin),
            Err(Error::TooManyUnits { .. })
        ));
        pin.allow_repeat = true;
        assert!(generator.generate(&mut rng, &pin).is_ok());
    }
}
