//! CLI context - bundles settings and flags, runs one generation.

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use zeroize::{Zeroize, Zeroizing};

use super::flags::{CliFlags, Subcommand};
use super::prompts;
use crate::exits;
use crate::pass::{self, Classes, Generator, Mode, Pools, Request, Wordlist};
use crate::random::Entropy;
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Generate(#[from] pass::Error),
    #[error("Failed to save settings: {0}")]
    Settings(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Generate(pass::Error::InvalidPool { .. }) => exits::USAGE,
            CliError::Generate(_) => exits::FAILURE,
            CliError::Settings(_) => exits::FAILURE,
        }
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    subcommand: Subcommand,
}

impl Context {
    pub fn new(flags: CliFlags, subcommand: Subcommand) -> Self {
        let settings = if flags.defaults {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        };

        Self {
            settings,
            flags,
            subcommand,
        }
    }

    /// Run one invocation: generate, print, copy, and optionally save.
    pub fn run(&mut self) -> Result<(), CliError> {
        let request = self.request();
        let symbols = self.symbols().to_string();
        let entropy = if self.flags.urandom {
            Entropy::Os
        } else {
            Entropy::Thread
        };
        let count = self.flags.number.unwrap_or(1).max(1);

        tracing::debug!(
            mode = request.mode.name(),
            allow_repeat = request.allow_repeat,
            source = entropy.name(),
            count,
            "generating"
        );

        let generator = generator_for(&request.mode, &symbols)?;

        let mut output = Zeroizing::new(String::new());
        for _ in 0..count {
            let mut rng = entropy.source();
            let secret = Zeroizing::new(generator.generate(&mut rng, &request)?);
            output.push_str(&secret);
            output.push('\n');
        }

        print!("{}", output.as_str());
        if self.clipboard() {
            copy_to_clipboard(output.trim_end_matches('\n'));
        }

        if self.flags.save {
            self.save(&request, symbols)?;
        }
        Ok(())
    }

    /// Merge command-line flags over saved settings.
    pub fn request(&self) -> Request {
        let flags = &self.flags;
        let settings = &self.settings;

        let mode = match self.subcommand {
            Subcommand::Human => Mode::Human {
                words: flags.words.unwrap_or(settings.words),
                separator: flags
                    .separator
                    .clone()
                    .unwrap_or_else(|| settings.separator.clone()),
                capitalize: flags.capitalize || settings.capitalize,
            },
            Subcommand::Random => Mode::Random {
                length: flags.length.unwrap_or(settings.length),
                classes: if flags.has_class_flags() {
                    Classes {
                        upper: flags.upper,
                        digit: flags.digit,
                        symbol: flags.symbol,
                    }
                } else {
                    Classes {
                        upper: settings.upper,
                        digit: settings.digit,
                        symbol: settings.symbol,
                    }
                },
            },
            Subcommand::Pin => Mode::Pin {
                length: flags.length.unwrap_or(settings.pin_length),
            },
        };

        Request {
            mode,
            allow_repeat: flags.allow_repeat || settings.allow_repeat,
        }
    }

    fn symbols(&self) -> &str {
        self.flags
            .symbols
            .as_deref()
            .unwrap_or(&self.settings.symbols)
    }

    fn clipboard(&self) -> bool {
        !self.flags.no_clipboard && self.settings.clipboard
    }

    /// Store the effective options of this run as the new defaults.
    fn save(&mut self, request: &Request, symbols: String) -> Result<(), CliError> {
        self.settings.allow_repeat = request.allow_repeat;
        self.settings.clipboard = self.clipboard();
        self.settings.symbols = symbols;
        match &request.mode {
            Mode::Human {
                words,
                separator,
                capitalize,
            } => {
                self.settings.words = *words;
                self.settings.separator = separator.clone();
                self.settings.capitalize = *capitalize;
            }
            Mode::Random { length, classes } => {
                self.settings.length = *length;
                self.settings.upper = classes.upper;
                self.settings.digit = classes.digit;
                self.settings.symbol = classes.symbol;
            }
            Mode::Pin { length } => self.settings.pin_length = *length,
        }

        self.settings.save_to_file()?;
        prompts::settings_saved(&Settings::path());
        Ok(())
    }
}

fn copy_to_clipboard(contents: &str) {
    let mut ctx = match ClipboardContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::debug!(error = %e, "no clipboard provider");
            prompts::clipboard_error(&e.to_string());
            return;
        }
    };

    match ctx.set_contents(contents.to_owned()) {
        Ok(_) => {
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            prompts::clipboard_copied();
        }
        Err(e) => prompts::clipboard_error(&e.to_string()),
    }
}

/// Build only what `mode` draws from: the symbol set is validated for random
/// passwords and the wordlist is loaded for passphrases.
fn generator_for(mode: &Mode, symbols: &str) -> Result<Generator, CliError> {
    let generator = match mode {
        Mode::Human { .. } => Generator::new(Pools::default(), Wordlist::eff_large()),
        Mode::Random { .. } => Generator::characters(Pools::with_symbols(symbols)?),
        Mode::Pin { .. } => Generator::characters(Pools::default()),
    };
    Ok(generator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse::parse;

    fn context(line: &str, settings: Settings) -> Context {
        let args: Vec<String> = std::iter::once("pwgenie")
            .chain(line.split_whitespace())
            .map(String::from)
            .collect();
        let flags = parse(&args).unwrap();
        let subcommand = flags.subcommand.unwrap();
        Context {
            settings,
            flags,
            subcommand,
        }
    }

    #[test]
    fn builtin_defaults() {
        let ctx = context("human", Settings::default());
        assert_eq!(
            ctx.request(),
            Request {
                mode: Mode::Human {
                    words: 5,
                    separator: " ".into(),
                    capitalize: false,
                },
                allow_repeat: false,
            }
        );

        let ctx = context("random", Settings::default());
        assert_eq!(
            ctx.request().mode,
            Mode::Random {
                length: 8,
                classes: Classes::default(),
            }
        );

        let ctx = context("pin", Settings::default());
        assert_eq!(ctx.request().mode, Mode::Pin { length: 6 });
    }

    #[test]
    fn flags_override_settings() {
        let settings = Settings {
            words: 3,
            separator: "_".into(),
            ..Default::default()
        };
        let ctx = context("-r human --words 9 --sep .", settings);
        let request = ctx.request();
        assert!(request.allow_repeat);
        assert_eq!(
            request.mode,
            Mode::Human {
                words: 9,
                separator: ".".into(),
                capitalize: false,
            }
        );
    }

    #[test]
    fn class_flags_replace_saved_classes() {
        let settings = Settings {
            upper: true,
            symbol: true,
            ..Default::default()
        };

        let ctx = context("random", settings.clone());
        assert_eq!(
            ctx.request().mode,
            Mode::Random {
                length: 8,
                classes: Classes {
                    upper: true,
                    digit: false,
                    symbol: true,
                },
            }
        );

        let ctx = context("random --digit", settings);
        assert_eq!(
            ctx.request().mode,
            Mode::Random {
                length: 8,
                classes: Classes {
                    upper: false,
                    digit: true,
                    symbol: false,
                },
            }
        );
    }

    #[test]
    fn clipboard_and_symbols_resolution() {
        let settings = Settings {
            symbols: "!@".into(),
            ..Default::default()
        };
        let ctx = context("--no-clipboard random", settings.clone());
        assert!(!ctx.clipboard());
        assert_eq!(ctx.symbols(), "!@");

        let ctx = context("random --symbols #", settings);
        assert!(ctx.clipboard());
        assert_eq!(ctx.symbols(), "#");
    }

    #[test]
    fn bad_saved_symbols_only_affect_random() {
        let settings = Settings {
            symbols: "aa".into(),
            ..Default::default()
        };

        let ctx = context("pin", settings.clone());
        let generator = generator_for(&ctx.request().mode, ctx.symbols()).unwrap();
        let mut rng = Entropy::Thread.source();
        assert_eq!(generator.generate(&mut rng, &ctx.request()).unwrap().len(), 6);

        let ctx = context("human", settings.clone());
        assert!(generator_for(&ctx.request().mode, ctx.symbols()).is_ok());

        let ctx = context("random", settings);
        let err = generator_for(&ctx.request().mode, ctx.symbols()).unwrap_err();
        assert_eq!(err.exit_code(), exits::USAGE);
    }

    #[test]
    fn invalid_symbols_are_usage_errors() {
        let err = CliError::from(Pools::with_symbols("aa").unwrap_err());
        assert_eq!(err.exit_code(), exits::USAGE);
        let err = CliError::from(pass::Error::LengthTooShort {
            length: 1,
            minimum: 2,
        });
        assert_eq!(err.exit_code(), exits::FAILURE);
    }
}
