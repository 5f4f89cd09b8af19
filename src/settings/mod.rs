//! Persisted generation defaults.

mod file;

use std::io;
use std::path::{Path, PathBuf};

use crate::pass::SYMBOLS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub words: usize,
    pub separator: String,
    pub capitalize: bool,
    pub length: usize,
    pub upper: bool,
    pub digit: bool,
    pub symbol: bool,
    pub pin_length: usize,
    pub allow_repeat: bool,
    pub clipboard: bool,
    pub symbols: String,
}

impl Settings {
    pub fn load_from_file() -> io::Result<Self> {
        Self::load_from(&file::get_path())
    }

    pub fn save_to_file(&self) -> io::Result<()> {
        self.save_to(&file::get_path())
    }

    /// Location of the settings file under `$HOME/.config`.
    pub fn path() -> PathBuf {
        file::get_path()
    }

    pub fn load_from(path: &Path) -> io::Result<Self> {
        let mut settings = Settings::default();
        file::load(path, &mut settings)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        file::save(path, self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            words: 5,
            separator: String::from(" "),
            capitalize: false,
            length: 8,
            upper: false,
            digit: false,
            symbol: false,
            pin_length: 6,
            allow_repeat: false,
            clipboard: true,
            symbols: String::from(SYMBOLS),
        }
    }
}
