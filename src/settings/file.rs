//! Settings file persistence.
//!
//! One line of comma-separated fields. `|` escapes a literal `,` or `|`
//! inside a field, so separators and symbol sets round-trip.

use std::env;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;

const FIELDS: usize = 11;

pub fn save(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{},{},{},{},{},{},{}\n",
        settings.words,
        escape(&settings.separator),
        settings.capitalize,
        settings.length,
        settings.upper,
        settings.digit,
        settings.symbol,
        settings.pin_length,
        settings.allow_repeat,
        settings.clipboard,
        escape(&settings.symbols),
    );

    file.write_all(data.as_bytes())
}

pub fn load(path: &Path, settings: &mut Settings) -> io::Result<()> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "creating settings file");
        return save(path, settings);
    }

    let mut reader = BufReader::new(File::open(path)?);
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let line = line.trim_end_matches(['\r', '\n']);

    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        tracing::warn!(
            path = %path.display(),
            fields = parts.len(),
            "settings file is malformed, rewriting defaults"
        );
        return save(path, settings);
    }

    settings.words = parts[0].parse().unwrap_or(settings.words);
    settings.separator = parts[1].clone();
    settings.capitalize = parts[2].parse().unwrap_or(settings.capitalize);
    settings.length = parts[3].parse().unwrap_or(settings.length);
    settings.upper = parts[4].parse().unwrap_or(settings.upper);
    settings.digit = parts[5].parse().unwrap_or(settings.digit);
    settings.symbol = parts[6].parse().unwrap_or(settings.symbol);
    settings.pin_length = parts[7].parse().unwrap_or(settings.pin_length);
    settings.allow_repeat = parts[8].parse().unwrap_or(settings.allow_repeat);
    settings.clipboard = parts[9].parse().unwrap_or(settings.clipboard);
    if !parts[10].is_empty() {
        settings.symbols = parts[10].clone();
    }

    Ok(())
}

#[inline]
pub fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/pwgenie/settings")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ',' || c == '|' {
            out.push('|');
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("nested/settings")
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn escaped_fields_survive_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);

        let settings = Settings {
            words: 7,
            separator: String::from(", "),
            capitalize: true,
            allow_repeat: true,
            symbols: String::from("|,!"),
            ..Default::default()
        };
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn default_separator_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);

        Settings::default().save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap().separator, " ");
    }

    #[test]
    fn malformed_file_is_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "1,2,3\n").unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
        let rewritten = fs::read_to_string(&path).unwrap();
        assert_eq!(split_escaped(rewritten.trim_end(), ',').len(), FIELDS);
    }

    #[test]
    fn bad_values_fall_back_per_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "lots,-,yes,12,true,true,nope,4,false,false,\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.words, 5);
        assert_eq!(settings.separator, "-");
        assert!(!settings.capitalize);
        assert_eq!(settings.length, 12);
        assert!(settings.upper && settings.digit && !settings.symbol);
        assert_eq!(settings.pin_length, 4);
        assert!(!settings.clipboard);
        assert_eq!(settings.symbols, crate::pass::SYMBOLS);
    }

    #[test]
    fn split_keeps_empty_fields() {
        assert_eq!(split_escaped("a,,b|,c,", ','), ["a", "", "b,c", ""]);
        assert_eq!(split_escaped("||", ','), ["|"]);
    }
}
