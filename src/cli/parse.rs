use thiserror::Error;

use super::flags::{CliFlags, Subcommand};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("{arg} is not an option of '{subcommand}'")]
    NotForSubcommand { arg: String, subcommand: String },
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();

        if flags.subcommand.is_none()
            && let Some(subcommand) = Subcommand::from_arg(arg)
        {
            flags.subcommand = Some(subcommand);
            i += 1;
            continue;
        }

        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-u" | "--urandom" => flags.urandom = true,
            "-r" | "--allow-repeat" => flags.allow_repeat = true,
            "--no-clipboard" => flags.no_clipboard = true,
            "--save" => flags.save = true,
            "--defaults" => flags.defaults = true,
            "-n" | "--number" => flags.number = Some(number(args, &mut i)?),
            "--words" => {
                only_for(&flags, arg, &[Subcommand::Human])?;
                flags.words = Some(number(args, &mut i)?);
            }
            "--sep" => {
                only_for(&flags, arg, &[Subcommand::Human])?;
                flags.separator = Some(value(args, &mut i)?.to_string());
            }
            "--cap" => {
                only_for(&flags, arg, &[Subcommand::Human])?;
                flags.capitalize = true;
            }
            "-l" | "--length" => {
                only_for(&flags, arg, &[Subcommand::Random, Subcommand::Pin])?;
                flags.length = Some(number(args, &mut i)?);
            }
            "--upper" => {
                only_for(&flags, arg, &[Subcommand::Random])?;
                flags.upper = true;
            }
            "--digit" => {
                only_for(&flags, arg, &[Subcommand::Random])?;
                flags.digit = true;
            }
            "--symbol" => {
                only_for(&flags, arg, &[Subcommand::Random])?;
                flags.symbol = true;
            }
            "--symbols" => {
                only_for(&flags, arg, &[Subcommand::Random])?;
                flags.symbols = Some(value(args, &mut i)?.to_string());
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

/// Take the argument after `args[*i]`, advancing `i` onto it.
fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number(args: &[String], i: &mut usize) -> Result<usize, ParseError> {
    let raw = value(args, i)?;
    raw.parse()
        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))
}

fn only_for(flags: &CliFlags, arg: &str, allowed: &[Subcommand]) -> Result<(), ParseError> {
    match flags.subcommand {
        Some(subcommand) if allowed.contains(&subcommand) => Ok(()),
        Some(subcommand) => Err(ParseError::NotForSubcommand {
            arg: arg.to_string(),
            subcommand: format!("{subcommand:?}").to_lowercase(),
        }),
        None => Err(ParseError::UnknownArg(arg.to_string())),
    }
}
