//! Command-line front end.

mod context;
mod flags;
mod help;
mod parse;
mod prompts;
mod quiet;

use context::Context;
use parse::parse;

use crate::{exits, logging};

/// Run the CLI and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let flags = match parse(&args) {
        Ok(flags) => flags,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::usage_hint();
            return exits::USAGE;
        }
    };

    quiet::set(flags.quiet);
    logging::init(flags.quiet);

    if flags.help {
        help::print_help(flags.subcommand);
        return exits::SUCCESS;
    }
    if flags.version {
        println!("pwgenie {}", env!("CARGO_PKG_VERSION"));
        return exits::SUCCESS;
    }

    let Some(subcommand) = flags.subcommand else {
        help::print_help(None);
        return exits::SUCCESS;
    };

    let mut context = Context::new(flags, subcommand);
    match context.run() {
        Ok(()) => exits::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "generation failed");
            prompts::error(&e.to_string());
            e.exit_code()
        }
    }
}
