use std::env;
use std::process;

mod cli;
mod exits;
mod logging;
mod pass;
mod random;
mod settings;
mod terminal;

fn main() {
    exits::install_handlers();
    exits::harden();

    let args: Vec<String> = env::args().collect();
    process::exit(cli::run(args));
}
