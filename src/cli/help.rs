use super::flags::Subcommand;
use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help(subcommand: Option<Subcommand>) {
    match subcommand {
        None => print_main_help(),
        Some(Subcommand::Human) => print_human_help(),
        Some(Subcommand::Random) => print_random_help(),
        Some(Subcommand::Pin) => print_pin_help(),
    }
}

fn print_main_help() {
    box_top("pwgenie");
    box_line_center("Password, passphrase and PIN generator");
    box_line("");
    box_line("USAGE:");
    box_line("  pwgenie [OPTIONS] <SUBCOMMAND> [SUBCOMMAND-OPTIONS]");
    box_line("");
    box_line("SUBCOMMANDS:");
    box_opt("  human", "Human-friendly memorable passphrase");
    box_opt("  random", "Random password with chosen complexity");
    box_opt("  pin", "Random numeric PIN code");
    box_line("");
    box_line("OPTIONS:");
    print_global_opts();
    box_line("");
    box_line("EXAMPLES:");
    box_line("  $ pwgenie human");
    box_line("  trade clash striking underdog arbitrate");
    box_line("  $ pwgenie human --sep -");
    box_line("  preplan-mousiness-joining-eskimo-linguist");
    box_line("  $ pwgenie random --symbol --digit --upper");
    box_line("  _U*HkTzA");
    box_line("");
    box_line("Run a subcommand with -h for its options.");
    box_bottom();
}

fn print_global_opts() {
    box_opt("  -r, --allow-repeat", "Allow repeated characters or words");
    box_opt("      --no-clipboard", "Do not copy the result to the clipboard");
    box_opt("  -u, --urandom", "Draw every number from the OS generator");
    box_opt("  -n, --number <N>", "Generate N results, one per line (default: 1)");
    box_opt("  -q, --quiet", "Suppress warnings and confirmations");
    box_opt("      --save", "Save this invocation's options as defaults");
    box_opt("      --defaults", "Ignore saved defaults for this run");
    box_opt("  -h, --help", "Show help");
    box_opt("  -v, --version", "Show version");
}

fn print_human_help() {
    box_top("pwgenie human");
    box_line_center("Generate a human-friendly memorable password");
    box_line("");
    box_opt("  --words <N>", "Number of words (default: 5)");
    box_opt("  --sep <S>", "Separator between words (default: space)");
    box_opt("  --cap", "Capitalize every word");
    box_bottom();
}

fn print_random_help() {
    box_top("pwgenie random");
    box_line_center("Generate a random password with specified complexity");
    box_line("");
    box_opt("  -l, --length <N>", "Number of characters (default: 8)");
    box_opt("  --upper", "Include upper-case letters");
    box_opt("  --digit", "Include digits");
    box_opt("  --symbol", "Include symbols");
    box_opt("  --symbols <CHARS>", "Replace the symbol set");
    box_bottom();
}

fn print_pin_help() {
    box_top("pwgenie pin");
    box_line_center("Generate a random numeric PIN code");
    box_line("");
    box_opt("  -l, --length <N>", "Number of digits (default: 6)");
    box_bottom();
}
