/// Subcommand selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    Human,
    Random,
    Pin,
}

impl Subcommand {
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "human" => Some(Subcommand::Human),
            "random" => Some(Subcommand::Random),
            "pin" => Some(Subcommand::Pin),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub urandom: bool,
    pub allow_repeat: bool,
    pub no_clipboard: bool,
    pub save: bool,
    pub defaults: bool,
    pub number: Option<usize>,
    pub subcommand: Option<Subcommand>,
    // human
    pub words: Option<usize>,
    pub separator: Option<String>,
    pub capitalize: bool,
    // random / pin
    pub length: Option<usize>,
    pub upper: bool,
    pub digit: bool,
    pub symbol: bool,
    pub symbols: Option<String>,
}

impl CliFlags {
    /// True when any class flag was given, which replaces the saved class
    /// selection rather than adding to it.
    pub fn has_class_flags(&self) -> bool {
        self.upper || self.digit || self.symbol
    }
}
