//! Password, passphrase and PIN generation.

mod charset;
mod error;
mod generate;
mod plan;
mod request;
mod sample;
mod wordlist;

pub use charset::{Classes, Pools, SYMBOLS};
pub use error::Error;
pub use generate::Generator;
pub use request::{Mode, Request};
pub use wordlist::Wordlist;
