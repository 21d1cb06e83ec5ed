//! Interactive numbered menu over standard input/output.

mod error;
mod menu;

pub use error::CliError;
pub use menu::Menu;
