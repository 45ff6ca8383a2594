//! Commands shipped with the console.
//!
//! `index` and `help` are always available: the console registers them on
//! dispatch when nothing else is bound under those names. `inspect` is
//! opt-in.

mod help;
mod index;
mod inspect;

pub use help::HelpCommand;
pub use index::IndexCommand;
pub use inspect::InspectCommand;

/// Name dispatched when the command line carries no command.
pub const INDEX: &str = "index";

/// Name of the built-in usage command.
pub const HELP: &str = "help";
