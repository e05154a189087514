// appgen CLI library

pub mod commands;
pub mod completion;
pub mod error;
pub mod logging;
pub mod output;
pub mod router;

pub use completion::{generate_completions, write_completions};
pub use error::{CliError, CliResult};
pub use logging::{init_logging, VerbosityLevel};
pub use router::{Cli, CommandRouter, Commands};
