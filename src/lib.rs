pub mod archive;
pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod shell;

pub use commands::{Command, CommandContext, CommandError, CommandRegistry, CommandResult};
pub use config::ShellConfig;
pub use console::{Console, VerbosityLevel, console, init_console};
pub use shell::{Evaluation, Shell, tokenize};
