mod change_permissions_command;
mod common;
mod compare_command;
mod compress_command;
mod copy_command;
mod delete_command;
mod error;
mod extract_command;
mod file_size_command;
mod list_command;
mod log_command;
mod move_command;
mod register;
mod registry;
mod run_command;
mod search_command;
mod view_command;
mod write_command;

pub use change_permissions_command::parse_mode;
pub use error::{CommandError, CommandOutcome};
pub use register::register_default_commands;
pub use registry::{Command, CommandContext, CommandRegistry, CommandResult, EXIT_KEYWORD};
