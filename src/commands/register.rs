use anyhow::Result;
use std::sync::Arc;

use super::change_permissions_command::ChangePermissionsCommand;
use super::compare_command::CompareCommand;
use super::compress_command::CompressCommand;
use super::copy_command::CopyCommand;
use super::delete_command::DeleteCommand;
use super::extract_command::ExtractCommand;
use super::file_size_command::FileSizeCommand;
use super::list_command::ListCommand;
use super::log_command::LogCommand;
use super::move_command::MoveCommand;
use super::registry::CommandRegistry;
use super::run_command::RunCommand;
use super::search_command::SearchCommand;
use super::view_command::ViewCommand;
use super::write_command::WriteCommand;

/// Registers the built-in commands. The order here is the order the names
/// appear in the invalid-command message.
pub fn register_default_commands(registry: &mut CommandRegistry) -> Result<()> {
    registry.register(Arc::new(RunCommand))?;
    registry.register(Arc::new(WriteCommand))?;
    registry.register(Arc::new(DeleteCommand))?;
    registry.register(Arc::new(ListCommand))?;
    registry.register(Arc::new(ViewCommand))?;
    registry.register(Arc::new(CopyCommand))?;
    registry.register(Arc::new(MoveCommand))?;
    registry.register(Arc::new(SearchCommand))?;
    registry.register(Arc::new(CompressCommand))?;
    registry.register(Arc::new(ExtractCommand))?;
    registry.register(Arc::new(ChangePermissionsCommand))?;
    registry.register(Arc::new(FileSizeCommand))?;
    registry.register(Arc::new(CompareCommand))?;
    registry.register(Arc::new(LogCommand))?;
    Ok(())
}
