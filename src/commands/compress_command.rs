use async_trait::async_trait;

use super::error::{CommandError, CommandOutcome};
use super::registry::{Command, CommandContext, CommandResult};
use crate::archive;
use crate::console::console;

/// Zips a directory tree. `.zip` is always appended to the destination name.
pub struct CompressCommand;

#[async_trait]
impl Command for CompressCommand {
    fn name(&self) -> &str {
        "compress"
    }

    fn usage(&self) -> &'static str {
        "compress <source> <destination>"
    }

    fn min_args(&self) -> usize {
        2
    }

    async fn execute(
        &self,
        args: Vec<String>,
        context: &mut CommandContext,
    ) -> CommandOutcome<CommandResult> {
        self.check_args(&args)?;
        let source = &args[1];
        let archive_name = format!("{}.zip", args[2]);

        let entries = archive::create_zip(&context.resolve(source), &context.resolve(&archive_name))
            .map_err(|e| CommandError::operation("Error compressing directory", e))?;
        console().verbose(&format!("Wrote {} entries to {}", entries, archive_name));

        Ok(CommandResult::Success(format!(
            "Directory '{}' compressed to '{}' successfully.",
            source, archive_name
        )))
    }
}
