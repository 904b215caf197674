use async_trait::async_trait;

use super::error::{CommandError, CommandOutcome};
use super::registry::{Command, CommandContext, CommandResult};
use crate::archive;

/// Unpacks an archive into the working directory.
pub struct ExtractCommand;

#[async_trait]
impl Command for ExtractCommand {
    fn name(&self) -> &str {
        "extract"
    }

    fn usage(&self) -> &'static str {
        "extract <archive>"
    }

    fn min_args(&self) -> usize {
        1
    }

    async fn execute(
        &self,
        args: Vec<String>,
        context: &mut CommandContext,
    ) -> CommandOutcome<CommandResult> {
        self.check_args(&args)?;
        let archive_name = &args[1];

        archive::unpack(&context.resolve(archive_name), &context.working_directory)
            .map_err(|e| CommandError::operation("Error extracting archive", e))?;

        Ok(CommandResult::Success(format!(
            "Archive '{}' extracted successfully.",
            archive_name
        )))
    }
}
