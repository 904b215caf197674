use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use super::error::{CommandError, CommandOutcome};
use super::registry::{Command, CommandContext, CommandResult};

pub struct DeleteCommand;

impl DeleteCommand {
    async fn delete(&self, path: &Path) -> Result<()> {
        fs::remove_file(path)
            .await
            .with_context(|| format!("Failed to remove '{}'", path.display()))
    }
}

#[async_trait]
impl Command for DeleteCommand {
    fn name(&self) -> &str {
        "delete"
    }

    fn usage(&self) -> &'static str {
        "delete <file_name>"
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
        let file_name = &args[1];

        self.delete(&context.resolve(file_name))
            .await
            .map_err(|e| CommandError::operation("Error deleting file", e))?;

        Ok(CommandResult::Success(format!(
            "File '{}' deleted successfully.",
            file_name
        )))
    }
}
