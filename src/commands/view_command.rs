use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use super::error::{CommandError, CommandOutcome};
use super::registry::{Command, CommandContext, CommandResult};

pub struct ViewCommand;

impl ViewCommand {
    async fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read '{}'", path.display()))
    }
}

#[async_trait]
impl Command for ViewCommand {
    fn name(&self) -> &str {
        "view"
    }

    fn usage(&self) -> &'static str {
        "view <file_name>"
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

        let content = self
            .read(&context.resolve(file_name))
            .await
            .map_err(|e| CommandError::operation("Error viewing file", e))?;

        Ok(CommandResult::Success(format!(
            "Contents of '{}':\n{}",
            file_name, content
        )))
    }
}
