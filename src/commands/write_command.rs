use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use super::error::{CommandError, CommandOutcome};
use super::registry::{Command, CommandContext, CommandResult};

pub struct WriteCommand;

impl WriteCommand {
    async fn write(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write '{}'", path.display()))
    }
}

#[async_trait]
impl Command for WriteCommand {
    fn name(&self) -> &str {
        "write"
    }

    fn usage(&self) -> &'static str {
        "write <file_name> <content>"
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
        let file_name = &args[1];
        let content = args[2..].join(" ");

        self.write(&context.resolve(file_name), &content)
            .await
            .map_err(|e| CommandError::operation("Error writing to file", e))?;

        Ok(CommandResult::Success(format!(
            "File '{}' written successfully.",
            file_name
        )))
    }
}
