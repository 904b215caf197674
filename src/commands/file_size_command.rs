use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use super::error::{CommandError, CommandOutcome};
use super::registry::{Command, CommandContext, CommandResult};

pub struct FileSizeCommand;

impl FileSizeCommand {
    async fn size(&self, path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .await
            .with_context(|| format!("Failed to read metadata of '{}'", path.display()))?;
        Ok(metadata.len())
    }
}

#[async_trait]
impl Command for FileSizeCommand {
    fn name(&self) -> &str {
        "file_size"
    }

    fn usage(&self) -> &'static str {
        "file_size <file_name>"
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

        let size = self
            .size(&context.resolve(file_name))
            .await
            .map_err(|e| CommandError::operation("Error getting file size", e))?;

        Ok(CommandResult::Success(format!(
            "Size of '{}': {} bytes",
            file_name, size
        )))
    }
}
