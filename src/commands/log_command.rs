use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use super::error::{CommandError, CommandOutcome};
use super::registry::{Command, CommandContext, CommandResult};

pub const LOG_LINE: &str = "File executed\n";

/// Appends a fixed marker line to a file, creating it when missing.
pub struct LogCommand;

impl LogCommand {
    async fn append(&self, path: &Path) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .with_context(|| format!("Failed to open '{}'", path.display()))?;

        file.write_all(LOG_LINE.as_bytes())
            .await
            .with_context(|| format!("Failed to append to '{}'", path.display()))?;
        file.flush().await?;

        Ok(())
    }
}

#[async_trait]
impl Command for LogCommand {
    fn name(&self) -> &str {
        "log"
    }

    fn usage(&self) -> &'static str {
        "log <file_name>"
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

        self.append(&context.resolve(file_name))
            .await
            .map_err(|e| CommandError::operation("Error logging execution", e))?;

        Ok(CommandResult::Success(format!(
            "Execution logged to '{}' successfully.",
            file_name
        )))
    }
}
