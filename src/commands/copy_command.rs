use anyhow::{Result, bail};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::common::{copy_with_metadata, destination_for};
use super::error::{CommandError, CommandOutcome};
use super::registry::{Command, CommandContext, CommandResult};

/// Copies a file together with its permission bits and access/modification
/// times.
pub struct CopyCommand;

impl CopyCommand {
    async fn copy(&self, source: &Path, destination: &Path) -> Result<PathBuf> {
        let target = destination_for(source, destination).await;

        // copying a file onto itself would truncate it
        if let (Ok(a), Ok(b)) = (fs::canonicalize(source).await, fs::canonicalize(&target).await) {
            if a == b {
                bail!(
                    "'{}' and '{}' are the same file",
                    source.display(),
                    target.display()
                );
            }
        }

        copy_with_metadata(source, &target).await?;

        Ok(target)
    }
}

#[async_trait]
impl Command for CopyCommand {
    fn name(&self) -> &str {
        "copy"
    }

    fn usage(&self) -> &'static str {
        "copy <source_file> <destination_file>"
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
        let (source, destination) = (&args[1], &args[2]);

        self.copy(&context.resolve(source), &context.resolve(destination))
            .await
            .map_err(|e| CommandError::operation("Error copying file", e))?;

        Ok(CommandResult::Success(format!(
            "File '{}' copied to '{}' successfully.",
            source, destination
        )))
    }
}
