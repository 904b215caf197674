use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use super::error::{CommandError, CommandOutcome};
use super::registry::{Command, CommandContext, CommandResult};

pub struct ListCommand;

impl ListCommand {
    /// Entry names of `dir`, hidden ones included, sorted by name.
    async fn entries(&self, dir: &Path) -> Result<Vec<String>> {
        let mut entries = fs::read_dir(dir)
            .await
            .with_context(|| format!("Failed to read directory '{}'", dir.display()))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .context("Failed to read directory entry")?
        {
            names.push(entry.file_name().to_string_lossy().to_string());
        }

        names.sort();
        Ok(names)
    }
}

#[async_trait]
impl Command for ListCommand {
    fn name(&self) -> &str {
        "list"
    }

    fn usage(&self) -> &'static str {
        "list"
    }

    fn min_args(&self) -> usize {
        0
    }

    async fn execute(
        &self,
        args: Vec<String>,
        context: &mut CommandContext,
    ) -> CommandOutcome<CommandResult> {
        self.check_args(&args)?;
        let names = self
            .entries(&context.working_directory)
            .await
            .map_err(|e| CommandError::operation("Error listing files", e))?;

        let mut output = String::from("Files in current directory:");
        for name in names {
            output.push('\n');
            output.push_str(&name);
        }

        Ok(CommandResult::Success(output))
    }
}
