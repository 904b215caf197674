use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use super::error::{CommandError, CommandOutcome};
use super::registry::{Command, CommandContext, CommandResult};

/// Text comparison of two whole files. Both are read fully into memory.
pub struct CompareCommand;

impl CompareCommand {
    async fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read '{}'", path.display()))
    }

    async fn identical(&self, first: &Path, second: &Path) -> Result<bool> {
        let first = self.read(first).await?;
        let second = self.read(second).await?;
        Ok(first == second)
    }
}

#[async_trait]
impl Command for CompareCommand {
    fn name(&self) -> &str {
        "compare"
    }

    fn usage(&self) -> &'static str {
        "compare <file1> <file2>"
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
        let identical = self
            .identical(&context.resolve(&args[1]), &context.resolve(&args[2]))
            .await
            .map_err(|e| CommandError::operation("Error comparing files", e))?;

        let verdict = if identical {
            "Files are identical."
        } else {
            "Files are different."
        };
        Ok(CommandResult::Success(verdict.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    async fn compare(context: &mut CommandContext, line: &str) -> CommandResult {
        CompareCommand.execute(args(line), context).await.unwrap()
    }

    #[tokio::test]
    async fn test_compare_is_reflexive_and_symmetric() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("one.txt"), "alpha").unwrap();
        std::fs::write(temp_dir.path().join("two.txt"), "beta").unwrap();
        let mut context = CommandContext::new().with_working_directory(temp_dir.path().to_path_buf());

        let identical = CommandResult::Success("Files are identical.".to_string());
        let different = CommandResult::Success("Files are different.".to_string());

        assert_eq!(compare(&mut context, "compare one.txt one.txt").await, identical);
        assert_eq!(compare(&mut context, "compare one.txt two.txt").await, different);
        assert_eq!(compare(&mut context, "compare two.txt one.txt").await, different);
    }

    #[tokio::test]
    async fn test_same_bytes_under_different_names_are_identical() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("left"), "same\ncontent\n").unwrap();
        std::fs::write(temp_dir.path().join("right"), "same\ncontent\n").unwrap();
        let mut context = CommandContext::new().with_working_directory(temp_dir.path().to_path_buf());

        assert_eq!(
            compare(&mut context, "compare left right").await,
            CommandResult::Success("Files are identical.".to_string())
        );
    }

    #[tokio::test]
    async fn test_compare_missing_file_fails() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("here"), "x").unwrap();
        let mut context = CommandContext::new().with_working_directory(temp_dir.path().to_path_buf());

        let err = CompareCommand
            .execute(args("compare here there"), &mut context)
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Error comparing files: "));
        assert!(err.to_string().contains("there"));
    }
}
