use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

use super::common::{copy_with_metadata, destination_for};
use super::error::{CommandError, CommandOutcome};
use super::registry::{Command, CommandContext, CommandResult};
use crate::console::console;

pub struct MoveCommand;

impl MoveCommand {
    async fn relocate(&self, source: &Path, destination: &Path) -> Result<()> {
        let target = destination_for(source, destination).await;

        match fs::rename(source, &target).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::CrossesDevices && source.is_file() => {
                console().verbose(&format!(
                    "'{}' is on another filesystem, copying instead",
                    target.display()
                ));
                copy_with_metadata(source, &target).await?;
                fs::remove_file(source)
                    .await
                    .with_context(|| format!("Failed to remove '{}'", source.display()))
            }
            Err(err) => Err(err).with_context(|| {
                format!(
                    "Failed to move '{}' to '{}'",
                    source.display(),
                    target.display()
                )
            }),
        }
    }
}

#[async_trait]
impl Command for MoveCommand {
    fn name(&self) -> &str {
        "move"
    }

    fn usage(&self) -> &'static str {
        "move <source_file> <destination_file>"
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

        self.relocate(&context.resolve(source), &context.resolve(destination))
            .await
            .map_err(|e| CommandError::operation("Error moving file", e))?;

        Ok(CommandResult::Success(format!(
            "File '{}' moved to '{}' successfully.",
            source, destination
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    #[tokio::test]
    async fn test_move_renames_file() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("before.txt"), "x").unwrap();
        let mut context = CommandContext::new().with_working_directory(temp_dir.path().to_path_buf());

        let result = MoveCommand
            .execute(args("move before.txt after.txt"), &mut context)
            .await
            .unwrap();
        assert_eq!(
            result,
            CommandResult::Success(
                "File 'before.txt' moved to 'after.txt' successfully.".to_string()
            )
        );
        assert!(!temp_dir.path().join("before.txt").exists());
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("after.txt")).unwrap(),
            "x"
        );
    }

    #[tokio::test]
    async fn test_move_into_directory() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        std::fs::create_dir(temp_dir.path().join("archive")).unwrap();
        let mut context = CommandContext::new().with_working_directory(temp_dir.path().to_path_buf());

        MoveCommand
            .execute(args("move a.txt archive"), &mut context)
            .await
            .unwrap();
        assert!(temp_dir.path().join("archive").join("a.txt").is_file());
        assert!(!temp_dir.path().join("a.txt").exists());
    }

    #[tokio::test]
    async fn test_move_directory() {
        let temp_dir = tempdir().unwrap();
        std::fs::create_dir(temp_dir.path().join("old")).unwrap();
        std::fs::write(temp_dir.path().join("old").join("f.txt"), "f").unwrap();
        let mut context = CommandContext::new().with_working_directory(temp_dir.path().to_path_buf());

        MoveCommand
            .execute(args("move old new"), &mut context)
            .await
            .unwrap();
        assert!(temp_dir.path().join("new").join("f.txt").is_file());
    }

    #[tokio::test]
    async fn test_move_missing_source_fails() {
        let temp_dir = tempdir().unwrap();
        let mut context = CommandContext::new().with_working_directory(temp_dir.path().to_path_buf());

        let err = MoveCommand
            .execute(args("move ghost.txt there.txt"), &mut context)
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Error moving file: "));
    }
}
