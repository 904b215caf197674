use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::{CommandError, CommandOutcome};
use super::registry::{Command, CommandContext, CommandResult};

/// Recursive file name search below the working directory.
pub struct SearchCommand;

impl SearchCommand {
    /// Non-directory entries under `root` whose name contains `pattern`, as
    /// `./` relative paths in walk order. Symlinks are reported but not
    /// followed; a link to a directory counts as a directory. Unreadable
    /// subdirectories are skipped; only a failure to read `root` itself is an
    /// error.
    fn find(&self, root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
        let mut matches = Vec::new();

        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(err)
                        .with_context(|| format!("Failed to read directory '{}'", root.display()));
                }
                Err(_) => continue,
            };

            let file_type = entry.file_type();
            if file_type.is_dir() || (file_type.is_symlink() && entry.path().is_dir()) {
                continue;
            }

            if entry.file_name().to_string_lossy().contains(pattern) {
                let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
                matches.push(Path::new(".").join(relative));
            }
        }

        Ok(matches)
    }
}

#[async_trait]
impl Command for SearchCommand {
    fn name(&self) -> &str {
        "search"
    }

    fn usage(&self) -> &'static str {
        "search <pattern>"
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
        let matches = self
            .find(&context.working_directory, &args[1])
            .map_err(|e| CommandError::operation("Error searching files", e))?;

        if matches.is_empty() {
            return Ok(CommandResult::Success("No matching files found.".to_string()));
        }

        let mut output = String::from("Matching files found:");
        for path in matches {
            output.push('\n');
            output.push_str(&path.display().to_string());
        }

        Ok(CommandResult::Success(output))
    }
}
