use anyhow::{Result, bail};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::{CommandError, CommandOutcome};
use crate::console::console;

/// Keyword that ends the session. It is handled by the shell and can never be
/// registered as a command.
pub const EXIT_KEYWORD: &str = "exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Text to print, possibly spanning several lines.
    Success(String),
    /// The command succeeded and has nothing to report.
    Silent,
}

pub struct CommandContext {
    pub working_directory: PathBuf,
}

impl CommandContext {
    pub fn new() -> Self {
        Self {
            working_directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    pub fn with_working_directory(mut self, dir: PathBuf) -> Self {
        self.working_directory = dir;
        self
    }

    /// Resolves a user supplied path against the working directory.
    pub fn resolve(&self, file_path: &str) -> PathBuf {
        let path = Path::new(file_path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_directory.join(path)
        }
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &str;
    /// Usage line shown after `Usage: ` when too few arguments are given.
    fn usage(&self) -> &'static str;
    /// Minimum number of arguments, not counting the command name.
    fn min_args(&self) -> usize;

    fn check_args(&self, args: &[String]) -> CommandOutcome<()> {
        if args.len().saturating_sub(1) < self.min_args() {
            return Err(CommandError::Usage {
                usage: self.usage(),
            });
        }
        Ok(())
    }

    /// `args[0]` is the command name itself. Implementations start with
    /// `check_args`, so short argument lists come back as a usage error.
    async fn execute(
        &self,
        args: Vec<String>,
        context: &mut CommandContext,
    ) -> CommandOutcome<CommandResult>;
}

pub struct CommandRegistry {
    commands: IndexMap<String, Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: IndexMap::new(),
        }
    }

    pub fn register(&mut self, command: Arc<dyn Command>) -> Result<()> {
        let name = command.name().to_string();

        if name == EXIT_KEYWORD {
            bail!("'{}' is reserved and cannot be registered", EXIT_KEYWORD);
        }
        if self.commands.contains_key(&name) {
            bail!("Command '{}' is already registered", name);
        }

        self.commands.insert(name, command);
        Ok(())
    }

    /// Looks up `tokens[0]` and runs the command with the full token list.
    pub async fn execute(
        &self,
        tokens: Vec<String>,
        context: &mut CommandContext,
    ) -> CommandOutcome<CommandResult> {
        let name = tokens.first().map(String::as_str).unwrap_or_default();

        let command = self
            .commands
            .get(name)
            .ok_or_else(|| CommandError::UnknownCommand {
                name: name.to_string(),
                available: self.available_commands(),
            })?;

        console().verbose(&format!("Running {} with {:?}", name, &tokens[1..]));
        command.execute(tokens, context).await
    }

    /// Comma separated command names in registration order, followed by the
    /// exit keyword.
    pub fn available_commands(&self) -> String {
        self.commands
            .keys()
            .map(String::as_str)
            .chain(std::iter::once(EXIT_KEYWORD))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
