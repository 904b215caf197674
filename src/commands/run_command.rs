use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use tokio::process::Command as Process;

use super::error::{CommandError, CommandOutcome};
use super::registry::{Command, CommandContext, CommandResult};

/// Runs an external program. The tokens are passed straight through as argv;
/// no shell is involved, so `$VAR`, globs and quotes reach the program as is.
pub struct RunCommand;

impl RunCommand {
    async fn run(&self, argv: &[String], context: &CommandContext) -> Result<()> {
        let program = &argv[0];

        // stdio is inherited so the program talks to the terminal directly
        let status = Process::new(program)
            .args(&argv[1..])
            .current_dir(&context.working_directory)
            .status()
            .await
            .with_context(|| format!("failed to run '{}'", program))?;

        if !status.success() {
            match status.code() {
                Some(code) => bail!(
                    "command '{}' returned non-zero exit status {}.",
                    program,
                    code
                ),
                None => bail!("command '{}' was terminated by a signal.", program),
            }
        }

        Ok(())
    }
}

#[async_trait]
impl Command for RunCommand {
    fn name(&self) -> &str {
        "run"
    }

    fn usage(&self) -> &'static str {
        "run <program> [args...]"
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
        self.run(&args[1..], context)
            .await
            .map_err(|e| CommandError::operation("Error", e))?;

        Ok(CommandResult::Silent)
    }
}
