use anyhow::{Context, Result};
use std::io::ErrorKind;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::commands::{
    CommandContext, CommandRegistry, CommandResult, EXIT_KEYWORD, register_default_commands,
};
use crate::config::ShellConfig;
use crate::console::console;

/// What the loop should do after evaluating one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Keep reading; print the text if there is any.
    Continue(Option<String>),
    Exit,
}

/// Splits on runs of whitespace. There is no quoting.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// The interactive read-eval loop. Owns the registry for its whole lifetime;
/// commands run one after another, each to completion.
pub struct Shell {
    registry: CommandRegistry,
    context: CommandContext,
    prompt: String,
}

impl Shell {
    pub fn new(config: &ShellConfig) -> Result<Self> {
        let mut registry = CommandRegistry::new();
        register_default_commands(&mut registry)?;
        Ok(Self::with_registry(registry, config))
    }

    pub fn with_registry(registry: CommandRegistry, config: &ShellConfig) -> Self {
        Self {
            registry,
            context: CommandContext::new()
                .with_working_directory(config.working_directory.clone()),
            prompt: config.prompt.clone(),
        }
    }

    pub async fn eval(&mut self, line: &str) -> Evaluation {
        let tokens = tokenize(line);

        match tokens.first().map(String::as_str) {
            None => return Evaluation::Continue(None),
            Some(EXIT_KEYWORD) => return Evaluation::Exit,
            Some(_) => {}
        }

        console().debug(&format!("Tokens: {:?}", tokens));

        match self.registry.execute(tokens, &mut self.context).await {
            Ok(CommandResult::Success(text)) => Evaluation::Continue(Some(text)),
            Ok(CommandResult::Silent) => Evaluation::Continue(None),
            Err(err) => Evaluation::Continue(Some(err.to_string())),
        }
    }

    /// Prompts, reads and evaluates lines until `exit` or end of input.
    pub async fn run<R, W>(&mut self, mut reader: R, writer: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut line = String::new();

        loop {
            writer.write_all(self.prompt.as_bytes()).await?;
            writer.flush().await?;

            line.clear();
            match reader.read_line(&mut line).await {
                Ok(0) => {
                    console().debug("End of input");
                    break;
                }
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    console().warning("Ignoring a line that is not valid UTF-8");
                    continue;
                }
                Err(e) => return Err(e).context("Failed to read input"),
            }

            match self.eval(&line).await {
                Evaluation::Exit => break,
                Evaluation::Continue(Some(text)) => {
                    writer.write_all(text.as_bytes()).await?;
                    writer.write_all(b"\n").await?;
                    writer.flush().await?;
                }
                Evaluation::Continue(None) => {}
            }
        }

        Ok(())
    }
}
