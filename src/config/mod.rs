use crate::cli::Cli;
use crate::console::VerbosityLevel;
use std::path::PathBuf;

pub const DEFAULT_PROMPT: &str = "kdpc> ";

/// Runtime settings for a shell session.
///
/// Nothing is read from disk or the environment; `Default` is the normal
/// interactive setup and the builder methods exist for embedding and tests.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub prompt: String,
    pub working_directory: PathBuf,
    pub verbosity: VerbosityLevel,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            working_directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            verbosity: VerbosityLevel::default(),
        }
    }
}

impl ShellConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            verbosity: cli.get_verbosity(),
            ..Self::default()
        }
    }

    pub fn with_working_directory(mut self, dir: PathBuf) -> Self {
        self.working_directory = dir;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.prompt, "kdpc> ");
        assert_eq!(config.verbosity, VerbosityLevel::Normal);
    }

    #[test]
    fn test_from_cli_takes_verbosity() {
        let cli = Cli {
            verbose: 2,
            quiet: false,
        };
        let config = ShellConfig::from_cli(&cli);
        assert_eq!(config.verbosity, VerbosityLevel::Debug);
        assert_eq!(config.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn test_builders() {
        let config = ShellConfig::default()
            .with_working_directory(PathBuf::from("/tmp"))
            .with_prompt("> ");
        assert_eq!(config.working_directory, PathBuf::from("/tmp"));
        assert_eq!(config.prompt, "> ");
    }
}
