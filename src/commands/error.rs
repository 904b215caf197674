use thiserror::Error;

/// Failure of a single command. The `Display` output is exactly the line the
/// shell prints; neither variant ends the session.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Usage: {usage}")]
    Usage { usage: &'static str },

    #[error("{context}: {message}")]
    Operation {
        context: &'static str,
        message: String,
    },

    #[error("Invalid command. Available commands: {available}")]
    UnknownCommand { name: String, available: String },
}

impl CommandError {
    /// Wraps an operation failure, keeping the whole context chain of `err`.
    pub fn operation(context: &'static str, err: anyhow::Error) -> Self {
        Self::Operation {
            context,
            message: format!("{:#}", err),
        }
    }
}

pub type CommandOutcome<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_usage_display() {
        let err = CommandError::Usage {
            usage: "delete <file_name>",
        };
        assert_eq!(err.to_string(), "Usage: delete <file_name>");
    }

    #[test]
    fn test_operation_display_keeps_context_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Err::<(), _>(io)
            .context("Failed to open 'a.txt'")
            .unwrap_err();

        let err = CommandError::operation("Error viewing file", err);
        assert_eq!(err.to_string(), "Error viewing file: Failed to open 'a.txt': gone");
    }
}
