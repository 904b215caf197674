use colored::Colorize;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Verbosity levels for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum VerbosityLevel {
    /// Only show errors
    Quiet = 0,
    /// Normal output (default)
    #[default]
    Normal = 1,
    /// Trace each command as it runs
    Verbose = 2,
    /// Dispatch and tokenizer details
    Debug = 3,
}

impl fmt::Display for VerbosityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerbosityLevel::Quiet => write!(f, "quiet"),
            VerbosityLevel::Normal => write!(f, "normal"),
            VerbosityLevel::Verbose => write!(f, "verbose"),
            VerbosityLevel::Debug => write!(f, "debug"),
        }
    }
}

/// Diagnostic console.
///
/// Command feedback is written by the shell to its own output stream; everything
/// printed here goes to stderr so it never mixes with that feedback.
#[derive(Debug, Clone)]
pub struct Console {
    verbosity: VerbosityLevel,
}

impl Console {
    pub fn new(verbosity: VerbosityLevel) -> Self {
        Self { verbosity }
    }

    fn should_show(&self, level: VerbosityLevel) -> bool {
        self.verbosity >= level
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    pub fn warning(&self, message: &str) {
        if self.should_show(VerbosityLevel::Normal) {
            eprintln!("⚠️  {}", message.yellow());
        }
    }

    pub fn verbose(&self, message: &str) {
        if self.should_show(VerbosityLevel::Verbose) {
            eprintln!("{}", message.dimmed());
        }
    }

    pub fn debug(&self, message: &str) {
        if self.should_show(VerbosityLevel::Debug) {
            eprintln!("🐛 DEBUG: {}", message);
        }
    }
}

static GLOBAL_CONSOLE: OnceLock<Arc<Console>> = OnceLock::new();

pub fn init_console(verbosity: VerbosityLevel) {
    let _ = GLOBAL_CONSOLE.set(Arc::new(Console::new(verbosity)));
}

/// Returns the process-wide console, falling back to `Normal` verbosity when
/// `init_console` was never called (library use, tests).
pub fn console() -> Arc<Console> {
    GLOBAL_CONSOLE
        .get_or_init(|| Arc::new(Console::default()))
        .clone()
}

impl Default for Console {
    fn default() -> Self {
        Self {
            verbosity: VerbosityLevel::Normal,
        }
    }
}
