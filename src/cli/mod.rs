use crate::console::VerbosityLevel;
use clap::Parser;

/// Interactive file management shell. Type `exit` or send EOF to leave.
#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about,
    after_help = "The flags only tune diagnostics on stderr; they never change command output."
)]
pub struct Cli {
    /// Increase diagnostic output on stderr (-v verbose, -vv debug); command output is unchanged
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Hide stderr warnings, keeping only errors; command output is unchanged
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn get_verbosity(&self) -> VerbosityLevel {
        if self.quiet {
            VerbosityLevel::Quiet
        } else {
            match self.verbose {
                0 => VerbosityLevel::Normal,
                1 => VerbosityLevel::Verbose,
                _ => VerbosityLevel::Debug,
            }
        }
    }
}
