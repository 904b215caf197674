use anyhow::Result;
use clap::Parser;
use kdpc::{
    cli::Cli,
    config::ShellConfig,
    console::{console, init_console},
    shell::Shell,
};
use std::process::ExitCode;
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = ShellConfig::from_cli(&cli);

    init_console(config.verbosity);
    console().verbose(&format!(
        "Working directory: {}",
        config.working_directory.display()
    ));

    let mut shell = Shell::new(&config)?;
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    if let Err(e) = shell.run(stdin, &mut stdout).await {
        console().error(&format!("{:#}", e));
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
