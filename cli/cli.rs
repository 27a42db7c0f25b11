use nullstrip_core::{CliArgs, Command as CoreCommand, ProcessedFileResult, RunConfig, strip_tree};

use anyhow::Result;
use clap::{CommandFactory, Parser};
use console::style;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn print_completions_cli(shell: clap_complete::Shell) {
    let mut cmd = CliArgs::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn report_progress(result: &ProcessedFileResult) {
    println!("Processed {}", result.path.display());
}

fn main() -> Result<ExitCode> {
    let cli: CliArgs = CliArgs::parse();

    if let Some(command_enum_val) = cli.command {
        match command_enum_val {
            CoreCommand::Completion(args) => {
                print_completions_cli(args.shell);
                return Ok(ExitCode::SUCCESS);
            }
        }
    }

    init_tracing();

    let config = RunConfig::from(&cli.main_opts);
    let totals = match strip_tree(&config, report_progress) {
        Ok(totals) => totals,
        Err(e) => {
            eprintln!("{}", style(format!("Error: {}", e)).red());
            if let Some(source) = std::error::Error::source(&e) {
                eprintln!("  {}", style(format!("caused by: {}", source)).dim());
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("\nTotal occurrences removed:");
    for line in totals.summary_lines(config.remove_suppress_warnings) {
        println!("{}", line);
    }

    Ok(ExitCode::SUCCESS)
}
