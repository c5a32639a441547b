use anyhow::Result;
use clap::Parser;
use galleypress::console::{self, SessionOptions};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "galleypress")]
#[command(about = "Interactive simulation of a book publishing workflow")]
#[command(
    long_about = "Walks one manuscript through the publishing pipeline: reviewer \
                  approvals, an editing sign-off, and a final approval, printing a \
                  status report after each stage."
)]
struct Cli {
    /// Reviewer approvals required to complete the Review stage
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    required_approvals: u32,

    /// Print the final report and manuscript listing as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = SessionOptions {
        required_approvals: cli.required_approvals,
        json_report: cli.json,
    };

    let stdin = io::stdin();
    console::run_session(stdin.lock(), io::stdout(), options)?;
    Ok(())
}
