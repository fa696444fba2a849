use std::io;
use std::process;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// mailmatch — check a fixed set of email-like strings against one pattern.
#[derive(Parser)]
#[command(
    name = "mailmatch",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("MAILMATCH_BUILD_COMMIT"), ")"),
    about
)]
struct Cli {
    /// Machine-readable JSON output.
    #[arg(long)]
    json: bool,

    /// Print shell completions for the given shell.
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_default();

    // stderr only: stdout carries the report
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "mailmatch", &mut io::stdout());
        return;
    }

    init_tracing();

    let mut stdout = io::stdout().lock();
    let result = if cli.json {
        mailmatch::run_json(&mut stdout)
    } else {
        mailmatch::run(&mut stdout)
    };

    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(e.exit_code());
    }
}
