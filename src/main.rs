use std::io;

use clap::Parser;
use vfo_designer::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = io::stdout().lock();
    if let Err(e) = cli::run(&cli, &mut stdout) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
