use clap::Parser;
use tracing_subscriber::EnvFilter;

use launch::{Args, Error};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.exit_code() == 0 => {
            // --help and --version render to stdout and are not errors
            let _ = e.print();
            return;
        }
        Err(e) => {
            let usage = Error::from(e);
            eprintln!("{usage}");
            std::process::exit(usage.exit_code());
        }
    };
    tracing::debug!(?args, "parsed command line arguments");

    let stdout = std::io::stdout();
    if let Err(e) = launch::run(&args, stdout.lock()) {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}
