use clap::Parser;

mod cli;
mod exit_codes;
mod summary;

use cli::args::Cli;
use cli::commands::dispatch;

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let code = match dispatch(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            exit_codes::INPUT_ERROR
        }
    };
    std::process::exit(code);
}
