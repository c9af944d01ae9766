mod cli;
mod dates;
mod error;
mod importer;
mod models;
mod normalizer;
mod settings;
mod writer;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() {
    // Logs go to stderr so they never mix into prompts or piped CSV.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let today = cli::reference_date(cli.today);

    let result = match cli.command {
        None => cli::interactive::run(today),
        Some(Commands::Convert { input, output }) => cli::convert::run(&input, output.as_deref(), today),
        Some(Commands::Preview { input }) => cli::preview::run(&input, today),
        Some(Commands::Init {
            input_dir,
            default_output,
        }) => cli::init::run(input_dir, default_output),
        Some(Commands::Status) => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
