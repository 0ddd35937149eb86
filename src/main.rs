use clap::Parser;
use tracing_subscriber::EnvFilter;

use crosscheck::cli::{self, Cli, Commands};
use crosscheck::config;
use crosscheck::errors::CrosscheckError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let quiet = cli.quiet;
    let result = match cli.command {
        Commands::Check(args) => cli::check::handle_check(args, quiet).await,
        Commands::Serve(args) => cli::serve::handle_serve(args).await,
        Commands::Validate(args) => handle_validate(args).await,
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                CrosscheckError::Config(_) => 2,
                CrosscheckError::Corpus(_) => 3,
                CrosscheckError::EmptyCorpus | CrosscheckError::EmptyVocabulary => 4,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), CrosscheckError> {
    let path = std::path::PathBuf::from(&args.config);
    let _config = config::parse_config(&path).await?;
    println!("Configuration is valid: {}", args.config);
    Ok(())
}
