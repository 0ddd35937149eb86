use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "crosscheck", version, about = "Pairwise document similarity checker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare every document pair in a folder and write a report
    Check(CheckArgs),
    /// Start the HTTP REST API server
    Serve(ServeArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct CheckArgs {
    /// Folder containing the .txt documents to compare
    #[arg(short, long, default_value = "docs")]
    pub docs: String,

    /// Report output file
    #[arg(short, long)]
    pub output: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Minimum score a pair must reach to be reported (overrides config)
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Print the pair list as JSON instead of styled text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long, default_value = "8080")]
    pub port: u16,

    /// Listen address
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
