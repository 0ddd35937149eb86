use std::path::Path;

use console::style;
use tracing::info;

use crate::cli::commands::CheckArgs;
use crate::config::{self, CrosscheckConfig};
use crate::corpus;
use crate::engine::{run_check, CheckOptions};
use crate::errors::CrosscheckError;
use crate::reporting::write_report;

const DEFAULT_OUTPUT: &str = "plagiarism_report.txt";

pub async fn handle_check(args: CheckArgs, quiet: bool) -> Result<(), CrosscheckError> {
    let config = load_config(args.config.as_deref()).await?;

    let threshold = args.threshold.or(config.threshold);
    if let Some(t) = threshold {
        if !(0.0..=1.0).contains(&t) {
            return Err(CrosscheckError::Config(format!(
                "threshold must lie in [0, 1], got {t}"
            )));
        }
    }

    let options = CheckOptions {
        threshold,
        geometry: config.page.unwrap_or_default(),
    };

    let documents = corpus::load_dir(Path::new(&args.docs))?;
    let outcome = run_check(&documents, &options)?;

    let output = args
        .output
        .or(config.output)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    write_report(Path::new(&output), &outcome.report)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.pairs)?);
    } else if !quiet {
        for pair in &outcome.pairs {
            println!(
                "{}  {} {} {}",
                style(format!("{:.2}", pair.score)).cyan().bold(),
                style(&pair.left).white(),
                style("<->").dim(),
                style(&pair.right).white(),
            );
        }
        println!(
            "{} {} pairs compared, report written to {}",
            style("✓").green(),
            outcome.pairs.len(),
            style(&output).cyan(),
        );
    }

    info!(pairs = outcome.pairs.len(), output = %output, "Check complete");
    Ok(())
}

async fn load_config(path: Option<&str>) -> Result<CrosscheckConfig, CrosscheckError> {
    match path {
        Some(p) => config::parse_config(Path::new(p)).await,
        None => Ok(CrosscheckConfig::default()),
    }
}
