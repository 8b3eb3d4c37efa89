//! Validate command - check a (possibly hand-edited) record before it is used.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use passcan_core::PassportRecord;

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Record JSON file, as written by `extract` (default: stdin, also "-")
    input: Option<PathBuf>,
}

pub async fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let (source, json) = match args.input.as_ref().filter(|p| p.as_os_str() != "-") {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            info!("Validating record: {}", path.display());
            (path.display().to_string(), fs::read_to_string(path)?)
        }
        None => {
            let mut json = String::new();
            std::io::stdin().read_to_string(&mut json)?;
            ("stdin".to_string(), json)
        }
    };

    let record: PassportRecord = serde_json::from_str(&json)
        .map_err(|e| anyhow::anyhow!("Invalid record in {}: {}", source, e))?;

    let issues = record.validate();
    if !issues.is_empty() {
        eprintln!("{}", style("Validation issues:").yellow());
        for issue in &issues {
            eprintln!("  - {}", issue);
        }
        anyhow::bail!("{} failed validation with {} issue(s)", source, issues.len());
    }

    println!("{} {} is complete", style("✓").green(), source);

    Ok(())
}
