//! Extract command - recover passport fields from a single OCR text file.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use passcan_core::{
    ExtractionError, ExtractionResult, Field, PassCanConfig, PassportParser, PassportRecord,
};

use super::load_config;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file (default: stdin, also "-")
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Minimum length of a candidate line (overrides config)
    #[arg(long)]
    min_line_length: Option<usize>,

    /// Show which line each field was taken from
    #[arg(long)]
    show_sources: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;
    let parser = build_parser(&config, args.min_line_length);

    let (source, text) = match args.input.as_ref().filter(|p| p.as_os_str() != "-") {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            info!("Processing file: {}", path.display());
            (path.display().to_string(), fs::read_to_string(path)?)
        }
        None => {
            info!("Reading OCR text from stdin");
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            ("stdin".to_string(), text)
        }
    };

    let result = match parser.extract_detailed(&text) {
        Ok(result) => result,
        Err(ExtractionError::NoDataFound) => {
            anyhow::bail!(
                "no passport data found in {}; recapture the document and try again",
                source
            );
        }
    };

    let output = if args.show_sources {
        format_result(&result, args.format, &config)?
    } else {
        format_record(&result.record, args.format, &config)?
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Build a parser from config, letting a command-line value win.
pub fn build_parser(config: &PassCanConfig, min_line_length: Option<usize>) -> PassportParser {
    let parser = PassportParser::from_config(&config.extraction);
    match min_line_length {
        Some(min) => parser.with_min_line_length(min),
        None => parser,
    }
}

/// Render a record in the requested format.
pub fn format_record(
    record: &PassportRecord,
    format: OutputFormat,
    config: &PassCanConfig,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => to_json(record, config)?,
        OutputFormat::Csv => format_record_csv(record)?,
        OutputFormat::Text => format_record_text(record),
    })
}

fn format_result(
    result: &ExtractionResult,
    format: OutputFormat,
    config: &PassCanConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => to_json(result, config),
        OutputFormat::Csv => format_record_csv(&result.record),
        OutputFormat::Text => {
            let mut output = format_record_text(&result.record);
            output.push_str(&format!(
                "\nSources ({} candidate lines):\n",
                result.candidate_lines
            ));
            for field in Field::ALL {
                match result.matches.get(field) {
                    Some(found) => output.push_str(&format!(
                        "  {}: line {}, \"{}\"\n",
                        field, found.line + 1, found.source
                    )),
                    None => output.push_str(&format!("  {}: not found\n", field)),
                }
            }
            Ok(output)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, config: &PassCanConfig) -> anyhow::Result<String> {
    let json = if config.output.pretty_json {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn format_record_csv(record: &PassportRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "passport_number",
        "full_name",
        "date_of_birth",
        "country_code",
    ])?;

    wtr.write_record([
        &record.passport_number,
        &record.full_name,
        &record.date_of_birth,
        &record.country_code,
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_record_text(record: &PassportRecord) -> String {
    let mut output = String::new();

    for field in Field::ALL {
        let value = record.get(field);
        let value = if value.is_empty() { "-" } else { value };
        output.push_str(&format!("{:<16} {}\n", format!("{}:", field), value));
    }

    output
}
