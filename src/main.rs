use anyhow::{Context, Result};
use clap::Parser;
use mailmaster_extract::{
    Config, ExportFormat, ExtractionResult, Extractor, FeatureTier, ValidationMode, export,
    upsell_signal,
};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "mailmaster-extract")]
#[command(about = "Extract, categorize and export email addresses from text")]
#[command(version)]
struct Cli {
    /// File to read text from (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Feature tier: free or premium
    #[arg(long)]
    tier: Option<FeatureTier>,

    /// Export format: csv, txt or json
    #[arg(short, long)]
    format: Option<ExportFormat>,

    /// Validation mode: pattern or dot-atom
    #[arg(long)]
    validation: Option<ValidationMode>,

    /// Directory export files are written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Write the export projection to disk
    #[arg(short, long)]
    export: bool,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(tier) = self.tier {
            config.tier = tier;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(validation) = self.validation {
            config.validation = validation;
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir.clone_from(dir);
        }

        Ok(config)
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display())),
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("reading stdin")?;
                Ok(text)
            }
        }
    }
}

fn print_result(result: &ExtractionResult, tier: FeatureTier) {
    println!("{}", result.stats());

    for entry in result.display_entries() {
        match entry.badge {
            Some(badge) => println!("  {} [{badge}]", entry.address),
            None => println!("  {}", entry.address),
        }
    }

    if upsell_signal(result, tier) {
        println!();
        println!(
            "Upgrade to Premium to remove duplicates and invalid addresses from your export."
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    info!("User tier: {}", config.tier);

    let text = cli.read_input()?;
    if text.trim().is_empty() {
        println!("Please paste some text containing email addresses");
        return Ok(());
    }

    let result = Extractor::new(config.validation).extract(&text);

    if result.is_empty() {
        println!("No email addresses found in the text");
        return Ok(());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result, config.tier);
        println!(
            "Successfully extracted {} valid email(s)",
            result.valid.len()
        );
    }

    if cli.export {
        match export(&result, config.tier, config.format)? {
            Some(file) => {
                let path = file.write_to(&config.output_dir)?;
                println!(
                    "Exported {} email(s) to {} ({})",
                    file.count,
                    path.display(),
                    config.format
                );
            }
            None => println!("No valid emails to export"),
        }
    }

    Ok(())
}
