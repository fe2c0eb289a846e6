use anyhow::Result;
use clap::Parser;
use ssq_history::api::{fetch_draw_notice, API_URL};
use ssq_history::export::{export_all, ExportTargets};
use ssq_history::parse::parse_draw_notice;
use ssq_history::types::FetchConfig;
use std::path::PathBuf;
use std::process::ExitCode;

/// Fetch SSQ draw history from the official API and export it to XLSX / CSV.
#[derive(Parser, Debug)]
#[command(name = "ssq-history", version, about)]
struct Args {
    /// Number of most recent draws to request (the API caps large values)
    #[arg(long, default_value_t = 2000)]
    count: u32,

    /// XLSX output path; pass an empty string to skip the XLSX export
    #[arg(long, value_name = "FILE", default_value = "ssq_history.xlsx")]
    xlsx: String,

    /// CSV output path; pass an empty string to skip the CSV export
    #[arg(long, value_name = "FILE", default_value = "ssq_history.csv")]
    csv: String,
}

impl Args {
    fn targets(&self) -> ExportTargets {
        let path_or_skip = |raw: &str| (!raw.is_empty()).then(|| PathBuf::from(raw));
        ExportTargets {
            xlsx: path_or_skip(&self.xlsx),
            csv: path_or_skip(&self.csv),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<()> {
    let config = FetchConfig {
        issue_count: args.count,
        ..FetchConfig::default()
    };

    println!(
        "🎲 Requesting the {} most recent draws from {}",
        config.issue_count, API_URL
    );
    let raw = fetch_draw_notice(&config).await?;

    let draws = parse_draw_notice(&raw)?;
    println!("✅ Parsed {} draws", draws.len());

    let outcome = export_all(&draws, &args.targets());
    for path in &outcome.written {
        println!("📁 Saved {} draws to {}", draws.len(), path.display());
    }
    for (path, error) in &outcome.failures {
        eprintln!("✗ Failed to write {}: {}", path.display(), error);
    }

    if !outcome.is_success() {
        anyhow::bail!(
            "{} of {} export targets failed",
            outcome.failures.len(),
            outcome.failures.len() + outcome.written.len()
        );
    }
    Ok(())
}
