//! dermalens: CLI driver for the skin analysis engine.
//!
//! Loads an image file, runs the full multi-variant analysis and
//! assessment, and prints either the human-readable report (clinical
//! summary, concerns, subscores, health score) or the structured JSON
//! consumed by downstream tooling.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin dermalens -- [OPTIONS] <IMAGE_PATH>
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dermalens_assess::{Assessment, SkinProfile, Taxonomy, assess, clinical_summary};
use dermalens_assess::concerns::split_manual;
use dermalens_pipeline::{Analysis, AnalysisConfig};
use serde::Serialize;

/// Skin metric extraction and scoring over a facial photograph.
///
/// Runs the analysis pipeline on the given image (original plus
/// enhanced variants), derives concerns, trending subscores, and a
/// health score, and prints a report.
#[derive(Parser)]
#[command(name = "dermalens", version)]
struct Cli {
    /// Path to the input image (PNG, JPEG, BMP, WebP).
    image_path: PathBuf,

    /// Manual skin type override (Normal/Dry/Oily/Combination/Sensitive).
    #[arg(long)]
    skin_type: Option<String>,

    /// Manual sensitivity override (Low/Normal/High).
    #[arg(long)]
    sensitivity: Option<String>,

    /// Manual hydration level (1-10).
    #[arg(long)]
    hydration: Option<String>,

    /// Manual pore condition override (Fine/Normal/Enlarged).
    #[arg(long)]
    pore_condition: Option<String>,

    /// Comma-separated free-text concerns to merge into the analysis.
    #[arg(long)]
    concerns: Option<String>,

    /// Path to a JSON file holding the concern vocabulary
    /// (an array of canonical labels). Uses the built-in vocabulary
    /// when omitted.
    #[arg(long)]
    vocabulary: Option<PathBuf>,

    /// Analyze the original image only, skipping the enhanced variants.
    #[arg(long)]
    no_variants: bool,

    /// Run the variant passes sequentially instead of on the thread
    /// pool.
    #[arg(long)]
    sequential: bool,

    /// Output the full analysis and assessment as JSON instead of the
    /// human-readable report.
    #[arg(long)]
    json: bool,
}

/// Everything the CLI prints in JSON mode.
#[derive(Serialize)]
struct JsonReport<'a> {
    analysis: &'a Analysis,
    assessment: &'a Assessment,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let image_bytes = match std::fs::read(&cli.image_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.image_path.display());
            return ExitCode::FAILURE;
        }
    };

    let taxonomy = match load_vocabulary(cli.vocabulary.as_deref()) {
        Ok(taxonomy) => taxonomy,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let config = if cli.no_variants {
        AnalysisConfig { variants: vec![] }
    } else {
        AnalysisConfig::default()
    };

    let analysis = if cli.sequential {
        dermalens_pipeline::analyze(&image_bytes, &config)
    } else {
        dermalens_pipeline::analyze_parallel(&image_bytes, &config)
    };

    let profile = SkinProfile::from_labels(
        cli.skin_type.as_deref(),
        cli.sensitivity.as_deref(),
        cli.pore_condition.as_deref(),
    )
    .with_hydration(cli.hydration.as_deref());
    let manual_concerns = cli.concerns.as_deref().map(split_manual).unwrap_or_default();

    let assessment = assess(&analysis, &profile, &manual_concerns, &taxonomy);

    if cli.json {
        let report = JsonReport {
            analysis: &analysis,
            assessment: &assessment,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_report(&analysis, &assessment);
    }

    ExitCode::SUCCESS
}

/// Load the concern vocabulary from a JSON array file, or fall back to
/// the built-in label set.
fn load_vocabulary(path: Option<&std::path::Path>) -> Result<Taxonomy, String> {
    let Some(path) = path else {
        return Ok(Taxonomy::default_vocabulary());
    };

    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading vocabulary {}: {e}", path.display()))?;
    let labels: Vec<String> = serde_json::from_str(&contents)
        .map_err(|e| format!("Error parsing vocabulary {}: {e}", path.display()))?;
    Ok(Taxonomy::new(labels))
}

/// Print the human-readable report.
fn print_report(analysis: &Analysis, assessment: &Assessment) {
    println!("{}", clinical_summary(analysis.selected()));
    println!();

    println!(
        "Variants analyzed: {} (selected pass {})",
        analysis.passes.len(),
        analysis.selected_index,
    );
    println!();

    if assessment.concerns.is_empty() {
        println!("Concerns: none detected");
    } else {
        println!("Concerns: {}", assessment.concerns.join(", "));
    }
    println!();

    let t = &assessment.trending;
    println!("{:<14} {:>5}", "Subscore", "0-10");
    println!("{}", "-".repeat(20));
    for (name, value) in [
        ("Oiliness", t.oiliness),
        ("Texture", t.texture),
        ("Pores", t.pores),
        ("Wrinkles", t.wrinkles),
        ("Redness", t.redness),
        ("Dark Spots", t.dark_spots),
        ("Acne", t.acne),
        ("Sensitivity", t.sensitivity),
    ] {
        println!("{name:<14} {value:>5.1}");
    }
    println!();

    println!("Health score: {}/100", assessment.health_score);
}
