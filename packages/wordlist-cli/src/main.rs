//! CLI for converting exam vocabulary lists into JSON word lists.
//!
//! `cet6` and `cet4` run the built-in presets; `extract` exposes every
//! option; `catalog` summarizes a directory of generated lists.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordlist::{
    load_catalog, ExtractionOutcome, ExtractorConfig, Preset, SourceFormat, WordListExtractor,
};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "wordlist")]
#[command(about = "Extract CET vocabulary word lists into JSON")]
struct Cli {
    /// Log every skipped line and file operation
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flat CET6 list (one word per line)
    Cet6 {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Dictionary-style CET4 list (3 header lines, `word [phonetic] ...`)
    Cet4 {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Extract with explicit options
    Extract {
        #[arg(long, value_enum)]
        format: FormatArg,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
        /// Spaces per JSON indentation level
        #[arg(long, default_value_t = 2)]
        indent: usize,
        /// Escape non-ASCII characters as \uXXXX
        #[arg(long)]
        ascii: bool,
        /// Lines skipped before dictionary entries
        #[arg(long, default_value_t = wordlist::DEFAULT_HEADER_LINES)]
        header_lines: usize,
        /// Fail instead of creating a missing output directory
        #[arg(long)]
        no_create_dirs: bool,
    },

    /// Summarize a directory of generated vocabulary files
    Catalog {
        /// Vocabulary directory [default: ../vocabularys under WORDLIST_ROOT]
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Print the full catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Flat,
    Dictionary,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose {
        "wordlist=debug,wordlist_cli=debug"
    } else {
        "wordlist=info,wordlist_cli=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::debug!(root = %config.root.display(), "loaded config");

    match cli.command {
        Commands::Cet6 { input, output } => {
            Ok(cmd_preset(&config, Preset::Cet6, input, output))
        }
        Commands::Cet4 { input, output } => {
            Ok(cmd_preset(&config, Preset::Cet4, input, output))
        }
        Commands::Extract {
            format,
            input,
            output,
            indent,
            ascii,
            header_lines,
            no_create_dirs,
        } => {
            let format = match format {
                FormatArg::Flat => SourceFormat::Flat,
                FormatArg::Dictionary => SourceFormat::Dictionary { header_lines },
            };
            let extractor_config = ExtractorConfig::new(input, output, format)
                .with_indent(indent)
                .with_ascii_only(ascii)
                .with_create_dirs(!no_create_dirs);
            Ok(cmd_extract(extractor_config))
        }
        Commands::Catalog { dir, json } => cmd_catalog(&config.catalog_dir(dir), json),
    }
}

// ============================================================================
// Commands
// ============================================================================

fn cmd_preset(
    config: &Config,
    preset: Preset,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> ExitCode {
    tracing::debug!(preset = preset.name(), "running preset");
    cmd_extract(config.preset(preset, input, output))
}

fn cmd_extract(config: ExtractorConfig) -> ExitCode {
    let outcome = WordListExtractor::new(config).run();

    match &outcome {
        ExtractionOutcome::Extracted(_) | ExtractionOutcome::Empty(_) => {
            println!("{}", outcome.summary());
            ExitCode::SUCCESS
        }
        ExtractionOutcome::Failed(_) => {
            eprintln!("{}", outcome.summary());
            ExitCode::FAILURE
        }
    }
}

fn cmd_catalog(dir: &Path, json: bool) -> Result<ExitCode> {
    let catalog = load_catalog(dir)
        .with_context(|| format!("Failed to load vocabularies from {}", dir.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(ExitCode::SUCCESS);
    }

    for vocabulary in catalog.entries() {
        println!(
            "Loaded {} words from {}",
            vocabulary.words.len(),
            vocabulary.name
        );
    }
    println!(
        "{} vocabularies, {} words in total",
        catalog.len(),
        catalog.total_words()
    );

    Ok(ExitCode::SUCCESS)
}
