//! Tokenizer Benchmarking Tool
//!
//! Cleans a document, ranks its most frequent words, and times every tokenizer
//! backend on the raw text.
//!
//! ## Usage
//!
//! ```bash
//! # Defaults: alice29.txt in, artifacts in the current directory
//! ./target/release/tokbench
//!
//! # Explicit input, output directory and top-k
//! ./target/release/tokbench --input book.txt --output-dir out -k 25
//!
//! # Point the lexicon backend at another model, skip the rules backend
//! ./target/release/tokbench --lexicon-model models/en_lexicon.txt --disable rules
//! ```
//!
//! ## Output
//!
//! Four files in the output directory (`cleaned.txt`, `words.txt`,
//! `top10words.txt`, `time_compares.txt`) and a summary on stdout:
//!
//! ```text
//! --------------------------------
//! Backend     Sentence (s)    Word (s)
//! Rules       0.004211        0.009876
//! UAX29       0.012004        0.006120
//! Lexicon     N/A             N/A
//! --------------------------------
//! ```
//!
//! Every number is a single measurement. Build with `--release` and use
//! a reasonably large input if the comparison matters.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use tokbench_core::{BackendConfig, Harness, HarnessConfig, RunSummary};
use tokbench_types::{BackendId, Timing};

#[derive(Parser)]
#[command(name = "tokbench")]
#[command(version)]
#[command(about = "Tokenizer benchmarking harness", long_about = None)]
struct Cli {
    /// Source document (UTF-8)
    #[arg(short, long, default_value = "alice29.txt")]
    input: PathBuf,

    /// Directory for the produced artifacts
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Number of entries in the frequency report
    #[arg(short = 'k', long, default_value = "10")]
    top_k: NonZeroUsize,

    /// Stopword list language
    #[arg(short, long, default_value = "en")]
    language: String,

    /// Model file for the lexicon backend
    #[arg(long, default_value = "models/en_lexicon.txt")]
    lexicon_model: PathBuf,

    /// Backends to mark unavailable (rules, uax29, lexicon)
    #[arg(long, value_delimiter = ',')]
    disable: Vec<BackendId>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for HarnessConfig {
    fn from(cli: Cli) -> Self {
        HarnessConfig {
            input: cli.input,
            output_dir: cli.output_dir,
            top_k: cli.top_k,
            stopword_language: cli.language,
            backends: BackendConfig {
                lexicon_model: cli.lexicon_model,
                disabled: cli.disable,
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match Harness::new(cli.into()).run() {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn print_summary(summary: &RunSummary) {
    println!("--------------------------------");
    println!("Tokens      : {}", fmt_count(summary.cleaned_words as u64));
    println!("Distinct    : {}", fmt_count(summary.distinct_words as u64));
    for (token, count) in &summary.top {
        println!("  {:<12}{}", token, count);
    }
    println!("--------------------------------");
    println!("{:<12}{:<16}{}", "Backend", "Sentence (s)", "Word (s)");
    for row in summary.timings.rows() {
        println!(
            "{:<12}{:<16}{}",
            row.backend.display_name(),
            fmt_timing(row.sentence.as_secs_f64()),
            fmt_timing(row.word.as_secs_f64())
        );
    }
    println!("--------------------------------");
}

fn fmt_timing(secs: Option<f64>) -> String {
    secs.map_or_else(|| Timing::UNAVAILABLE_LABEL.to_owned(), |s| format!("{s:.6}"))
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
