use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum, error::ErrorKind};

use crate::config::NormalizerConfig;
use crate::detection::{DetectionPayload, raw_terms_from_json};
use crate::report::NormalizationReport;
use crate::types::{NormalizedList, RawTerm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One canonical term per line.
    Lines,
    /// A JSON array of canonical terms.
    Json,
    /// A JSON object shaped like the detector response.
    Payload,
}

#[derive(Debug, Parser)]
#[command(
    name = "ingredient-canon",
    disable_help_subcommand = true,
    about = "Canonicalize noisy ingredient names",
    long_about = "Read raw ingredient names (one per line, or a detector JSON response) and print a deduplicated canonical list in first-seen order.",
    after_help = "Synonym definitions are resolved in order by --synonyms, INGREDIENT_SYNONYMS_PATH, then ./synonyms.json. A missing file means no synonyms; a malformed file aborts."
)]
struct NormalizeCli {
    #[arg(
        long,
        value_name = "PATH",
        help = "JSON object mapping noisy terms to canonical terms"
    )]
    synonyms: Option<PathBuf>,
    #[arg(
        long = "no-synonyms",
        conflicts_with = "synonyms",
        help = "Ignore any synonym definitions"
    )]
    no_synonyms: bool,
    #[arg(
        long = "stop-word",
        value_name = "WORD",
        help = "Extra stopword to drop, repeat as needed"
    )]
    stop_words: Vec<String>,
    #[arg(
        long,
        value_name = "PATH",
        help = "Read input from a file instead of stdin"
    )]
    input: Option<PathBuf>,
    #[arg(
        long = "detection-json",
        help = "Treat input as a detector response with an `ingredients_detected` list"
    )]
    detection_json: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines, help = "Output format")]
    format: OutputFormat,
    #[arg(long, help = "Print per-run counters as JSON to stderr")]
    report: bool,
}

impl NormalizeCli {
    fn resolve_config(&self, base: NormalizerConfig) -> NormalizerConfig {
        let mut config = base.with_extra_stop_words(self.stop_words.iter().cloned());
        if self.no_synonyms {
            config = config.without_synonyms();
        } else if let Some(path) = &self.synonyms {
            config = config.with_synonyms_path(path);
        }
        config
    }
}

/// Entry point for the `ingredient-canon` binary.
///
/// The synonym table is loaded before any input is read so that a malformed
/// definitions source fails the run without producing output.
pub fn run_normalize_cli<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let Some(cli) = parse_cli(std::iter::once("ingredient-canon".to_string()).chain(args_iter))?
    else {
        return Ok(());
    };

    let config = cli.resolve_config(NormalizerConfig::from_env()?);
    let normalizer = config.build()?;

    let body = read_input(cli.input.as_deref())?;
    let raw = parse_raw_terms(&body, cli.detection_json)?;
    let (list, report) = normalizer.normalize_with_report(&raw);

    let rendered = render_output(&list, cli.format)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(rendered.as_bytes())?;
    out.flush()?;

    if cli.report {
        eprintln!("{}", render_report(&report)?);
    }
    Ok(())
}

/// Parse arguments; `Ok(None)` means help or version text was printed.
fn parse_cli<I>(args: I) -> Result<Option<NormalizeCli>, clap::Error>
where
    I: IntoIterator<Item = String>,
{
    let err = match NormalizeCli::try_parse_from(args) {
        Ok(cli) => return Ok(Some(cli)),
        Err(err) => err,
    };
    if matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    ) {
        err.print()?;
        return Ok(None);
    }
    Err(err)
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut body = String::new();
            io::stdin().lock().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}

fn parse_raw_terms(body: &str, detection_json: bool) -> Result<Vec<RawTerm>, Box<dyn Error>> {
    if detection_json {
        return Ok(raw_terms_from_json(body)?);
    }
    Ok(body.lines().map(str::to_string).collect())
}

fn render_output(list: &NormalizedList, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Lines => Ok(list.iter().map(|term| format!("{term}\n")).collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(list)?)),
        OutputFormat::Payload => {
            let payload = DetectionPayload::new(list.clone());
            Ok(format!("{}\n", serde_json::to_string(&payload)?))
        }
    }
}

fn render_report(report: &NormalizationReport) -> Result<String, serde_json::Error> {
    let mut value = serde_json::to_value(report)?;
    value["duplicate_share"] = serde_json::json!(report.duplicate_share());
    serde_json::to_string(&value)
}
