//! jstok: command-line tokenizer for JavaScript-like source.
//!
//! Usage:
//!   jstok [options] [file...]
//!
//! Prints the token stream of each file as text or JSON.

mod report;
mod stats;

use clap::{Parser as ClapParser, ValueEnum};
use jstok_core::SourceText;
use jstok_diagnostics::{messages, Diagnostic, DiagnosticCollection, ScanError};
use jstok_options::{ConfigError, JstokConfig, OutputFormat, ScannerOptions};
use jstok_scanner::{Token, Tokenizer};
use rayon::prelude::*;
use serde::Serialize;
use stats::TokenStats;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Once;
use std::time::Instant;
use tracing::{debug, info};

#[derive(ClapParser, Debug)]
#[command(name = "jstok", about = "jstok - A tokenizer for JavaScript-like source", version)]
struct Cli {
    /// Source files to tokenize.
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Path to jstok.json.
    #[arg(short = 'p', long = "project")]
    project: Option<String>,

    /// Output format for tokens.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Enable every strict scanner option.
    #[arg(long)]
    strict: bool,

    /// Close strings only on their opening quote character.
    #[arg(long = "match-quotes")]
    match_quotes: bool,

    /// Track nested braces and templates inside `${...}`.
    #[arg(long = "balance-braces")]
    balance_braces: bool,

    /// Print token counts per type.
    #[arg(long)]
    stats: bool,

    /// Do not print tokens.
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Initialize a jstok.json file.
    #[arg(long)]
    init: bool,

    /// Log scanner activity to stderr (same as RUST_LOG=jstok=debug).
    #[arg(long)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long = "no-color")]
    no_color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

const CONFIG_FILE: &str = "jstok.json";

static TRACING_INIT: Once = Once::new();

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let use_color = !cli.no_color && atty_is_terminal();
    let _ = miette::set_hook(Box::new(move |_| {
        Box::new(miette::MietteHandlerOpts::new().color(use_color).build())
    }));

    if cli.init {
        process::exit(run_init());
    }

    let exit_code = run_scan(&cli, use_color);
    process::exit(exit_code);
}

/// Install a stderr subscriber when RUST_LOG is set or `--verbose` is given.
fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = match std::env::var("RUST_LOG") {
            Ok(_) => EnvFilter::from_default_env(),
            Err(_) if verbose => EnvFilter::new("jstok=debug,jstok_scanner=debug"),
            Err(_) => return,
        };
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
            .with(filter)
            .init();
    });
}

/// The scan result of one input file.
struct ScannedFile {
    path: String,
    source: SourceText,
    tokens: Vec<Token>,
    warnings: DiagnosticCollection,
    error: Option<ScanError>,
}

#[derive(Serialize)]
struct FileTokens<'a> {
    file: &'a str,
    tokens: &'a [Token],
}

fn run_scan(cli: &Cli, use_color: bool) -> i32 {
    let start = Instant::now();

    let (files, config) = match resolve_input_files(cli) {
        Ok(resolved) => resolved,
        Err(e) => {
            print_error(&e.to_string(), use_color);
            return 1;
        }
    };

    if files.is_empty() {
        print_error("No input files found.", use_color);
        return 1;
    }

    let options = resolve_options(cli, config.as_ref());
    let format = cli
        .format
        .map(OutputFormat::from)
        .or_else(|| config.as_ref().and_then(|c| c.output))
        .unwrap_or_default();
    info!(files = files.len(), ?options, ?format, "scanning");

    // One tokenizer per file; results keep the input order.
    let results: Vec<Result<ScannedFile, (String, std::io::Error)>> =
        files.par_iter().map(|path| scan_file(path, options)).collect();

    let mut scanned = Vec::with_capacity(results.len());
    let mut had_io_error = false;
    for result in results {
        match result {
            Ok(file) => scanned.push(file),
            Err((path, e)) => {
                print_error(&format!("Cannot read '{}': {}", path, e), use_color);
                had_io_error = true;
            }
        }
    }

    if !cli.quiet {
        if let Err(e) = print_tokens(&scanned, format) {
            print_error(&format!("Failed to write tokens: {}", e), use_color);
            return 1;
        }
    }

    let mut warnings = DiagnosticCollection::new();
    for file in &scanned {
        warnings.append(file.warnings.clone());
    }
    warnings.sort();
    for diag in warnings.diagnostics() {
        print_diagnostic(diag, use_color);
    }

    let mut error_count = 0;
    for file in &scanned {
        if let Some(ref error) = file.error {
            report::print_scan_error(&file.path, &file.source, error);
            error_count += 1;
        }
    }

    if cli.stats {
        let mut stats = TokenStats::new();
        for file in &scanned {
            stats.record_file(&file.tokens);
        }
        let total = stats.total().to_string();
        let file_count = stats.files().to_string();
        let summary = Diagnostic::new(&messages::SCANNED_0_TOKENS_IN_1_FILES, &[&total, &file_count]);
        eprintln!("{}", summary.message_text);
        eprintln!("{}", stats);
    }

    if error_count > 0 {
        if use_color {
            eprintln!(
                "\n{}Found {} error{}.{}",
                RED,
                error_count,
                if error_count == 1 { "" } else { "s" },
                RESET
            );
        } else {
            eprintln!(
                "\nFound {} error{}.",
                error_count,
                if error_count == 1 { "" } else { "s" }
            );
        }
        return 2;
    }
    if had_io_error {
        return 1;
    }

    if use_color {
        eprintln!(
            "{}Scanning completed in {:.2}s.{}",
            GRAY,
            start.elapsed().as_secs_f64(),
            RESET
        );
    }

    0
}

/// Tokenize one file. Read failures are returned with the path; scan
/// errors are kept on the result next to the tokens read before them.
fn scan_file(path: &str, options: ScannerOptions) -> Result<ScannedFile, (String, std::io::Error)> {
    let text = std::fs::read_to_string(path).map_err(|e| (path.to_string(), e))?;
    let source = SourceText::new(text);

    let mut tokens = Vec::new();
    let mut warnings = DiagnosticCollection::new();
    let mut error = None;

    match Tokenizer::with_options(source.as_str(), options) {
        Ok(mut tokenizer) => {
            for result in tokenizer.tokenize() {
                match result {
                    Ok(token) => tokens.push(token),
                    Err(e) => error = Some(e),
                }
            }
            for diag in tokenizer.take_diagnostics().into_diagnostics() {
                warnings.add(diag.with_file(path));
            }
        }
        Err(e) => error = Some(e),
    }

    debug!(path, tokens = tokens.len(), failed = error.is_some(), "scanned file");
    Ok(ScannedFile {
        path: path.to_string(),
        source,
        tokens,
        warnings,
        error,
    })
}

fn print_tokens(files: &[ScannedFile], format: OutputFormat) -> serde_json::Result<()> {
    match format {
        OutputFormat::Text => {
            for file in files {
                if files.len() > 1 {
                    println!("{}:", file.path);
                }
                for token in &file.tokens {
                    println!("  {}", token);
                }
            }
        }
        OutputFormat::Json => {
            let out: Vec<FileTokens<'_>> = files
                .iter()
                .map(|f| FileTokens {
                    file: &f.path,
                    tokens: &f.tokens,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

/// Scanner options from the config file, overridden by CLI flags.
fn resolve_options(cli: &Cli, config: Option<&JstokConfig>) -> ScannerOptions {
    let mut options = config.map(JstokConfig::scanner_options).unwrap_or_default();
    if cli.strict {
        options = ScannerOptions::strict();
    }
    if cli.match_quotes {
        options.match_quotes = true;
    }
    if cli.balance_braces {
        options.balance_template_braces = true;
    }
    options
}

fn resolve_input_files(cli: &Cli) -> Result<(Vec<String>, Option<JstokConfig>), ConfigError> {
    let project = match cli.project {
        Some(ref project) => Some(project.as_str()),
        None if cli.files.is_empty() && Path::new(CONFIG_FILE).exists() => Some(CONFIG_FILE),
        None => None,
    };

    let Some(project) = project else {
        return Ok((cli.files.clone(), None));
    };

    let config = jstok_options::parse_config_file(project)?;
    if !cli.files.is_empty() {
        return Ok((cli.files.clone(), Some(config)));
    }

    // Files listed in the config are relative to its directory.
    let root_dir = Path::new(project).parent().unwrap_or_else(|| Path::new(""));
    let files = config
        .files
        .iter()
        .flatten()
        .map(|f| PathBuf::from(root_dir).join(f).to_string_lossy().to_string())
        .collect();
    Ok((files, Some(config)))
}

fn run_init() -> i32 {
    let config_path = Path::new(CONFIG_FILE);
    if config_path.exists() {
        print_error("A jstok.json file already exists in the current directory.", atty_is_terminal());
        return 1;
    }

    match std::fs::write(config_path, jstok_options::DEFAULT_CONFIG) {
        Ok(()) => {
            println!("Successfully created a jstok.json file.");
            0
        }
        Err(e) => {
            print_error(&format!("Failed to create jstok.json: {}", e), atty_is_terminal());
            1
        }
    }
}

fn print_diagnostic(diag: &Diagnostic, use_color: bool) {
    if use_color {
        let color = if diag.is_error() { RED } else { YELLOW };
        if let Some(ref file) = diag.file {
            eprint!("{}{}{}", CYAN, file, RESET);
            if let Some(location) = diag.location {
                eprint!("({})", location);
            }
            eprint!(": ");
        }
        eprintln!(
            "{}{}{}{} {}JS{}{}: {}",
            BOLD, color, diag.category, RESET, CYAN, diag.code, RESET, diag.message_text
        );
    } else {
        eprintln!("{}", diag);
    }
}

fn print_error(msg: &str, use_color: bool) {
    if use_color {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    // On Unix, check if stderr is a terminal
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}
