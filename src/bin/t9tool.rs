use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::warn;

use t9_engine::dict::{BuildOptions, WordIndex};
use t9_engine::settings::{self, Settings};
use t9_engine::t9::{format_results, keymap, QueryResult, T9Engine};
use t9_engine::trace_init::init_tracing;

/// Unwrap a Result or print the error and exit.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "t9tool", about = "T9 dictionary lookup tool")]
struct Cli {
    /// Settings TOML file (embedded defaults when omitted)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Write JSON trace logs to this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct DictArgs {
    /// Word frequency list (`word rank score` per line)
    #[arg(long)]
    dict: Option<PathBuf>,
    /// Fail on malformed dictionary lines instead of skipping them
    #[arg(long)]
    strict: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Look up the words typed by one or more digit sequences
    Query {
        #[command(flatten)]
        dict: DictArgs,
        /// Maximum results per query (0 = unlimited)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Print one JSON object per query
        #[arg(long)]
        json: bool,
        /// Digit sequences, e.g. 4663
        #[arg(required = true)]
        digits: Vec<String>,
    },
    /// Check whether a word is in the dictionary
    Contains {
        #[command(flatten)]
        dict: DictArgs,
        word: String,
    },
    /// Print the digit sequence that types a word
    Digits { word: String },
    /// Build the index and print statistics
    Info {
        #[command(flatten)]
        dict: DictArgs,
    },
    /// Read digit sequences from stdin, one per line
    Repl {
        #[command(flatten)]
        dict: DictArgs,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
}

#[derive(Serialize)]
struct QueryOutput<'a> {
    digits: &'a str,
    results: &'a [QueryResult],
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_dir.as_deref());

    let settings = match &cli.settings {
        Some(path) => die!(
            Settings::load(path),
            "Error reading settings {}: {}",
            path.display()
        ),
        None => die!(Settings::defaults(), "Error in default settings: {}"),
    };

    match cli.command {
        Command::Query {
            dict,
            limit,
            json,
            digits,
        } => {
            let engine = load_engine(&settings, &dict);
            let limit = limit.unwrap_or(settings.query.limit);
            let out = die!(
                render_queries(&engine, &digits, limit, settings.query.max_digits, json),
                "Error encoding results: {}"
            );
            die!(
                io::stdout().lock().write_all(out.as_bytes()),
                "Error writing output: {}"
            );
        }
        Command::Contains { dict, word } => {
            let engine = load_engine(&settings, &dict);
            println!("{}", engine.contains(&word));
        }
        Command::Digits { word } => match keymap::digits_for_word(&word) {
            Some(digits) => println!("{digits}"),
            None => {
                eprintln!("Error: '{word}' contains characters with no keypad digit");
                process::exit(1);
            }
        },
        Command::Info { dict } => info(&settings, &dict),
        Command::Repl { dict } => repl(&settings, &dict),
        Command::SettingsExport => print!("{}", settings::default_toml()),
        Command::SettingsValidate { file } => {
            die!(
                Settings::load(&file),
                "Invalid settings {}: {}",
                file.display()
            );
            println!("{}: OK", file.display());
        }
    }
}

fn dict_path<'a>(settings: &'a Settings, args: &'a DictArgs) -> &'a Path {
    args.dict.as_deref().unwrap_or(settings.dictionary.path.as_path())
}

fn build_options(settings: &Settings, args: &DictArgs) -> BuildOptions {
    BuildOptions {
        strict: args.strict || settings.dictionary.strict,
    }
}

fn load_engine(settings: &Settings, args: &DictArgs) -> T9Engine {
    let path = dict_path(settings, args);
    let (index, stats) = die!(
        WordIndex::open(path, build_options(settings, args)),
        "Error loading {}: {}",
        path.display()
    );
    if stats.skipped > 0 {
        warn!(skipped = stats.skipped, "malformed dictionary lines skipped");
    }
    T9Engine::new(Arc::new(index))
}

fn check_digits(digits: &str, max_digits: usize) -> Result<(), String> {
    let len = digits.chars().count();
    if len > max_digits {
        return Err(format!(
            "digit sequence has {len} characters (max {max_digits})"
        ));
    }
    Ok(())
}

/// Render every query in `digits`. Sequences longer than `max_digits` are
/// reported and skipped; the rest of the batch still runs.
fn render_queries(
    engine: &T9Engine,
    digits: &[String],
    limit: usize,
    max_digits: usize,
    json: bool,
) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for d in digits {
        if let Err(msg) = check_digits(d, max_digits) {
            warn!(%msg, "skipping query");
            eprintln!("Error: {msg}");
            continue;
        }
        let results = run_query(engine, d, limit);
        if json {
            out.push_str(&serde_json::to_string(&QueryOutput {
                digits: d,
                results: &results,
            })?);
            out.push('\n');
        } else {
            out.push_str(&format_results(d, &results));
        }
    }
    Ok(out)
}

fn run_query(engine: &T9Engine, digits: &str, limit: usize) -> Vec<QueryResult> {
    let mut results = engine.query(digits);
    if limit > 0 {
        results.truncate(limit);
    }
    results
}

fn info(settings: &Settings, args: &DictArgs) {
    let path = dict_path(settings, args);
    let (index, stats) = die!(
        WordIndex::open(path, build_options(settings, args)),
        "Error loading {}: {}",
        path.display()
    );
    let index_stats = index.stats();
    println!("Dictionary: {}", path.display());
    println!("  Lines:    {}", stats.lines);
    println!("  Inserted: {}", stats.inserted);
    println!("  Skipped:  {}", stats.skipped);
    println!("  Blank:    {}", stats.blank);
    println!("  Words:    {}", index_stats.words);
    println!("  Nodes:    {}", index_stats.nodes);
}

fn repl(settings: &Settings, args: &DictArgs) {
    let engine = load_engine(settings, args);
    let limit = settings.query.limit;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        let digits = line.trim();
        if digits.is_empty() {
            continue;
        }
        if let Err(msg) = check_digits(digits, settings.query.max_digits) {
            eprintln!("Error: {msg}");
            continue;
        }
        let out = format_results(digits, &run_query(&engine, digits, limit));
        die!(stdout.write_all(out.as_bytes()), "Error writing output: {}");
        die!(stdout.flush(), "Error writing output: {}");
    }
}
