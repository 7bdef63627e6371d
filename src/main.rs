//! Headcase CLI - converts text to headline case.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use headcase::config::{Config, ConfigError};
use headcase::{Options, explain, format_lines};
use rayon::prelude::*;
use similar::TextDiff;

/// Converts text to headline case, line by line.
#[derive(Parser, Debug)]
#[command(name = "headcase")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s) to convert. Reads stdin when none are given.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Convert this text instead of reading files.
    #[arg(short, long, conflicts_with_all = ["files", "stdin", "write", "check"])]
    text: Option<String>,

    /// Write converted output back to the input file(s).
    #[arg(short, long, conflicts_with = "check", requires = "files")]
    write: bool,

    /// Check if files are already in headline case (exit 1 if not).
    #[arg(short, long)]
    check: bool,

    /// Print a unified diff instead of the converted text.
    #[arg(long)]
    diff: bool,

    /// Print the rule applied to every word.
    #[arg(long, conflicts_with_all = ["write", "check", "diff"])]
    explain: bool,

    /// Read input from stdin.
    #[arg(long)]
    stdin: bool,

    /// Path to a configuration file (skips discovery).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not look for a .headcase.toml configuration file.
    #[arg(long, conflicts_with = "config")]
    no_config: bool,

    /// Minimum word length that is always capitalized.
    #[arg(long, value_name = "N")]
    min_length: Option<usize>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    let options = match resolve_options(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::debug!(
        "using {} always-capitalize and {} always-lowercase words, threshold {}",
        options.always_capitalize().len(),
        options.always_lowercase().len(),
        options.min_capitalize_length()
    );

    if let Some(text) = &args.text {
        emit(&args, "<text>", text, &options);
        return ExitCode::SUCCESS;
    }

    if args.stdin || args.files.is_empty() {
        let mut input = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut input) {
            eprintln!("Error reading stdin: {}", e);
            return ExitCode::FAILURE;
        }

        if args.check {
            let output = format_lines(&input, &options);
            if input != output {
                eprintln!("<stdin>: not in headline case");
                if args.diff {
                    print_diff("<stdin>", &input, &output);
                }
                return ExitCode::FAILURE;
            }
            return ExitCode::SUCCESS;
        }
        emit(&args, "<stdin>", &input, &options);
        return ExitCode::SUCCESS;
    }

    // Files are read and converted in parallel; reporting stays in argument order.
    let results: Vec<(&PathBuf, io::Result<(String, String)>)> = args
        .files
        .par_iter()
        .map(|file| (file, convert_file(file, &options)))
        .collect();

    let mut all_converted = true;
    for (file, result) in results {
        let (input, output) = match result {
            Ok(pair) => pair,
            Err(e) => {
                eprintln!("Error reading {}: {}", file.display(), e);
                return ExitCode::FAILURE;
            }
        };

        if args.check {
            if input != output {
                eprintln!("{}: not in headline case", file.display());
                if args.diff {
                    print_diff(&file.display().to_string(), &input, &output);
                }
                all_converted = false;
            }
        } else if args.write {
            if input != output {
                log::info!("rewriting {}", file.display());
                if let Err(e) = fs::write(file, &output) {
                    eprintln!("Error writing {}: {}", file.display(), e);
                    return ExitCode::FAILURE;
                }
            }
        } else {
            emit(&args, &file.display().to_string(), &input, &options);
        }
    }

    if args.check && !all_converted {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Initialize logging based on verbosity level
fn init_logging(args: &Args) {
    if args.quiet {
        return;
    }
    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn resolve_options(args: &Args) -> Result<Options, ConfigError> {
    let options = if let Some(path) = &args.config {
        log::info!("loading configuration from {}", path.display());
        Config::load_options(path)?
    } else if args.no_config {
        Options::default()
    } else {
        discover_options()?
    };

    for word in options.unreachable_entries() {
        log::debug!("{:?} can never match a word and is ignored", word);
    }

    Ok(match args.min_length {
        Some(n) => options.with_min_capitalize_length(n),
        None => options,
    })
}

fn discover_options() -> Result<Options, ConfigError> {
    let Ok(cwd) = std::env::current_dir() else {
        log::warn!("cannot determine the current directory; using built-in word lists");
        return Ok(Options::default());
    };
    match Config::discover(&cwd)? {
        Some((path, config)) => {
            log::info!("using configuration from {}", path.display());
            config
                .to_options()
                .map_err(|e| ConfigError::Invalid(path, e))
        }
        None => Ok(Options::default()),
    }
}

fn convert_file(file: &Path, options: &Options) -> io::Result<(String, String)> {
    let input = fs::read_to_string(file)?;
    let output = format_lines(&input, options);
    Ok((input, output))
}

/// Print the converted text, its diff, or its per-word explanation.
fn emit(args: &Args, name: &str, input: &str, options: &Options) {
    if args.explain {
        print_explanation(input, options);
        return;
    }
    let output = format_lines(input, options);
    if args.diff {
        print_diff(name, input, &output);
    } else if args.text.is_some() {
        println!("{}", output);
    } else {
        print!("{}", output);
    }
}

fn print_diff(name: &str, input: &str, output: &str) {
    let diff = TextDiff::from_lines(input, output);
    print!(
        "{}",
        diff.unified_diff()
            .context_radius(3)
            .header(&format!("a/{}", name), &format!("b/{}", name))
    );
}

fn print_explanation(input: &str, options: &Options) {
    for (line_number, line) in input.lines().enumerate() {
        for report in explain(line, options) {
            println!(
                "{}:{}\t{}\t{}\t{}",
                line_number + 1,
                report.index + 1,
                report.word,
                report.output,
                report.verdict.rule
            );
        }
    }
}
