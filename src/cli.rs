//! Command-line front end.
//!
//! Parses `GENERATOR COUNT [SEEDS...]` plus a few optional flags, builds
//! the selected generator and renders the harness report. Everything here
//! is plain data in and text out; the binary only prints and exits.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::error::SquareGenError;
use crate::harness::{self, RunOptions, RunReport};
use crate::random::any_generator::{AnyGenerator, GeneratorKind};

/// Raw command line as accepted by clap.
///
/// Positionals are kept as strings so that malformed numbers surface as
/// usage errors rather than clap diagnostics.
#[derive(Parser, Debug)]
#[command(name = "squaregen")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Generator selector (0, 1, 2 or 3)
    generator: Option<String>,

    /// Iteration budget
    count: Option<String>,

    /// Generator-specific seeds
    seeds: Vec<String>,

    /// Print mean, standard deviation and coefficient of variation
    #[arg(long)]
    stats: bool,

    /// Write every generated value to PATH, one per line
    #[arg(long, value_name = "PATH")]
    samples: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print usage
    #[arg(short, long)]
    help: bool,
}

/// A validated analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub kind: GeneratorKind,
    pub count: u64,
    pub seeds: Vec<u32>,
    pub stats: bool,
    pub samples: Option<PathBuf>,
    pub verbose: u8,
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Analyze(Invocation),
}

/// Renders the usage text for `program`.
pub fn usage(program: &str) -> String {
    let mut text = format!("USAGE: {} GENERATOR COUNT <OPTIONS>\n", program);
    text.push_str("GENERATOR options:\n");
    for (index, kind) in [
        GeneratorKind::MiddleMulSquare,
        GeneratorKind::ShuffleSquare,
        GeneratorKind::SquareCongruent,
    ]
    .iter()
    .enumerate()
    {
        text.push_str(&format!(
            "{} - {} (seeds: {})\n",
            index,
            kind.name(),
            kind.seed_names()
        ));
    }
    text.push_str("OPTIONS are specific seeds for the generator\n");
    text.push_str("FLAGS: --stats, --samples PATH, -v\n");
    text
}

/// Parses and validates a full argument list, program name included.
///
/// # Errors
/// Returns a usage-class [`SquareGenError`] (see
/// [`SquareGenError::is_usage`]) when the arguments are missing,
/// malformed, select an unknown generator or carry the wrong number of
/// seeds.
pub fn parse_args<I, T>(args: I) -> Result<Command, SquareGenError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(|e| {
        let rendered = e.to_string();
        let reason = rendered
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string();
        SquareGenError::InvalidArgument(reason)
    })?;
    if cli.help {
        return Ok(Command::Help);
    }

    let (generator, count) = match (cli.generator, cli.count) {
        (Some(g), Some(c)) => (g, c),
        _ => return Err(SquareGenError::MissingArguments),
    };

    let selector: i64 = parse_number(&generator)?;
    let kind = GeneratorKind::from_selector(selector)?;
    let count: u64 = parse_number(&count)?;

    let expected = kind.seed_arity();
    if cli.seeds.len() != expected {
        return Err(SquareGenError::SeedArity {
            expected,
            found: cli.seeds.len(),
        });
    }
    let seeds = cli
        .seeds
        .iter()
        .map(|s| parse_number::<u32>(s))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Command::Analyze(Invocation {
        kind,
        count,
        seeds,
        stats: cli.stats,
        samples: cli.samples,
        verbose: cli.verbose,
    }))
}

fn parse_number<N: std::str::FromStr>(raw: &str) -> Result<N, SquareGenError> {
    raw.trim()
        .parse()
        .map_err(|_| SquareGenError::InvalidArgument(format!("'{}' is not a valid number", raw)))
}

/// Builds the requested generator, runs the harness and writes samples.
///
/// # Errors
/// - [`SquareGenError::ZeroModulus`] if the generator cannot be built.
/// - [`SquareGenError::SampleWrite`] if the sample file cannot be written.
pub fn execute(invocation: &Invocation) -> Result<RunReport, SquareGenError> {
    let mut generator = AnyGenerator::from_seeds(invocation.kind, &invocation.seeds)?;
    tracing::info!(
        generator = invocation.kind.name(),
        count = invocation.count,
        "starting analysis run"
    );
    let options = RunOptions {
        capture_samples: invocation.stats || invocation.samples.is_some(),
    };
    let report = harness::analyze_with(&mut generator, invocation.count, options);

    if let Some(path) = &invocation.samples {
        std::fs::write(path, report.samples_text())
            .map_err(|e| SquareGenError::SampleWrite(format!("{}: {}", path.display(), e)))?;
        tracing::info!(path = %path.display(), values = report.samples.len(), "samples written");
    }
    Ok(report)
}

/// Renders the report, followed by summary statistics when requested.
pub fn render(invocation: &Invocation, report: &RunReport) -> String {
    let mut text = format!("{}\n", report);
    if invocation.stats {
        match report.stats() {
            Some(stats) => {
                text.push_str(&format!("mean: {:.4}\n", stats.mean));
                text.push_str(&format!("std: {:.4}\n", stats.std_dev));
                match stats.var_coef {
                    Some(v) => text.push_str(&format!("varcoef: {:.6}\n", v)),
                    None => text.push_str("varcoef: undefined\n"),
                }
            }
            None => text.push_str("no samples for statistics\n"),
        }
    }
    text
}
