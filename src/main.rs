use std::process::ExitCode;

use squaregen::cli::{self, Command};
use tracing::level_filters::LevelFilter;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("squaregen");

    let invocation = match cli::parse_args(&args) {
        Ok(Command::Help) => {
            print!("{}", cli::usage(program));
            return ExitCode::SUCCESS;
        }
        Ok(Command::Analyze(invocation)) => invocation,
        Err(e) => {
            eprintln!("error: {}", e);
            print!("{}", cli::usage(program));
            return ExitCode::from(1);
        }
    };

    init_logging(invocation.verbose);

    match cli::execute(&invocation) {
        Ok(report) => {
            print!("{}", cli::render(&invocation, &report));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}
