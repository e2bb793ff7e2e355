mod args;

use std::process::ExitCode;

use anyhow::Result;
use hexcmp::{ComparisonReport, FileSummary, load_intel_hex};

use args::{Args, USAGE};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let args = match Args::parse_exact(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            log::debug!("argument error: {e}");
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(identical) => {
            log::info!("files identical: {identical}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Both files are parsed before anything is printed, so a fatal error never
/// leaves a partial report behind.
fn run(args: &Args) -> Result<bool> {
    let first = load_intel_hex(&args.first)?;
    let second = load_intel_hex(&args.second)?;

    let first_name = args.first.display().to_string();
    let second_name = args.second.display().to_string();
    let report = ComparisonReport::new(
        FileSummary::new(&first_name, &first),
        FileSummary::new(&second_name, &second),
    );

    print!("{report}");
    Ok(report.is_identical())
}
