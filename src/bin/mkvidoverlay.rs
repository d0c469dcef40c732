use std::process::ExitCode;

use clap::Parser;
use mkvidoverlay::{args::Cli, error::OverlayError, plan::FileOutcome};

fn main() -> ExitCode {
    // exits with code 2 on invalid arguments
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level().as_str()),
    )
    .init();

    if let Err(e) = real_main(cli) {
        eprintln!("{}", e);
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}

fn real_main(cli: Cli) -> Result<(), OverlayError> {
    let (color, color_error) = cli.background_color();
    if let Some(message) = color_error {
        eprintln!("{message}");
    }
    println!("color: {color}");

    let plan = cli.into_plan(color);
    plan.execute(report)
}

fn report(outcome: &FileOutcome) {
    for warning in &outcome.warnings {
        eprintln!("{warning}");
    }
    match &outcome.result {
        Ok(output) => println!("{} -> {}", outcome.input.display(), output.display()),
        Err(error) => eprintln!("{}: {error}", outcome.input.display()),
    }
}
