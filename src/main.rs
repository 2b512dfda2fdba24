use garmin_to_hevy::cli::{self, Args};
use garmin_to_hevy::core::{DefaultErrorReporter, ErrorReporter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse_with_env_help();

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            DefaultErrorReporter::new().report_error(&err);
            ExitCode::FAILURE
        }
    }
}
