pub mod args;
pub mod commands;

pub use args::ConvertArgs;
use crate::core::config::{ConfigLoader, ConfigValidator};
use crate::core::error::AppError;
use clap::{CommandFactory, FromArgMatches, Parser};

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\n{all-args}\n\
{after-help}\n";

#[derive(Parser, Debug)]
#[command(name = "garmin-to-hevy")]
#[command(version = crate::VERSION)]
#[command(about = "Convert Garmin Connect strength workouts into a Hevy import CSV")]
#[command(help_template = HELP_TEMPLATE)]
pub struct Args {
    #[command(flatten)]
    pub convert: ConvertArgs,
}

const EXAMPLE_HELP: &str =
    "Example:\n    garmin-to-hevy activities.json march_workouts --unknown-exercises skip";

impl Args {
    /// Command definition with the example and supported environment variables as trailing help.
    pub fn command_with_env_help() -> clap::Command {
        let mut after_help = format!("{}\n\nEnvironment:\n", EXAMPLE_HELP);
        for doc in ConfigLoader::env_var_documentation() {
            after_help.push_str("    ");
            after_help.push_str(doc);
            after_help.push('\n');
        }
        Args::command().after_help(after_help)
    }

    /// Parse the process arguments; exits with usage on error.
    pub fn parse_with_env_help() -> Self {
        let matches = Self::command_with_env_help().get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
    }
}

/// Resolve configuration, start logging, and run the conversion.
///
/// Precedence: defaults, config file, environment, command line.
pub fn run(args: Args) -> Result<(), AppError> {
    let args = args.convert;

    let mut config = ConfigLoader::load(args.config.as_deref())?;
    args.apply_overrides(&mut config);
    ConfigValidator::validate(&config)?;

    let _logging = crate::logging::init(&config.logging, args.verbose)?;
    tracing::debug!("resolved configuration: {:?}", config);

    commands::convert(&args, &config)
}
