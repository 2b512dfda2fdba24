use crate::{
    cli::args::ConvertArgs,
    core::{
        config::ConverterConfig,
        diagnostics::{Diagnostics, RunStats},
        entities::Activity,
        error::AppError,
        mapping::{load_overrides, ExerciseNameMap, RepOnlyExercises},
        output::{output_path, write_csv_file},
        pipeline::ConversionPipeline,
        DefaultErrorReporter, ErrorReporter,
    },
    utils::serialization::{FileSerializer, FileUtils, JsonSerializer},
};
use std::path::Path;

/// Convert one Garmin export into `<basename>.csv`.
///
/// Nothing is written unless the input was read and parsed in full.
pub fn convert(args: &ConvertArgs, config: &ConverterConfig) -> Result<(), AppError> {
    let reporter = DefaultErrorReporter::new();

    let activities: Vec<Activity> = FileUtils.load_from_file(&args.input, &JsonSerializer)?;
    tracing::info!(
        "read {} activities from {}",
        activities.len(),
        args.input.display()
    );

    let explicit_override = args.mapping.is_some() || config.mapping.has_custom_override_file();
    let names = load_name_map(config, explicit_override, &reporter)?;
    let rep_only = RepOnlyExercises::builtin()?;

    let pipeline = ConversionPipeline::new(
        &names,
        &rep_only,
        config.conversion.pipeline_options(),
    );
    let mut diagnostics = Diagnostics::new();
    let rows = pipeline.convert(&activities, &mut diagnostics);

    let path = output_path(&config.output.default_basename);
    write_csv_file(&rows, &path)?;

    let report = diagnostics.render_report();
    if !report.is_empty() {
        print!("{}", report);
    }

    let summary = summary_line(diagnostics.stats(), rows.len(), &path);
    tracing::info!("{}", summary);
    println!("{}", summary);

    Ok(())
}

/// Built-in table plus the user's override tier.
///
/// A missing override file only matters when a non-default path was asked for.
/// An unreadable one is reported and the built-in table is used alone.
fn load_name_map(
    config: &ConverterConfig,
    explicit: bool,
    reporter: &impl ErrorReporter,
) -> Result<ExerciseNameMap, AppError> {
    let names = ExerciseNameMap::builtin()?;
    let override_file = &config.mapping.override_file;

    match load_overrides(override_file) {
        Ok(overrides) => {
            tracing::info!(
                "loaded {} custom exercise names from {}",
                overrides.len(),
                override_file.display()
            );
            Ok(names.with_overrides(overrides))
        }
        Err(err) if err.is_not_found() && !explicit => {
            tracing::info!("{}; using built-in exercise names", err);
            Ok(names)
        }
        Err(err) => {
            tracing::warn!("{}", err);
            reporter.report_warning(
                "Custom exercise names could not be loaded; using built-in names only",
                Some(err.to_string()),
            );
            Ok(names)
        }
    }
}

fn summary_line(stats: &RunStats, rows_written: usize, path: &Path) -> String {
    let mut line = format!(
        "Wrote {} sets to {} ({} of {} activities were strength training, {} sets filtered",
        rows_written,
        path.display(),
        stats.strength_activities,
        stats.activities_read,
        stats.sets_filtered,
    );
    if stats.unknown_sets_skipped > 0 {
        line.push_str(&format!(
            ", {} unknown sets skipped",
            stats.unknown_sets_skipped
        ));
    }
    line.push(')');
    line
}
