pub mod config;
pub mod diagnostics;
pub mod entities;
pub mod error;
pub mod formatter;
pub mod mapping;
pub mod output;
pub mod pipeline;
pub mod selector;
pub mod sequencer;
pub mod types;

pub use config::{ConfigLoader, ConfigValidator, ConverterConfig};
pub use diagnostics::{Diagnostics, RunStats};
pub use entities::{Activity, Candidate, ExerciseSet};
pub use error::{AppError, DefaultErrorReporter, ErrorReporter};
pub use mapping::{ExerciseNameMap, RepOnlyExercises};
pub use output::OutputRow;
pub use pipeline::{ConversionPipeline, PipelineOptions};
pub use selector::{select_exercise, Selection};
pub use types::*;
