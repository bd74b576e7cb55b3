use capability_diagnostic::diagnostic::{DiagnosticInput, ScoreSheetImporter};
use capability_diagnostic::error::AppError;
use clap::ValueEnum;
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// How command-line evaluations are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Plain-text report as used for committee papers
    #[default]
    Text,
    /// Labelled JSON report, identical to the HTTP response
    Json,
}

pub(crate) fn load_submission_from_path(path: &Path) -> Result<DiagnosticInput, AppError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

pub(crate) fn load_score_sheet_from_path(
    path: &Path,
    org_name: &str,
) -> Result<DiagnosticInput, AppError> {
    let sheet = ScoreSheetImporter::from_path(path)?;
    Ok(sheet.into_input(org_name))
}
