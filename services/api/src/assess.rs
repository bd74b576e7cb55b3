use crate::infra::{load_score_sheet_from_path, load_submission_from_path, OutputFormat};
use capability_diagnostic::config::{AppConfig, ReportConfig};
use capability_diagnostic::diagnostic::{
    render_export, score_label, ContextFlags, CoverageEstimates, DiagnosticEngine,
    DiagnosticInput, DiagnosticReportView, DomainKey, DomainScores, DOMAINS,
};
use capability_diagnostic::error::AppError;
use capability_diagnostic::telemetry;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// JSON submission in the same shape as the HTTP request body
    #[arg(long, required_unless_present = "scores_csv", conflicts_with = "scores_csv")]
    pub(crate) input: Option<PathBuf>,
    /// Score sheet with Domain, Score and optional Coverage columns
    #[arg(long, requires = "org")]
    pub(crate) scores_csv: Option<PathBuf>,
    /// Organisation or team name (overrides the JSON submission)
    #[arg(long)]
    pub(crate) org: Option<String>,
    /// Free-text context notes (overrides the JSON submission)
    #[arg(long)]
    pub(crate) notes: Option<String>,
    #[command(flatten)]
    pub(crate) flags: ContextFlagArgs,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

/// Context checkboxes; each one passed switches the matching flag on.
#[derive(Args, Debug, Default, Clone, Copy)]
pub(crate) struct ContextFlagArgs {
    /// High-stakes use (assessment, consequential decisions)
    #[arg(long)]
    pub(crate) high_stakes: bool,
    /// Public-facing outputs or external stakeholders
    #[arg(long)]
    pub(crate) public_facing: bool,
    /// Sensitive or personal data involved
    #[arg(long)]
    pub(crate) sensitive_data: bool,
    /// Heavy reliance on a single vendor or toolchain
    #[arg(long)]
    pub(crate) vendor_reliance: bool,
    /// Unclear ownership or accountability
    #[arg(long)]
    pub(crate) unclear_ownership: bool,
}

impl ContextFlagArgs {
    fn apply(self, flags: ContextFlags) -> ContextFlags {
        ContextFlags {
            high_stakes_use: flags.high_stakes_use || self.high_stakes,
            public_facing: flags.public_facing || self.public_facing,
            sensitive_data: flags.sensitive_data || self.sensitive_data,
            vendor_reliance: flags.vendor_reliance || self.vendor_reliance,
            unclear_ownership: flags.unclear_ownership || self.unclear_ownership,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    telemetry::init_cli()?;
    let report = AppConfig::load()?.report;

    let format = args.format;
    let input = build_submission(args)?;
    println!("{}", render(&input, format, &report)?);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    telemetry::init_cli()?;
    let report = AppConfig::load()?.report;

    let input = demo_submission();
    println!("{}", render(&input, args.format, &report)?);
    Ok(())
}

pub(crate) fn run_domains() {
    println!("Capability domains");
    for domain in DOMAINS.iter() {
        println!("- {} [{}]", domain.label, domain.key.key());
        println!("  {}", domain.description);
    }

    println!("\nScoring scale");
    for score in 0..=4 {
        println!("- {}: {}", score, score_label(score));
    }
}

pub(crate) fn build_submission(args: AssessArgs) -> Result<DiagnosticInput, AppError> {
    let AssessArgs {
        input,
        scores_csv,
        org,
        notes,
        flags,
        ..
    } = args;

    let mut submission = match (input, scores_csv) {
        (Some(path), _) => {
            info!(path = %path.display(), "loading JSON submission");
            load_submission_from_path(&path)?
        }
        (None, Some(path)) => {
            info!(path = %path.display(), "importing score sheet");
            load_score_sheet_from_path(&path, org.as_deref().unwrap_or_default())?
        }
        (None, None) => {
            warn!("no submission source supplied; using an empty score set");
            DiagnosticInput::new(org.clone().unwrap_or_default(), DomainScores::default())
        }
    };

    if let Some(org) = org {
        submission.org_name = org;
    }
    if let Some(notes) = notes {
        submission.context_notes = notes;
    }
    submission.signals = flags.apply(submission.signals);

    Ok(submission)
}

pub(crate) fn render(
    input: &DiagnosticInput,
    format: OutputFormat,
    report: &ReportConfig,
) -> Result<String, AppError> {
    let result = DiagnosticEngine::new().evaluate(input)?;
    info!(
        band = result.band.label(),
        signals = result.signals.len(),
        "submission evaluated"
    );

    match format {
        OutputFormat::Text => Ok(render_export(
            input,
            &result,
            Utc::now(),
            &report.framework_edition,
        )),
        OutputFormat::Json => {
            let view = DiagnosticReportView::new(input, &result);
            Ok(serde_json::to_string_pretty(&view)?)
        }
    }
}

/// A programme team moving quickly on practice while governance lags.
pub(crate) fn demo_submission() -> DiagnosticInput {
    let scores = DomainScores {
        awareness: 3,
        coagency: 2,
        practice: 4,
        ethics: 2,
        governance: 1,
        renewal: 2,
    };
    let coverage = CoverageEstimates::default()
        .with(DomainKey::Awareness, 70.0)
        .with(DomainKey::Coagency, 40.0)
        .with(DomainKey::Practice, 85.0)
        .with(DomainKey::Ethics, 25.0)
        .with(DomainKey::Governance, 10.0)
        .with(DomainKey::Renewal, 30.0);

    DiagnosticInput::new("Business School (UG programmes)", scores)
        .with_notes("Generative AI tools adopted across assessment design this year")
        .with_coverage(coverage)
        .with_signals(ContextFlags {
            high_stakes_use: true,
            vendor_reliance: true,
            ..ContextFlags::default()
        })
}
