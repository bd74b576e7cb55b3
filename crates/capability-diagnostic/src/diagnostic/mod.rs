//! Capability gaps and risk diagnostic.
//!
//! A submission of six domain scores, optional coverage estimates and five context flags is
//! turned into a capability band, an average score, an ordered list of risk signals and a
//! strengths/gaps/stabilisers summary. Evaluation is a pure function of the submission.

pub mod domain;
pub mod export;
pub mod import;
pub mod input;
pub mod result;
pub mod router;
mod rules;
pub mod scoring;
mod summary;

#[cfg(test)]
mod tests;

pub use domain::{score_label, CapabilityBand, Domain, DomainKey, SignalLevel, DOMAINS};
pub use export::{render_export, why_this_matters, DiagnosticReportView, SignalView};
pub use import::{ScoreSheet, ScoreSheetImportError, ScoreSheetImporter};
pub use input::{ContextFlags, CoverageEstimates, DiagnosticInput, DomainScores, InputError};
pub use result::{DiagnosticResult, DiagnosticSummary, DomainStat, RiskSignal};
pub use router::diagnostic_router;

use rules::{no_major_signals, Rule, RuleContext, RULES};
use scoring::{band_for_average, round2};
use summary::build_summary;
use tracing::debug;

/// Stateless evaluator applying the ordered rule set to a submission.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticEngine {
    rules: &'static [Rule],
}

impl Default for DiagnosticEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticEngine {
    pub fn new() -> Self {
        Self { rules: &RULES }
    }

    /// Validate the submission, then derive the full result.
    pub fn evaluate(&self, input: &DiagnosticInput) -> Result<DiagnosticResult, InputError> {
        input.validate()?;
        Ok(self.analyse(input))
    }

    fn analyse(&self, input: &DiagnosticInput) -> DiagnosticResult {
        let ctx = RuleContext::new(input);

        let mut signals: Vec<_> = self.rules.iter().filter_map(|rule| rule(&ctx)).collect();
        for signal in &signals {
            debug!(
                signal = signal.id,
                level = signal.level.label(),
                "risk signal raised"
            );
        }

        if signals.is_empty() {
            debug!("no rule triggered; adding fallback signal");
            signals.push(no_major_signals());
        }

        let summary = build_summary(&ctx);

        DiagnosticResult {
            band: band_for_average(ctx.average),
            average_score: round2(ctx.average),
            domain_stats: ctx.stats,
            signals,
            summary,
        }
    }
}

/// Evaluate one submission with the standard rule set.
pub fn evaluate(input: &DiagnosticInput) -> Result<DiagnosticResult, InputError> {
    DiagnosticEngine::new().evaluate(input)
}
