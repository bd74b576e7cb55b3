use crate::diagnostic::domain::DomainKey;
use crate::diagnostic::input::{ContextFlags, CoverageEstimates, DiagnosticInput, DomainScores};
use crate::diagnostic::result::{DiagnosticResult, RiskSignal};
use crate::diagnostic::DiagnosticEngine;

pub(super) fn scores(values: [i32; 6]) -> DomainScores {
    let mut scores = DomainScores::default();
    for (domain, value) in DomainKey::ordered().into_iter().zip(values) {
        scores.set(domain, value);
    }
    scores
}

pub(super) fn submission(values: [i32; 6]) -> DiagnosticInput {
    DiagnosticInput::new("Curriculum design team", scores(values))
}

pub(super) fn flags() -> ContextFlags {
    ContextFlags::default()
}

pub(super) fn coverage(values: [f64; 6]) -> CoverageEstimates {
    let mut coverage = CoverageEstimates::default();
    for (domain, value) in DomainKey::ordered().into_iter().zip(values) {
        coverage.set(domain, Some(value));
    }
    coverage
}

pub(super) fn run(input: &DiagnosticInput) -> DiagnosticResult {
    DiagnosticEngine::new()
        .evaluate(input)
        .expect("submission is valid")
}

pub(super) fn signal_ids(result: &DiagnosticResult) -> Vec<&'static str> {
    result.signals.iter().map(|signal| signal.id).collect()
}

pub(super) fn expect_signal<'a>(result: &'a DiagnosticResult, id: &str) -> &'a RiskSignal {
    result
        .signal(id)
        .unwrap_or_else(|| panic!("expected {id} in {:?}", signal_ids(result)))
}
