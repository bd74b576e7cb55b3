use super::domain::{CapabilityBand, DomainKey, SignalLevel};
use serde::Serialize;

/// Score of a single domain as seen by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainStat {
    pub key: DomainKey,
    pub label: &'static str,
    pub score: i32,
}

impl DomainStat {
    /// Summary-list rendering, e.g. `Ethics, Equity & Impact (score 3/4)`.
    pub fn describe(&self) -> String {
        format!("{} (score {}/4)", self.label, self.score)
    }
}

/// An explainable observation about a risk or gap pattern in the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSignal {
    pub id: &'static str,
    pub level: SignalLevel,
    pub title: &'static str,
    pub rationale: String,
    pub prompts: Vec<&'static str>,
    pub related_domains: Vec<DomainKey>,
}

impl RiskSignal {
    pub fn related_labels(&self) -> Vec<&'static str> {
        self.related_domains
            .iter()
            .map(|domain| domain.label())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiagnosticSummary {
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    /// Conditions already present that reduce risk or add resilience.
    pub stabilisers: Vec<String>,
}

/// Everything derived from one submission. Signals keep rule-evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticResult {
    pub band: CapabilityBand,
    pub average_score: f64,
    pub domain_stats: Vec<DomainStat>,
    pub signals: Vec<RiskSignal>,
    pub summary: DiagnosticSummary,
}

impl DiagnosticResult {
    pub fn signal(&self, id: &str) -> Option<&RiskSignal> {
        self.signals.iter().find(|signal| signal.id == id)
    }

    pub fn highest_level(&self) -> Option<SignalLevel> {
        self.signals.iter().map(|signal| signal.level).max()
    }

    pub fn score_for(&self, domain: DomainKey) -> Option<i32> {
        self.domain_stats
            .iter()
            .find(|stat| stat.key == domain)
            .map(|stat| stat.score)
    }
}
