use super::domain::DomainKey;
use super::scoring::{clamp_coverage, clamp_score};
use serde::{Deserialize, Serialize};

/// Self-assessed score for every domain. Absent fields deserialize as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainScores {
    pub awareness: i32,
    pub coagency: i32,
    pub practice: i32,
    pub ethics: i32,
    pub governance: i32,
    pub renewal: i32,
}

impl DomainScores {
    /// Every domain at the same score.
    pub const fn uniform(score: i32) -> Self {
        Self {
            awareness: score,
            coagency: score,
            practice: score,
            ethics: score,
            governance: score,
            renewal: score,
        }
    }

    pub const fn get(&self, domain: DomainKey) -> i32 {
        match domain {
            DomainKey::Awareness => self.awareness,
            DomainKey::Coagency => self.coagency,
            DomainKey::Practice => self.practice,
            DomainKey::Ethics => self.ethics,
            DomainKey::Governance => self.governance,
            DomainKey::Renewal => self.renewal,
        }
    }

    pub fn set(&mut self, domain: DomainKey, score: i32) {
        let slot = match domain {
            DomainKey::Awareness => &mut self.awareness,
            DomainKey::Coagency => &mut self.coagency,
            DomainKey::Practice => &mut self.practice,
            DomainKey::Ethics => &mut self.ethics,
            DomainKey::Governance => &mut self.governance,
            DomainKey::Renewal => &mut self.renewal,
        };
        *slot = score;
    }

    pub fn with(mut self, domain: DomainKey, score: i32) -> Self {
        self.set(domain, score);
        self
    }

    /// Copy with every score forced into the 0–4 scale.
    pub fn clamped(&self) -> Self {
        let mut clamped = *self;
        for domain in DomainKey::ordered() {
            clamped.set(domain, clamp_score(self.get(domain)));
        }
        clamped
    }
}

/// Optional per-domain coverage estimates in percent. Any subset may be present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageEstimates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awareness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coagency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practice: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethics: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub governance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal: Option<f64>,
}

impl CoverageEstimates {
    pub const fn get(&self, domain: DomainKey) -> Option<f64> {
        match domain {
            DomainKey::Awareness => self.awareness,
            DomainKey::Coagency => self.coagency,
            DomainKey::Practice => self.practice,
            DomainKey::Ethics => self.ethics,
            DomainKey::Governance => self.governance,
            DomainKey::Renewal => self.renewal,
        }
    }

    pub fn set(&mut self, domain: DomainKey, value: Option<f64>) {
        let slot = match domain {
            DomainKey::Awareness => &mut self.awareness,
            DomainKey::Coagency => &mut self.coagency,
            DomainKey::Practice => &mut self.practice,
            DomainKey::Ethics => &mut self.ethics,
            DomainKey::Governance => &mut self.governance,
            DomainKey::Renewal => &mut self.renewal,
        };
        *slot = value;
    }

    pub fn with(mut self, domain: DomainKey, value: f64) -> Self {
        self.set(domain, Some(value));
        self
    }

    /// Present estimates in catalogue order.
    pub fn present(&self) -> impl Iterator<Item = (DomainKey, f64)> + '_ {
        DomainKey::ordered()
            .into_iter()
            .filter_map(|domain| self.get(domain).map(|value| (domain, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }

    /// Copy with every present estimate forced into 0–100. NaN estimates are dropped.
    pub fn clamped(&self) -> Self {
        let mut clamped = Self::default();
        for (domain, value) in self.present() {
            clamped.set(domain, clamp_coverage(value));
        }
        clamped
    }
}

/// Context checkboxes that raise the severity of otherwise moderate gaps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextFlags {
    /// Assessment, consequential decisions, clinical use, admissions and similar.
    pub high_stakes_use: bool,
    /// Outputs published externally or used with external stakeholders.
    pub public_facing: bool,
    /// Personal, special-category or confidential data involved.
    pub sensitive_data: bool,
    /// Heavy reliance on a single vendor or toolchain.
    pub vendor_reliance: bool,
    /// Unclear ownership or accountability for AI-supported work.
    pub unclear_ownership: bool,
}

impl ContextFlags {
    /// Any of the conditions that make ethics and governance gaps consequential.
    pub const fn raises_exposure(&self) -> bool {
        self.high_stakes_use || self.public_facing || self.sensitive_data
    }
}

/// One diagnostic submission as collected from a team or organisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticInput {
    #[serde(default)]
    pub org_name: String,
    #[serde(default)]
    pub context_notes: String,
    #[serde(default)]
    pub scores: DomainScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<CoverageEstimates>,
    #[serde(default)]
    pub signals: ContextFlags,
}

impl DiagnosticInput {
    pub fn new(org_name: impl Into<String>, scores: DomainScores) -> Self {
        Self {
            org_name: org_name.into(),
            context_notes: String::new(),
            scores,
            coverage: None,
            signals: ContextFlags::default(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.context_notes = notes.into();
        self
    }

    pub fn with_coverage(mut self, coverage: CoverageEstimates) -> Self {
        self.coverage = Some(coverage);
        self
    }

    pub fn with_signals(mut self, signals: ContextFlags) -> Self {
        self.signals = signals;
        self
    }

    /// Reject submissions that cannot be attributed to anyone.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.org_name.trim().is_empty() {
            return Err(InputError::InvalidInput {
                field: "org_name",
                reason: "organisation name must not be blank",
            });
        }
        Ok(())
    }

    /// Coverage that should be considered at all: present and holding at least one estimate.
    pub fn active_coverage(&self) -> Option<CoverageEstimates> {
        self.coverage
            .map(|coverage| coverage.clamped())
            .filter(|coverage| !coverage.is_empty())
    }
}

/// Raised when a submission is rejected before evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },
}
