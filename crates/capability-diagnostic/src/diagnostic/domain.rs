use serde::{Deserialize, Serialize};
use std::fmt;

/// The six capability dimensions assessed by the diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainKey {
    Awareness,
    Coagency,
    Practice,
    Ethics,
    Governance,
    Renewal,
}

impl DomainKey {
    /// Catalogue order. Every display list and tie-break follows it.
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Awareness,
            Self::Coagency,
            Self::Practice,
            Self::Ethics,
            Self::Governance,
            Self::Renewal,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Awareness => "awareness",
            Self::Coagency => "coagency",
            Self::Practice => "practice",
            Self::Ethics => "ethics",
            Self::Governance => "governance",
            Self::Renewal => "renewal",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Awareness => "Awareness & Orientation",
            Self::Coagency => "Human–AI Co-Agency",
            Self::Practice => "Applied Practice & Innovation",
            Self::Ethics => "Ethics, Equity & Impact",
            Self::Governance => "Decision-Making & Governance",
            Self::Renewal => "Reflection, Learning & Renewal",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Awareness => {
                "Shared understanding, boundaries, risks, and realistic expectations of AI in context."
            }
            Self::Coagency => {
                "Role clarity, partnership practices, prompting as collaboration, and human judgement in the loop."
            }
            Self::Practice => {
                "Practical use in workflows, iteration, experimentation, and responsible improvement of practice."
            }
            Self::Ethics => {
                "Fairness, inclusion, harm reduction, transparency, and attention to downstream impacts."
            }
            Self::Governance => {
                "Accountability, approvals, oversight, policy alignment, and decision hygiene."
            }
            Self::Renewal => {
                "Ongoing learning, review cycles, capability renewal, and institutional memory."
            }
        }
    }

    /// Resolve a key or display label, ignoring case, whitespace and punctuation.
    pub fn parse(raw: &str) -> Option<Self> {
        let wanted = normalize(raw);
        if wanted.is_empty() {
            return None;
        }

        Self::ordered()
            .into_iter()
            .find(|domain| normalize(domain.key()) == wanted || normalize(domain.label()) == wanted)
    }
}

impl fmt::Display for DomainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Read-only catalogue entry with display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Domain {
    pub key: DomainKey,
    pub label: &'static str,
    pub description: &'static str,
}

impl Domain {
    pub const fn of(key: DomainKey) -> Self {
        Self {
            key,
            label: key.label(),
            description: key.description(),
        }
    }
}

pub static DOMAINS: [Domain; 6] = [
    Domain::of(DomainKey::Awareness),
    Domain::of(DomainKey::Coagency),
    Domain::of(DomainKey::Practice),
    Domain::of(DomainKey::Ethics),
    Domain::of(DomainKey::Governance),
    Domain::of(DomainKey::Renewal),
];

/// Coarse overall maturity label derived from the average domain score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityBand {
    Emerging,
    Developing,
    Established,
    Leading,
}

impl CapabilityBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Emerging => "Emerging",
            Self::Developing => "Developing",
            Self::Established => "Established",
            Self::Leading => "Leading",
        }
    }
}

/// Severity of a risk signal, ordered by increasing urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalLevel {
    Info,
    Watch,
    Concern,
}

impl SignalLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Watch => "Watch",
            Self::Concern => "Concern",
        }
    }
}

/// Labels shown next to each point of the 0–4 self-assessment scale.
pub const fn score_label(score: i32) -> &'static str {
    match score {
        i32::MIN..=0 => "Not present",
        1 => "Emerging",
        2 => "Developing",
        3 => "Established",
        _ => "Leading",
    }
}
