//! Presentation helpers: labelled views for API consumers and the plain-text export.

use super::domain::{CapabilityBand, DomainKey, SignalLevel};
use super::input::DiagnosticInput;
use super::result::{DiagnosticResult, DiagnosticSummary, DomainStat, RiskSignal};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

const EXPORT_TITLE: &str = "CloudPedagogy — Gaps & Risk Diagnostic";
const EXPORT_DISCLAIMER: &str = "Note: This output is reflective and interpretive. It is not a \
compliance audit, risk register, or automated decision system.";

/// Lead sentence explaining why a signal's domains matter together.
pub fn why_this_matters(related: &[DomainKey]) -> String {
    let labels: Vec<&str> = related.iter().map(|domain| domain.label()).collect();
    match labels.as_slice() {
        [] => "This signal connects to multiple capability domains. Use it to prompt discussion \
               about where the system is strong, fragile, or under-supported."
            .to_string(),
        [only] => format!(
            "This signal is primarily about {only}. Weakness here can create downstream \
             fragility even when other areas look strong."
        ),
        [first, second] => format!(
            "This signal sits at the intersection of {first} and {second}. Tensions here often \
             show up as \"it works in practice, but it isn't defensible\" (or the reverse)."
        ),
        _ => format!(
            "This signal spans several domains ({}{}). Multi-domain signals usually indicate a \
             system-level pattern rather than a single fix.",
            labels[..3].join(", "),
            if labels.len() > 3 { "…" } else { "" }
        ),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RelatedDomainView {
    pub key: DomainKey,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignalView {
    pub id: &'static str,
    pub level: SignalLevel,
    pub level_label: &'static str,
    pub title: &'static str,
    pub rationale: String,
    pub prompts: Vec<&'static str>,
    pub related_domains: Vec<RelatedDomainView>,
    pub why_this_matters: String,
}

impl SignalView {
    pub fn from_signal(signal: &RiskSignal) -> Self {
        Self {
            id: signal.id,
            level: signal.level,
            level_label: signal.level.label(),
            title: signal.title,
            rationale: signal.rationale.clone(),
            prompts: signal.prompts.clone(),
            related_domains: signal
                .related_domains
                .iter()
                .map(|&key| RelatedDomainView {
                    key,
                    label: key.label(),
                    description: key.description(),
                })
                .collect(),
            why_this_matters: why_this_matters(&signal.related_domains),
        }
    }
}

/// Serialized form of a result with display labels resolved.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReportView {
    pub org_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub context_notes: String,
    pub band: CapabilityBand,
    pub band_label: &'static str,
    pub average_score: f64,
    pub domain_stats: Vec<DomainStat>,
    pub signals: Vec<SignalView>,
    pub summary: DiagnosticSummary,
}

impl DiagnosticReportView {
    pub fn new(input: &DiagnosticInput, result: &DiagnosticResult) -> Self {
        Self {
            org_name: input.org_name.trim().to_string(),
            context_notes: input.context_notes.trim().to_string(),
            band: result.band,
            band_label: result.band.label(),
            average_score: result.average_score,
            domain_stats: result.domain_stats.clone(),
            signals: result.signals.iter().map(SignalView::from_signal).collect(),
            summary: result.summary.clone(),
        }
    }
}

fn generated_stamp(generated_at: DateTime<Utc>) -> String {
    generated_at.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Plain-text report suitable for committee papers and workshop notes.
pub fn render_export(
    input: &DiagnosticInput,
    result: &DiagnosticResult,
    generated_at: DateTime<Utc>,
    framework_edition: &str,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_export(&mut out, input, result, generated_at, framework_edition);
    out
}

fn write_export(
    out: &mut String,
    input: &DiagnosticInput,
    result: &DiagnosticResult,
    generated_at: DateTime<Utc>,
    framework_edition: &str,
) -> std::fmt::Result {
    writeln!(out, "{EXPORT_TITLE}")?;
    writeln!(out, "-----------------------------------")?;
    writeln!(out, "Generated: {}", generated_stamp(generated_at))?;
    writeln!(out, "Framework: {framework_edition}")?;
    writeln!(out)?;

    let notes = input.context_notes.trim();
    if notes.is_empty() {
        writeln!(out, "Organisation/Team: {}", input.org_name.trim())?;
    } else {
        writeln!(out, "Organisation/Team: {} — {notes}", input.org_name.trim())?;
    }
    writeln!(out, "Overall band: {}", result.band.label())?;
    writeln!(out, "Average score: {}/4", result.average_score)?;
    writeln!(out)?;

    writeln!(out, "Domain scores (0–4):")?;
    for stat in &result.domain_stats {
        writeln!(out, "- {}: {}/4", stat.label, stat.score)?;
    }
    writeln!(out)?;

    if let Some(coverage) = input.active_coverage() {
        writeln!(out, "Optional coverage estimates (0–100%):")?;
        for (domain, value) in coverage.present() {
            writeln!(out, "- {}: {}%", domain.label(), value)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Strength signals:")?;
    for strength in &result.summary.strengths {
        writeln!(out, "- {strength}")?;
    }
    writeln!(out)?;

    writeln!(out, "Gap signals:")?;
    for gap in &result.summary.gaps {
        writeln!(out, "- {gap}")?;
    }
    writeln!(out)?;

    if !result.summary.stabilisers.is_empty() {
        writeln!(out, "Stabilisers already present:")?;
        for stabiliser in &result.summary.stabilisers {
            writeln!(out, "- {stabiliser}")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Gaps & risk signals (for discussion):")?;
    for (idx, signal) in result.signals.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "{}. [{}] {}", idx + 1, signal.level.label(), signal.title)?;
        writeln!(out, "   Rationale: {}", signal.rationale)?;
        if !signal.related_domains.is_empty() {
            writeln!(
                out,
                "   Related domains: {}",
                signal.related_labels().join("; ")
            )?;
        }
        if signal.level == SignalLevel::Concern {
            writeln!(
                out,
                "   Why this matters: {}",
                why_this_matters(&signal.related_domains)
            )?;
        }
        writeln!(out, "   Discussion prompts:")?;
        for prompt in &signal.prompts {
            writeln!(out, "   - {prompt}")?;
        }
    }

    writeln!(out)?;
    write!(out, "{EXPORT_DISCLAIMER}")
}
