use capability_diagnostic::diagnostic::{
    render_export, CapabilityBand, ContextFlags, CoverageEstimates, DiagnosticEngine,
    DiagnosticInput, DiagnosticReportView, DomainKey, DomainScores, SignalLevel,
};
use chrono::{TimeZone, Utc};

fn programme_review() -> DiagnosticInput {
    DiagnosticInput::new(
        "MSc Data Science programme",
        DomainScores::uniform(3)
            .with(DomainKey::Governance, 1)
            .with(DomainKey::Renewal, 2),
    )
    .with_notes("annual review")
    .with_signals(ContextFlags {
        sensitive_data: true,
        vendor_reliance: true,
        ..ContextFlags::default()
    })
    .with_coverage(
        CoverageEstimates::default()
            .with(DomainKey::Awareness, 60.0)
            .with(DomainKey::Governance, 10.0),
    )
}

#[test]
fn programme_review_surfaces_governance_risks() {
    let input = programme_review();

    let result = DiagnosticEngine::new()
        .evaluate(&input)
        .expect("programme review is valid");

    let ids: Vec<&str> = result.signals.iter().map(|signal| signal.id).collect();
    assert_eq!(
        ids,
        vec![
            "low-floor",
            "imbalance",
            "ethics-gov-exposure",
            "vendor-fragility",
            "coverage-imbalance",
        ]
    );
    assert_eq!(result.band, CapabilityBand::Established);
    assert_eq!(result.average_score, 2.5);
    assert_eq!(result.highest_level(), Some(SignalLevel::Concern));
    assert_eq!(
        result.summary.gaps,
        vec![
            "Decision-Making & Governance (score 1/4)",
            "Reflection, Learning & Renewal (score 2/4)",
        ]
    );
    assert_eq!(
        result.summary.stabilisers,
        vec![
            "A generally developing-to-established baseline across domains.",
            "Strong orientation reduces misuse and unrealistic expectations.",
        ]
    );
}

#[test]
fn report_view_and_export_agree() {
    let input = programme_review();
    let result = DiagnosticEngine::new()
        .evaluate(&input)
        .expect("programme review is valid");

    let view = DiagnosticReportView::new(&input, &result);
    assert_eq!(view.signals.len(), result.signals.len());
    assert_eq!(view.context_notes, "annual review");

    let generated_at = Utc
        .with_ymd_and_hms(2026, 5, 12, 14, 30, 0)
        .single()
        .expect("valid timestamp");
    let text = render_export(&input, &result, generated_at, "Review Edition");

    for (idx, signal) in view.signals.iter().enumerate() {
        let heading = format!("{}. [{}] {}", idx + 1, signal.level_label, signal.title);
        assert!(text.contains(&heading), "missing {heading}");
    }
    assert!(text.contains("Generated: 2026-05-12 14:30 UTC"));
    assert!(text.contains("- Decision-Making & Governance: 10%"));
}

#[test]
fn submissions_deserialize_from_form_payloads() {
    let input: DiagnosticInput = serde_json::from_str(
        r#"{
            "org_name": "Library services",
            "scores": {"awareness": 4, "coagency": 4, "practice": 4, "ethics": 4, "governance": 4, "renewal": 4},
            "coverage": {"ethics": 50},
            "signals": {"unclear_ownership": true}
        }"#,
    )
    .expect("payload parses");

    let result = DiagnosticEngine::new().evaluate(&input).expect("valid");

    assert_eq!(result.band, CapabilityBand::Leading);
    assert_eq!(result.signals.len(), 1);
    assert_eq!(result.signals[0].id, "no-major-signals");
    assert_eq!(result.summary.stabilisers.len(), 4);
}
