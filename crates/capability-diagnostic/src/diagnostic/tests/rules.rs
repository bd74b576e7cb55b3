use super::common::*;
use crate::diagnostic::domain::{DomainKey, SignalLevel};
use crate::diagnostic::input::{ContextFlags, CoverageEstimates};
use crate::diagnostic::rules::{RuleContext, FALLBACK_SIGNAL_ID};

#[test]
fn low_floor_lists_every_domain_at_or_below_one() {
    let result = run(&submission([1, 3, 0, 3, 3, 3]));

    let signal = expect_signal(&result, "low-floor");
    assert_eq!(signal.level, SignalLevel::Concern);
    assert_eq!(
        signal.related_domains,
        vec![DomainKey::Awareness, DomainKey::Practice]
    );
    assert!(signal.rationale.contains("Awareness & Orientation, Applied Practice & Innovation"));
    assert_eq!(signal.prompts.len(), 3);
}

#[test]
fn low_floor_ignores_scores_of_two() {
    let result = run(&submission([2, 2, 2, 2, 2, 2]));
    assert!(result.signal("low-floor").is_none());
}

#[test]
fn imbalance_is_watch_at_spread_two() {
    let result = run(&submission([2, 2, 2, 2, 3, 4]));

    let signal = expect_signal(&result, "imbalance");
    assert_eq!(signal.level, SignalLevel::Watch);
    assert_eq!(
        signal.related_domains,
        vec![
            DomainKey::Awareness,
            DomainKey::Coagency,
            DomainKey::Renewal,
            DomainKey::Governance,
        ]
    );
    assert!(signal.rationale.contains("spread = 2"));
}

#[test]
fn imbalance_is_concern_from_spread_three() {
    let result = run(&submission([1, 4, 4, 4, 4, 4]));
    assert_eq!(expect_signal(&result, "imbalance").level, SignalLevel::Concern);
}

#[test]
fn imbalance_lists_overlapping_domains_once() {
    // Coagency is both the second lowest and the second highest.
    let result = run(&submission([0, 2, 2, 2, 2, 4]));

    let signal = expect_signal(&result, "imbalance");
    assert_eq!(
        signal.related_domains,
        vec![DomainKey::Awareness, DomainKey::Coagency, DomainKey::Renewal]
    );
}

#[test]
fn spread_of_one_is_not_an_imbalance() {
    let result = run(&submission([2, 3, 2, 3, 2, 3]));
    assert_eq!(signal_ids(&result), vec![FALLBACK_SIGNAL_ID]);
}

#[test]
fn ethics_governance_exposure_needs_a_context_flag() {
    let input = submission([3, 3, 3, 3, 2, 3]);
    assert!(run(&input).signal("ethics-gov-exposure").is_none());

    let raising = [
        ContextFlags {
            high_stakes_use: true,
            ..flags()
        },
        ContextFlags {
            public_facing: true,
            ..flags()
        },
        ContextFlags {
            sensitive_data: true,
            ..flags()
        },
    ];
    for signals in raising {
        let result = run(&input.clone().with_signals(signals));
        let signal = expect_signal(&result, "ethics-gov-exposure");
        assert_eq!(signal.level, SignalLevel::Concern);
        assert_eq!(
            signal.related_domains,
            vec![DomainKey::Ethics, DomainKey::Governance]
        );
    }

    let unrelated = ContextFlags {
        vendor_reliance: true,
        unclear_ownership: true,
        ..flags()
    };
    assert!(run(&input.with_signals(unrelated))
        .signal("ethics-gov-exposure")
        .is_none());
}

#[test]
fn ethics_governance_exposure_skips_established_domains() {
    let input = submission([1, 1, 1, 3, 3, 1]).with_signals(ContextFlags {
        high_stakes_use: true,
        public_facing: true,
        sensitive_data: true,
        ..flags()
    });
    assert!(run(&input).signal("ethics-gov-exposure").is_none());
}

#[test]
fn vendor_fragility_watches_renewal_and_governance() {
    let vendor = ContextFlags {
        vendor_reliance: true,
        ..flags()
    };

    let result = run(&submission([3, 3, 3, 3, 3, 2]).with_signals(vendor));
    let signal = expect_signal(&result, "vendor-fragility");
    assert_eq!(signal.level, SignalLevel::Watch);
    assert_eq!(
        signal.related_domains,
        vec![DomainKey::Governance, DomainKey::Renewal, DomainKey::Practice]
    );

    let result = run(&submission([3, 3, 0, 3, 2, 3]).with_signals(vendor));
    assert!(result.signal("vendor-fragility").is_some());

    let result = run(&submission([3, 3, 3, 3, 3, 3]).with_signals(vendor));
    assert!(result.signal("vendor-fragility").is_none());

    let result = run(&submission([3, 3, 3, 3, 3, 2]));
    assert!(result.signal("vendor-fragility").is_none());
}

#[test]
fn ownership_ambiguity_watches_coagency_and_governance() {
    let unclear = ContextFlags {
        unclear_ownership: true,
        ..flags()
    };

    let result = run(&submission([3, 2, 3, 3, 3, 3]).with_signals(unclear));
    let signal = expect_signal(&result, "ownership-ambiguity");
    assert_eq!(signal.level, SignalLevel::Watch);
    assert_eq!(
        signal.related_domains,
        vec![DomainKey::Coagency, DomainKey::Governance]
    );

    let result = run(&submission([3, 3, 3, 3, 3, 0]).with_signals(unclear));
    assert!(result.signal("ownership-ambiguity").is_none());
}

#[test]
fn coverage_imbalance_grades_by_spread() {
    let base = submission([2, 2, 2, 2, 2, 2]);

    let result = run(&base.clone().with_coverage(coverage([10.0, 60.0, 20.0, 20.0, 20.0, 20.0])));
    let signal = expect_signal(&result, "coverage-imbalance");
    assert_eq!(signal.level, SignalLevel::Concern);
    assert_eq!(signal.related_domains, DomainKey::ordered().to_vec());
    assert!(signal.rationale.contains("spread ≈ 50%"));

    let result = run(&base.clone().with_coverage(coverage([20.0, 45.0, 20.0, 20.0, 20.0, 20.0])));
    assert_eq!(
        expect_signal(&result, "coverage-imbalance").level,
        SignalLevel::Watch
    );

    let result = run(&base.clone().with_coverage(coverage([20.0, 60.0, 20.0, 20.0, 20.0, 20.0])));
    assert_eq!(
        expect_signal(&result, "coverage-imbalance").level,
        SignalLevel::Concern
    );

    let result = run(&base.with_coverage(coverage([20.0, 44.0, 20.0, 20.0, 20.0, 20.0])));
    assert!(result.signal("coverage-imbalance").is_none());
}

#[test]
fn coverage_imbalance_uses_only_present_estimates() {
    let partial = CoverageEstimates::default()
        .with(DomainKey::Awareness, 0.0)
        .with(DomainKey::Renewal, 30.0);
    let result = run(&submission([2, 2, 2, 2, 2, 2]).with_coverage(partial));
    assert_eq!(
        expect_signal(&result, "coverage-imbalance").level,
        SignalLevel::Watch
    );

    let single = CoverageEstimates::default().with(DomainKey::Ethics, 90.0);
    let result = run(&submission([2, 2, 2, 2, 2, 2]).with_coverage(single));
    assert!(result.signal("coverage-imbalance").is_none());

    let empty = CoverageEstimates::default();
    let result = run(&submission([2, 2, 2, 2, 2, 2]).with_coverage(empty));
    assert_eq!(signal_ids(&result), vec![FALLBACK_SIGNAL_ID]);
}

#[test]
fn coverage_is_clamped_before_measuring_spread() {
    let wild = CoverageEstimates::default()
        .with(DomainKey::Awareness, -20.0)
        .with(DomainKey::Coagency, 130.0);
    let result = run(&submission([2, 2, 2, 2, 2, 2]).with_coverage(wild));

    let signal = expect_signal(&result, "coverage-imbalance");
    assert!(signal.rationale.contains("spread ≈ 100%"));
}

#[test]
fn rules_fire_in_fixed_order() {
    let everything = ContextFlags {
        high_stakes_use: true,
        public_facing: true,
        sensitive_data: true,
        vendor_reliance: true,
        unclear_ownership: true,
    };
    let input = submission([0, 2, 4, 1, 1, 2])
        .with_signals(everything)
        .with_coverage(coverage([10.0, 60.0, 20.0, 20.0, 20.0, 20.0]));

    let result = run(&input);

    assert_eq!(
        signal_ids(&result),
        vec![
            "low-floor",
            "imbalance",
            "ethics-gov-exposure",
            "vendor-fragility",
            "ownership-ambiguity",
            "coverage-imbalance",
        ]
    );
    assert!(result.signal(FALLBACK_SIGNAL_ID).is_none());
}

#[test]
fn context_sorts_are_stable_by_catalogue_order() {
    let ctx = RuleContext::new(&submission([3, 1, 3, 1, 4, 4]));

    let lowest: Vec<DomainKey> = ctx.lowest().iter().map(|stat| stat.key).collect();
    let highest: Vec<DomainKey> = ctx.highest().iter().map(|stat| stat.key).collect();

    assert_eq!(lowest, vec![DomainKey::Coagency, DomainKey::Ethics]);
    assert_eq!(highest, vec![DomainKey::Governance, DomainKey::Renewal]);
    assert_eq!(ctx.score_spread, 3);
}
