use super::domain::DomainKey;
use super::result::DiagnosticSummary;
use super::rules::RuleContext;

const STABLE_BASELINE_AVERAGE: f64 = 2.5;
const STRONG_DOMAIN_SCORE: i32 = 3;

pub(crate) fn build_summary(ctx: &RuleContext) -> DiagnosticSummary {
    let strengths = ctx.highest().iter().map(|stat| stat.describe()).collect();
    let gaps = ctx.lowest().iter().map(|stat| stat.describe()).collect();

    let mut stabilisers = Vec::new();
    if ctx.average >= STABLE_BASELINE_AVERAGE {
        stabilisers
            .push("A generally developing-to-established baseline across domains.".to_string());
    }
    if ctx.scores.get(DomainKey::Awareness) >= STRONG_DOMAIN_SCORE {
        stabilisers
            .push("Strong orientation reduces misuse and unrealistic expectations.".to_string());
    }
    if ctx.scores.get(DomainKey::Renewal) >= STRONG_DOMAIN_SCORE {
        stabilisers
            .push("Renewal practices support continuous improvement and resilience.".to_string());
    }
    if ctx.scores.get(DomainKey::Governance) >= STRONG_DOMAIN_SCORE {
        stabilisers.push("Governance strength improves defensibility of decisions.".to_string());
    }

    DiagnosticSummary {
        strengths,
        gaps,
        stabilisers,
    }
}
