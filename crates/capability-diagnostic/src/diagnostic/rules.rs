use super::domain::{DomainKey, SignalLevel};
use super::input::{ContextFlags, CoverageEstimates, DiagnosticInput, DomainScores};
use super::result::{DomainStat, RiskSignal};
use super::scoring::{average, coverage_spread, spread};

const LOW_FLOOR_MAX: i32 = 1;
const IMBALANCE_WATCH_SPREAD: i32 = 2;
const IMBALANCE_CONCERN_SPREAD: i32 = 3;
const UNDER_STRENGTH_MAX: i32 = 2;
const COVERAGE_WATCH_SPREAD: f64 = 25.0;
const COVERAGE_CONCERN_SPREAD: f64 = 40.0;

pub(crate) const FALLBACK_SIGNAL_ID: &str = "no-major-signals";

/// A rule inspects the shared statistics and raises at most one signal.
pub(crate) type Rule = fn(&RuleContext) -> Option<RiskSignal>;

/// Evaluation order is part of the output contract.
pub(crate) const RULES: [Rule; 6] = [
    low_floor,
    imbalance,
    ethics_governance_exposure,
    vendor_fragility,
    ownership_ambiguity,
    coverage_imbalance,
];

/// Statistics computed once per submission and read by every rule.
#[derive(Debug, Clone)]
pub(crate) struct RuleContext {
    pub(crate) scores: DomainScores,
    pub(crate) flags: ContextFlags,
    pub(crate) coverage: Option<CoverageEstimates>,
    pub(crate) stats: Vec<DomainStat>,
    pub(crate) ascending: Vec<DomainStat>,
    pub(crate) descending: Vec<DomainStat>,
    pub(crate) score_spread: i32,
    pub(crate) average: f64,
}

impl RuleContext {
    pub(crate) fn new(input: &DiagnosticInput) -> Self {
        let scores = input.scores.clamped();
        let stats: Vec<DomainStat> = DomainKey::ordered()
            .into_iter()
            .map(|key| DomainStat {
                key,
                label: key.label(),
                score: scores.get(key),
            })
            .collect();

        // Stable sorts keep catalogue order among equal scores.
        let mut ascending = stats.clone();
        ascending.sort_by_key(|stat| stat.score);
        let mut descending = stats.clone();
        descending.sort_by(|left, right| right.score.cmp(&left.score));

        let values: Vec<i32> = stats.iter().map(|stat| stat.score).collect();

        Self {
            scores,
            flags: input.signals,
            coverage: input.active_coverage(),
            score_spread: spread(&values),
            average: average(&values),
            stats,
            ascending,
            descending,
        }
    }

    /// The two lowest-scoring domains, lowest first.
    pub(crate) fn lowest(&self) -> &[DomainStat] {
        &self.ascending[..2]
    }

    /// The two highest-scoring domains, highest first.
    pub(crate) fn highest(&self) -> &[DomainStat] {
        &self.descending[..2]
    }

    fn score(&self, domain: DomainKey) -> i32 {
        self.scores.get(domain)
    }

    fn under_strength(&self, domain: DomainKey) -> bool {
        self.score(domain) <= UNDER_STRENGTH_MAX
    }
}

fn low_floor(ctx: &RuleContext) -> Option<RiskSignal> {
    let very_low: Vec<&DomainStat> = ctx
        .stats
        .iter()
        .filter(|stat| stat.score <= LOW_FLOOR_MAX)
        .collect();
    if very_low.is_empty() {
        return None;
    }

    let labels: Vec<&str> = very_low.iter().map(|stat| stat.label).collect();
    Some(RiskSignal {
        id: "low-floor",
        level: SignalLevel::Concern,
        title: "Low capability floor in key areas",
        rationale: format!(
            "One or more domains are at a very early stage ({}). This can create fragility: \
             strong practice in one area may still fail if foundational supports are weak.",
            labels.join(", ")
        ),
        prompts: vec![
            "Where do people currently rely on informal knowledge or 'hero individuals' to compensate?",
            "What would break first if the most capable person left the team?",
            "What is the smallest, safest 'next practice' you could embed in the next 30 days?",
        ],
        related_domains: very_low.iter().map(|stat| stat.key).collect(),
    })
}

fn imbalance(ctx: &RuleContext) -> Option<RiskSignal> {
    if ctx.score_spread < IMBALANCE_WATCH_SPREAD {
        return None;
    }

    let level = if ctx.score_spread >= IMBALANCE_CONCERN_SPREAD {
        SignalLevel::Concern
    } else {
        SignalLevel::Watch
    };

    // A domain can sit in both pairs when middle scores tie; list it once.
    let mut related_domains: Vec<DomainKey> = Vec::with_capacity(4);
    for stat in ctx.lowest().iter().chain(ctx.highest()) {
        if !related_domains.contains(&stat.key) {
            related_domains.push(stat.key);
        }
    }

    Some(RiskSignal {
        id: "imbalance",
        level,
        title: "Capability imbalance across domains",
        rationale: format!(
            "Your scores vary widely (spread = {}). Imbalance often indicates uneven development: \
             innovation may be outpacing governance, or awareness may not translate into applied practice.",
            ctx.score_spread
        ),
        prompts: vec![
            "Which domain is carrying the most 'load' right now, and is that sustainable?",
            "Where are people improvising because the system lacks guidance or structure?",
            "If you strengthened just one low domain, which would reduce the most downstream risk?",
        ],
        related_domains,
    })
}

fn ethics_governance_exposure(ctx: &RuleContext) -> Option<RiskSignal> {
    let under_strength =
        ctx.under_strength(DomainKey::Ethics) || ctx.under_strength(DomainKey::Governance);
    if !(under_strength && ctx.flags.raises_exposure()) {
        return None;
    }

    Some(RiskSignal {
        id: "ethics-gov-exposure",
        level: SignalLevel::Concern,
        title: "Ethics/Governance exposure under high-stakes conditions",
        rationale: "You've indicated high-stakes, public-facing, or sensitive-data use. When Ethics, \
                    Equity & Impact and Decision-Making & Governance are not yet established, the \
                    organisation is more exposed to harm, reputational risk, and poor decisions."
            .to_string(),
        prompts: vec![
            "What are the current 'red lines' (non-negotiables) for AI use, and are they shared and documented?",
            "Where does accountability sit today (named role), and where is it ambiguous?",
            "What review step could you introduce before outputs are used externally or in consequential decisions?",
        ],
        related_domains: vec![DomainKey::Ethics, DomainKey::Governance],
    })
}

fn vendor_fragility(ctx: &RuleContext) -> Option<RiskSignal> {
    let under_strength =
        ctx.under_strength(DomainKey::Renewal) || ctx.under_strength(DomainKey::Governance);
    if !(ctx.flags.vendor_reliance && under_strength) {
        return None;
    }

    Some(RiskSignal {
        id: "vendor-fragility",
        level: SignalLevel::Watch,
        title: "Potential fragility from vendor/tool reliance",
        rationale: "Heavy reliance on a single toolchain can create brittleness if policies, pricing, \
                    access, or features change. This risk increases when governance or renewal \
                    practices are still developing."
            .to_string(),
        prompts: vec![
            "If access to your primary tool changed tomorrow, what would stop working?",
            "Do you have a 'minimum viable practice' that is tool-agnostic?",
            "What knowledge or templates should be captured so capability survives tool changes?",
        ],
        related_domains: vec![
            DomainKey::Governance,
            DomainKey::Renewal,
            DomainKey::Practice,
        ],
    })
}

fn ownership_ambiguity(ctx: &RuleContext) -> Option<RiskSignal> {
    let under_strength =
        ctx.under_strength(DomainKey::Coagency) || ctx.under_strength(DomainKey::Governance);
    if !(ctx.flags.unclear_ownership && under_strength) {
        return None;
    }

    Some(RiskSignal {
        id: "ownership-ambiguity",
        level: SignalLevel::Watch,
        title: "Role clarity and accountability may be under-defined",
        rationale: "You've indicated unclear ownership. Without explicit roles for AI-supported work, \
                    responsibility can drift and decisions become harder to defend, especially when \
                    systems produce confident outputs."
            .to_string(),
        prompts: vec![
            "Who is responsible for validating outputs in your most common use cases?",
            "What is the 'human sign-off point', and is it consistent?",
            "Where could you make role expectations explicit (policy, team agreements, workflow steps)?",
        ],
        related_domains: vec![DomainKey::Coagency, DomainKey::Governance],
    })
}

fn coverage_imbalance(ctx: &RuleContext) -> Option<RiskSignal> {
    let coverage = ctx.coverage.as_ref()?;
    let coverage_spread = coverage_spread(coverage.present().map(|(_, value)| value));
    if coverage_spread < COVERAGE_WATCH_SPREAD {
        return None;
    }

    let level = if coverage_spread >= COVERAGE_CONCERN_SPREAD {
        SignalLevel::Concern
    } else {
        SignalLevel::Watch
    };

    Some(RiskSignal {
        id: "coverage-imbalance",
        level,
        title: "Capability coverage may be uneven across the programme/system",
        rationale: format!(
            "Your optional coverage estimates vary significantly (spread ≈ {:.0}%). This often means \
             learners/teams encounter some domains repeatedly while others remain implicit or absent.",
            coverage_spread.round()
        ),
        prompts: vec![
            "Which domains are 'assumed' rather than taught or practiced?",
            "Where do people learn ethics/governance/renewal informally, and is that reliable?",
            "What is one small structural change that would increase coverage of a neglected domain?",
        ],
        related_domains: DomainKey::ordered().to_vec(),
    })
}

/// Raised only when no other rule fired, so a result always carries a signal.
pub(crate) fn no_major_signals() -> RiskSignal {
    RiskSignal {
        id: FALLBACK_SIGNAL_ID,
        level: SignalLevel::Info,
        title: "No major risk patterns detected from the inputs provided",
        rationale: "Based on your inputs, there are no standout imbalance or low-floor patterns. Use \
                    the prompts below to deepen reflection and validate this with stakeholders."
            .to_string(),
        prompts: vec![
            "Which assumptions in your scoring would others challenge, and why?",
            "Where are you overconfident because things have 'worked so far'?",
            "What evidence would you collect in the next month to confirm your current view?",
        ],
        related_domains: DomainKey::ordered().to_vec(),
    }
}
