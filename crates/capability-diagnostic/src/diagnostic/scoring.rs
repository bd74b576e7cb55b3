//! Pure numeric helpers shared by the rule engine.

use super::domain::CapabilityBand;

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 4;
pub const MAX_COVERAGE: f64 = 100.0;

const DEVELOPING_FLOOR: f64 = 1.25;
const ESTABLISHED_FLOOR: f64 = 2.5;
const LEADING_FLOOR: f64 = 3.5;

pub fn clamp_score(score: i32) -> i32 {
    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Clamp a coverage estimate to 0–100. NaN has no meaningful position and is discarded.
pub fn clamp_coverage(value: f64) -> Option<f64> {
    if value.is_nan() {
        return None;
    }
    Some(value.clamp(0.0, MAX_COVERAGE))
}

/// Arithmetic mean at full precision; 0 for no scores.
pub fn average(scores: &[i32]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let total: i64 = scores.iter().map(|score| i64::from(*score)).sum();
    total as f64 / scores.len() as f64
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Half-open bands; the top band also holds the maximum score.
pub fn band_for_average(average: f64) -> CapabilityBand {
    if average < DEVELOPING_FLOOR {
        CapabilityBand::Emerging
    } else if average < ESTABLISHED_FLOOR {
        CapabilityBand::Developing
    } else if average < LEADING_FLOOR {
        CapabilityBand::Established
    } else {
        CapabilityBand::Leading
    }
}

pub fn spread(scores: &[i32]) -> i32 {
    match (scores.iter().max(), scores.iter().min()) {
        (Some(max), Some(min)) => max - min,
        _ => 0,
    }
}

/// Spread over present coverage values only.
pub fn coverage_spread<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut bounds: Option<(f64, f64)> = None;
    for value in values {
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(value), max.max(value)),
            None => (value, value),
        });
    }

    bounds.map(|(min, max)| max - min).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(average(&[]), 0.0);
        assert_eq!(average(&[2, 2, 2, 2, 2, 2]), 2.0);
        assert_eq!(round2(average(&[0, 0, 4, 4, 4, 3])), 2.5);
        assert_eq!(round2(average(&[1, 2, 2, 2, 2, 2])), 1.83);
    }

    #[test]
    fn band_boundaries_are_inclusive_low() {
        assert_eq!(band_for_average(0.0), CapabilityBand::Emerging);
        assert_eq!(band_for_average(1.24), CapabilityBand::Emerging);
        assert_eq!(band_for_average(1.25), CapabilityBand::Developing);
        assert_eq!(band_for_average(2.49), CapabilityBand::Developing);
        assert_eq!(band_for_average(2.5), CapabilityBand::Established);
        assert_eq!(band_for_average(3.49), CapabilityBand::Established);
        assert_eq!(band_for_average(3.5), CapabilityBand::Leading);
        assert_eq!(band_for_average(4.0), CapabilityBand::Leading);
    }

    #[test]
    fn band_is_monotonic_in_average() {
        let mut previous = band_for_average(0.0);
        for step in 0..=400 {
            let band = band_for_average(step as f64 / 100.0);
            assert!(band >= previous, "band regressed at {step}");
            previous = band;
        }
    }

    #[test]
    fn spreads_ignore_missing_values() {
        assert_eq!(spread(&[]), 0);
        assert_eq!(spread(&[0, 0, 4, 4, 4, 4]), 4);
        assert_eq!(coverage_spread(Vec::new()), 0.0);
        assert_eq!(coverage_spread(vec![35.0]), 0.0);
        assert_eq!(coverage_spread(vec![10.0, 60.0, 20.0]), 50.0);
    }

    #[test]
    fn clamps_hold_the_scale() {
        assert_eq!(clamp_score(-1), 0);
        assert_eq!(clamp_score(3), 3);
        assert_eq!(clamp_score(12), 4);
        assert_eq!(clamp_coverage(-5.0), Some(0.0));
        assert_eq!(clamp_coverage(250.0), Some(100.0));
        assert_eq!(clamp_coverage(f64::NAN), None);
    }
}
