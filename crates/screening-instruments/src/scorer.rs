use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::collector::ResponseSet;
use crate::error::{Incomplete, ScoreError};
use crate::scoring::ThresholdRule;
use crate::Instrument;

/// Outcome of a completed submission. Handed to the caller; nothing here
/// keeps a copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub instrument_id: String,
    pub total_score: u32,
    pub max_score: u32,
    pub tier: ThresholdRule,
    pub answered_count: usize,
    pub expected_count: usize,
}

/// Score a response set against an instrument.
///
/// Fails with [`Incomplete`] unless every question has an answer; partial
/// sets are never scored. The tier is looked up with [`resolve_tier`] and
/// copied verbatim into the result.
pub fn score(instrument: &dyn Instrument, responses: &ResponseSet) -> Result<ScoreResult, ScoreError> {
    let expected = instrument.questions().len();
    let answered = responses.iter().filter(|(index, _)| *index < expected).count();
    if answered < expected {
        return Err(Incomplete { answered, expected }.into());
    }

    // Only an unvalidated definition can saturate here.
    let total = responses
        .iter()
        .filter(|(index, _)| *index < expected)
        .fold(0u32, |total, (_, value)| total.saturating_add(value));

    let tier = resolve_tier(instrument.thresholds(), total).ok_or_else(|| {
        ScoreError::NoThresholds {
            instrument_id: instrument.id().to_string(),
        }
    })?;

    Ok(ScoreResult {
        instrument_id: instrument.id().to_string(),
        total_score: total,
        max_score: instrument.max_score(),
        tier: tier.clone(),
        answered_count: answered,
        expected_count: expected,
    })
}

/// Find the threshold rule for `total`.
///
/// A validated table has exactly one rule containing every attainable
/// score. For tables that slipped through malformed, the choice always leans
/// toward the more cautious tier:
///
/// 1. Several rules contain `total`: the one with the highest lower bound
///    wins, then the higher severity.
/// 2. No rule contains `total`: the rule with the highest lower bound at or
///    below `total`.
/// 3. Nothing at or below `total` either: the most severe rule.
///
/// Returns `None` only for an empty table.
pub fn resolve_tier(rules: &[ThresholdRule], total: u32) -> Option<&ThresholdRule> {
    if rules.is_empty() {
        return None;
    }
    let cautious = |rule: &&ThresholdRule| (rule.bounds.lower, rule.severity);

    let matching: Vec<&ThresholdRule> = rules.iter().filter(|r| r.bounds.contains(total)).collect();
    match matching.len() {
        1 => return Some(matching[0]),
        0 => {}
        count => {
            tracing::warn!(total, count, "overlapping threshold rules; using highest lower bound");
            return matching.into_iter().max_by_key(cautious);
        }
    }

    tracing::warn!(total, "no threshold rule covers score; falling back");
    rules
        .iter()
        .filter(|r| r.bounds.lower <= total)
        .max_by_key(cautious)
        .or_else(|| rules.iter().max_by_key(|r| r.severity))
}
