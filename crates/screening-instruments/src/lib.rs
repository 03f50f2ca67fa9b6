//! screening-instruments
//!
//! Self-administered screening questionnaires. Pure data and pure functions,
//! no I/O beyond loading declared definitions. Defines each instrument's
//! questions, answer domain and threshold table, collects a respondent's
//! answers, and resolves a completed answer set to a risk tier.

pub mod collector;
pub mod definition;
pub mod error;
pub mod instruments;
pub mod scorer;
pub mod scoring;

use std::collections::{BTreeSet, HashSet};

use definition::InstrumentDefinition;
use error::{DefinitionError, InstrumentError};
use scoring::{AnswerOption, Question, ThresholdRule};

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "cage-aid", "phq-9").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "CAGE-AID").
    fn name(&self) -> &str;

    /// Lead-in shown above the questions.
    fn instructions(&self) -> Option<&str> {
        None
    }

    /// The questions, in administration order.
    fn questions(&self) -> &[Question];

    /// Answer options offered for every question.
    fn answer_domain(&self) -> &[AnswerOption];

    /// Score-range to tier table.
    fn thresholds(&self) -> &[ThresholdRule];

    /// Lowest attainable total.
    fn min_score(&self) -> u32 {
        let lowest = self.answer_domain().iter().map(|a| a.value).min();
        per_question_total(self.questions().len(), lowest)
    }

    /// Highest attainable total.
    fn max_score(&self) -> u32 {
        let highest = self.answer_domain().iter().map(|a| a.value).max();
        per_question_total(self.questions().len(), highest)
    }

    /// Check the definition is usable: at least one question, a clean answer
    /// domain, and thresholds that partition `[min_score, max_score]`.
    fn validate_definition(&self) -> Result<(), DefinitionError> {
        let questions = self.questions();
        if questions.is_empty() {
            return Err(DefinitionError::NoQuestions);
        }
        for (position, question) in questions.iter().enumerate() {
            if question.index != position {
                return Err(DefinitionError::QuestionIndexMismatch {
                    position,
                    index: question.index,
                });
            }
        }

        let domain = self.answer_domain();
        if domain.is_empty() {
            return Err(DefinitionError::EmptyAnswerDomain);
        }
        let mut seen = BTreeSet::new();
        for option in domain {
            if !seen.insert(option.value) {
                return Err(DefinitionError::DuplicateAnswerValue(option.value));
            }
        }

        let highest = domain.iter().map(|a| a.value).max().unwrap_or(0);
        if checked_total(questions.len(), highest).is_none() {
            return Err(DefinitionError::ScoreOverflow {
                questions: questions.len(),
                value: highest,
            });
        }

        for rule in self.thresholds() {
            if let Some(action) = rule.actions.iter().find(|a| !a.is_safe_link()) {
                return Err(DefinitionError::UnsafeLink {
                    label: rule.label.clone(),
                    value: action.value.clone(),
                });
            }
        }

        validate_thresholds(self.thresholds(), self.min_score(), self.max_score())
    }
}

/// Total of `question_count` answers worth `value` each, if it fits a `u32`.
fn checked_total(question_count: usize, value: u32) -> Option<u32> {
    value.checked_mul(u32::try_from(question_count).ok()?)
}

// Saturates for definitions that fail validation with `ScoreOverflow`.
fn per_question_total(question_count: usize, value: Option<u32>) -> u32 {
    checked_total(question_count, value.unwrap_or(0)).unwrap_or(u32::MAX)
}

/// Check that `rules` cover every score in `[min, max]` exactly once.
///
/// Rules may be declared in any order; they are checked sorted by lower
/// bound. Only the highest rule may be open-ended.
pub fn validate_thresholds(rules: &[ThresholdRule], min: u32, max: u32) -> Result<(), DefinitionError> {
    if rules.is_empty() {
        return Err(DefinitionError::NoThresholds);
    }

    let mut sorted: Vec<&ThresholdRule> = rules.iter().collect();
    sorted.sort_by_key(|rule| rule.bounds.lower);

    let last = sorted.len() - 1;
    // Next score that still needs a rule.
    let mut next = u64::from(min);
    let mut previous: Option<&ThresholdRule> = None;

    for (i, rule) in sorted.iter().copied().enumerate() {
        let lower = rule.bounds.lower;

        if let Some(upper) = rule.bounds.upper
            && lower > upper
        {
            return Err(DefinitionError::InvertedBounds {
                label: rule.label.clone(),
                lower,
                upper,
            });
        }

        let reach = rule.bounds.upper.unwrap_or(lower);
        if reach > max {
            return Err(DefinitionError::ExceedsMaximum {
                label: rule.label.clone(),
                upper: reach,
                max,
            });
        }

        match previous {
            // The lowest rule may start below the attainable minimum.
            None if u64::from(lower) > next => {
                return Err(DefinitionError::Gap {
                    from: min,
                    to: lower - 1,
                });
            }
            None => {}
            Some(prev) if u64::from(lower) < next => {
                return Err(DefinitionError::Overlap {
                    first: prev.label.clone(),
                    second: rule.label.clone(),
                    at: lower,
                });
            }
            Some(_) if u64::from(lower) > next => {
                return Err(DefinitionError::Gap {
                    from: next as u32,
                    to: lower - 1,
                });
            }
            Some(_) => {}
        }

        match rule.bounds.upper {
            Some(upper) => next = u64::from(upper) + 1,
            None if i != last => {
                return Err(DefinitionError::OpenEndedNotLast {
                    label: rule.label.clone(),
                });
            }
            None => next = u64::from(max) + 1,
        }
        previous = Some(rule);
    }

    if next <= u64::from(max) {
        return Err(DefinitionError::Gap {
            from: next as u32,
            to: max,
        });
    }
    Ok(())
}

/// Return all built-in instruments.
pub fn builtin_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::cage_aid::CageAid),
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
    ]
}

/// The validated set of instruments a process serves.
///
/// Constructed once at startup and passed to whoever needs it. Every
/// instrument is validated on the way in, so a malformed definition stops
/// the registry from being built at all.
pub struct Registry {
    instruments: Vec<Box<dyn Instrument>>,
}

impl Registry {
    pub fn new(instruments: Vec<Box<dyn Instrument>>) -> Result<Self, InstrumentError> {
        let mut ids = HashSet::new();
        for instrument in &instruments {
            instrument
                .validate_definition()
                .map_err(|source| InstrumentError::Malformed {
                    instrument_id: instrument.id().to_string(),
                    source,
                })?;
            if !ids.insert(instrument.id().to_string()) {
                return Err(InstrumentError::DuplicateId(instrument.id().to_string()));
            }
        }

        tracing::debug!(count = instruments.len(), "instrument registry built");
        Ok(Self { instruments })
    }

    /// Registry of the built-in instruments only.
    pub fn builtin() -> Result<Self, InstrumentError> {
        Self::new(builtin_instruments())
    }

    /// Built-in instruments followed by declared ones.
    pub fn with_declared(declared: Vec<InstrumentDefinition>) -> Result<Self, InstrumentError> {
        let mut all = builtin_instruments();
        all.extend(
            declared
                .into_iter()
                .map(|definition| Box::new(definition) as Box<dyn Instrument>),
        );
        Self::new(all)
    }

    /// Look up an instrument by ID.
    pub fn get(&self, id: &str) -> Option<&dyn Instrument> {
        self.instruments
            .iter()
            .find(|i| i.id() == id)
            .map(|i| i.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Instrument> {
        self.instruments.iter().map(|i| i.as_ref())
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}
