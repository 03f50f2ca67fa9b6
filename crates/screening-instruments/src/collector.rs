use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{InvalidSelection, ScoreError};
use crate::scorer::{self, ScoreResult};
use crate::scoring::AnswerOption;
use crate::Instrument;

/// A question as drawn by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionView {
    pub index: usize,
    /// One-based number shown to the respondent.
    pub number: usize,
    pub prompt: String,
}

/// Everything needed to draw a questionnaire: one block per question, each
/// offering `answer_domain` as mutually exclusive choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormView {
    pub instrument_id: String,
    pub name: String,
    pub instructions: Option<String>,
    pub questions: Vec<QuestionView>,
    pub answer_domain: Vec<AnswerOption>,
}

impl FormView {
    pub fn of(instrument: &dyn Instrument) -> Self {
        Self {
            instrument_id: instrument.id().to_string(),
            name: instrument.name().to_string(),
            instructions: instrument.instructions().map(str::to_string),
            questions: instrument
                .questions()
                .iter()
                .map(|q| QuestionView {
                    index: q.index,
                    number: q.index + 1,
                    prompt: q.prompt.clone(),
                })
                .collect(),
            answer_domain: instrument.answer_domain().to_vec(),
        }
    }
}

/// The answers recorded so far for one rendering, keyed by question index.
/// At most one answer per question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseSet {
    answers: BTreeMap<usize, u32>,
}

impl ResponseSet {
    pub fn answer(&self, question_index: usize) -> Option<u32> {
        self.answers.get(&question_index).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// `(question_index, value)` pairs in question order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.answers.iter().map(|(&index, &value)| (index, value))
    }

    fn record(&mut self, question_index: usize, value: u32) {
        self.answers.insert(question_index, value);
    }
}

/// Tracks one respondent's in-progress answers for a single rendering of an
/// instrument. Dropping the collector discards the answers.
pub struct ResponseCollector<'a> {
    instrument: &'a dyn Instrument,
    responses: ResponseSet,
}

impl<'a> ResponseCollector<'a> {
    /// Draw `instrument` and start an empty response set scoped to this view.
    pub fn render(instrument: &'a dyn Instrument) -> (FormView, Self) {
        let collector = Self {
            instrument,
            responses: ResponseSet::default(),
        };
        (collector.view(), collector)
    }

    pub fn instrument(&self) -> &'a dyn Instrument {
        self.instrument
    }

    pub fn view(&self) -> FormView {
        FormView::of(self.instrument)
    }

    /// Record or overwrite the answer to one question.
    ///
    /// An out-of-range index or a value outside the answer domain is refused
    /// and leaves the recorded answers untouched.
    pub fn select(&mut self, question_index: usize, value: u32) -> Result<(), InvalidSelection> {
        let question_count = self.instrument.questions().len();
        if question_index >= question_count {
            return Err(InvalidSelection::QuestionOutOfRange {
                index: question_index,
                question_count,
            });
        }
        if !self
            .instrument
            .answer_domain()
            .iter()
            .any(|option| option.value == value)
        {
            return Err(InvalidSelection::AnswerNotInDomain {
                index: question_index,
                value,
            });
        }

        self.responses.record(question_index, value);
        Ok(())
    }

    pub fn answered_count(&self) -> usize {
        self.responses.len()
    }

    pub fn is_complete(&self) -> bool {
        let question_count = self.instrument.questions().len();
        (0..question_count).all(|index| self.responses.answer(index).is_some())
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    /// Score the answers recorded so far.
    pub fn submit(&self) -> Result<ScoreResult, ScoreError> {
        scorer::score(self.instrument, &self.responses)
    }
}
