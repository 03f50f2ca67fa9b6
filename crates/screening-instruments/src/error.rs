use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("instrument '{instrument_id}' is malformed: {source}")]
    Malformed {
        instrument_id: String,
        #[source]
        source: DefinitionError,
    },

    #[error("duplicate instrument id: {0}")]
    DuplicateId(String),

    #[error("failed to read instrument definition {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse instrument definition {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A defect in an instrument definition, found when it is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("instrument has no questions")]
    NoQuestions,

    #[error("question at position {position} carries index {index}")]
    QuestionIndexMismatch { position: usize, index: usize },

    #[error("answer domain is empty")]
    EmptyAnswerDomain,

    #[error("answer value {0} appears more than once in the answer domain")]
    DuplicateAnswerValue(u32),

    #[error("{questions} questions worth up to {value} each overflow the score range")]
    ScoreOverflow { questions: usize, value: u32 },

    #[error("instrument has no threshold rules")]
    NoThresholds,

    #[error("threshold '{label}' has lower bound {lower} above upper bound {upper}")]
    InvertedBounds { label: String, lower: u32, upper: u32 },

    #[error("threshold '{label}' is open-ended but is not the highest rule")]
    OpenEndedNotLast { label: String },

    #[error("scores {from}..={to} are not covered by any threshold")]
    Gap { from: u32, to: u32 },

    #[error("thresholds '{first}' and '{second}' overlap at score {at}")]
    Overlap {
        first: String,
        second: String,
        at: u32,
    },

    #[error("threshold '{label}' links to '{value}'; web actions must be http or https")]
    UnsafeLink { label: String, value: String },

    #[error("threshold '{label}' reaches {upper}, beyond the maximum attainable score {max}")]
    ExceedsMaximum { label: String, upper: u32, max: u32 },
}

/// A selection the collector refused. The response set is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSelection {
    #[error("question index {index} is out of range for {question_count} questions")]
    QuestionOutOfRange { index: usize, question_count: usize },

    #[error("value {value} is not an answer option for question {index}")]
    AnswerNotInDomain { index: usize, value: u32 },
}

/// Submission attempted before every question was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{answered} of {expected} questions answered")]
pub struct Incomplete {
    pub answered: usize,
    pub expected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("incomplete responses: {0}")]
    Incomplete(#[from] Incomplete),

    #[error("instrument '{instrument_id}' has no threshold rules")]
    NoThresholds { instrument_id: String },
}
