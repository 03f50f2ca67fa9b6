use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Ordinal risk class of a tier. Drives colour and urgency in presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

/// How a call-to-action reaches the practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ContactMethod {
    Phone,
    Email,
    Web,
}

/// A recommended next step shown alongside a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CallToAction {
    pub label: String,
    pub method: ContactMethod,
    pub value: String,
}

impl CallToAction {
    pub fn phone(label: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            method: ContactMethod::Phone,
            value: number.into(),
        }
    }

    pub fn email(label: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            method: ContactMethod::Email,
            value: address.into(),
        }
    }

    /// Web actions must point at an `http` or `https` URL.
    pub fn is_safe_link(&self) -> bool {
        match self.method {
            ContactMethod::Phone | ContactMethod::Email => true,
            ContactMethod::Web => {
                let value = self.value.trim_start().to_ascii_lowercase();
                value.starts_with("https://") || value.starts_with("http://")
            }
        }
    }
}

/// One selectable answer. Every question of an instrument offers the same set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: u32,
    pub label: String,
}

impl AnswerOption {
    pub fn new(value: u32, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// A question prompt. `index` is its zero-based position and the key its
/// answer is recorded under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub index: usize,
    pub prompt: String,
}

/// Build questions from prompts, numbering them by position.
pub fn questions_from_prompts<I, S>(prompts: I) -> Vec<Question>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    prompts
        .into_iter()
        .enumerate()
        .map(|(index, prompt)| Question {
            index,
            prompt: prompt.into(),
        })
        .collect()
}

/// Inclusive score interval covered by a threshold rule. A missing upper
/// bound means the rule is open-ended at the top of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBounds {
    pub lower: u32,
    pub upper: Option<u32>,
}

impl ScoreBounds {
    pub fn between(lower: u32, upper: u32) -> Self {
        Self {
            lower,
            upper: Some(upper),
        }
    }

    pub fn at_least(lower: u32) -> Self {
        Self { lower, upper: None }
    }

    pub fn contains(&self, score: u32) -> bool {
        score >= self.lower && self.upper.is_none_or(|upper| score <= upper)
    }
}

/// Maps a score interval to a tier with its narrative and recommended actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ThresholdRule {
    pub bounds: ScoreBounds,
    pub label: String,
    pub severity: Severity,
    pub narrative: String,
    #[serde(default)]
    pub actions: Vec<CallToAction>,
}
