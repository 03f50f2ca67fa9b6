use std::sync::LazyLock;

use crate::scoring::{
    questions_from_prompts, AnswerOption, Question, ScoreBounds, Severity, ThresholdRule,
};
use crate::Instrument;

use super::{frequency_domain, practice_actions};

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items rated 0–3 over the last two weeks. Total 0–21; 10+ warrants evaluation.
pub struct Gad7;

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    questions_from_prompts([
        "Feeling nervous, anxious, or on edge",
        "Not being able to stop or control worrying",
        "Worrying too much about different things",
        "Trouble relaxing",
        "Being so restless that it is hard to sit still",
        "Becoming easily annoyed or irritable",
        "Feeling afraid, as if something awful might happen",
    ])
});

static ANSWERS: LazyLock<Vec<AnswerOption>> = LazyLock::new(frequency_domain);

static THRESHOLDS: LazyLock<Vec<ThresholdRule>> = LazyLock::new(|| {
    vec![
        tier(
            0,
            4,
            "Minimal anxiety",
            Severity::Minimal,
            "Your responses suggest minimal anxiety symptoms. Continue practicing healthy coping habits.",
        ),
        tier(
            5,
            9,
            "Mild anxiety",
            Severity::Mild,
            "Your responses suggest mild anxiety symptoms. Consider discussing how you have been feeling with Dr. Shapiro.",
        ),
        tier(
            10,
            14,
            "Moderate anxiety",
            Severity::Moderate,
            "Your responses suggest moderate anxiety symptoms. An evaluation with Dr. Shapiro is recommended.",
        ),
        tier(
            15,
            21,
            "Severe anxiety",
            Severity::Severe,
            "Your responses suggest severe anxiety symptoms. Strongly recommend evaluation with Dr. Shapiro for assessment and treatment options.",
        ),
    ]
});

fn tier(lower: u32, upper: u32, label: &str, severity: Severity, narrative: &str) -> ThresholdRule {
    ThresholdRule {
        bounds: ScoreBounds::between(lower, upper),
        label: label.to_string(),
        severity,
        narrative: narrative.to_string(),
        actions: practice_actions(),
    }
}

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad-7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn instructions(&self) -> Option<&str> {
        Some("Over the last 2 weeks, how often have you been bothered by the following problems?")
    }

    fn questions(&self) -> &[Question] {
        &QUESTIONS
    }

    fn answer_domain(&self) -> &[AnswerOption] {
        &ANSWERS
    }

    fn thresholds(&self) -> &[ThresholdRule] {
        &THRESHOLDS
    }
}
