use std::sync::LazyLock;

use crate::scoring::{
    questions_from_prompts, AnswerOption, Question, ScoreBounds, Severity, ThresholdRule,
};
use crate::Instrument;

use super::{frequency_domain, practice_actions};

/// PHQ-9: Patient Health Questionnaire, depression module.
/// 9 items rated 0–3 over the last two weeks. Total 0–27.
pub struct Phq9;

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    questions_from_prompts([
        "Little interest or pleasure in doing things",
        "Feeling down, depressed, or hopeless",
        "Trouble falling or staying asleep, or sleeping too much",
        "Feeling tired or having little energy",
        "Poor appetite or overeating",
        "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
        "Trouble concentrating on things, such as reading the newspaper or watching television",
        "Moving or speaking so slowly that other people could have noticed, or the opposite: being so fidgety or restless that you have been moving around a lot more than usual",
        "Thoughts that you would be better off dead, or of hurting yourself in some way",
    ])
});

static ANSWERS: LazyLock<Vec<AnswerOption>> = LazyLock::new(frequency_domain);

static THRESHOLDS: LazyLock<Vec<ThresholdRule>> = LazyLock::new(|| {
    vec![
        tier(
            0,
            4,
            "Minimal depression",
            Severity::Minimal,
            "Your responses suggest minimal depressive symptoms. Continue to monitor your mood and reach out if things change.",
        ),
        tier(
            5,
            9,
            "Mild depression",
            Severity::Mild,
            "Your responses suggest mild depressive symptoms. Consider discussing how you have been feeling with Dr. Shapiro.",
        ),
        tier(
            10,
            14,
            "Moderate depression",
            Severity::Moderate,
            "Your responses suggest moderate depressive symptoms. An evaluation with Dr. Shapiro is recommended.",
        ),
        tier(
            15,
            19,
            "Moderately severe depression",
            Severity::ModeratelySevere,
            "Your responses suggest moderately severe depressive symptoms. Please schedule an evaluation with Dr. Shapiro soon.",
        ),
        tier(
            20,
            27,
            "Severe depression",
            Severity::Severe,
            "Your responses suggest severe depressive symptoms. Strongly recommend prompt evaluation with Dr. Shapiro. If you are having thoughts of harming yourself, call or text 988 now.",
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

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq-9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn instructions(&self) -> Option<&str> {
        Some("Over the last 2 weeks, how often have you been bothered by any of the following problems?")
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
