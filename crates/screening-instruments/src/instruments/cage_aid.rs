use std::sync::LazyLock;

use crate::scoring::{
    questions_from_prompts, AnswerOption, Question, ScoreBounds, Severity, ThresholdRule,
};
use crate::Instrument;

use super::practice_actions;

/// CAGE-AID: CAGE questionnaire Adapted to Include Drugs.
/// 4 yes/no items (Yes = 1). Total 0–4; 2 or more is a positive screen.
pub struct CageAid;

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    questions_from_prompts([
        "Have you ever felt you ought to Cut down on your drinking or drug use?",
        "Have people Annoyed you by criticizing your drinking or drug use?",
        "Have you felt bad or Guilty about your drinking or drug use?",
        "Have you ever had a drink or used drugs first thing in the morning to steady your nerves or get rid of a hangover (Eye-opener)?",
    ])
});

static ANSWERS: LazyLock<Vec<AnswerOption>> =
    LazyLock::new(|| vec![AnswerOption::new(1, "Yes"), AnswerOption::new(0, "No")]);

static THRESHOLDS: LazyLock<Vec<ThresholdRule>> = LazyLock::new(|| {
    vec![
        ThresholdRule {
            bounds: ScoreBounds::at_least(2),
            label: "Positive screen for substance use disorder".to_string(),
            severity: Severity::Severe,
            narrative: "Your responses suggest possible substance use concerns. Strongly recommend evaluation with Dr. Shapiro for assessment and treatment options.".to_string(),
            actions: practice_actions(),
        },
        ThresholdRule {
            bounds: ScoreBounds::between(1, 1),
            label: "Some substance use concerns".to_string(),
            severity: Severity::Moderate,
            narrative: "Your responses suggest some substance use concerns. Consider discussing your use patterns with Dr. Shapiro.".to_string(),
            actions: practice_actions(),
        },
        ThresholdRule {
            bounds: ScoreBounds::between(0, 0),
            label: "Low likelihood of substance use disorder".to_string(),
            severity: Severity::Minimal,
            narrative: "Your responses suggest low risk for substance use disorder. Continue practicing healthy habits.".to_string(),
            actions: practice_actions(),
        },
    ]
});

impl Instrument for CageAid {
    fn id(&self) -> &str {
        "cage-aid"
    }

    fn name(&self) -> &str {
        "CAGE-AID"
    }

    fn instructions(&self) -> Option<&str> {
        Some("Please answer the following questions about your alcohol and drug use:")
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
