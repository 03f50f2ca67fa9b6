pub mod cage_aid;
pub mod gad7;
pub mod phq9;

use crate::scoring::{AnswerOption, CallToAction};

const PRACTICE_PHONE: &str = "859-341-7453";
const PRACTICE_EMAIL: &str = "arnold.shapiro@gmail.com";

/// Contact options offered with every tier: call first, email second.
fn practice_actions() -> Vec<CallToAction> {
    vec![
        CallToAction::phone("Call Dr. Shapiro: (859) 341-7453", PRACTICE_PHONE),
        CallToAction::email("Email for Consultation", PRACTICE_EMAIL),
    ]
}

/// "Over the last 2 weeks" frequency scale shared by PHQ-9 and GAD-7.
fn frequency_domain() -> Vec<AnswerOption> {
    vec![
        AnswerOption::new(0, "Not at all"),
        AnswerOption::new(1, "Several days"),
        AnswerOption::new(2, "More than half the days"),
        AnswerOption::new(3, "Nearly every day"),
    ]
}
