use serde::Serialize;
use tera::{Context, Tera};

use screening_instruments::collector::{FormView, ResponseSet};
use screening_instruments::error::Incomplete;
use screening_instruments::scorer::ScoreResult;
use screening_instruments::scoring::{CallToAction, ContactMethod};

use crate::error::ExportError;
use crate::styles::PageStyles;

pub const DEFAULT_DISCLAIMER: &str = "This screening tool is for educational purposes only and does not constitute a medical diagnosis. Please consult with Dr. Arnold G. Shapiro or another qualified healthcare provider for proper evaluation and treatment.";

const TEMPLATES: [(&str, &str); 3] = [
    ("base.html", include_str!("../templates/base.html")),
    ("form.html", include_str!("../templates/form.html")),
    ("result.html", include_str!("../templates/result.html")),
];

#[derive(Serialize)]
struct QuestionBlock<'a> {
    index: usize,
    number: usize,
    prompt: &'a str,
    options: Vec<OptionBlock<'a>>,
}

#[derive(Serialize)]
struct OptionBlock<'a> {
    value: u32,
    label: &'a str,
    checked: bool,
}

#[derive(Serialize)]
struct ActionLink<'a> {
    label: &'a str,
    href: String,
}

/// Link target for a call-to-action. `None` for web links that are not
/// `http` or `https`.
pub fn action_href(action: &CallToAction) -> Option<String> {
    match action.method {
        ContactMethod::Phone => Some(format!("tel:{}", action.value)),
        ContactMethod::Email => Some(format!("mailto:{}", action.value)),
        ContactMethod::Web if action.is_safe_link() => Some(action.value.trim().to_string()),
        ContactMethod::Web => None,
    }
}

/// Renders questionnaire pages from the built-in templates.
pub struct Renderer {
    tera: Tera,
    styles: PageStyles,
    disclaimer: String,
}

impl Renderer {
    pub fn new(styles: PageStyles) -> Result<Self, ExportError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)
            .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

        Ok(Self {
            tera,
            styles,
            disclaimer: DEFAULT_DISCLAIMER.to_string(),
        })
    }

    pub fn with_disclaimer(mut self, disclaimer: impl Into<String>) -> Self {
        self.disclaimer = disclaimer.into();
        self
    }

    pub fn styles(&self) -> &PageStyles {
        &self.styles
    }

    /// Render the questionnaire form.
    ///
    /// Answers already in `answers` come back pre-selected. When `incomplete`
    /// is set the page opens with a blocking prompt to answer every question;
    /// no score is shown.
    pub fn render_form(
        &self,
        view: &FormView,
        answers: &ResponseSet,
        incomplete: Option<Incomplete>,
    ) -> Result<String, ExportError> {
        let questions: Vec<QuestionBlock<'_>> = view
            .questions
            .iter()
            .map(|question| QuestionBlock {
                index: question.index,
                number: question.number,
                prompt: &question.prompt,
                options: view
                    .answer_domain
                    .iter()
                    .map(|option| OptionBlock {
                        value: option.value,
                        label: &option.label,
                        checked: answers.answer(question.index) == Some(option.value),
                    })
                    .collect(),
            })
            .collect();

        let mut context = self.base_context();
        context.insert("name", &view.name);
        context.insert("instructions", &view.instructions);
        context.insert("questions", &questions);
        context.insert("incomplete", &incomplete);

        tracing::debug!(instrument = %view.instrument_id, "rendering form");
        Ok(self.tera.render("form.html", &context)?)
    }

    /// Render a completed result with its tier narrative and contact links.
    pub fn render_result(&self, name: &str, result: &ScoreResult) -> Result<String, ExportError> {
        let actions: Vec<ActionLink<'_>> = result
            .tier
            .actions
            .iter()
            .filter_map(|action| {
                let Some(href) = action_href(action) else {
                    tracing::warn!(instrument = %result.instrument_id, "skipping unsafe action link");
                    return None;
                };
                Some(ActionLink {
                    label: &action.label,
                    href,
                })
            })
            .collect();

        let mut context = self.base_context();
        context.insert("name", name);
        context.insert("result", result);
        context.insert("accent", self.styles.accent(result.tier.severity));
        context.insert("actions", &actions);
        context.insert("disclaimer", &self.disclaimer);

        tracing::debug!(instrument = %result.instrument_id, "rendering result");
        Ok(self.tera.render("result.html", &context)?)
    }

    fn base_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("styles", &self.styles);
        context
    }
}
