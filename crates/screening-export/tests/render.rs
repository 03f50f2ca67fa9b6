use screening_export::render::{action_href, Renderer, DEFAULT_DISCLAIMER};
use screening_export::styles::PageStyles;
use screening_instruments::collector::{FormView, ResponseCollector, ResponseSet};
use screening_instruments::definition::InstrumentDefinition;
use screening_instruments::error::Incomplete;
use screening_instruments::instruments::cage_aid::CageAid;
use screening_instruments::scorer::ScoreResult;
use screening_instruments::scoring::{
    questions_from_prompts, AnswerOption, CallToAction, ContactMethod, ScoreBounds, Severity,
    ThresholdRule,
};
use screening_instruments::Instrument;

fn renderer() -> Renderer {
    Renderer::new(PageStyles::default()).expect("built-in templates parse")
}

#[test]
fn form_lists_every_question_with_radio_choices() {
    let (view, collector) = ResponseCollector::render(&CageAid);
    let html = renderer()
        .render_form(&view, collector.responses(), None)
        .unwrap();

    assert!(html.contains("<h1>CAGE-AID</h1>"));
    assert!(html.contains("about your alcohol and drug use:"));
    assert!(html.contains("1. Have you ever felt you ought to Cut down"));
    assert!(html.contains("4. Have you ever had a drink"));
    for index in 0..4 {
        assert!(html.contains(&format!(r#"name="q{index}" value="1""#)));
        assert!(html.contains(&format!(r#"name="q{index}" value="0""#)));
    }
    assert!(!html.contains("checked"));
    assert!(!html.contains("role=\"alert\""));
}

#[test]
fn incomplete_form_keeps_answers_and_blocks_without_a_score() {
    let (view, mut collector) = ResponseCollector::render(&CageAid);
    collector.select(0, 1).unwrap();
    collector.select(2, 0).unwrap();

    let incomplete = Incomplete {
        answered: 2,
        expected: 4,
    };
    let html = renderer()
        .render_form(&view, collector.responses(), Some(incomplete))
        .unwrap();

    assert!(html.contains("Please answer all questions before seeing results."));
    assert!(html.contains("2 of 4 answered."));
    assert!(html.contains(r#"name="q0" value="1" checked"#));
    assert!(html.contains(r#"name="q2" value="0" checked"#));
    assert!(!html.contains(r#"name="q1" value="1" checked"#));
    assert!(!html.contains("Total Score"));
}

#[test]
fn result_shows_score_tier_and_contact_links() {
    let (_, mut collector) = ResponseCollector::render(&CageAid);
    for (index, value) in [1, 1, 0, 0].into_iter().enumerate() {
        collector.select(index, value).unwrap();
    }
    let result = collector.submit().unwrap();

    let html = renderer().render_result("CAGE-AID", &result).unwrap();

    assert!(html.contains("Total Score: 2/4"));
    assert!(html.contains("Assessment: Positive screen for substance use disorder"));
    assert!(html.contains("border-left: 4px solid #ef4444"));
    assert!(html.contains(r#"href="tel:859-341-7453""#));
    assert!(html.contains(r#"href="mailto:arnold.shapiro@gmail.com""#));
    assert!(html.contains(r#"class="cta secondary""#));
    assert!(html.contains(DEFAULT_DISCLAIMER));
}

#[test]
fn accent_follows_severity() {
    let styles = PageStyles::default();
    assert_eq!(styles.accent(Severity::Minimal), "#10b981");
    assert_eq!(styles.accent(Severity::Moderate), "#f59e0b");
    assert_eq!(styles.accent(Severity::Severe), "#ef4444");
}

#[test]
fn custom_disclaimer_replaces_default() {
    let (_, mut collector) = ResponseCollector::render(&CageAid);
    for index in 0..4 {
        collector.select(index, 0).unwrap();
    }
    let result = collector.submit().unwrap();

    let html = renderer()
        .with_disclaimer("Educational use only.")
        .render_result("CAGE-AID", &result)
        .unwrap();
    assert!(html.contains("Educational use only."));
    assert!(!html.contains(DEFAULT_DISCLAIMER));
    assert!(html.contains("border-left: 4px solid #10b981"));
}

#[test]
fn declared_text_is_escaped() {
    let definition = InstrumentDefinition {
        id: "escape".to_string(),
        name: "Escape <Test>".to_string(),
        instructions: None,
        questions: questions_from_prompts(["Do you <script>alert(1)</script>?"]),
        answer_domain: vec![AnswerOption::new(1, "Yes & no")],
        thresholds: vec![ThresholdRule {
            bounds: ScoreBounds::between(1, 1),
            label: "Only".to_string(),
            severity: Severity::Mild,
            narrative: String::new(),
            actions: Vec::new(),
        }],
    };

    let view = FormView::of(&definition);
    let html = renderer()
        .render_form(&view, &ResponseSet::default(), None)
        .unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("Escape &lt;Test&gt;"));
    assert!(html.contains("Yes &amp; no"));
}

#[test]
fn hrefs_follow_contact_method() {
    assert_eq!(
        action_href(&CallToAction::phone("Call", "555-0100")).as_deref(),
        Some("tel:555-0100")
    );
    assert_eq!(
        action_href(&CallToAction::email("Email", "a@b.c")).as_deref(),
        Some("mailto:a@b.c")
    );
    let web = CallToAction {
        label: "Book".to_string(),
        method: ContactMethod::Web,
        value: "https://example.com/book".to_string(),
    };
    assert_eq!(action_href(&web).as_deref(), Some("https://example.com/book"));
}

#[test]
fn script_links_are_never_rendered() {
    let script = CallToAction {
        label: "Book".to_string(),
        method: ContactMethod::Web,
        value: " JavaScript:alert(1)".to_string(),
    };
    assert_eq!(action_href(&script), None);

    let mut tier = CageAid.thresholds()[0].clone();
    tier.actions.push(script);
    let result = ScoreResult {
        instrument_id: "cage-aid".to_string(),
        total_score: 4,
        max_score: 4,
        tier,
        answered_count: 4,
        expected_count: 4,
    };

    let html = renderer().render_result("CAGE-AID", &result).unwrap();
    assert!(!html.to_ascii_lowercase().contains("javascript:"));
    assert!(html.contains("tel:859-341-7453"));
}
