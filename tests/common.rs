//! Common test utilities for building flow definitions and answers.
use flowmaster::prelude::*;

/// Creates a numeric question without bounds.
#[allow(dead_code)]
pub fn numeric_question(text: &str) -> Question {
    Question::Number {
        text: text.to_string(),
        min: None,
        max: None,
        low_outcome: None,
        high_outcome: None,
    }
}

/// Creates a three-page flow whose first page branches on a numeric answer.
///
/// Routing: answer at (0,0) > 5 -> "p1"; answer at (0,0) <= 2 -> "p2";
/// otherwise the traversal ends.
#[allow(dead_code)]
pub fn create_branching_flow() -> Flow {
    Flow::new("branching", "Branching", "Routes on a numeric answer")
        .with_page(Page::new("p0", "Start"))
        .with_page(Page::new("p1", "High road"))
        .with_page(Page::new("p2", "Low road"))
        .with_question(0, numeric_question("Pick a number"))
        .unwrap()
        .with_post_condition(
            0,
            PostCondition {
                condition: RouteCondition {
                    question_index: 0,
                    value: Value::Number(5.0),
                    operator: Operator::GreaterThan,
                },
                next_page_id: "p1".to_string(),
            },
        )
        .unwrap()
        .with_post_condition(
            0,
            PostCondition {
                condition: RouteCondition {
                    question_index: 0,
                    value: Value::Number(2.0),
                    operator: Operator::SmallerThanOrEqual,
                },
                next_page_id: "p2".to_string(),
            },
        )
        .unwrap()
}

/// Creates a two-page flow where the second page is gated on the first
/// page's answer being "yes".
#[allow(dead_code)]
pub fn create_gated_flow() -> Flow {
    Flow::new("gated", "Gated", "Second page requires consent")
        .with_page(Page::new("p0", "Consent"))
        .with_page(Page::new("p1", "Details"))
        .with_question(
            0,
            Question::Dropdown {
                text: "Do you want to continue?".to_string(),
                options: vec!["yes".to_string(), "no".to_string()],
            },
        )
        .unwrap()
        .with_post_condition(
            0,
            PostCondition {
                condition: RouteCondition {
                    question_index: 0,
                    value: Value::Text("yes".to_string()),
                    operator: Operator::Equal,
                },
                next_page_id: "p1".to_string(),
            },
        )
        .unwrap()
        .with_pre_condition(
            1,
            PreCondition {
                question_index: 0,
                source_page: Some(0),
                expected_value: Value::Text("yes".to_string()),
                operator: Operator::Equal,
            },
        )
        .unwrap()
}

/// Creates a one-page flow holding a multi-select question.
#[allow(dead_code)]
pub fn create_multi_select_flow() -> Flow {
    Flow::new("multi", "Multi-select", "Toggle semantics")
        .with_page(Page::new("p0", "Choices"))
        .with_question(
            0,
            Question::MultipleChoice {
                text: "Pick any".to_string(),
                answers: vec!["A".to_string(), "B".to_string(), "C".to_string()],
                allow_multiple_answers: true,
            },
        )
        .unwrap()
}

/// A flow document as the builder UI writes them: camelCase attributes and
/// the `inputType` variant tag.
#[allow(dead_code)]
pub const LEGACY_FLOW_JSON: &str = r#"{
    "id": "1714989600000",
    "name": "Intake",
    "description": "Patient intake flow",
    "pages": [
        {
            "id": "page1",
            "name": "Side 1",
            "questions": [
                {
                    "inputType": "number",
                    "text": "How old are you?",
                    "min": 18,
                    "max": 99,
                    "lowOutcome": "Too young for this flow",
                    "highOutcome": "Please contact us directly"
                },
                {
                    "inputType": "multiple-choice",
                    "text": "Known allergies?",
                    "answers": ["Pollen", "Nuts", "None"],
                    "allowMultipleAnswers": true
                }
            ],
            "postConditions": [
                {
                    "condition": { "questionIndex": 0, "value": 65, "operator": ">" },
                    "nextPageId": "page3"
                },
                {
                    "condition": { "questionIndex": 1, "value": "None" },
                    "nextPageId": "page2"
                }
            ]
        },
        {
            "id": "page2",
            "name": "Side 2",
            "questions": [
                { "inputType": "text", "text": "Anything else?", "placeholder": "Free text" },
                { "inputType": "static-text", "text": "Note", "body": "Thanks for your answers." }
            ]
        },
        {
            "id": "page3",
            "name": "Side 3",
            "questions": [
                { "inputType": "calendar", "text": "Preferred appointment date" }
            ],
            "preConditions": [
                { "questionIndex": 0, "sourcePage": 0, "expectedValue": 65, "operator": ">" }
            ]
        }
    ]
}"#;
