//! Tests for page-entry eligibility and next-page selection.
mod common;
use common::*;
use flowmaster::prelude::*;

fn answers_with(page: usize, question: usize, value: Value) -> AnswerStore {
    let mut answers = AnswerStore::new();
    answers.record(page, question, value);
    answers
}

#[test]
fn test_page_without_pre_conditions_is_always_enterable() {
    let flow = create_branching_flow();
    let router = Router::new(&flow);

    assert!(router.can_enter(&AnswerStore::new(), 0).unwrap());

    // Unrelated answers change nothing.
    let answers = answers_with(0, 0, Value::Text("noise".into()));
    assert!(router.can_enter(&answers, 1).unwrap());
}

#[test]
fn test_numeric_branching() {
    let flow = create_branching_flow();
    let router = Router::new(&flow);

    // 7 > 5 routes to the high road.
    let answers = answers_with(0, 0, Value::Number(7.0));
    assert_eq!(router.next_page(&answers, 0).unwrap(), NextPage::Goto(1));

    // 3 matches neither `> 5` nor `<= 2`.
    let answers = answers_with(0, 0, Value::Number(3.0));
    assert_eq!(router.next_page(&answers, 0).unwrap(), NextPage::End);

    let answers = answers_with(0, 0, Value::Number(2.0));
    assert_eq!(router.next_page(&answers, 0).unwrap(), NextPage::Goto(2));
}

#[test]
fn test_first_match_wins_in_stored_order() {
    // Both conditions hold for 10; the first stored one decides.
    let flow = Flow::new("f", "f", "")
        .with_page(Page::new("p0", "Start"))
        .with_page(Page::new("a", "A"))
        .with_page(Page::new("b", "B"))
        .with_question(0, numeric_question("n"))
        .unwrap()
        .with_post_condition(
            0,
            PostCondition {
                condition: RouteCondition {
                    question_index: 0,
                    value: Value::Number(5.0),
                    operator: Operator::GreaterThan,
                },
                next_page_id: "a".to_string(),
            },
        )
        .unwrap()
        .with_post_condition(
            0,
            PostCondition {
                condition: RouteCondition {
                    question_index: 0,
                    value: Value::Number(0.0),
                    operator: Operator::GreaterThanOrEqual,
                },
                next_page_id: "b".to_string(),
            },
        )
        .unwrap();
    let router = Router::new(&flow);

    let answers = answers_with(0, 0, Value::Number(10.0));
    assert_eq!(router.next_page(&answers, 0).unwrap(), NextPage::Goto(1));

    // 3 skips the first condition and falls through to the second.
    let answers = answers_with(0, 0, Value::Number(3.0));
    assert_eq!(router.next_page(&answers, 0).unwrap(), NextPage::Goto(2));
}

#[test]
fn test_page_without_post_conditions_ends() {
    let flow = create_branching_flow();
    let router = Router::new(&flow);
    let answers = answers_with(1, 0, Value::Number(42.0));
    assert_eq!(router.next_page(&answers, 1).unwrap(), NextPage::End);
}

#[test]
fn test_dangling_target_ends_instead_of_crashing() {
    let flow = Flow::new("f", "f", "")
        .with_page(Page::new("p0", "Start"))
        .with_question(0, numeric_question("n"))
        .unwrap()
        .with_post_condition(
            0,
            PostCondition {
                condition: RouteCondition {
                    question_index: 0,
                    value: Value::Number(0.0),
                    operator: Operator::GreaterThan,
                },
                next_page_id: "missing".to_string(),
            },
        )
        .unwrap();
    let router = Router::new(&flow);

    let answers = answers_with(0, 0, Value::Number(1.0));
    // The condition matches but its target resolves nowhere.
    assert_eq!(
        router.route(&answers, 0).unwrap(),
        RouteOutcome::Matched {
            condition_index: 0,
            next_page_id: "missing",
            target: None,
        }
    );
    assert_eq!(router.next_page(&answers, 0).unwrap(), NextPage::End);
}

#[test]
fn test_ordering_comparison_with_non_numeric_answer_is_false() {
    let flow = create_branching_flow();
    let router = Router::new(&flow);

    for answer in [
        Value::Text("seven".into()),
        Value::Many(vec!["7".to_string()]),
    ] {
        let answers = answers_with(0, 0, answer);
        assert_eq!(router.next_page(&answers, 0).unwrap(), NextPage::End);
    }
}

#[test]
fn test_missing_answer_never_satisfies_a_condition() {
    let flow = create_branching_flow();
    let router = Router::new(&flow);
    assert_eq!(
        router.next_page(&AnswerStore::new(), 0).unwrap(),
        NextPage::End
    );
}

#[test]
fn test_cross_page_pre_condition_gates_on_source_answer() {
    let flow = create_gated_flow();
    let router = Router::new(&flow);

    let answers = answers_with(0, 0, Value::Text("yes".into()));
    assert!(router.can_enter(&answers, 1).unwrap());

    let answers = answers_with(0, 0, Value::Text("no".into()));
    assert!(!router.can_enter(&answers, 1).unwrap());
}

#[test]
fn test_pre_condition_without_source_reads_the_gated_page() {
    // Documents written before `sourcePage` existed resolve the answer slot
    // under the gated page's own index.
    let flow = Flow::new("f", "f", "")
        .with_page(Page::new("p0", "Start"))
        .with_page(Page::new("p1", "Gated"))
        .with_pre_condition(
            1,
            PreCondition {
                question_index: 0,
                source_page: None,
                expected_value: Value::Text("yes".into()),
                operator: Operator::Equal,
            },
        )
        .unwrap();
    let router = Router::new(&flow);

    // The answer lives at (0, 0): not visible to the gate on page 1.
    let answers = answers_with(0, 0, Value::Text("yes".into()));
    assert!(!router.can_enter(&answers, 1).unwrap());

    // At (1, 0) it is.
    let answers = answers_with(1, 0, Value::Text("yes".into()));
    assert!(router.can_enter(&answers, 1).unwrap());
}

#[test]
fn test_all_pre_conditions_must_hold() {
    let flow = create_gated_flow()
        .with_pre_condition(
            1,
            PreCondition {
                question_index: 1,
                source_page: Some(0),
                expected_value: Value::Number(1.0),
                operator: Operator::Equal,
            },
        )
        .unwrap();
    let router = Router::new(&flow);

    // The consent gate holds but the second condition has no answer.
    let answers = answers_with(0, 0, Value::Text("yes".into()));
    assert!(!router.can_enter(&answers, 1).unwrap());

    let mut answers = answers;
    answers.record(0, 1, Value::Number(1.0));
    assert!(router.can_enter(&answers, 1).unwrap());
}

#[test]
fn test_set_equality_ignores_selection_order() {
    let mut flow = create_multi_select_flow();
    flow.pages[0].post_conditions.push(PostCondition {
        condition: RouteCondition {
            question_index: 0,
            value: Value::Many(vec!["A".to_string(), "B".to_string()]),
            operator: Operator::Equal,
        },
        next_page_id: "p0".to_string(),
    });
    let router = Router::new(&flow);

    let answers = answers_with(0, 0, vec!["B".to_string(), "A".to_string()].into());
    assert_eq!(router.next_page(&answers, 0).unwrap(), NextPage::Goto(0));

    let answers = answers_with(0, 0, Value::Many(vec!["A".to_string()]));
    assert_eq!(router.next_page(&answers, 0).unwrap(), NextPage::End);
}

#[test]
fn test_scalar_against_set_answer_tests_membership() {
    let mut flow = create_multi_select_flow();
    flow.pages[0].post_conditions.push(PostCondition {
        condition: RouteCondition {
            question_index: 0,
            value: Value::Text("B".to_string()),
            operator: Operator::Equal,
        },
        next_page_id: "p0".to_string(),
    });
    let router = Router::new(&flow);

    let answers = answers_with(0, 0, Value::Many(vec!["A".to_string(), "B".to_string()]));
    assert_eq!(router.next_page(&answers, 0).unwrap(), NextPage::Goto(0));

    let answers = answers_with(0, 0, Value::Many(vec!["A".to_string()]));
    assert_eq!(router.next_page(&answers, 0).unwrap(), NextPage::End);
}

#[test]
fn test_advance_gates_the_resolved_target() {
    // Routing into a page is not enough; the page's own admission check
    // still applies.
    let flow = create_gated_flow()
        .with_pre_condition(
            1,
            PreCondition {
                question_index: 0,
                source_page: Some(0),
                expected_value: Value::Text("never".into()),
                operator: Operator::Equal,
            },
        )
        .unwrap();
    let router = Router::new(&flow);

    let answers = answers_with(0, 0, Value::Text("yes".into()));
    // The post-condition resolves to page 1...
    assert_eq!(router.next_page(&answers, 0).unwrap(), NextPage::Goto(1));
    // ...but its second pre-condition can never hold.
    assert_eq!(router.advance(&answers, 0).unwrap(), NextPage::End);
}

#[test]
fn test_out_of_range_page_is_an_error() {
    let flow = create_branching_flow();
    let router = Router::new(&flow);
    let answers = AnswerStore::new();

    let err = router.can_enter(&answers, 9).unwrap_err();
    assert_eq!(
        err,
        IndexError {
            index: 9,
            page_count: 3
        }
    );
    assert!(router.next_page(&answers, 9).is_err());
}

#[test]
fn test_duplicate_page_ids_resolve_to_first_occurrence() {
    let flow = create_branching_flow().with_page(Page::new("p1", "Shadow"));
    let router = Router::new(&flow);
    assert_eq!(router.resolve("p1"), Some(1));
    // The indexed lookup agrees with an in-order scan.
    assert_eq!(flow.page_index("p1"), Some(1));
    assert_eq!(flow.page_index("nowhere"), None);
}
