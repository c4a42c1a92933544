use clap::Parser;
use flowmaster::prelude::*;
use rand::rngs::ThreadRng;
use rand::Rng;
use std::fs;

/// A CLI tool to generate random flow documents and answer scripts for the
/// traversal engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated flow JSON file to
    #[arg(long, default_value = "generated_flow.json")]
    flow_output: String,

    /// The path to write the generated answer script to
    #[arg(long, default_value = "generated_answers.json")]
    answers_output: String,

    /// The number of pages to generate
    #[arg(long, default_value_t = 5)]
    pages: usize,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.pages == 0 {
        eprintln!("Error: --pages must be at least 1");
        std::process::exit(1);
    }

    println!("Generating a flow with {} page(s)...", cli.pages);

    let flow = generate_flow(&mut rng, cli.pages);
    let script = generate_answers(&mut rng, &flow);

    let findings = flow.validate();
    if !findings.is_empty() {
        // The generator only emits resolvable routes, so this is unexpected.
        eprintln!("Generated flow has {} validation finding(s)", findings.len());
    }

    fs::write(&cli.flow_output, serde_json::to_string_pretty(&flow)?)?;
    println!("-> Wrote flow to '{}'", cli.flow_output);

    fs::write(&cli.answers_output, serde_json::to_string_pretty(&script)?)?;
    println!("-> Wrote answer script to '{}'", cli.answers_output);

    Ok(())
}

fn generate_flow(rng: &mut ThreadRng, page_count: usize) -> Flow {
    let mut flow = Flow::new(
        "generated",
        "Generated flow",
        "Randomly generated flow for engine testing",
    );

    for index in 0..page_count {
        let mut page = Page::new(format!("page{}", index + 1), format!("Page {}", index + 1));
        let question_count = rng.random_range(1..=3);
        for q in 0..question_count {
            page.questions.push(generate_question(rng, index, q));
        }
        flow.pages.push(page);
    }

    // Wire up branches after all pages exist so every target resolves.
    for index in 0..page_count {
        let branch_count = rng.random_range(0..=2);
        for _ in 0..branch_count {
            let target = rng.random_range(0..page_count);
            let question_index = rng.random_range(0..flow.pages[index].questions.len());
            let condition = match &flow.pages[index].questions[question_index] {
                Question::Number { .. } => RouteCondition {
                    question_index,
                    value: Value::Number(rng.random_range(0..50) as f64),
                    operator: if rng.random_bool(0.5) {
                        Operator::GreaterThan
                    } else {
                        Operator::SmallerThanOrEqual
                    },
                },
                question => RouteCondition {
                    question_index,
                    value: pick_label(rng, question)
                        .map_or(Value::Text("yes".to_string()), Value::Text),
                    operator: Operator::Equal,
                },
            };
            flow.pages[index].post_conditions.push(PostCondition {
                condition,
                next_page_id: format!("page{}", target + 1),
            });
        }
    }

    println!("-> Generated {} page(s).", page_count);
    flow
}

fn generate_question(rng: &mut ThreadRng, page: usize, index: usize) -> Question {
    let text = format!("Question {}.{}", page + 1, index + 1);
    match rng.random_range(0..5) {
        0 => Question::Number {
            text,
            min: Some(0.0),
            max: Some(100.0),
            low_outcome: Some("Value is below the expected range".to_string()),
            high_outcome: Some("Value is above the expected range".to_string()),
        },
        1 => Question::Text {
            text,
            placeholder: None,
        },
        2 => Question::MultipleChoice {
            text,
            answers: labels(),
            allow_multiple_answers: rng.random_bool(0.5),
        },
        3 => Question::Dropdown {
            text,
            options: labels(),
        },
        _ => Question::Checkbox {
            text,
            options: labels(),
        },
    }
}

fn generate_answers(rng: &mut ThreadRng, flow: &Flow) -> AnswerScript {
    let mut answers = Vec::new();
    for (page_index, page) in flow.pages.iter().enumerate() {
        for (question_index, question) in page.questions.iter().enumerate() {
            let value = match question {
                Question::Number { .. } => Value::Number(rng.random_range(0..100) as f64),
                Question::Text { .. } => Value::Text("generated".to_string()),
                Question::Calendar { .. } => Value::Text("2024-01-01".to_string()),
                Question::StaticText { .. } => continue,
                Question::Checkbox { options, .. } => {
                    Value::Many(options.iter().take(1).cloned().collect())
                }
                Question::MultipleChoice {
                    allow_multiple_answers: true,
                    answers,
                    ..
                } => Value::Many(answers.iter().take(1).cloned().collect()),
                question => pick_label(rng, question)
                    .map_or(Value::Text("yes".to_string()), Value::Text),
            };
            answers.push(ScriptedAnswer {
                page: page_index,
                question: question_index,
                value,
            });
        }
    }
    println!("-> Generated {} scripted answer(s).", answers.len());
    AnswerScript { answers }
}

fn pick_label(rng: &mut ThreadRng, question: &Question) -> Option<String> {
    question.choice_labels().and_then(|labels| {
        if labels.is_empty() {
            None
        } else {
            Some(labels[rng.random_range(0..labels.len())].clone())
        }
    })
}

fn labels() -> Vec<String> {
    vec!["Yes".to_string(), "No".to_string(), "Maybe".to_string()]
}
