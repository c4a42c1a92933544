use clap::Parser;
use flowmaster::prelude::*;
use std::fs;
use std::io::{self, Write};

/// Guards against cyclic flows replayed with a fixed answer script.
const MAX_STEPS: usize = 1000;

/// A traversal and branching engine CLI for questionnaire flows
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow definition JSON file
    flow_path: Option<String>,
    /// Optional path to a scripted answers JSON file for replay
    answers_path: Option<String>,

    /// Validate the flow and exit without walking it
    #[arg(short, long)]
    validate: bool,

    /// Run in interactive mode and answer the questions on stdin
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    let flow_path = cli
        .flow_path
        .clone()
        .unwrap_or_else(|| exit_with_error("Flow path is required."));
    let flow = load_flow(&flow_path);

    let findings = flow.validate();
    if findings.is_empty() {
        println!("Flow '{}' is structurally valid.", flow.name);
    } else {
        println!("Flow '{}' has {} finding(s):", flow.name, findings.len());
        for finding in &findings {
            println!("  - {}", finding);
        }
    }
    if cli.validate {
        std::process::exit(if findings.is_empty() { 0 } else { 1 });
    }

    if cli.human {
        run_interactive(&flow);
    } else {
        run_replay(&flow, cli.answers_path.as_deref());
    }
}

fn load_flow(path: &str) -> Flow {
    let flow_json = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read flow file '{}': {}", path, e)));
    serde_json::from_str(&flow_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse flow JSON: {}", e)))
}

/// Replays a scripted answer set against the flow and prints the route.
fn run_replay(flow: &Flow, answers_path: Option<&str>) {
    let script = match answers_path {
        Some(path) => AnswerScript::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load answers from '{}': {}", path, e))
        }),
        None => {
            println!("No answers file provided. Walking the flow with no answers.");
            AnswerScript::default()
        }
    };

    let scripted = script.to_store();
    let mut session = Session::start(flow);

    println!("\nWalking flow '{}'...", flow.name);
    let mut steps = 0;
    while let State::Active(page_index) = session.state() {
        // Copy the scripted answers for the page being left.
        for (&(page, question), value) in scripted.iter() {
            if page == page_index {
                session.answer(question, value.clone());
            }
        }
        if let Err(e) = session.advance() {
            exit_with_error(&format!("Traversal failed: {}", e));
        }
        steps += 1;
        if steps >= MAX_STEPS {
            println!(
                "Stopped after {} steps; the flow appears to cycle under this answer script.",
                steps
            );
            break;
        }
    }

    print_report(flow, &session);
}

/// Walks the flow page by page, prompting for every answer on stdin.
fn run_interactive(flow: &Flow) {
    println!("\n--- {} ---", flow.name);
    if !flow.description.is_empty() {
        println!("{}", flow.description);
    }

    let mut session = Session::start(flow);

    // `current_page` borrows from the flow, not the session, so answering
    // while iterating the page's questions is fine.
    while let Some(page) = session.current_page() {
        println!("\n== {} ==", page.name);
        for (question_index, question) in page.questions.iter().enumerate() {
            ask_question(&mut session, question_index, question);
        }
        if session.advance().is_err() {
            break;
        }
    }

    print_report(flow, &session);
}

fn ask_question(session: &mut Session, question_index: usize, question: &Question) {
    match question {
        Question::StaticText { text, body } => {
            println!("\n{}\n{}", text, body);
        }
        Question::Number { text, .. } => loop {
            let line = prompt_for_input(text, None);
            if line.is_empty() {
                break;
            }
            match line.parse::<f64>() {
                Ok(n) => {
                    session.answer(question_index, Value::Number(n));
                    break;
                }
                Err(_) => println!("Please enter a number."),
            }
        },
        Question::Text { text, placeholder } => {
            let line = prompt_for_input(text, placeholder.as_deref());
            if !line.is_empty() {
                session.answer(question_index, Value::Text(line));
            }
        }
        Question::Calendar { text } => {
            let line = prompt_for_input(&format!("{} (YYYY-MM-DD)", text), None);
            if !line.is_empty() {
                session.answer(question_index, Value::Text(line));
            }
        }
        Question::Dropdown { text, options } => {
            if let Some(label) = pick_one(text, options) {
                session.answer(question_index, Value::Text(label));
            }
        }
        Question::MultipleChoice {
            text,
            answers,
            allow_multiple_answers,
        } => {
            if *allow_multiple_answers {
                pick_many(session, question_index, text, answers);
            } else if let Some(label) = pick_one(text, answers) {
                session.answer(question_index, Value::Text(label));
            }
        }
        Question::Checkbox { text, options } => {
            pick_many(session, question_index, text, options);
        }
    }
}

fn pick_one(text: &str, labels: &[String]) -> Option<String> {
    println!("\n{}", text);
    for (i, label) in labels.iter().enumerate() {
        println!("  {}: {}", i + 1, label);
    }
    loop {
        let line = prompt_for_input("Enter choice", None);
        if line.is_empty() {
            return None;
        }
        match line.parse::<usize>() {
            Ok(n) if n >= 1 && n <= labels.len() => return Some(labels[n - 1].clone()),
            _ => println!("Invalid choice. Enter a number from the list."),
        }
    }
}

/// Repeatedly toggles labels until an empty line confirms the selection.
fn pick_many(session: &mut Session, question_index: usize, text: &str, labels: &[String]) {
    println!("\n{} (toggle by number, empty line when done)", text);
    for (i, label) in labels.iter().enumerate() {
        println!("  {}: {}", i + 1, label);
    }
    loop {
        let line = prompt_for_input("Toggle", None);
        if line.is_empty() {
            return;
        }
        match line.parse::<usize>() {
            Ok(n) if n >= 1 && n <= labels.len() => {
                session.toggle(question_index, &labels[n - 1]);
            }
            _ => println!("Invalid choice. Enter a number from the list."),
        }
    }
}

fn print_report(flow: &Flow, session: &Session) {
    println!("\n--- Route ---");
    if session.trace().is_empty() {
        println!("(the flow has no pages)");
    } else {
        println!("{}", TraceFormatter::format_trace(flow, session.trace()));
    }

    println!("\n--- Your answers ---");
    for page in session.summary().pages {
        println!("{}", page.page_name);
        for entry in page.entries {
            let answered = entry
                .answer
                .map_or_else(|| "No answer".to_string(), |v| v.to_string());
            println!("  {}: {}", entry.question, answered);
            if let Some(outcome) = entry.outcome {
                println!("    -> {}", outcome);
            }
        }
    }
    println!();
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let hint = default.map_or(String::new(), |d| format!(" [{}]", d));

    print!("> {}{}: ", prompt_text, hint);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    line.trim().to_string()
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
