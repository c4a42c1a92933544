use super::{RouteOutcome, Router};
use crate::answer::{AnswerStore, Value};
use crate::error::IndexError;
use crate::flow::{Flow, Page, Question};
use crate::trace::{RouteStep, RouteTrace};
use serde::Serialize;

/// Where a traversal session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// The page at this index is active and collecting answers.
    Active(usize),
    /// Terminal. No page is active and no further answers are accepted.
    End,
}

/// One play-mode run over a flow: the `Active`/`End` state machine, the
/// answer store it feeds, and the route taken so far.
///
/// Sessions are independent of each other; several may walk the same flow
/// value concurrently, each owning its answers.
pub struct Session<'a> {
    router: Router<'a>,
    state: State,
    answers: AnswerStore,
    trace: RouteTrace,
}

impl<'a> Session<'a> {
    /// Starts a run at the first page.
    ///
    /// The first page is gated against the still-empty answer store, so a
    /// flow whose entry page carries unsatisfiable pre-conditions (or no
    /// pages at all) begins already ended.
    pub fn start(flow: &'a Flow) -> Self {
        let router = Router::new(flow);
        let answers = AnswerStore::new();
        let mut trace = RouteTrace::new();

        let state = if flow.pages.is_empty() {
            State::End
        } else {
            // A router over a non-empty flow always has a page 0.
            match router.can_enter(&answers, 0) {
                Ok(true) => {
                    trace.push(RouteStep::Entered { page: 0 });
                    State::Active(0)
                }
                _ => {
                    trace.push(RouteStep::Blocked { page: 0 });
                    State::End
                }
            }
        };

        Self {
            router,
            state,
            answers,
            trace,
        }
    }

    pub fn flow(&self) -> &'a Flow {
        self.router.flow()
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_ended(&self) -> bool {
        self.state == State::End
    }

    /// The active page, or `None` once the run has ended.
    pub fn current_page(&self) -> Option<&'a Page> {
        match self.state {
            State::Active(index) => self.flow().pages.get(index),
            State::End => None,
        }
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn trace(&self) -> &RouteTrace {
        &self.trace
    }

    /// Records an answer for a question on the active page. Returns whether
    /// the answer was accepted; an ended session accepts none.
    pub fn answer(&mut self, question: usize, value: Value) -> bool {
        match self.state {
            State::Active(page) => {
                self.answers.record(page, question, value);
                true
            }
            State::End => false,
        }
    }

    /// Flips one label of a multi-select answer on the active page; see
    /// [`AnswerStore::toggle`]. Returns whether the session accepted it.
    pub fn toggle(&mut self, question: usize, label: &str) -> bool {
        match self.state {
            State::Active(page) => {
                self.answers.toggle(page, question, label);
                true
            }
            State::End => false,
        }
    }

    /// Leaves the active page: picks the first matching post-condition,
    /// gates its target, and either enters the target or ends the run.
    /// Advancing an ended session is a no-op and stays ended.
    pub fn advance(&mut self) -> Result<State, IndexError> {
        let State::Active(current) = self.state else {
            return Ok(State::End);
        };

        self.state = match self.router.route(&self.answers, current)? {
            RouteOutcome::Matched {
                condition_index,
                target: Some(target),
                ..
            } => {
                self.trace.push(RouteStep::Branched {
                    page: current,
                    condition_index,
                    target,
                });
                if self.router.can_enter(&self.answers, target)? {
                    self.trace.push(RouteStep::Entered { page: target });
                    State::Active(target)
                } else {
                    self.trace.push(RouteStep::Blocked { page: target });
                    State::End
                }
            }
            RouteOutcome::Matched {
                next_page_id,
                target: None,
                ..
            } => {
                self.trace.push(RouteStep::DanglingRoute {
                    page: current,
                    next_page_id: next_page_id.to_string(),
                });
                State::End
            }
            RouteOutcome::NoMatch => {
                self.trace.push(RouteStep::NoRouteMatched { page: current });
                State::End
            }
        };
        Ok(self.state)
    }

    /// The end-screen listing: every collectable question in the flow with
    /// the answer given, if any, plus the outcome message for numeric
    /// answers that fell outside their bounds.
    pub fn summary(&self) -> RunSummary {
        let pages = self
            .flow()
            .pages
            .iter()
            .enumerate()
            .map(|(page_index, page)| PageSummary {
                page_id: page.id.clone(),
                page_name: page.name.clone(),
                entries: page
                    .questions
                    .iter()
                    .enumerate()
                    .filter(|(_, question)| !question.is_static())
                    .map(|(question_index, question)| {
                        // A multi-select with every label toggled back off
                        // counts as unanswered.
                        let answer = self
                            .answers
                            .get(page_index, question_index)
                            .filter(|value| !value.is_empty());
                        AnswerEntry {
                            question: question.text().to_string(),
                            outcome: bound_outcome(question, answer),
                            answer: answer.cloned(),
                        }
                    })
                    .collect(),
            })
            .collect();
        RunSummary { pages }
    }
}

/// A completed (or in-progress) run, page by page.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub pages: Vec<PageSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageSummary {
    pub page_id: String,
    pub page_name: String,
    pub entries: Vec<AnswerEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerEntry {
    pub question: String,
    /// `None` when the question was never answered.
    pub answer: Option<Value>,
    /// The low/high outcome message for an out-of-bounds numeric answer.
    pub outcome: Option<String>,
}

fn bound_outcome(question: &Question, answer: Option<&Value>) -> Option<String> {
    let Question::Number {
        min,
        max,
        low_outcome,
        high_outcome,
        ..
    } = question
    else {
        return None;
    };
    let answered = answer?.as_number()?;
    if min.is_some_and(|min| answered < min) {
        return low_outcome.clone();
    }
    if max.is_some_and(|max| answered > max) {
        return high_outcome.clone();
    }
    None
}
