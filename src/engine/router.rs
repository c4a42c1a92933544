use super::compare;
use crate::answer::AnswerStore;
use crate::error::IndexError;
use crate::flow::{Flow, Page};
use ahash::AHashMap;

/// Where advancing out of a page leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// The page at this index is next.
    Goto(usize),
    /// No further page is reachable; the traversal is over. This is the
    /// normal way a run ends, not a failure.
    End,
}

/// Result of evaluating a page's post-conditions, before the target is
/// gated by its own pre-conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome<'a> {
    /// The first satisfied post-condition, in stored order. `target` is
    /// `None` when its `nextPageId` names no page in the flow; the caller
    /// treats that dangling edge the same as no match.
    Matched {
        condition_index: usize,
        next_page_id: &'a str,
        target: Option<usize>,
    },
    NoMatch,
}

/// Page-entry eligibility and next-page selection over one flow.
///
/// A router borrows the flow it was built for and indexes the page ids once,
/// so resolving a `nextPageId` is a map lookup instead of a scan. It holds
/// no mutable state; one router can serve any number of answer stores.
pub struct Router<'a> {
    flow: &'a Flow,
    page_ids: AHashMap<&'a str, usize>,
}

impl<'a> Router<'a> {
    pub fn new(flow: &'a Flow) -> Self {
        let mut page_ids = AHashMap::with_capacity(flow.pages.len());
        for (index, page) in flow.pages.iter().enumerate() {
            // First occurrence wins when ids collide, matching a scan.
            page_ids.entry(page.id.as_str()).or_insert(index);
        }
        Self { flow, page_ids }
    }

    pub fn flow(&self) -> &'a Flow {
        self.flow
    }

    /// Index of the page with this id, if any.
    pub fn resolve(&self, page_id: &str) -> Option<usize> {
        self.page_ids.get(page_id).copied()
    }

    /// Whether the page at `page_index` may be entered given the collected
    /// answers: the conjunction of its pre-conditions, vacuously true for a
    /// page with none.
    ///
    /// Each pre-condition reads the answer slot of its source page (its own
    /// page when no source is set) at the condition's question index.
    pub fn can_enter(&self, answers: &AnswerStore, page_index: usize) -> Result<bool, IndexError> {
        let page = self.page(page_index)?;
        Ok(page.pre_conditions.iter().all(|pre| {
            let source = pre.source_page.unwrap_or(page_index);
            compare::holds(
                answers.get(source, pre.question_index),
                pre.operator,
                &pre.expected_value,
            )
        }))
    }

    /// Evaluates the page's post-conditions in stored order and reports the
    /// first satisfied one, even if a later one would also match.
    pub fn route(
        &self,
        answers: &AnswerStore,
        page_index: usize,
    ) -> Result<RouteOutcome<'a>, IndexError> {
        let page = self.page(page_index)?;
        for (condition_index, post) in page.post_conditions.iter().enumerate() {
            let condition = &post.condition;
            if compare::holds(
                answers.get(page_index, condition.question_index),
                condition.operator,
                &condition.value,
            ) {
                return Ok(RouteOutcome::Matched {
                    condition_index,
                    next_page_id: &post.next_page_id,
                    target: self.resolve(&post.next_page_id),
                });
            }
        }
        Ok(RouteOutcome::NoMatch)
    }

    /// The page that advancing out of `page_index` selects: the target of
    /// the first satisfied post-condition, or [`NextPage::End`] when none
    /// matches or the matched target does not exist.
    pub fn next_page(
        &self,
        answers: &AnswerStore,
        page_index: usize,
    ) -> Result<NextPage, IndexError> {
        Ok(match self.route(answers, page_index)? {
            RouteOutcome::Matched {
                target: Some(index),
                ..
            } => NextPage::Goto(index),
            _ => NextPage::End,
        })
    }

    /// The full advance protocol: resolve the next page, then gate it with
    /// its own pre-conditions. An ineligible target ends the traversal
    /// instead of being entered — admission is a page-local check,
    /// independent of which route led there.
    pub fn advance(
        &self,
        answers: &AnswerStore,
        page_index: usize,
    ) -> Result<NextPage, IndexError> {
        match self.next_page(answers, page_index)? {
            NextPage::Goto(target) if self.can_enter(answers, target)? => {
                Ok(NextPage::Goto(target))
            }
            _ => Ok(NextPage::End),
        }
    }

    fn page(&self, index: usize) -> Result<&'a Page, IndexError> {
        self.flow.pages.get(index).ok_or(IndexError {
            index,
            page_count: self.flow.pages.len(),
        })
    }
}
