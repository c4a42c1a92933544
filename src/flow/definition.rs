use super::{Page, PostCondition, PreCondition, Question};
use crate::error::IndexError;
use serde::{Deserialize, Serialize};

/// The complete definition of a branching questionnaire: an ordered page
/// sequence whose reachability graph is implied by post-condition targets.
///
/// A flow is an immutable value. Edits go through the consuming `with_*` /
/// `without_*` builders, which hand back a new flow, so a stored copy and an
/// in-edit copy never alias each other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Flow {
    /// Creates an empty flow. Id uniqueness is the caller's concern; any
    /// collision-free generation scheme works.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            pages: Vec::new(),
        }
    }

    /// Position of the page with the given id, scanning in order.
    ///
    /// For repeated lookups build a [`Router`](crate::engine::Router), which
    /// indexes the ids once.
    pub fn page_index(&self, id: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }

    pub fn with_question(mut self, page: usize, question: Question) -> Result<Self, IndexError> {
        self.page_mut(page)?.questions.push(question);
        Ok(self)
    }

    pub fn with_pre_condition(
        mut self,
        page: usize,
        condition: PreCondition,
    ) -> Result<Self, IndexError> {
        self.page_mut(page)?.pre_conditions.push(condition);
        Ok(self)
    }

    pub fn with_post_condition(
        mut self,
        page: usize,
        condition: PostCondition,
    ) -> Result<Self, IndexError> {
        self.page_mut(page)?.post_conditions.push(condition);
        Ok(self)
    }

    /// Removes a pre-condition by position. Removing a position that does
    /// not exist is a no-op, matching delete-by-index in the editor.
    pub fn without_pre_condition(mut self, page: usize, index: usize) -> Result<Self, IndexError> {
        let conditions = &mut self.page_mut(page)?.pre_conditions;
        if index < conditions.len() {
            conditions.remove(index);
        }
        Ok(self)
    }

    /// Removes a post-condition by position; see [`Self::without_pre_condition`].
    pub fn without_post_condition(mut self, page: usize, index: usize) -> Result<Self, IndexError> {
        let conditions = &mut self.page_mut(page)?.post_conditions;
        if index < conditions.len() {
            conditions.remove(index);
        }
        Ok(self)
    }

    fn page_mut(&mut self, index: usize) -> Result<&mut Page, IndexError> {
        let page_count = self.pages.len();
        self.pages
            .get_mut(index)
            .ok_or(IndexError { index, page_count })
    }
}
