use super::Flow;
use crate::error::ValidationError;
use ahash::AHashSet;
use itertools::Itertools;

impl Flow {
    /// Checks the structural invariants of the whole flow.
    ///
    /// Returns every finding rather than stopping at the first, so the
    /// editor can flag them all at once; an empty list means the flow is
    /// valid. Findings are advisory — the traversal engine tolerates all of
    /// them at runtime (a dangling route simply never matches), since flows
    /// are routinely incomplete while being edited.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut findings = Vec::new();

        for page_id in self.pages.iter().map(|p| p.id.as_str()).duplicates() {
            findings.push(ValidationError::DuplicatePageId {
                page_id: page_id.to_string(),
            });
        }

        let known_ids: AHashSet<&str> = self.pages.iter().map(|p| p.id.as_str()).collect();

        for (page_index, page) in self.pages.iter().enumerate() {
            for (question_index, question) in page.questions.iter().enumerate() {
                if let Err(defect) = question.validate() {
                    findings.push(ValidationError::Question {
                        page_id: page.id.clone(),
                        question_index,
                        source: defect,
                    });
                }
            }

            for post in &page.post_conditions {
                if !known_ids.contains(post.next_page_id.as_str()) {
                    findings.push(ValidationError::DanglingRoute {
                        page_id: page.id.clone(),
                        next_page_id: post.next_page_id.clone(),
                    });
                }
                if post.condition.question_index >= page.questions.len() {
                    findings.push(ValidationError::ConditionOutOfRange {
                        page_id: page.id.clone(),
                        question_index: post.condition.question_index,
                        question_count: page.questions.len(),
                    });
                }
            }

            for pre in &page.pre_conditions {
                // The gate reads the source page's answer slot; without an
                // explicit source it reads the gated page's own slot.
                let source_index = pre.source_page.unwrap_or(page_index);
                if let Some(source) = self.pages.get(source_index) {
                    if pre.question_index >= source.questions.len() {
                        findings.push(ValidationError::ConditionOutOfRange {
                            page_id: source.id.clone(),
                            question_index: pre.question_index,
                            question_count: source.questions.len(),
                        });
                    }
                }
            }
        }

        findings
    }
}
