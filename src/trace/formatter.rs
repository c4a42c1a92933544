use super::{RouteStep, RouteTrace};
use crate::flow::Flow;
use itertools::Itertools;

/// Formats route traces into human-readable strings
pub struct TraceFormatter;

impl TraceFormatter {
    /// Format a recorded route into a line-per-step explanation, resolving
    /// page indices back to their display names.
    pub fn format_trace(flow: &Flow, trace: &RouteTrace) -> String {
        trace
            .steps()
            .iter()
            .map(|step| Self::format_step(flow, step))
            .join("\n")
    }

    fn format_step(flow: &Flow, step: &RouteStep) -> String {
        match step {
            RouteStep::Entered { page } => {
                format!("entered page '{}'", Self::page_name(flow, *page))
            }
            RouteStep::Branched {
                page,
                condition_index,
                target,
            } => {
                let condition = flow
                    .pages
                    .get(*page)
                    .and_then(|p| p.post_conditions.get(*condition_index))
                    .map(|post| post.condition.to_string())
                    .unwrap_or_else(|| "?".to_string());
                format!(
                    "page '{}' matched [{}], routing to '{}'",
                    Self::page_name(flow, *page),
                    condition,
                    Self::page_name(flow, *target)
                )
            }
            RouteStep::Blocked { page } => {
                format!(
                    "page '{}' is not enterable, traversal ended",
                    Self::page_name(flow, *page)
                )
            }
            RouteStep::NoRouteMatched { page } => {
                format!(
                    "no route matched on page '{}', traversal ended",
                    Self::page_name(flow, *page)
                )
            }
            RouteStep::DanglingRoute { page, next_page_id } => {
                format!(
                    "page '{}' routed to unknown page '{}', traversal ended",
                    Self::page_name(flow, *page),
                    next_page_id
                )
            }
        }
    }

    fn page_name(flow: &Flow, index: usize) -> &str {
        flow.pages.get(index).map_or("?", |page| page.name.as_str())
    }
}
