pub mod formatter;

pub use formatter::TraceFormatter;

/// One event on the route a traversal session took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteStep {
    /// A page became the active page.
    Entered { page: usize },
    /// A post-condition matched and routed towards `target`.
    Branched {
        page: usize,
        condition_index: usize,
        target: usize,
    },
    /// The candidate page's pre-conditions did not hold; traversal ended.
    Blocked { page: usize },
    /// No post-condition on the page matched; traversal ended.
    NoRouteMatched { page: usize },
    /// A post-condition matched but its target id names no page.
    DanglingRoute { page: usize, next_page_id: String },
}

/// The recorded route of one session, in the order it happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTrace {
    steps: Vec<RouteStep>,
}

impl RouteTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, step: RouteStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[RouteStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
