use std::time::{Duration, Instant};

/// Counters collected during one search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the frontier.
    pub expanded: usize,
    /// Nodes pushed to the frontier, the root included.
    pub discovered: usize,
    /// Largest frontier length seen.
    pub frontier_peak: usize,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Limits for a single search.
///
/// The algorithms terminate on any finite state space without one; a budget only bounds how much
/// work a caller is willing to spend.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    pub max_expansions: Option<usize>,
    pub time_limit: Option<Duration>,
}

impl Budget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn max_expansions(mut self, value: usize) -> Self {
        self.max_expansions = Some(value);
        self
    }

    pub fn time_limit(mut self, value: Duration) -> Self {
        self.time_limit = Some(value);
        self
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_expansions.is_none() && self.time_limit.is_none()
    }

    /// Whether a search that started at `started` and expanded `expanded` nodes may go on. The
    /// time limit is exclusive, a zero limit allows nothing.
    pub fn allows(&self, expanded: usize, started: Instant) -> bool {
        if let Some(max) = self.max_expansions {
            if expanded > max {
                return false;
            }
        }

        match self.time_limit {
            Some(limit) => started.elapsed() < limit,
            None => true,
        }
    }
}
