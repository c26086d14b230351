mod a_star;
mod depth_first_search;

use std::{fmt::Debug, hash::Hash, time::Instant};

use log::{debug, trace, warn};
use thiserror::Error;

use crate::{
    heuristic::Heuristic,
    node::{Node, NodeArena, NodeId},
    progress::{Budget, SearchStats},
};

pub use a_star::AStar;
pub use depth_first_search::DepthFirstSearch;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search budget exhausted after expanding {expanded} nodes")]
    BudgetExhausted { expanded: usize },
}

/// Hook called by the algorithms while they run. Every method does nothing by default.
pub trait SearchObserver<S> {
    /// `state` was popped from the frontier, `explored` states are known at this point.
    fn on_expand(&mut self, _state: &S, _explored: usize) {}

    /// `state` was pushed to the frontier with the given path cost.
    fn on_discover(&mut self, _state: &S, _cost: f64) {}
}

impl<S> SearchObserver<S> for () {}

/// Observer writing every step to the `trace` log level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl<S: Debug> SearchObserver<S> for LogObserver {
    fn on_expand(&mut self, state: &S, explored: usize) {
        trace!("expand {:?} ({} explored)", state, explored);
    }

    fn on_discover(&mut self, state: &S, cost: f64) {
        trace!("discover {:?} at cost {}", state, cost);
    }
}

/// Bookkeeping shared by the algorithms during one run: the budget, statistics and observer.
pub struct SearchContext<'a, O> {
    budget: Budget,
    started: Instant,
    stats: SearchStats,
    observer: &'a mut O,
}

impl<'a, O> SearchContext<'a, O> {
    pub fn new(budget: Budget, observer: &'a mut O) -> Self {
        Self {
            budget,
            started: Instant::now(),
            stats: SearchStats::new(),
            observer,
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Counts one popped node, fails once the budget is spent.
    pub fn expand<S>(&mut self, state: &S, explored: usize) -> Result<(), SearchError>
    where
        O: SearchObserver<S>,
    {
        if !self.budget.allows(self.stats.expanded + 1, self.started) {
            return Err(SearchError::BudgetExhausted {
                expanded: self.stats.expanded,
            });
        }

        self.stats.expanded += 1;

        self.observer.on_expand(state, explored);
        Ok(())
    }

    /// Counts one pushed node.
    pub fn discover<S>(&mut self, node: &Node<S>, frontier_len: usize)
    where
        O: SearchObserver<S>,
    {
        self.stats.discovered += 1;
        self.stats.frontier_peak = self.stats.frontier_peak.max(frontier_len);
        self.observer.on_discover(&node.state, node.cost);
    }
}

/// A search strategy. Given a start state, a goal predicate and a move generator it either finds a
/// goal node, proves there is none, or runs out of budget.
pub trait SearchAlgorithm<S> {
    fn name(&self) -> &'static str;

    fn search<G, M, I, O>(
        &mut self,
        initial: S,
        goal_test: G,
        moves: M,
        ctx: &mut SearchContext<'_, O>,
    ) -> Result<Option<Solution<S>>, SearchError>
    where
        G: FnMut(&S) -> bool,
        M: FnMut(&S) -> I,
        I: IntoIterator<Item = S>,
        O: SearchObserver<S>;
}

/// Terminal node of a successful search, together with the whole search tree it belongs to.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    arena: NodeArena<S>,
    goal: NodeId,
    stats: SearchStats,
}

impl<S> Solution<S> {
    pub fn new(arena: NodeArena<S>, goal: NodeId, stats: SearchStats) -> Self {
        Self { arena, goal, stats }
    }

    pub fn node(&self) -> &Node<S> {
        &self.arena[self.goal]
    }

    pub fn state(&self) -> &S {
        &self.node().state
    }

    pub fn cost(&self) -> f64 {
        self.node().cost
    }

    pub fn parent(&self) -> Option<&Node<S>> {
        self.node().parent.map(|id| &self.arena[id])
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of moves from the start to the goal.
    pub fn path_len(&self) -> usize {
        self.arena.depth(self.goal)
    }

    /// States from the start to the goal, both included.
    pub fn path(&self) -> Vec<S>
    where
        S: Clone,
    {
        let mut path: Vec<S> = self
            .arena
            .ancestors(self.goal)
            .map(|node| node.state.clone())
            .collect();
        path.reverse();
        path
    }
}

/// Walks the parent links of the solution's goal node back to the root and returns the states in
/// start to goal order.
pub fn select_path<S: Clone>(solution: &Solution<S>) -> Vec<S> {
    solution.path()
}

/// Runs search algorithms under a [`Budget`] and reports to an observer.
#[derive(Debug, Default)]
pub struct Searcher<O = ()> {
    budget: Budget,
    observer: O,
    last_stats: SearchStats,
}

impl Searcher<()> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O> Searcher<O> {
    pub fn with_budget(mut self, budget: Budget) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_observer<P>(self, observer: P) -> Searcher<P> {
        Searcher {
            budget: self.budget,
            observer,
            last_stats: self.last_stats,
        }
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Statistics of the most recent run, also available when it failed.
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    pub fn run<S, A, G, M, I>(
        &mut self,
        algorithm: &mut A,
        initial: S,
        goal_test: G,
        moves: M,
    ) -> Result<Option<Solution<S>>, SearchError>
    where
        A: SearchAlgorithm<S>,
        G: FnMut(&S) -> bool,
        M: FnMut(&S) -> I,
        I: IntoIterator<Item = S>,
        O: SearchObserver<S>,
    {
        let name = algorithm.name();
        debug!("Starting {} search", name);

        let mut ctx = SearchContext::new(self.budget, &mut self.observer);
        let result = algorithm.search(initial, goal_test, moves, &mut ctx);
        let stats = ctx.stats();
        self.last_stats = stats;

        match &result {
            Ok(Some(solution)) => debug!(
                "{}: goal reached in {} moves, {} nodes expanded",
                name,
                solution.path_len(),
                stats.expanded
            ),
            Ok(None) => debug!(
                "{}: no solution, {} nodes expanded",
                name, stats.expanded
            ),
            Err(err) => warn!("{}: {}", name, err),
        }

        result
    }

    pub fn dfs<S, G, M, I>(
        &mut self,
        initial: S,
        goal_test: G,
        moves: M,
    ) -> Result<Option<Solution<S>>, SearchError>
    where
        S: Clone + Eq + Hash,
        G: FnMut(&S) -> bool,
        M: FnMut(&S) -> I,
        I: IntoIterator<Item = S>,
        O: SearchObserver<S>,
    {
        self.run(&mut DepthFirstSearch, initial, goal_test, moves)
    }

    pub fn a_star<S, G, M, I, H>(
        &mut self,
        initial: S,
        goal_test: G,
        moves: M,
        heuristic: H,
    ) -> Result<Option<Solution<S>>, SearchError>
    where
        S: Clone + Eq + Hash,
        G: FnMut(&S) -> bool,
        M: FnMut(&S) -> I,
        I: IntoIterator<Item = S>,
        H: Heuristic<S>,
        O: SearchObserver<S>,
    {
        self.run(&mut AStar::new(heuristic), initial, goal_test, moves)
    }
}

/// Depth-first search from `initial`. `None` when no reachable state satisfies `goal_test`.
///
/// Every state is expanded at most once. The path found is not necessarily the shortest one.
pub fn dfs<S, G, M, I>(initial: S, goal_test: G, moves: M) -> Option<Solution<S>>
where
    S: Clone + Eq + Hash,
    G: FnMut(&S) -> bool,
    M: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    // an unlimited budget never runs out
    Searcher::new()
        .dfs(initial, goal_test, moves)
        .unwrap_or_default()
}

/// A* search from `initial` with unit move costs. `None` when no reachable state satisfies
/// `goal_test`.
///
/// With an admissible and consistent heuristic the returned path is a shortest one.
///
/// # Panics
/// If the heuristic returns a negative number or NaN.
pub fn a_star<S, G, M, I, H>(initial: S, goal_test: G, moves: M, heuristic: H) -> Option<Solution<S>>
where
    S: Clone + Eq + Hash,
    G: FnMut(&S) -> bool,
    M: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
    H: Heuristic<S>,
{
    Searcher::new()
        .a_star(initial, goal_test, moves, heuristic)
        .unwrap_or_default()
}
