use std::hash::Hash;

use super::{SearchAlgorithm, SearchContext, SearchError, SearchObserver, Solution};
use crate::{
    collections::HashMap,
    frontier::{Frontier, PriorityQueue},
    heuristic::Heuristic,
    node::{Node, NodeArena},
};

/// Cost of a single move. Every edge weighs the same.
const MOVE_COST: f64 = 1.0;

/// Best-first search ordered by `cost + heuristic`.
///
/// Keeps the best known cost of every seen state and pushes a state again whenever a strictly
/// cheaper path to it turns up.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar<H> {
    heuristic: H,
}

impl<H> AStar<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }

    fn estimate<S>(&mut self, state: &S) -> f64
    where
        H: Heuristic<S>,
    {
        let value = self.heuristic.estimate(state);
        assert!(
            value >= 0.0,
            "heuristic must return a non-negative number, got {value}"
        );
        value
    }
}

impl<S, H> SearchAlgorithm<S> for AStar<H>
where
    S: Clone + Eq + Hash,
    H: Heuristic<S>,
{
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search<G, M, I, O>(
        &mut self,
        initial: S,
        mut goal_test: G,
        mut moves: M,
        ctx: &mut SearchContext<'_, O>,
    ) -> Result<Option<Solution<S>>, SearchError>
    where
        G: FnMut(&S) -> bool,
        M: FnMut(&S) -> I,
        I: IntoIterator<Item = S>,
        O: SearchObserver<S>,
    {
        let mut arena = NodeArena::new();
        let mut frontier = PriorityQueue::new();
        let mut best_cost = HashMap::new();

        best_cost.insert(initial.clone(), 0.0);
        let estimate = self.estimate(&initial);
        let root = arena.alloc(Node::with_cost(initial, None, 0.0, estimate));
        frontier.push(root, &arena[root]);
        ctx.discover(&arena[root], frontier.len());

        while let Some(current) = frontier.pop() {
            let Node { state, cost, .. } = &arena[current];
            let (state, cost) = (state.clone(), *cost);
            ctx.expand(&state, best_cost.len())?;

            if goal_test(&state) {
                return Ok(Some(Solution::new(arena, current, ctx.stats())));
            }

            for next in moves(&state) {
                let new_cost = cost + MOVE_COST;
                let improves = best_cost.get(&next).map_or(true, |&known| known > new_cost);
                if !improves {
                    continue;
                }

                best_cost.insert(next.clone(), new_cost);
                let estimate = self.estimate(&next);
                let id = arena.alloc(Node::with_cost(next, Some(current), new_cost, estimate));
                frontier.push(id, &arena[id]);
                ctx.discover(&arena[id], frontier.len());
            }
        }

        Ok(None)
    }
}
