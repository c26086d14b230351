use std::hash::Hash;

use super::{SearchAlgorithm, SearchContext, SearchError, SearchObserver, Solution};
use crate::{
    collections::HashSet,
    frontier::{Frontier, Stack},
    node::{Node, NodeArena},
};

/// Depth-first search on a stack frontier.
///
/// A state is marked explored as soon as it is pushed, so it is never pushed twice. Neighbours are
/// pushed in the order the move generator yields them, which means the last one is expanded first.
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirstSearch;

impl<S> SearchAlgorithm<S> for DepthFirstSearch
where
    S: Clone + Eq + Hash,
{
    fn name(&self) -> &'static str {
        "DFS"
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
        let mut frontier = Stack::new();
        let mut explored = HashSet::new();

        explored.insert(initial.clone());
        let root = arena.alloc(Node::new(initial, None));
        frontier.push(root, &arena[root]);
        ctx.discover(&arena[root], frontier.len());

        while let Some(current) = frontier.pop() {
            let state = arena[current].state.clone();
            ctx.expand(&state, explored.len())?;

            if goal_test(&state) {
                return Ok(Some(Solution::new(arena, current, ctx.stats())));
            }

            for next in moves(&state) {
                if explored.contains(&next) {
                    continue;
                }

                explored.insert(next.clone());
                let id = arena.alloc(Node::new(next, Some(current)));
                frontier.push(id, &arena[id]);
                ctx.discover(&arena[id], frontier.len());
            }
        }

        Ok(None)
    }
}
