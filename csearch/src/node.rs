use std::ops;

/// Index of a [`Node`] inside the [`NodeArena`] of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One record of the search tree.
///
/// Nodes are never modified after creation. The parent is referenced by id, so a node is only
/// meaningful together with the arena it was allocated in. Two nodes with the same state are still
/// distinct records, the tree is not deduplicated by state.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<S> {
    pub state: S,
    pub parent: Option<NodeId>,
    pub cost: f64,
    pub heuristic: f64,
}

impl<S> Node<S> {
    /// Node with zero cost and zero heuristic, what DFS creates.
    pub fn new(state: S, parent: Option<NodeId>) -> Self {
        Self::with_cost(state, parent, 0.0, 0.0)
    }

    pub fn with_cost(state: S, parent: Option<NodeId>, cost: f64, heuristic: f64) -> Self {
        Self {
            state,
            parent,
            cost,
            heuristic,
        }
    }

    /// Total priority, `cost + heuristic`.
    pub fn priority(&self) -> f64 {
        self.cost + self.heuristic
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Growable storage owning every node created during one search call.
///
/// Nothing is freed until the arena itself is dropped, so parent ids stay valid for path
/// reconstruction.
#[derive(Debug, Clone)]
pub struct NodeArena<S> {
    nodes: Vec<Node<S>>,
}

impl<S> NodeArena<S> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Stores the node and returns its id.
    ///
    /// # Panics
    /// If the parent id does not belong to this arena.
    pub fn alloc(&mut self, node: Node<S>) -> NodeId {
        if let Some(parent) = node.parent {
            assert!(parent.0 < self.nodes.len(), "parent {parent:?} is not in the arena");
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<S>> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walks from `id` up to the root, `id` itself first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, S> {
        Ancestors {
            arena: self,
            next: Some(id),
        }
    }

    /// Number of edges between `id` and the root.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count().saturating_sub(1)
    }
}

impl<S> Default for NodeArena<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ops::Index<NodeId> for NodeArena<S> {
    type Output = Node<S>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

pub struct Ancestors<'a, S> {
    arena: &'a NodeArena<S>,
    next: Option<NodeId>,
}

impl<'a, S> Iterator for Ancestors<'a, S> {
    type Item = &'a Node<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.next?)?;
        self.next = node.parent;
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_is_cost_plus_heuristic() {
        assert_eq!(Node::with_cost('a', None, 1.0, 2.0).priority(), 3.0);
        assert_eq!(Node::with_cost('b', None, 3.0, 0.0).priority(), 3.0);
        assert_eq!(Node::new('c', None).priority(), 0.0);
    }

    #[test]
    fn root_has_no_parent_and_zero_cost() {
        let root = Node::new(0, None);
        assert!(root.is_root());
        assert_eq!(root.cost, 0.0);
        assert_eq!(root.heuristic, 0.0);
    }

    #[test]
    fn ancestors_walk_to_root() {
        let mut arena = NodeArena::new();
        let root = arena.alloc(Node::new("a", None));
        let mid = arena.alloc(Node::new("b", Some(root)));
        let leaf = arena.alloc(Node::new("c", Some(mid)));
        // same state, different parent: still a separate node
        let other = arena.alloc(Node::new("c", Some(root)));

        let states: Vec<_> = arena.ancestors(leaf).map(|n| n.state).collect();
        assert_eq!(states, vec!["c", "b", "a"]);
        assert_eq!(arena.depth(leaf), 2);
        assert_eq!(arena.depth(other), 1);
        assert_eq!(arena.depth(root), 0);
        assert_ne!(leaf, other);
    }

    #[test]
    #[should_panic]
    fn foreign_parent_is_rejected() {
        let mut arena = NodeArena::new();
        arena.alloc(Node::new(1, Some(NodeId(5))));
    }
}
