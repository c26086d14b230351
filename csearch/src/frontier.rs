use std::{cmp::Ordering, collections::BinaryHeap};

use crate::node::{Node, NodeId};

/// Container of discovered nodes that still wait to be expanded.
///
/// Frontiers only hold ids, the nodes themselves live in the search's arena.
pub trait Frontier {
    /// Adds a node. `node` is the record behind `id`, used by frontiers that order by priority.
    fn push<S>(&mut self, id: NodeId, node: &Node<S>);

    /// Removes the next node to expand.
    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out.
#[derive(Debug, Default, Clone)]
pub struct Stack {
    items: Vec<NodeId>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for Stack {
    fn push<S>(&mut self, id: NodeId, _: &Node<S>) {
        self.items.push(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Heap slot for one node. Its ordering is the node comparison the queue uses: strict less-than on
/// [`Node::priority`], then insertion sequence.
#[derive(Debug, Clone, Copy)]
struct Entry {
    priority: f64,
    seq: u64,
    id: NodeId,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so both keys are reversed: lowest priority first, then
        // earliest insertion.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap on `cost + heuristic`. Equal priorities come out in insertion order.
#[derive(Debug, Default, Clone)]
pub struct PriorityQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityQueue {
    fn push<S>(&mut self, id: NodeId, node: &Node<S>) {
        self.heap.push(Entry {
            priority: node.priority(),
            seq: self.next_seq,
            id,
        });
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
