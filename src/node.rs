use crate::direction::Move;
use grid_util::point::Point;
use itertools::Itertools;

/// Stable handle of a [SearchNode] inside a [NodeArena].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A cell reached during search together with how it was reached. `parent` is only ever
/// followed backwards, so the parent links of an arena always form a tree rooted at the start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchNode {
    pub cell: Point,
    pub parent: Option<NodeId>,
    /// Step count for uninformed searches, A* and IDA*; the heuristic priority key for greedy
    /// best-first search.
    pub cost: f64,
    /// The move from the parent's cell into `cell`. [None] for the root.
    pub direction: Option<Move>,
}

impl SearchNode {
    pub fn root(cell: Point) -> SearchNode {
        SearchNode {
            cell,
            parent: None,
            cost: 0.0,
            direction: None,
        }
    }
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Owns every node created during one search run, in creation order.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    /// Walks parent links from `id` up to the root and returns the chain root first.
    pub fn reconstruct(&self, id: NodeId) -> Vec<SearchNode> {
        let mut path = std::iter::successors(Some(self.get(id)), |node| {
            node.parent.map(|p| self.get(p))
        })
        .copied()
        .collect_vec();
        path.reverse();
        path
    }
}
