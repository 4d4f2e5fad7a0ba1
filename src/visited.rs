use crate::node::NodeId;
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Cells that already have a node, remembered in the order they were first reached.
///
/// The first node logged for a cell owns it for the rest of the run: a cheaper route found
/// later is never substituted, so the informed searches do not reopen cells.
#[derive(Clone, Debug, Default)]
pub struct VisitedSet {
    cells: FxIndexMap<Point, NodeId>,
}

impl VisitedSet {
    pub fn new() -> VisitedSet {
        VisitedSet::default()
    }
    pub fn contains(&self, cell: &Point) -> bool {
        self.cells.contains_key(cell)
    }
    /// Logs `cell` as reached through `node`. Returns [false] and leaves the set unchanged if
    /// the cell was already logged.
    pub fn insert(&mut self, cell: Point, node: NodeId) -> bool {
        match self.cells.entry(cell) {
            Occupied(_) => false,
            Vacant(e) => {
                e.insert(node);
                true
            }
        }
    }
    pub fn node(&self, cell: &Point) -> Option<NodeId> {
        self.cells.get(cell).copied()
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn clear(&mut self) {
        self.cells.clear();
    }
    /// Node handles in the order their cells were first reached.
    pub fn log(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.cells.values().copied()
    }
}
