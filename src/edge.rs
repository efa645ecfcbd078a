/*!
# Edge Representation

Edges are directed, carry an integer capacity, and track the flow currently
routed through them. Only the forward edge of each pair is stored: its
residual counterpart is addressed by traversing the same [`EdgeId`] in
[`Direction::Reverse`], so the "reverse edge" is a traversal flag rather than
a second stored object.
*/

use std::fmt::{Debug, Display};

use crate::node::Node;

/// Amount of flow or capacity on an edge.
///
/// Unsigned, so capacities are non-negative by construction and all flow
/// arithmetic is exact.
pub type Flow = u64;

/// Stable index of an edge in the flat edge table of a network.
pub type EdgeId = u32;

/// We limit the number of edges to `2^32 - 1`.
/// CHANGE it to `u64` if this does not suffice (which it usually should).
pub type NumEdges = u32;

/// Direction in which a stored edge is traversed in the residual graph.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    /// Along the edge, consuming unused capacity
    Forward,
    /// Against the edge, undoing already-routed flow
    Reverse,
}

/// One traversable step of the residual graph: a stored edge together with
/// the direction in which it is crossed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Arc {
    /// Index of the underlying stored edge
    pub edge: EdgeId,
    /// Direction in which the edge is crossed
    pub dir: Direction,
}

/// A directed edge with a capacity and the flow currently routed through it.
///
/// Invariant: `0 <= flow <= capacity` at all times.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct FlowEdge {
    from: Node,
    to: Node,
    capacity: Flow,
    flow: Flow,
}

impl FlowEdge {
    pub(crate) fn new(from: Node, to: Node, capacity: Flow) -> Self {
        Self {
            from,
            to,
            capacity,
            flow: 0,
        }
    }

    /// Returns the tail of the edge, i.e. the node it leaves
    pub fn from(&self) -> Node {
        self.from
    }

    /// Returns the head of the edge, i.e. the node it points to
    pub fn to(&self) -> Node {
        self.to
    }

    /// Returns the capacity of the edge
    pub fn capacity(&self) -> Flow {
        self.capacity
    }

    /// Returns the flow currently routed through the edge
    pub fn flow(&self) -> Flow {
        self.flow
    }

    /// Returns the remaining capacity when crossing the edge in a given
    /// direction: unused capacity in [`Direction::Forward`], already-routed
    /// (and thus undoable) flow in [`Direction::Reverse`].
    pub fn residual_capacity(&self, dir: Direction) -> Flow {
        match dir {
            Direction::Forward => self.capacity - self.flow,
            Direction::Reverse => self.flow,
        }
    }

    /// Routes `amount` additional units across the edge in the given
    /// direction. Callers must ensure `amount <= residual_capacity(dir)`.
    pub(crate) fn push(&mut self, dir: Direction, amount: Flow) {
        debug_assert!(amount <= self.residual_capacity(dir));
        match dir {
            Direction::Forward => self.flow += amount,
            Direction::Reverse => self.flow -= amount,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.flow = 0;
    }
}

impl Display for FlowEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{}): {}/{}",
            self.from, self.to, self.flow, self.capacity
        )
    }
}

impl Debug for FlowEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}
