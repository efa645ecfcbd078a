/*!
# Maximum Flow (Edmonds-Karp)

This module implements the Edmonds-Karp refinement of the Ford-Fulkerson
method: as long as the residual graph contains an augmenting path from source
to sink, find a **shortest** one (fewest arcs) via BFS, push its bottleneck
capacity along it, and repeat. Restricting augmentation to shortest paths
bounds the number of rounds by `O(n * m)`, so the algorithm terminates for
every network with integral capacities; plain Ford-Fulkerson with arbitrary
path selection offers no such bound.

The solver mutates the edge flows of the network in place. After it finishes,
the network holds a valid maximum flow assignment: flow is conserved at every
node except source and sink, and no edge exceeds its capacity.
*/

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use log::debug;

use crate::{
    edge::{Arc, Flow},
    network::FlowNetwork,
};

/// Edmonds-Karp augmenting-path solver over a [`FlowNetwork`].
///
/// The solver borrows the network mutably, so it has exclusive access to the
/// edge flows for the duration of the run. Each call to [`Iterator::next`]
/// performs one augmentation round and yields the bottleneck value pushed in
/// that round; the iterator is exhausted exactly when no augmenting path
/// remains. [`EdmondsKarp::max_flow`] drains the iterator and returns the
/// total.
///
/// All edge flows must be zero when the solver starts. To solve the same
/// network again, call [`FlowNetwork::reset_flows`] first; the solver never
/// resets flows itself.
pub struct EdmondsKarp<'a> {
    network: &'a mut FlowNetwork,
}

impl<'a> EdmondsKarp<'a> {
    /// Creates a new Edmonds-Karp solver for a given network.
    pub fn new(network: &'a mut FlowNetwork) -> Self {
        Self { network }
    }

    /// Performs a BFS from the source over all arcs with positive residual
    /// capacity, visiting every node at most once and recording the arc used
    /// to reach it. Returns the predecessor map if the sink was reached and
    /// `None` otherwise.
    fn bfs(&self) -> Option<Vec<Option<Arc>>> {
        let source = self.network.source();
        let sink = self.network.sink();
        let n = self.network.number_of_nodes() as usize;

        let mut predecessor: Vec<Option<Arc>> = vec![None; n];
        let mut visited = FixedBitSet::with_capacity(n);
        visited.insert(source as usize);

        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            for arc in self.network.arcs_of(u) {
                let v = self.network.arc_head(arc);
                if visited.contains(v as usize) || self.network.residual_capacity(arc) == 0 {
                    continue;
                }

                visited.insert(v as usize);
                predecessor[v as usize] = Some(arc);

                if v == sink {
                    return Some(predecessor);
                }
                queue.push_back(v);
            }
        }

        None
    }

    /// Runs the algorithm to completion and returns the maximum flow value,
    /// i.e. the net flow leaving the source (equivalently, entering the
    /// sink). The final per-edge assignment is left on the network.
    pub fn max_flow(&mut self) -> Flow {
        self.sum()
    }
}

impl Iterator for EdmondsKarp<'_> {
    type Item = Flow;

    /// Performs one augmentation round: BFS for a shortest augmenting path,
    /// backtrack it via the predecessor map, push its bottleneck along every
    /// arc, and yield the bottleneck. Returns `None` once the sink is no
    /// longer reachable in the residual graph, at which point the current
    /// flow is maximum.
    fn next(&mut self) -> Option<Self::Item> {
        let predecessor = self.bfs()?;

        // Backtrack from the sink; the source is the only reached node
        // without a predecessor, so the walk stops there.
        let mut path = Vec::new();
        let mut v = self.network.sink();
        while let Some(arc) = predecessor[v as usize] {
            path.push(arc);
            v = self.network.arc_tail(arc);
        }

        let bottleneck = path
            .iter()
            .map(|&arc| self.network.residual_capacity(arc))
            .min()?;
        for &arc in &path {
            self.network.push_flow(arc, bottleneck);
        }

        debug!(
            "augmenting path with {} arcs and bottleneck {}",
            path.len(),
            bottleneck
        );

        Some(bottleneck)
    }
}
