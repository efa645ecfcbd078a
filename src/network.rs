/*!
# Flow Networks

A [`FlowNetwork`] is a directed graph with a fixed number of nodes, a
designated source and sink, and capacitated edges. It owns a flat edge table
plus, per node, the list of [`Arc`]s incident on it: every stored edge is
registered at its tail as a [`Direction::Forward`] arc and at its head as a
[`Direction::Reverse`] arc, which together form the residual graph without
storing any reverse edges.

The network answers residual-capacity queries and applies flow pushes; the
actual max-flow computation lives in [`EdmondsKarp`](crate::algo::EdmondsKarp).
*/

use std::fmt::{Debug, Display};

use thiserror::Error;

use crate::{algo::EdmondsKarp, edge::*, node::*};

/// Errors raised when constructing a [`FlowNetwork`] or inserting edges.
///
/// All variants are caller-input problems reported synchronously at the
/// offending call; none are transient. A failed construction cannot be
/// repaired, but a network stays usable after a rejected edge insertion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    /// A network needs room for a source and a distinct sink
    #[error("a flow network needs at least two nodes, got {0}")]
    TooFewNodes(NumNodes),

    /// A referenced node does not exist
    #[error("node {node} is out of range for a network with {num_nodes} nodes")]
    NodeOutOfRange {
        /// The offending node
        node: Node,
        /// Number of nodes in the network
        num_nodes: NumNodes,
    },

    /// Source and sink coincide
    #[error("source and sink must be distinct, but both are {0}")]
    SourceIsSink(Node),

    /// A self-loop can never carry flow
    #[error("self-loop at node {0} is not allowed")]
    SelfLoop(Node),
}

/// A directed capacitated graph with a designated source and sink.
///
/// Nodes are `0..n`; edges are added via [`FlowNetwork::add_edge`] and
/// identified by the stable [`EdgeId`] it returns. Parallel edges between the
/// same ordered pair are permitted and tracked independently.
#[derive(Clone)]
pub struct FlowNetwork {
    n: NumNodes,
    source: Node,
    sink: Node,
    edges: Vec<FlowEdge>,
    adjacency: Vec<Vec<Arc>>,
}

impl FlowNetwork {
    /// Creates an empty network with `n` nodes and the given source and sink.
    ///
    /// # Errors
    /// Fails if `n < 2`, if `source` or `sink` is not in `0..n`, or if
    /// `source == sink`.
    pub fn new(n: NumNodes, source: Node, sink: Node) -> Result<Self, NetworkError> {
        if n < 2 {
            return Err(NetworkError::TooFewNodes(n));
        }

        for node in [source, sink] {
            if node >= n {
                return Err(NetworkError::NodeOutOfRange { node, num_nodes: n });
            }
        }

        if source == sink {
            return Err(NetworkError::SourceIsSink(source));
        }

        Ok(Self {
            n,
            source,
            sink,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); n as usize],
        })
    }

    /// Returns the number of nodes of the network
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the number of stored (forward) edges of the network
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Returns the source node
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the sink node
    pub fn sink(&self) -> Node {
        self.sink
    }

    /// Inserts a directed edge from `u` to `v` with the given capacity and
    /// zero initial flow. Returns the stable id of the new edge, under which
    /// its final flow can be read back after solving.
    ///
    /// The edge is registered at `u` as a forward arc and at `v` as a reverse
    /// arc. Inserting the same ordered pair again creates an independent
    /// parallel edge.
    ///
    /// # Errors
    /// Fails if `u` or `v` is not in `0..n` or if `u == v`. The network is
    /// left untouched in that case and stays usable.
    pub fn add_edge(&mut self, u: Node, v: Node, capacity: Flow) -> Result<EdgeId, NetworkError> {
        for node in [u, v] {
            if node >= self.n {
                return Err(NetworkError::NodeOutOfRange {
                    node,
                    num_nodes: self.n,
                });
            }
        }

        if u == v {
            return Err(NetworkError::SelfLoop(u));
        }

        let id = self.edges.len() as EdgeId;
        self.edges.push(FlowEdge::new(u, v, capacity));
        self.adjacency[u as usize].push(Arc {
            edge: id,
            dir: Direction::Forward,
        });
        self.adjacency[v as usize].push(Arc {
            edge: id,
            dir: Direction::Reverse,
        });

        Ok(id)
    }

    /// Returns the stored edge with the given id.
    /// ** Panics if `id` is not an id returned by [`FlowNetwork::add_edge`] **
    pub fn edge(&self, id: EdgeId) -> &FlowEdge {
        &self.edges[id as usize]
    }

    /// Returns an iterator over all stored edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &FlowEdge> + '_ {
        self.edges.iter()
    }

    /// Returns an iterator over the arcs incident on `u` in the residual
    /// graph, regardless of their current residual capacity.
    /// ** Panics if `u >= n` **
    pub fn arcs_of(&self, u: Node) -> impl Iterator<Item = Arc> + '_ {
        self.adjacency[u as usize].iter().copied()
    }

    /// Returns the node an arc leads to: the head of the edge for forward
    /// arcs, its tail for reverse arcs.
    pub fn arc_head(&self, arc: Arc) -> Node {
        let edge = self.edge(arc.edge);
        match arc.dir {
            Direction::Forward => edge.to(),
            Direction::Reverse => edge.from(),
        }
    }

    /// Returns the node an arc leaves from
    pub fn arc_tail(&self, arc: Arc) -> Node {
        let edge = self.edge(arc.edge);
        match arc.dir {
            Direction::Forward => edge.from(),
            Direction::Reverse => edge.to(),
        }
    }

    /// Returns the residual capacity of an arc: `capacity - flow` for forward
    /// arcs, `flow` for reverse arcs.
    pub fn residual_capacity(&self, arc: Arc) -> Flow {
        self.edge(arc.edge).residual_capacity(arc.dir)
    }

    /// Routes `amount` additional units of flow across an arc, increasing the
    /// underlying edge flow for forward arcs and decreasing it for reverse
    /// arcs.
    ///
    /// Callers must ensure `amount <= residual_capacity(arc)`; this is an
    /// internal invariant of augmenting-path construction, not a runtime
    /// error.
    pub fn push_flow(&mut self, arc: Arc, amount: Flow) {
        self.edges[arc.edge as usize].push(arc.dir, amount);
    }

    /// Resets the flow of every edge to zero, restoring the clean state
    /// required before handing the network to a solver again.
    pub fn reset_flows(&mut self) {
        for edge in &mut self.edges {
            edge.reset();
        }
    }

    /// Computes the maximum flow from source to sink and returns its value.
    /// The final per-edge flow assignment can be read back via
    /// [`FlowNetwork::edge`] / [`FlowNetwork::edges`].
    ///
    /// All edge flows must be zero when this is called; rerun on the same
    /// network only after [`FlowNetwork::reset_flows`].
    pub fn max_flow(&mut self) -> Flow {
        EdmondsKarp::new(self).max_flow()
    }
}

impl Display for FlowNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "nodes: {}, source: {}, sink: {}",
            self.n, self.source, self.sink
        )?;
        for edge in &self.edges {
            writeln!(f, "{edge}")?;
        }
        Ok(())
    }
}

impl Debug for FlowNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_construction() {
        assert_eq!(
            FlowNetwork::new(0, 0, 0).unwrap_err(),
            NetworkError::TooFewNodes(0)
        );
        assert_eq!(
            FlowNetwork::new(1, 0, 0).unwrap_err(),
            NetworkError::TooFewNodes(1)
        );
        assert_eq!(
            FlowNetwork::new(3, 3, 1).unwrap_err(),
            NetworkError::NodeOutOfRange {
                node: 3,
                num_nodes: 3
            }
        );
        assert_eq!(
            FlowNetwork::new(3, 0, 7).unwrap_err(),
            NetworkError::NodeOutOfRange {
                node: 7,
                num_nodes: 3
            }
        );
        assert_eq!(
            FlowNetwork::new(3, 1, 1).unwrap_err(),
            NetworkError::SourceIsSink(1)
        );
    }

    #[test]
    fn valid_construction() {
        let network = FlowNetwork::new(4, 0, 3).unwrap();
        assert_eq!(network.number_of_nodes(), 4);
        assert_eq!(network.number_of_edges(), 0);
        assert_eq!(network.source(), 0);
        assert_eq!(network.sink(), 3);
    }

    #[test]
    fn invalid_edge_insertion() {
        let mut network = FlowNetwork::new(3, 0, 2).unwrap();
        assert_eq!(
            network.add_edge(0, 3, 1).unwrap_err(),
            NetworkError::NodeOutOfRange {
                node: 3,
                num_nodes: 3
            }
        );
        assert_eq!(
            network.add_edge(1, 1, 1).unwrap_err(),
            NetworkError::SelfLoop(1)
        );

        // rejected insertions leave the network usable
        assert_eq!(network.number_of_edges(), 0);
        assert!(network.add_edge(0, 1, 1).is_ok());
        assert_eq!(network.number_of_edges(), 1);
    }

    #[test]
    fn edge_ids_are_stable_and_parallel_edges_are_independent() {
        let mut network = FlowNetwork::new(2, 0, 1).unwrap();
        let first = network.add_edge(0, 1, 5).unwrap();
        let second = network.add_edge(0, 1, 7).unwrap();

        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(network.number_of_edges(), 2);
        assert_eq!(network.edge(first).capacity(), 5);
        assert_eq!(network.edge(second).capacity(), 7);
    }

    #[test]
    fn residual_capacities_and_pushes() {
        let mut network = FlowNetwork::new(2, 0, 1).unwrap();
        let id = network.add_edge(0, 1, 5).unwrap();

        let forward = Arc {
            edge: id,
            dir: Direction::Forward,
        };
        let reverse = Arc {
            edge: id,
            dir: Direction::Reverse,
        };

        assert_eq!(network.residual_capacity(forward), 5);
        assert_eq!(network.residual_capacity(reverse), 0);

        network.push_flow(forward, 3);
        assert_eq!(network.edge(id).flow(), 3);
        assert_eq!(network.residual_capacity(forward), 2);
        assert_eq!(network.residual_capacity(reverse), 3);

        network.push_flow(reverse, 2);
        assert_eq!(network.edge(id).flow(), 1);
        assert_eq!(network.residual_capacity(forward), 4);
        assert_eq!(network.residual_capacity(reverse), 1);
    }

    #[test]
    fn arcs_of_registers_both_endpoints() {
        let mut network = FlowNetwork::new(3, 0, 2).unwrap();
        let id = network.add_edge(0, 1, 1).unwrap();

        let at_tail: Vec<_> = network.arcs_of(0).collect();
        let at_head: Vec<_> = network.arcs_of(1).collect();

        assert_eq!(
            at_tail,
            [Arc {
                edge: id,
                dir: Direction::Forward
            }]
        );
        assert_eq!(
            at_head,
            [Arc {
                edge: id,
                dir: Direction::Reverse
            }]
        );

        assert_eq!(network.arc_head(at_tail[0]), 1);
        assert_eq!(network.arc_tail(at_tail[0]), 0);
        assert_eq!(network.arc_head(at_head[0]), 0);
        assert_eq!(network.arc_tail(at_head[0]), 1);
    }

    #[test]
    fn reset_flows_restores_clean_state() {
        let mut network = FlowNetwork::new(2, 0, 1).unwrap();
        let id = network.add_edge(0, 1, 5).unwrap();
        network.push_flow(
            Arc {
                edge: id,
                dir: Direction::Forward,
            },
            4,
        );

        network.reset_flows();
        assert!(network.edges().all(|e| e.flow() == 0));
    }

    #[test]
    fn display_lists_all_edges() {
        let mut network = FlowNetwork::new(3, 0, 2).unwrap();
        network.add_edge(0, 1, 4).unwrap();
        network.add_edge(1, 2, 2).unwrap();

        let out = network.to_string();
        assert!(out.starts_with("nodes: 3, source: 0, sink: 2"));
        assert!(out.contains("(0,1): 0/4"));
        assert!(out.contains("(1,2): 0/2"));
    }

    #[test]
    fn debug_delegates_to_display() {
        let mut network = FlowNetwork::new(2, 0, 1).unwrap();
        network.add_edge(0, 1, 3).unwrap();

        assert_eq!(format!("{network:?}"), network.to_string());
    }
}
