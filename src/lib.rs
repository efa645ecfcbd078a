/*!
`flownet` is a small library for computing **maximum s-t flows** in directed,
capacitated graphs using the Edmonds-Karp algorithm.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of
nodes in the network, so node values double directly as indices into the
per-node adjacency structure. **Edges** live in a flat table and are
identified by a stable [`EdgeId`](crate::edge::EdgeId); each edge carries an
integer capacity and the flow currently routed through it. The residual
counterpart of an edge is never stored: it is addressed by traversing the
same id with a [`Direction`](crate::edge::Direction) flag, so residual
capacities stay consistent with edge flows by construction.

All capacities and flows are unsigned integers, so results are exact and
reproducible; there is no floating point anywhere.

# Usage

Build a [`FlowNetwork`](crate::network::FlowNetwork) with a fixed node count,
source, and sink, populate it with edges, and solve:

```
use flownet::prelude::*;

let mut network = FlowNetwork::new(4, 0, 3)?;
network.add_edge(0, 1, 3)?;
network.add_edge(1, 3, 2)?;
network.add_edge(0, 2, 2)?;
network.add_edge(2, 3, 3)?;
network.add_edge(1, 2, 1)?;

assert_eq!(network.max_flow(), 5);
# Ok::<(), NetworkError>(())
```

After solving, the network holds the final flow assignment; read it back per
edge via [`FlowNetwork::edge`](crate::network::FlowNetwork::edge) using the
ids returned by `add_edge`. To solve the same network a second time, reset
the flows first with
[`FlowNetwork::reset_flows`](crate::network::FlowNetwork::reset_flows) — the
solver never does this implicitly.

For finer control (e.g. consuming individual augmentation rounds lazily), use
[`EdmondsKarp`](crate::algo::EdmondsKarp) from the [`algo`] module directly.
*/

pub mod algo;
pub mod edge;
pub mod network;
pub mod node;

/// `flownet::prelude` includes definitions for nodes, edges, and the flow
/// network itself.
pub mod prelude {
    pub use super::{edge::*, network::*, node::*};
}
