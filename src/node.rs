/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
This (1) saves space compared to `usize`/`u64` and (2) lets node values double
directly as indices into the per-node adjacency vectors of a network.
*/

/// Nodes can be any unsigned integer from `0` to `n - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a network!
pub type NumNodes = Node;
