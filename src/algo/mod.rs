/*!
# Flow Algorithms

This module provides the algorithms operating on a
[`FlowNetwork`](crate::network::FlowNetwork). All algorithms are re-exported
at the top level of this module, so you can simply do:
```rust
use flownet::algo::*;
```
Where possible, algorithms are provided as **iterators**, making it easy to
consume intermediate results (such as individual augmentation rounds) lazily.
*/

mod edmonds_karp;

pub use edmonds_karp::*;
