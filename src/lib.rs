/*! # About

A soft heap ([Kaplan, Tarjan, and Zwick, "Soft Heaps Simplified"][ktz]) and
the linear-time selection algorithm it enables.

A soft heap is a priority queue that intentionally corrupts (raises the key
of) a bounded fraction ε of the items it holds, in exchange for amortized
O(1) insertion and O(log(1/ε)) deletion (an improvement over the Ω(log n)
lower bound that holds for exact comparison-based priority queues). At
ε = 0 it degenerates to an ordinary exact min-heap.

[ktz]: https://en.wikipedia.org/wiki/Soft_heap

# Soft heap

- [`softheap::SoftHeap`]: the mergeable priority queue itself (`insert`,
  `find_min`, `delete_min`, `meld`).
- [`softheap::sort`]: a self-test/demonstration sort built on repeated
  `find_min`/`delete_min` draining.

# Selection

- [`select::select`]: find the k-th smallest element of a slice by
  repeatedly draining a soft heap for an approximate pivot and recursing,
  a linear-time alternative to a full sort.
- [`select::Policy`]: six strategies for picking heap size, corruption,
  and (for two of them) whether to sample or mirror the problem, trading
  pivot accuracy against delete-min calls depending on where the target
  rank falls.
- [`select::Observer`]: an optional hook for external tooling that wants
  to watch a selection run (e.g. a visualizer) without altering it.

# Errors

- [`error::SoftHeapError`] / [`error::SelectError`]: the two typed,
  non-recovering failure surfaces (bad constructor argument, operation
  against an empty/out-of-range input). Internal invariant violations are
  not part of this surface: they panic via `debug_assert!`/`unreachable!`,
  since no caller action could have prevented or can recover from them.
*/

pub mod error;
pub mod select;
pub mod softheap;
