/*! Error types for the soft heap and the selection driver.

Both subsystems surface exactly two kinds of failure: a bad argument handed
in by the caller (an ε outside `[0, 1)`, a rank `k` outside `[1, n]`), or an
operation attempted against a precondition the caller should have checked
(`find_min`/`delete_min` on an empty heap). Neither is retried internally;
see the crate-level docs for the rationale. Internal invariant breakage
(the heap losing count) is not represented here: it fails loudly via
`debug_assert!`/`unreachable!` instead, since no caller action could have
avoided or can recover from it.
*/

use thiserror::Error;

/// Errors produced by [`crate::softheap::SoftHeap`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SoftHeapError {
    /// `find_min`/`delete_min` called with no items present.
    #[error("soft heap is empty")]
    EmptyHeap,

    /// Constructor called with ε outside the valid range `[0, 1)`.
    #[error("eps {0} is outside the valid range [0, 1)")]
    InvalidEps(f64),
}

/// Errors produced by [`crate::select::select`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SelectError {
    /// `k` fell outside `[1, n]` for an input of length `n`.
    #[error("rank {k} is invalid for a slice of length {n}")]
    InvalidRank { k: usize, n: usize },

    /// `select` was called on an empty slice.
    #[error("cannot select from an empty slice")]
    Empty,
}
