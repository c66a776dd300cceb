//! Error types for the windowing engine.
//!
//! Structural mutations are total over their documented input domains; the
//! variants here mark programming-contract violations (an insert or removal
//! aimed outside the store), surfaced as typed errors rather than panics so
//! callers compose them with `?`. Stale fetch results are NOT errors - they
//! are reported as a no-op outcome by the history owner.

use thiserror::Error;

/// Contract violations raised by the item store and its callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// An absorb position beyond the end of the store.
    #[error("Insert position {position} out of bounds (store holds {len} items)")]
    InsertOutOfBounds {
        /// Requested insertion index.
        position: usize,
        /// Store length at the time of the call.
        len: usize,
    },

    /// A removal range not contained in the store.
    #[error("Removal range {from}..{to} out of bounds (store holds {len} items)")]
    RangeOutOfBounds {
        /// Inclusive start of the half-open range.
        from: usize,
        /// Exclusive end of the half-open range.
        to: usize,
        /// Store length at the time of the call.
        len: usize,
    },
}

// ===== Tests =====
