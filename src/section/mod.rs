//! Sectioned view-model derivation.
//!
//! Sections are derived, never persisted: every structural change to the
//! store or the zone table is followed by a full rebuild. Correctness over
//! micro-optimization - zone merges can restructure arbitrarily many items
//! at once, so no incremental diffing is attempted.

pub mod builder;
pub mod evict;
pub mod group;

pub use builder::{build_sections, Boundary, Section};
pub use evict::drop_temporary_sections;
pub use group::{avatar_for, group_items, GroupedRun};
