//! Core types for the merge kernel.

pub mod alignment;
pub mod hunk;

pub use alignment::Alignment;
pub use hunk::{DiffResult, Hunk, MergeConflict};
