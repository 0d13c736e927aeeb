//! Engine: mutations and derivations over the `UserData` aggregate
//!
//! Both halves are `impl UserData` blocks: `mutations` returns fresh
//! snapshots, `queries` only borrows.

pub mod mutations;
pub mod queries;

pub use queries::GroupSummary;
