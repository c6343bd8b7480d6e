//! High-level operations composing the digest engine with storage.

pub mod summarize;

pub use summarize::{build_summary, summarize_range, SummaryOutcome};
