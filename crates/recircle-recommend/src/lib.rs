//! Recommendation engine: pure decision tables turning a category, item name
//! and user answers into an action with rationale, optional valuation and
//! tips. No I/O, no randomness — same input always yields the same output.

mod answers;
mod engine;
mod marketplace;
mod value;

pub use engine::{recommend, ClassificationMeta};
pub use marketplace::search_url;
