//! In-memory implementations of the record-store capabilities.
//!
//! The engine treats persistence as an opaque get/put-by-id capability, so
//! the stores here are plain maps behind async locks. Updates overwrite
//! whole records; two concurrent writers race last-write-wins.

mod memory;

pub use memory::{MemoryFeedbackStore, MemoryItemStore};
