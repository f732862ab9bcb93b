//! Table sink adapters.

mod jsonl;

pub use jsonl::JsonLinesSink;
