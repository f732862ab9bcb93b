//! Implementations of ports (hexagonal adapters).

pub mod sink;
pub mod sleeper;
