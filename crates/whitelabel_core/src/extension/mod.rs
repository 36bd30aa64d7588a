//! Extension point and registry contracts.
//!
//! Points declare typed slots; the registry collects implementations for
//! them during bootstrap and is frozen before the shell reads it.

pub mod point;
pub mod registry;
