//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types handed to callers and sinks
//! - `wire.rs` — Raw serde structs matching backend requests and responses
//! - `client.rs` — Sub-client with the HTTP-backed operations

pub mod account;
pub mod contract;
pub mod history;
pub mod trade;
