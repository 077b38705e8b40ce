//! Injected persistence for the mock user registry.
//!
//! Nothing in scoring, generation or advice depends on this module.

pub mod kv;
pub mod registry;

pub use kv::*;
pub use registry::{User, UserRegistry};
