//! Shared test fixtures for the second-brain workspace.
//!
//! - Item builders with predictable ids and timestamps
//! - [`ScriptedItemStore`], an in-memory store that can be told to fail and
//!   counts the calls it receives

mod fixtures;

pub use fixtures::*;
