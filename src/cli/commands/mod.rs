//! CLI command implementations.

pub mod skill;
