//! # TechCompare
//!
//! HTTP server, CLI and advisory client around `techcompare-core`.
//!
//! The binary in `main.rs` wires these together; integration tests drive the
//! router directly through [`api::create_router`].

pub mod advisory;
pub mod api;
pub mod cli;
pub mod config;
