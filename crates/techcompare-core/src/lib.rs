//! # techcompare-core
//!
//! The deterministic evaluation engine for TechCompare - THE LOGIC.
//!
//! This crate holds the catalog model, the PC build compatibility rules and the
//! laptop price-performance scoring. Everything here is a pure function of its
//! inputs or a plain owned data structure.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Has NO async, NO network dependencies, NO logging (pure Rust)
//! - Never talks to the advisory collaborator; its output enters only through
//!   [`catalog::LaptopDraft`] validation
//! - Reports compatibility as data; the rendered messages are shown verbatim

// =============================================================================
// MODULES
// =============================================================================

pub mod build;
pub mod catalog;
pub mod compare;
pub mod engine;
pub mod filter;
pub mod ppi;
pub mod primitives;
pub mod session;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    Benchmarks, Laptop, LaptopBrief, Part, PartCategory, Screen, TechCompareError,
};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use build::Build;
pub use engine::{
    BuildComparison, BuildSummary, CompatibilityIssue, CompatibilityReport, check_compatibility,
    total_power_draw, total_price,
};
pub use ppi::{calculate_ppi, ppi_chart_value, rank_by_ppi};

// =============================================================================
// RE-EXPORTS: Catalog and Session
// =============================================================================

pub use catalog::{Catalog, ImportOutcome, LaptopDraft, RejectedRecord};
pub use compare::{ComparisonRow, LaptopComparison, LaptopSelection};
pub use filter::{DisplayClass, LaptopFilter, WeightClass};
pub use session::{BUILD_A, BUILD_B, Session};
