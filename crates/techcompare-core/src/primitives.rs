//! # Engine Primitives
//!
//! Hardcoded constants for the TechCompare CORE.
//!
//! These values are compiled into the binary and are immutable at runtime.
//!
//! ## Primitives
//!
//! 1. **Headroom Primitive**: Fixed margin a PSU must provide above the estimated draw.
//! 2. **Scoring Primitive**: Weights and scale of the laptop price-performance index.
//! 3. **Selection Primitive**: Bounds on comparison and import batches.

/// Watts a power supply must deliver above the build's estimated draw.
///
/// - A PSU passes when `wattage >= estimated_draw + PSU_HEADROOM_WATTS`.
/// - This is a blanket empirical margin, not a derived figure.
pub const PSU_HEADROOM_WATTS: u64 = 100;

/// Weight of the CPU benchmark in the PPI score.
pub const PPI_CPU_WEIGHT: f64 = 0.4;

/// Weight of the GPU benchmark in the PPI score.
pub const PPI_GPU_WEIGHT: f64 = 0.4;

/// Weight of the build-quality benchmark in the PPI score.
pub const PPI_BUILD_WEIGHT: f64 = 0.2;

/// Multiplier applied to `score / price`.
///
/// Brings the index into a readable range for prices quoted in whole rupees.
pub const PPI_SCALE: f64 = 100_000.0;

/// Upper bound of the PPI axis on comparison charts.
pub const PPI_CHART_MAX: f64 = 100.0;

/// Maximum number of laptops in the comparison tray.
pub const MAX_COMPARE_LAPTOPS: usize = 4;

/// Default price ceiling of the laptop filter.
pub const DEFAULT_MAX_PRICE: u64 = 600_000;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum number of URLs sent to the collaborator in one import batch.
pub const MAX_IMPORT_URLS: usize = 20;

/// Maximum number of records accepted in one import batch.
///
/// Records beyond this limit are rejected without inspection.
pub const MAX_IMPORT_RECORDS: usize = 100;

/// Maximum length for text fields of imported records.
pub const MAX_TEXT_FIELD_LENGTH: usize = 512;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headroom_is_one_hundred_watts() {
        assert_eq!(PSU_HEADROOM_WATTS, 100);
    }

    #[test]
    #[allow(clippy::float_arithmetic)]
    fn ppi_weights_sum_to_one() {
        let total = PPI_CPU_WEIGHT + PPI_GPU_WEIGHT + PPI_BUILD_WEIGHT;
        assert!((total - 1.0).abs() < f64::EPSILON);
    }
}
