//! # Price-Performance Index
//!
//! `PPI = (0.4 * cpu + 0.4 * gpu + 0.2 * buildQuality) / price * 100_000`
//!
//! The only floating-point arithmetic in the CORE lives here. Benchmarks are
//! not clamped; a non-positive price is a catalog invariant violation upstream
//! and is not guarded.
#![allow(clippy::float_arithmetic)]

use crate::Laptop;
use crate::primitives::{
    PPI_BUILD_WEIGHT, PPI_CHART_MAX, PPI_CPU_WEIGHT, PPI_GPU_WEIGHT, PPI_SCALE,
};

/// Weighted benchmark score before price normalization.
#[must_use]
pub fn benchmark_score(laptop: &Laptop) -> f64 {
    let b = &laptop.benchmarks;
    b.cpu * PPI_CPU_WEIGHT + b.gpu * PPI_GPU_WEIGHT + b.build_quality * PPI_BUILD_WEIGHT
}

/// Price-performance index of a laptop.
#[must_use]
pub fn calculate_ppi(laptop: &Laptop) -> f64 {
    benchmark_score(laptop) / laptop.price as f64 * PPI_SCALE
}

/// PPI capped to the chart axis.
///
/// Display value only; rankings use [`calculate_ppi`].
#[must_use]
pub fn ppi_chart_value(laptop: &Laptop) -> f64 {
    calculate_ppi(laptop).min(PPI_CHART_MAX)
}

/// Laptops paired with their PPI, best first. Ties fall back to id order.
#[must_use]
pub fn rank_by_ppi<'a, I>(laptops: I) -> Vec<(&'a Laptop, f64)>
where
    I: IntoIterator<Item = &'a Laptop>,
{
    let mut ranked: Vec<_> = laptops.into_iter().map(|l| (l, calculate_ppi(l))).collect();
    ranked.sort_by(|(la, pa), (lb, pb)| pb.total_cmp(pa).then_with(|| la.id.cmp(&lb.id)));
    ranked
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Benchmarks, Screen};

    fn laptop(id: &str, cpu: f64, gpu: f64, build: f64, price: u64) -> Laptop {
        Laptop {
            id: id.into(),
            name: format!("Laptop {id}"),
            brand: "Acme".into(),
            cpu: "Intel Core".into(),
            gpu: "RTX".into(),
            ram: 16,
            storage_size: 512,
            display_size: 14.0,
            weight: 1.5,
            screen: Screen {
                nits: 300,
                srgb: 100,
                resolution: "1920 x 1080".into(),
            },
            benchmarks: Benchmarks {
                cpu,
                gpu,
                build_quality: build,
            },
            price,
            image: String::new(),
        }
    }

    #[test]
    fn macbook_air_scenario() {
        let air = laptop("1", 85.0, 72.0, 98.0, 114_900);
        assert!((benchmark_score(&air) - 82.4).abs() < 1e-9);
        assert!((calculate_ppi(&air) - 71.714_538).abs() < 1e-4);
    }

    #[test]
    fn benchmarks_are_not_clamped() {
        let over = laptop("x", 200.0, 200.0, 200.0, 100_000);
        assert!((calculate_ppi(&over) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn chart_value_caps_at_axis_max() {
        let cheap = laptop("c", 90.0, 90.0, 90.0, 50_000);
        assert!(calculate_ppi(&cheap) > 100.0);
        assert!((ppi_chart_value(&cheap) - 100.0).abs() < f64::EPSILON);

        let air = laptop("1", 85.0, 72.0, 98.0, 114_900);
        assert!((ppi_chart_value(&air) - calculate_ppi(&air)).abs() < f64::EPSILON);
    }

    #[test]
    fn ranking_is_descending_with_id_tiebreak() {
        let a = laptop("a", 50.0, 50.0, 50.0, 100_000);
        let b = laptop("b", 50.0, 50.0, 50.0, 100_000);
        let c = laptop("c", 90.0, 90.0, 90.0, 100_000);
        let all = [b.clone(), a.clone(), c.clone()];

        let ids: Vec<_> = rank_by_ppi(&all).iter().map(|(l, _)| l.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
