//! # Laptop Comparison
//!
//! The comparison tray and the side-by-side table built from it.

use crate::ppi::{calculate_ppi, ppi_chart_value};
use crate::primitives::MAX_COMPARE_LAPTOPS;
use crate::{Benchmarks, Laptop, TechCompareError};
use serde::{Deserialize, Serialize};

/// Ordered set of laptop ids picked for comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaptopSelection {
    ids: Vec<String>,
}

impl LaptopSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the id when present, add it when absent.
    ///
    /// Returns whether the id is selected afterwards. Adding to a full tray
    /// fails with `SelectionFull` and leaves the tray unchanged.
    pub fn toggle(&mut self, id: &str) -> Result<bool, TechCompareError> {
        if let Some(pos) = self.ids.iter().position(|s| s == id) {
            self.ids.remove(pos);
            return Ok(false);
        }
        if self.ids.len() >= MAX_COMPARE_LAPTOPS {
            return Err(TechCompareError::SelectionFull(MAX_COMPARE_LAPTOPS));
        }
        self.ids.push(id.to_string());
        Ok(true)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub ppi: f64,
    /// PPI capped to the chart axis.
    pub chart_ppi: f64,
    pub benchmarks: Benchmarks,
    pub weight: f64,
    pub display_size: f64,
}

/// Side-by-side view of selected laptops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaptopComparison {
    pub rows: Vec<ComparisonRow>,
    /// Highest PPI; the first laptop wins ties.
    pub best_ppi: Option<String>,
    /// Lowest price; the first laptop wins ties.
    pub cheapest: Option<String>,
}

impl LaptopComparison {
    /// Build the table in the given order.
    #[must_use]
    pub fn of(laptops: &[&Laptop]) -> Self {
        let rows: Vec<ComparisonRow> = laptops
            .iter()
            .map(|l| ComparisonRow {
                id: l.id.clone(),
                name: l.name.clone(),
                price: l.price,
                ppi: calculate_ppi(l),
                chart_ppi: ppi_chart_value(l),
                benchmarks: l.benchmarks,
                weight: l.weight,
                display_size: l.display_size,
            })
            .collect();

        let best_ppi = rows
            .iter()
            .fold(None::<&ComparisonRow>, |best, row| match best {
                Some(b) if b.ppi.total_cmp(&row.ppi).is_ge() => Some(b),
                _ => Some(row),
            })
            .map(|r| r.id.clone());

        let cheapest = rows
            .iter()
            .fold(None::<&ComparisonRow>, |best, row| match best {
                Some(b) if b.price <= row.price => Some(b),
                _ => Some(row),
            })
            .map(|r| r.id.clone());

        Self {
            rows,
            best_ppi,
            cheapest,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = LaptopSelection::new();
        assert_eq!(selection.toggle("1").ok(), Some(true));
        assert!(selection.contains("1"));
        assert_eq!(selection.toggle("1").ok(), Some(false));
        assert!(selection.is_empty());
    }

    #[test]
    fn fifth_laptop_is_refused() {
        let mut selection = LaptopSelection::new();
        for id in ["1", "2", "3", "4"] {
            assert!(selection.toggle(id).is_ok());
        }
        assert!(matches!(
            selection.toggle("5"),
            Err(TechCompareError::SelectionFull(4))
        ));
        assert_eq!(selection.ids(), ["1", "2", "3", "4"]);

        // Removing still works on a full tray.
        assert_eq!(selection.toggle("2").ok(), Some(false));
        assert_eq!(selection.toggle("5").ok(), Some(true));
        assert_eq!(selection.ids(), ["1", "3", "4", "5"]);
    }

    #[test]
    fn comparison_picks_best_ppi_and_cheapest() {
        let catalog = Catalog::seed();
        let picked: Vec<&Laptop> = ["1", "2", "3"]
            .iter()
            .filter_map(|id| catalog.laptop(id).ok())
            .collect();
        let table = LaptopComparison::of(&picked);

        assert_eq!(table.rows.len(), 3);
        let cheapest = picked.iter().min_by_key(|l| l.price).map(|l| l.id.clone());
        assert_eq!(table.cheapest, cheapest);

        let best = table
            .rows
            .iter()
            .max_by(|a, b| a.ppi.total_cmp(&b.ppi))
            .map(|r| r.id.clone());
        assert_eq!(table.best_ppi, best);
        assert!(table.rows.iter().all(|r| r.chart_ppi <= 100.0));
    }

    #[test]
    fn empty_comparison_has_no_winners() {
        let table = LaptopComparison::of(&[]);
        assert!(table.is_empty());
        assert!(table.best_ppi.is_none());
        assert!(table.cheapest.is_none());
    }
}
