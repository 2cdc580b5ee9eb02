//! # Catalog Module
//!
//! The owned collection of laptops and parts a session browses and builds
//! from. Catalog entries are immutable once admitted; builds hold clones.
//!
//! ## Import
//!
//! Collaborator records enter through [`Catalog::merge_imported`]. Each record
//! is validated on its own, so a bad record never blocks the rest of its batch
//! and never leaves a half-written laptop behind.

mod import;
mod seed;

pub use import::{BenchmarksDraft, ImportOutcome, LaptopDraft, RejectedRecord, ScreenDraft};

use crate::primitives::MAX_IMPORT_RECORDS;
use crate::{Laptop, Part, PartCategory, TechCompareError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Laptops and parts available to a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    laptops: Vec<Laptop>,
    parts: Vec<Part>,
}

impl Catalog {
    /// Catalog loaded with the fixed seed dataset.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            laptops: seed::seed_laptops(),
            parts: seed::seed_parts(),
        }
    }

    /// Catalog with nothing in it.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Catalog from explicit collections.
    #[must_use]
    pub fn new(laptops: Vec<Laptop>, parts: Vec<Part>) -> Self {
        Self { laptops, parts }
    }

    /// Drop every laptop and part.
    pub fn clear(&mut self) {
        self.laptops.clear();
        self.parts.clear();
    }

    /// Laptops in catalog order. Imported laptops come first.
    #[must_use]
    pub fn laptops(&self) -> &[Laptop] {
        &self.laptops
    }

    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn laptop(&self, id: &str) -> Result<&Laptop, TechCompareError> {
        self.laptops
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| TechCompareError::LaptopNotFound(id.to_string()))
    }

    pub fn part(&self, id: &str) -> Result<&Part, TechCompareError> {
        self.parts
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| TechCompareError::PartNotFound(id.to_string()))
    }

    /// Parts of one category in catalog order.
    #[must_use]
    pub fn parts_in(&self, category: PartCategory) -> Vec<&Part> {
        self.parts
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Distinct laptop brands, sorted.
    #[must_use]
    pub fn brands(&self) -> Vec<String> {
        self.laptops
            .iter()
            .map(|l| l.brand.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    #[must_use]
    pub fn contains_laptop(&self, id: &str) -> bool {
        self.laptops.iter().any(|l| l.id == id)
    }

    /// Merge a batch of collaborator records.
    ///
    /// Each item is either a draft or the reason it could not be decoded at the
    /// boundary. Id-less drafts receive `ext-{batch_tag}-{index}`. Records that
    /// fail validation, collide with an existing id, repeat an id within the
    /// batch, or exceed `MAX_IMPORT_RECORDS` are rejected. Accepted laptops are
    /// prepended in batch order.
    pub fn merge_imported<I>(&mut self, records: I, batch_tag: &str) -> ImportOutcome
    where
        I: IntoIterator<Item = Result<LaptopDraft, String>>,
    {
        let mut outcome = ImportOutcome::nothing();
        let mut accepted: Vec<Laptop> = Vec::new();
        let mut seen: BTreeSet<String> = BTreeSet::new();

        for (index, record) in records.into_iter().enumerate() {
            if index >= MAX_IMPORT_RECORDS {
                outcome.reject(index, "batch record limit exceeded");
                continue;
            }

            let draft = match record {
                Ok(draft) => draft,
                Err(reason) => {
                    outcome.reject(index, reason);
                    continue;
                }
            };

            let fallback_id = format!("ext-{batch_tag}-{index}");
            let laptop = match draft.validate(&fallback_id) {
                Ok(laptop) => laptop,
                Err(e) => {
                    outcome.reject(index, e.to_string());
                    continue;
                }
            };

            if self.contains_laptop(&laptop.id) || !seen.insert(laptop.id.clone()) {
                outcome.reject(index, format!("duplicate laptop id: {}", laptop.id));
                continue;
            }

            outcome.imported.push(laptop.id.clone());
            accepted.push(laptop);
        }

        accepted.append(&mut self.laptops);
        self.laptops = accepted;
        outcome
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_from_seed(index: usize, id: Option<&str>) -> LaptopDraft {
        let mut draft = LaptopDraft::from(&Catalog::seed().laptops()[index]);
        draft.id = id.map(str::to_string);
        draft
    }

    #[test]
    fn seed_catalog_sizes() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.laptops().len(), 15);
        assert_eq!(catalog.parts().len(), 45);
        assert_eq!(catalog.parts_in(PartCategory::Cpu).len(), 8);
        assert_eq!(catalog.parts_in(PartCategory::Psu).len(), 4);
        assert_eq!(catalog.parts_in(PartCategory::Case).len(), 5);
    }

    #[test]
    fn seed_ids_are_unique() {
        let catalog = Catalog::seed();
        let laptop_ids: BTreeSet<_> = catalog.laptops().iter().map(|l| &l.id).collect();
        let part_ids: BTreeSet<_> = catalog.parts().iter().map(|p| &p.id).collect();
        assert_eq!(laptop_ids.len(), catalog.laptops().len());
        assert_eq!(part_ids.len(), catalog.parts().len());
    }

    #[test]
    fn seed_prices_are_positive() {
        let catalog = Catalog::seed();
        assert!(catalog.laptops().iter().all(|l| l.price > 0));
        assert!(catalog.parts().iter().all(|p| p.price > 0));
    }

    #[test]
    fn lookups_report_missing_ids() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.laptop("1").map(|l| l.brand.as_str()).ok(), Some("Apple"));
        assert!(matches!(
            catalog.laptop("nope"),
            Err(TechCompareError::LaptopNotFound(id)) if id == "nope"
        ));
        assert!(matches!(
            catalog.part("nope"),
            Err(TechCompareError::PartNotFound(_))
        ));
        assert_eq!(
            catalog.part("psu-cv650").ok().and_then(|p| p.wattage),
            Some(650)
        );
    }

    #[test]
    fn brands_are_sorted_and_distinct() {
        let brands = Catalog::seed().brands();
        let mut sorted = brands.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(brands, sorted);
        assert!(brands.contains(&"Apple".to_string()));
    }

    #[test]
    fn clear_empties_everything() {
        let mut catalog = Catalog::seed();
        catalog.clear();
        assert_eq!(catalog, Catalog::empty());
    }

    #[test]
    fn merge_prepends_in_batch_order() {
        let mut catalog = Catalog::seed();
        let outcome = catalog.merge_imported(
            vec![Ok(draft_from_seed(0, None)), Ok(draft_from_seed(1, None))],
            "42",
        );

        assert_eq!(outcome.imported, vec!["ext-42-0", "ext-42-1"]);
        assert!(outcome.rejected.is_empty());
        assert_eq!(catalog.laptops().len(), 17);
        assert_eq!(catalog.laptops()[0].id, "ext-42-0");
        assert_eq!(catalog.laptops()[1].id, "ext-42-1");
        assert_eq!(catalog.laptops()[2].id, "1");
    }

    #[test]
    fn merge_rejects_duplicates_and_invalid_records() {
        let mut catalog = Catalog::seed();
        let mut broken = draft_from_seed(2, Some("new-2"));
        broken.price = Some(0.0);

        let outcome = catalog.merge_imported(
            vec![
                Ok(draft_from_seed(0, Some("1"))),
                Ok(draft_from_seed(1, Some("new-1"))),
                Ok(draft_from_seed(1, Some("new-1"))),
                Ok(broken),
                Err("not an object".to_string()),
            ],
            "t",
        );

        assert_eq!(outcome.imported, vec!["new-1"]);
        let indices: Vec<_> = outcome.rejected.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 2, 3, 4]);
        assert_eq!(outcome.rejected[3].reason, "not an object");
        assert_eq!(catalog.laptops().len(), 16);
    }

    #[test]
    fn merge_caps_batch_size() {
        let mut catalog = Catalog::empty();
        let records = (0..MAX_IMPORT_RECORDS + 2).map(|_| Ok(draft_from_seed(0, None)));
        let outcome = catalog.merge_imported(records, "cap");
        assert_eq!(outcome.imported_count(), MAX_IMPORT_RECORDS);
        assert_eq!(outcome.rejected.len(), 2);
    }
}
