//! # Build Module
//!
//! A `Build` is one candidate hardware configuration: an identity, a label and
//! one optional slot per `PartCategory`.
//!
//! - Slots are keyed by category in a `BTreeMap`, so a build can never hold two
//!   parts of the same category and iteration follows slot order.
//! - Assignment never validates; compatibility is an on-demand query
//!   (see [`crate::engine::check_compatibility`]).
//! - A build owns clones of catalog parts. Catalog entries are never mutated.
//! - Deserialization rejects a slot key that differs from its part's category.

use crate::{Part, PartCategory, TechCompareError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One in-progress or completed hardware configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "BuildWire")]
pub struct Build {
    /// Identity of the build within its session.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Occupied slots. Missing keys are empty slots.
    slots: BTreeMap<PartCategory, Part>,
}

#[derive(Deserialize)]
struct BuildWire {
    id: String,
    name: String,
    #[serde(default)]
    slots: BTreeMap<PartCategory, Part>,
}

impl TryFrom<BuildWire> for Build {
    type Error = TechCompareError;

    fn try_from(wire: BuildWire) -> Result<Self, Self::Error> {
        if let Some((slot, part)) = wire.slots.iter().find(|(slot, part)| **slot != part.category) {
            return Err(TechCompareError::Validation(format!(
                "part '{}' of category {} cannot occupy the {} slot",
                part.id, part.category, slot
            )));
        }
        Ok(Self {
            id: wire.id,
            name: wire.name,
            slots: wire.slots,
        })
    }
}

impl Build {
    /// Create an empty build.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slots: BTreeMap::new(),
        }
    }

    /// Create a build and assign every given part in order.
    ///
    /// Later parts overwrite earlier parts of the same category.
    #[must_use]
    pub fn with_parts(
        id: impl Into<String>,
        name: impl Into<String>,
        parts: impl IntoIterator<Item = Part>,
    ) -> Self {
        let mut build = Self::new(id, name);
        for part in parts {
            build.assign(part);
        }
        build
    }

    /// Place a part into the slot of its category.
    ///
    /// Returns the part previously occupying that slot, if any.
    pub fn assign(&mut self, part: Part) -> Option<Part> {
        self.slots.insert(part.category, part)
    }

    /// Empty one slot, returning its former occupant.
    pub fn clear(&mut self, category: PartCategory) -> Option<Part> {
        self.slots.remove(&category)
    }

    /// Empty every slot. Identity and name are kept.
    pub fn clear_all(&mut self) {
        self.slots.clear();
    }

    /// The part in a slot, if occupied.
    #[must_use]
    pub fn slot(&self, category: PartCategory) -> Option<&Part> {
        self.slots.get(&category)
    }

    #[must_use]
    pub fn cpu(&self) -> Option<&Part> {
        self.slot(PartCategory::Cpu)
    }

    #[must_use]
    pub fn motherboard(&self) -> Option<&Part> {
        self.slot(PartCategory::Motherboard)
    }

    #[must_use]
    pub fn cooling(&self) -> Option<&Part> {
        self.slot(PartCategory::Cooling)
    }

    #[must_use]
    pub fn ram(&self) -> Option<&Part> {
        self.slot(PartCategory::Ram)
    }

    #[must_use]
    pub fn gpu(&self) -> Option<&Part> {
        self.slot(PartCategory::Gpu)
    }

    #[must_use]
    pub fn storage(&self) -> Option<&Part> {
        self.slot(PartCategory::Storage)
    }

    #[must_use]
    pub fn psu(&self) -> Option<&Part> {
        self.slot(PartCategory::Psu)
    }

    #[must_use]
    pub fn case(&self) -> Option<&Part> {
        self.slot(PartCategory::Case)
    }

    /// Occupied slots in slot order.
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.slots.values()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.len()
    }

    /// True when no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True when every one of the eight slots is occupied.
    ///
    /// Completeness is a caller concern; an incomplete build is not incompatible.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        PartCategory::ALL.iter().all(|c| self.slots.contains_key(c))
    }

    /// Categories whose slots are still empty, in slot order.
    #[must_use]
    pub fn missing(&self) -> Vec<PartCategory> {
        PartCategory::ALL
            .into_iter()
            .filter(|c| !self.slots.contains_key(c))
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cpu(id: &str, socket: &str) -> Part {
        Part::new(id, id, PartCategory::Cpu, 100)
            .with_tdp(65)
            .with_socket(socket)
    }

    #[test]
    fn new_build_is_empty() {
        let build = Build::new("build-a", "Test");
        assert!(build.is_empty());
        assert_eq!(build.occupied_count(), 0);
        assert_eq!(build.missing().len(), 8);
        assert!(!build.is_complete());
    }

    #[test]
    fn assign_overwrites_same_slot() {
        let mut build = Build::new("b", "B");
        assert!(build.assign(cpu("cpu-1", "AM5")).is_none());

        let replaced = build.assign(cpu("cpu-2", "LGA1700"));
        assert_eq!(replaced.map(|p| p.id), Some("cpu-1".to_string()));
        assert_eq!(build.occupied_count(), 1);
        assert_eq!(build.cpu().map(|p| p.id.as_str()), Some("cpu-2"));
    }

    #[test]
    fn clear_empties_only_one_slot() {
        let mut build = Build::with_parts(
            "b",
            "B",
            [
                cpu("cpu-1", "AM5"),
                Part::new("psu-1", "PSU", PartCategory::Psu, 50).with_wattage(650),
            ],
        );

        let removed = build.clear(PartCategory::Cpu);
        assert!(removed.is_some());
        assert!(build.cpu().is_none());
        assert!(build.psu().is_some());
        assert!(build.clear(PartCategory::Cpu).is_none());
    }

    #[test]
    fn parts_iterate_in_slot_order() {
        let build = Build::with_parts(
            "b",
            "B",
            [
                Part::new("case-1", "Case", PartCategory::Case, 10),
                Part::new("gpu-1", "GPU", PartCategory::Gpu, 10),
                cpu("cpu-1", "AM5"),
            ],
        );

        let order: Vec<_> = build.parts().map(|p| p.category).collect();
        assert_eq!(
            order,
            vec![PartCategory::Cpu, PartCategory::Gpu, PartCategory::Case]
        );
    }

    #[test]
    fn deserialized_slots_must_match_part_category() {
        let json = r#"{
            "id": "b", "name": "B",
            "slots": {
                "CPU": {"id": "gpu-1", "name": "GPU", "category": "GPU", "price": 1, "socket": "AM5"},
                "Motherboard": {"id": "mobo-1", "name": "Board", "category": "Motherboard", "price": 1, "socket": "LGA1700"}
            }
        }"#;
        let err = serde_json::from_str::<Build>(json).expect_err("mismatched slot");
        assert!(err.to_string().contains("'gpu-1' of category GPU cannot occupy the CPU slot"));
    }

    #[test]
    fn serialized_build_reads_back() {
        let build = Build::with_parts("b", "B", [cpu("cpu-1", "AM5")]);
        let json = serde_json::to_string(&build).expect("serialize");
        let back: Build = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, build);
        assert!(serde_json::from_str::<Build>(r#"{"id":"e","name":"E"}"#).is_ok_and(|b| b.is_empty()));
    }

    #[test]
    fn complete_when_all_slots_filled() {
        let mut build = Build::new("b", "B");
        for category in PartCategory::ALL {
            build.assign(Part::new(category.slot_name(), "x", category, 1));
        }
        assert!(build.is_complete());
        assert!(build.missing().is_empty());

        build.clear_all();
        assert!(build.is_empty());
        assert_eq!(build.id, "b");
    }
}
