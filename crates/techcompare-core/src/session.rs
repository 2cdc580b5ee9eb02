//! # Session Module
//!
//! The application context: the catalog plus the user's transient state.
//!
//! - Two builds, `build-a` and `build-b`, always exist; one of them is active
//! - The laptop comparison tray holds at most `MAX_COMPARE_LAPTOPS` ids
//! - `reset` clears transient state and keeps the catalog; `clear` also
//!   empties the catalog (end of session)
//!
//! A `Session` has no internal locking. Callers sharing it across tasks wrap it
//! in a lock and serialize mutations.

use crate::catalog::{Catalog, ImportOutcome, LaptopDraft};
use crate::compare::{LaptopComparison, LaptopSelection};
use crate::engine::{BuildComparison, BuildSummary};
use crate::{Build, Laptop, Part, PartCategory, TechCompareError};

/// Id of the first build.
pub const BUILD_A: &str = "build-a";

/// Id of the second build.
pub const BUILD_B: &str = "build-b";

fn default_builds() -> [Build; 2] {
    [
        Build::new(BUILD_A, "Elite Performance A"),
        Build::new(BUILD_B, "Modular Workstation B"),
    ]
}

/// Catalog, builds and comparison tray of one user session.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    builds: [Build; 2],
    active: usize,
    selection: LaptopSelection,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Session over the seed catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(Catalog::seed())
    }

    /// Session over an explicit catalog.
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            builds: default_builds(),
            active: 0,
            selection: LaptopSelection::new(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    fn index_of(&self, build_id: &str) -> Result<usize, TechCompareError> {
        self.builds
            .iter()
            .position(|b| b.id == build_id)
            .ok_or_else(|| TechCompareError::BuildNotFound(build_id.to_string()))
    }

    pub fn build(&self, build_id: &str) -> Result<&Build, TechCompareError> {
        let idx = self.index_of(build_id)?;
        Ok(&self.builds[idx])
    }

    /// Both builds in fixed order.
    #[must_use]
    pub fn builds(&self) -> &[Build] {
        &self.builds
    }

    #[must_use]
    pub fn active_build(&self) -> &Build {
        &self.builds[self.active]
    }

    pub fn set_active(&mut self, build_id: &str) -> Result<(), TechCompareError> {
        self.active = self.index_of(build_id)?;
        Ok(())
    }

    /// Clone a catalog part into its slot of the given build.
    ///
    /// Returns the part it replaced. No compatibility check happens here.
    pub fn assign_part(
        &mut self,
        build_id: &str,
        part_id: &str,
    ) -> Result<Option<Part>, TechCompareError> {
        let idx = self.index_of(build_id)?;
        let part = self.catalog.part(part_id)?.clone();
        Ok(self.builds[idx].assign(part))
    }

    pub fn clear_slot(
        &mut self,
        build_id: &str,
        category: PartCategory,
    ) -> Result<Option<Part>, TechCompareError> {
        let idx = self.index_of(build_id)?;
        Ok(self.builds[idx].clear(category))
    }

    pub fn evaluate(&self, build_id: &str) -> Result<BuildSummary, TechCompareError> {
        Ok(BuildSummary::evaluate(self.build(build_id)?))
    }

    /// `build-a` against `build-b`.
    #[must_use]
    pub fn compare_builds(&self) -> BuildComparison {
        BuildComparison::between(&self.builds[0], &self.builds[1])
    }

    /// Toggle a laptop in the comparison tray.
    ///
    /// Adding requires the laptop to exist in the catalog; removing does not.
    pub fn toggle_comparison(&mut self, laptop_id: &str) -> Result<bool, TechCompareError> {
        if !self.selection.contains(laptop_id) && !self.catalog.contains_laptop(laptop_id) {
            return Err(TechCompareError::LaptopNotFound(laptop_id.to_string()));
        }
        self.selection.toggle(laptop_id)
    }

    #[must_use]
    pub fn selection(&self) -> &LaptopSelection {
        &self.selection
    }

    /// Selected laptops in tray order. Ids no longer in the catalog are skipped.
    #[must_use]
    pub fn selected_laptops(&self) -> Vec<&Laptop> {
        self.selection
            .ids()
            .iter()
            .filter_map(|id| self.catalog.laptop(id).ok())
            .collect()
    }

    #[must_use]
    pub fn compare_selected(&self) -> LaptopComparison {
        LaptopComparison::of(&self.selected_laptops())
    }

    /// Merge collaborator records into the catalog.
    pub fn import_laptops<I>(&mut self, records: I, batch_tag: &str) -> ImportOutcome
    where
        I: IntoIterator<Item = Result<LaptopDraft, String>>,
    {
        self.catalog.merge_imported(records, batch_tag)
    }

    /// Empty both builds and the tray. The catalog is kept.
    pub fn reset(&mut self) {
        self.builds = default_builds();
        self.active = 0;
        self.selection.clear();
    }

    /// End of session: transient state and catalog are both dropped.
    pub fn clear(&mut self) {
        self.reset();
        self.catalog.clear();
    }
}

// =============================================================================
// TESTS
// =============================================================================
