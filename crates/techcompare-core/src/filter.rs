//! # Laptop Filter
//!
//! Criteria for narrowing the laptop catalog. All criteria are AND-ed; within a
//! multi-valued criterion any value may match; an empty list matches everything.

use crate::primitives::DEFAULT_MAX_PRICE;
use crate::{Laptop, TechCompareError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Display size buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayClass {
    /// Under 14 inches.
    Small,
    /// 14 to 15.6 inches, both inclusive.
    Medium,
    /// Over 15.6 inches.
    Large,
}

impl DisplayClass {
    #[must_use]
    pub fn contains(&self, inches: f64) -> bool {
        match self {
            DisplayClass::Small => inches < 14.0,
            DisplayClass::Medium => (14.0..=15.6).contains(&inches),
            DisplayClass::Large => inches > 15.6,
        }
    }
}

/// Weight buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightClass {
    /// Under 1.4 kg.
    Ultralight,
    /// 1.4 to 1.9 kg, both inclusive.
    Balanced,
    /// Over 1.9 kg.
    Heavy,
}

impl WeightClass {
    #[must_use]
    pub fn contains(&self, kg: f64) -> bool {
        match self {
            WeightClass::Ultralight => kg < 1.4,
            WeightClass::Balanced => (1.4..=1.9).contains(&kg),
            WeightClass::Heavy => kg > 1.9,
        }
    }
}

impl FromStr for DisplayClass {
    type Err = TechCompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(DisplayClass::Small),
            "medium" => Ok(DisplayClass::Medium),
            "large" => Ok(DisplayClass::Large),
            other => Err(TechCompareError::Validation(format!(
                "unknown display class: {other} (expected small, medium or large)"
            ))),
        }
    }
}

impl FromStr for WeightClass {
    type Err = TechCompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ultralight" => Ok(WeightClass::Ultralight),
            "balanced" => Ok(WeightClass::Balanced),
            "heavy" => Ok(WeightClass::Heavy),
            other => Err(TechCompareError::Validation(format!(
                "unknown weight class: {other} (expected ultralight, balanced or heavy)"
            ))),
        }
    }
}

fn default_max_price() -> u64 {
    DEFAULT_MAX_PRICE
}

/// Catalog browsing criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaptopFilter {
    /// Case-insensitive substring of name or brand.
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub brands: Vec<String>,
    /// Memory sizes in GB.
    #[serde(default)]
    pub ram: Vec<u32>,
    /// Storage sizes in GB.
    #[serde(default)]
    pub storage: Vec<u32>,
    /// Inclusive price ceiling.
    #[serde(default = "default_max_price")]
    pub max_price: u64,
    #[serde(default)]
    pub display: Vec<DisplayClass>,
    /// Substrings of the CPU description, e.g. "Intel", "AMD", "Apple".
    #[serde(default)]
    pub cpu_brands: Vec<String>,
    #[serde(default)]
    pub weight: Vec<WeightClass>,
}

impl Default for LaptopFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            brands: Vec::new(),
            ram: Vec::new(),
            storage: Vec::new(),
            max_price: DEFAULT_MAX_PRICE,
            display: Vec::new(),
            cpu_brands: Vec::new(),
            weight: Vec::new(),
        }
    }
}

impl LaptopFilter {
    /// Check one laptop against every criterion.
    #[must_use]
    pub fn matches(&self, laptop: &Laptop) -> bool {
        let needle = self.search.to_lowercase();
        let search = needle.is_empty()
            || laptop.name.to_lowercase().contains(&needle)
            || laptop.brand.to_lowercase().contains(&needle);

        search
            && (self.brands.is_empty() || self.brands.contains(&laptop.brand))
            && (self.ram.is_empty() || self.ram.contains(&laptop.ram))
            && (self.storage.is_empty() || self.storage.contains(&laptop.storage_size))
            && laptop.price <= self.max_price
            && (self.display.is_empty()
                || self.display.iter().any(|d| d.contains(laptop.display_size)))
            && (self.cpu_brands.is_empty()
                || self
                    .cpu_brands
                    .iter()
                    .any(|c| laptop.cpu.contains(c.as_str())))
            && (self.weight.is_empty() || self.weight.iter().any(|w| w.contains(laptop.weight)))
    }

    /// Matching laptops in catalog order.
    #[must_use]
    pub fn apply<'a>(&self, laptops: &'a [Laptop]) -> Vec<&'a Laptop> {
        laptops.iter().filter(|l| self.matches(l)).collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
