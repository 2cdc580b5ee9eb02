//! # Core Type Definitions
//!
//! This module contains the catalog entities shared by every TechCompare layer:
//! - Hardware parts and their category tags (`PartCategory`, `Part`)
//! - Laptop records (`Laptop`, `Screen`, `Benchmarks`, `LaptopBrief`)
//! - Error types (`TechCompareError`)
//!
//! ## Catalog Guarantees
//!
//! All entities in this module:
//! - Are immutable catalog entries once constructed (builds hold clones)
//! - Serialize to the same JSON shape the advisory collaborator produces
//! - Carry prices as integer amounts (currency-minor-unit-agnostic)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// PART CATEGORY
// =============================================================================

/// The closed set of hardware categories. One build slot exists per category.
///
/// Declaration order is the canonical slot order: it drives `Ord`, and
/// therefore the iteration order of a build's slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PartCategory {
    #[serde(rename = "CPU")]
    Cpu,
    #[serde(rename = "Motherboard")]
    Motherboard,
    #[serde(rename = "Cooling")]
    Cooling,
    #[serde(rename = "RAM")]
    Ram,
    #[serde(rename = "GPU")]
    Gpu,
    #[serde(rename = "Storage")]
    Storage,
    #[serde(rename = "PSU")]
    Psu,
    #[serde(rename = "Case")]
    Case,
}

impl PartCategory {
    /// Every category, in slot order.
    pub const ALL: [PartCategory; 8] = [
        PartCategory::Cpu,
        PartCategory::Motherboard,
        PartCategory::Cooling,
        PartCategory::Ram,
        PartCategory::Gpu,
        PartCategory::Storage,
        PartCategory::Psu,
        PartCategory::Case,
    ];

    /// Display label, identical to the serialized form.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PartCategory::Cpu => "CPU",
            PartCategory::Motherboard => "Motherboard",
            PartCategory::Cooling => "Cooling",
            PartCategory::Ram => "RAM",
            PartCategory::Gpu => "GPU",
            PartCategory::Storage => "Storage",
            PartCategory::Psu => "PSU",
            PartCategory::Case => "Case",
        }
    }

    /// Name of the build slot holding parts of this category.
    #[must_use]
    pub fn slot_name(&self) -> &'static str {
        match self {
            PartCategory::Cpu => "cpu",
            PartCategory::Motherboard => "motherboard",
            PartCategory::Cooling => "cooling",
            PartCategory::Ram => "ram",
            PartCategory::Gpu => "gpu",
            PartCategory::Storage => "storage",
            PartCategory::Psu => "psu",
            PartCategory::Case => "case",
        }
    }
}

impl fmt::Display for PartCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PartCategory {
    type Err = TechCompareError;

    /// Parses either the label (`"PSU"`) or the slot name (`"psu"`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        // "cases" is the slot key used by older build documents.
        if wanted == "cases" {
            return Ok(PartCategory::Case);
        }
        PartCategory::ALL
            .into_iter()
            .find(|c| c.slot_name() == wanted)
            .ok_or_else(|| TechCompareError::InvalidCategory(s.to_string()))
    }
}

// =============================================================================
// PART
// =============================================================================

/// One purchasable hardware component.
///
/// The category decides which optional fields are meaningful (`socket` for
/// CPU and Motherboard, `wattage` for PSU, `tdp` for powered components), but
/// nothing in the engine assumes that a field is present because of the category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Stable catalog identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Hardware category; also the build slot this part occupies.
    #[serde(alias = "type")]
    pub category: PartCategory,
    /// Price, never negative.
    pub price: u64,
    /// Thermal design power in watts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tdp: Option<u32>,
    /// Platform compatibility tag, e.g. "AM5" or "LGA1700".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,
    /// Rated maximum output of a power supply, in watts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wattage: Option<u32>,
}

impl Part {
    /// Create a part with no optional attributes.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: PartCategory,
        price: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            price,
            tdp: None,
            socket: None,
            wattage: None,
        }
    }

    #[must_use]
    pub fn with_tdp(mut self, tdp: u32) -> Self {
        self.tdp = Some(tdp);
        self
    }

    #[must_use]
    pub fn with_socket(mut self, socket: impl Into<String>) -> Self {
        self.socket = Some(socket.into());
        self
    }

    #[must_use]
    pub fn with_wattage(mut self, wattage: u32) -> Self {
        self.wattage = Some(wattage);
        self
    }
}

// =============================================================================
// LAPTOP
// =============================================================================

/// Panel characteristics of a laptop display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    /// Peak brightness.
    pub nits: u32,
    /// sRGB coverage in percent.
    pub srgb: u32,
    /// Free-form resolution label, e.g. "2560 x 1600".
    pub resolution: String,
}

/// Normalized benchmark scores, expected in `0..=100` but never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benchmarks {
    pub cpu: f64,
    pub gpu: f64,
    pub build_quality: f64,
}

/// A laptop catalog record.
///
/// Field names follow the camelCase record shape exchanged with the advisory
/// collaborator, so imported records and exported catalogs are interchangeable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Laptop {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub cpu: String,
    pub gpu: String,
    /// Memory in GB.
    pub ram: u32,
    /// Storage in GB.
    pub storage_size: u32,
    /// Diagonal in inches.
    pub display_size: f64,
    /// Weight in kg.
    pub weight: f64,
    pub screen: Screen,
    pub benchmarks: Benchmarks,
    /// Strictly positive by catalog invariant.
    pub price: u64,
    /// Product image URL.
    pub image: String,
}

impl Laptop {
    /// The subset of fields handed to the advisory collaborator.
    #[must_use]
    pub fn brief(&self) -> LaptopBrief {
        LaptopBrief {
            name: self.name.clone(),
            price: self.price,
            cpu: self.cpu.clone(),
            gpu: self.gpu.clone(),
            weight: self.weight,
            storage: self.storage_size,
            display: self.display_size,
        }
    }
}

/// Compact laptop description used as advisory context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaptopBrief {
    pub name: String,
    pub price: u64,
    pub cpu: String,
    pub gpu: String,
    pub weight: f64,
    pub storage: u32,
    pub display: f64,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the TechCompare core.
///
/// - Evaluation functions are total and never return these
/// - Validation errors are raised where collaborator data enters the catalog
/// - Lookup errors carry the identifier that was not found
#[derive(Debug, Error)]
pub enum TechCompareError {
    /// A record failed boundary validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The requested part was not found in the catalog.
    #[error("Part not found: {0}")]
    PartNotFound(String),

    /// The requested laptop was not found in the catalog.
    #[error("Laptop not found: {0}")]
    LaptopNotFound(String),

    /// The requested build does not exist in the session.
    #[error("Build not found: {0}")]
    BuildNotFound(String),

    /// The comparison selection already holds the maximum number of laptops.
    #[error("Comparison selection is full ({0} laptops)")]
    SelectionFull(usize),

    /// A category name could not be parsed.
    #[error("Invalid part category: {0}")]
    InvalidCategory(String),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
