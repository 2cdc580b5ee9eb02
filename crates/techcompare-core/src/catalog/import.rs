//! # Import Boundary
//!
//! Laptop records returned by the advisory collaborator are untrusted. They
//! arrive as `LaptopDraft` values (every field optional, numbers as `f64`) and
//! only become catalog `Laptop`s after `LaptopDraft::validate` succeeds.
//!
//! - Text fields must be non-empty and within `MAX_TEXT_FIELD_LENGTH`
//! - Numbers must be finite and non-negative; price must be strictly positive
//! - A missing id is replaced by a caller-supplied fallback

use crate::primitives::MAX_TEXT_FIELD_LENGTH;
use crate::{Benchmarks, Laptop, Screen, TechCompareError};
use serde::{Deserialize, Serialize};

/// Screen block of a draft record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenDraft {
    pub nits: Option<f64>,
    pub srgb: Option<f64>,
    pub resolution: Option<String>,
}

/// Benchmark block of a draft record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BenchmarksDraft {
    pub cpu: Option<f64>,
    pub gpu: Option<f64>,
    pub build_quality: Option<f64>,
}

/// An unvalidated laptop record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LaptopDraft {
    pub id: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub cpu: Option<String>,
    pub gpu: Option<String>,
    pub ram: Option<f64>,
    pub storage_size: Option<f64>,
    pub display_size: Option<f64>,
    pub weight: Option<f64>,
    pub screen: Option<ScreenDraft>,
    pub benchmarks: Option<BenchmarksDraft>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

impl From<&Laptop> for LaptopDraft {
    fn from(laptop: &Laptop) -> Self {
        Self {
            id: Some(laptop.id.clone()),
            name: Some(laptop.name.clone()),
            brand: Some(laptop.brand.clone()),
            cpu: Some(laptop.cpu.clone()),
            gpu: Some(laptop.gpu.clone()),
            ram: Some(f64::from(laptop.ram)),
            storage_size: Some(f64::from(laptop.storage_size)),
            display_size: Some(laptop.display_size),
            weight: Some(laptop.weight),
            screen: Some(ScreenDraft {
                nits: Some(f64::from(laptop.screen.nits)),
                srgb: Some(f64::from(laptop.screen.srgb)),
                resolution: Some(laptop.screen.resolution.clone()),
            }),
            benchmarks: Some(BenchmarksDraft {
                cpu: Some(laptop.benchmarks.cpu),
                gpu: Some(laptop.benchmarks.gpu),
                build_quality: Some(laptop.benchmarks.build_quality),
            }),
            price: Some(laptop.price as f64),
            image: Some(laptop.image.clone()),
        }
    }
}

fn invalid(field: &str, problem: &str) -> TechCompareError {
    TechCompareError::Validation(format!("{field}: {problem}"))
}

fn text(field: &str, value: Option<&String>) -> Result<String, TechCompareError> {
    let value = value.map(|s| s.trim()).unwrap_or_default();
    if value.is_empty() {
        return Err(invalid(field, "missing"));
    }
    if value.len() > MAX_TEXT_FIELD_LENGTH {
        return Err(invalid(field, "too long"));
    }
    Ok(value.to_string())
}

fn number(field: &str, value: Option<f64>) -> Result<f64, TechCompareError> {
    let value = value.ok_or_else(|| invalid(field, "missing"))?;
    if !value.is_finite() {
        return Err(invalid(field, "not a finite number"));
    }
    if value < 0.0 {
        return Err(invalid(field, "negative"));
    }
    Ok(value)
}

fn whole(field: &str, value: Option<f64>) -> Result<u32, TechCompareError> {
    let value = number(field, value)?.round();
    if value > f64::from(u32::MAX) {
        return Err(invalid(field, "out of range"));
    }
    Ok(value as u32)
}

impl LaptopDraft {
    /// Validate the draft into a catalog laptop.
    ///
    /// `fallback_id` is used when the record carries no id. The image URL is
    /// optional and defaults to an empty string.
    pub fn validate(&self, fallback_id: &str) -> Result<Laptop, TechCompareError> {
        let id = self
            .id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(fallback_id)
            .to_string();

        let screen = self.screen.clone().unwrap_or_default();
        let benchmarks = self.benchmarks.clone().unwrap_or_default();

        let price = number("price", self.price)?.round();
        if price < 1.0 || price > u64::MAX as f64 {
            return Err(invalid("price", "must be a positive amount"));
        }

        Ok(Laptop {
            id,
            name: text("name", self.name.as_ref())?,
            brand: text("brand", self.brand.as_ref())?,
            cpu: text("cpu", self.cpu.as_ref())?,
            gpu: text("gpu", self.gpu.as_ref())?,
            ram: whole("ram", self.ram)?,
            storage_size: whole("storageSize", self.storage_size)?,
            display_size: number("displaySize", self.display_size)?,
            weight: number("weight", self.weight)?,
            screen: Screen {
                nits: whole("screen.nits", screen.nits)?,
                srgb: whole("screen.srgb", screen.srgb)?,
                resolution: text("screen.resolution", screen.resolution.as_ref())?,
            },
            benchmarks: Benchmarks {
                cpu: number("benchmarks.cpu", benchmarks.cpu)?,
                gpu: number("benchmarks.gpu", benchmarks.gpu)?,
                build_quality: number("benchmarks.buildQuality", benchmarks.build_quality)?,
            },
            price: price as u64,
            image: self
                .image
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
        })
    }
}

/// A record dropped during a merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRecord {
    /// Position of the record in the submitted batch.
    pub index: usize,
    pub reason: String,
}

/// Result of merging a batch of records into the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOutcome {
    /// Ids of the laptops added, in batch order.
    pub imported: Vec<String>,
    pub rejected: Vec<RejectedRecord>,
}

impl ImportOutcome {
    /// The outcome of a batch that never reached the catalog.
    #[must_use]
    pub fn nothing() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn imported_count(&self) -> usize {
        self.imported.len()
    }

    pub(crate) fn reject(&mut self, index: usize, reason: impl Into<String>) {
        self.rejected.push(RejectedRecord {
            index,
            reason: reason.into(),
        });
    }
}

// =============================================================================
// TESTS
// =============================================================================
