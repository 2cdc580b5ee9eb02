//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::advisory::{AdvisoryClient, AdvisoryError, ChatMessage, service};
use crate::api::{self, AppState, types::EvaluateRequest};
use crate::config::AppConfig;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use techcompare_core::{
    Build, BuildComparison, BuildSummary, Catalog, ImportOutcome, Laptop, LaptopComparison,
    LaptopFilter, PartCategory, Session, TechCompareError, calculate_ppi,
    primitives::MAX_COMPARE_LAPTOPS, rank_by_ppi,
};

// =============================================================================
// FILE INPUT
// =============================================================================

/// Maximum size of a build file (1 MiB).
const MAX_BUILD_FILE_SIZE: u64 = 1024 * 1024;

/// Maximum size of an import file (2 MiB, same as an HTTP request body).
const MAX_IMPORT_FILE_SIZE: u64 = 2 * 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), TechCompareError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| TechCompareError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(TechCompareError::SerializationError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Canonicalize `path` and require a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, TechCompareError> {
    let canonical = path.canonicalize().map_err(|e| {
        TechCompareError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(TechCompareError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Validate, size-check and decode a JSON file.
fn read_json_file<T: DeserializeOwned>(path: &Path, max_size: u64) -> Result<T, TechCompareError> {
    let validated = validate_file_path(path)?;
    validate_file_size(&validated, max_size)?;

    let contents = std::fs::read(&validated)
        .map_err(|e| TechCompareError::IoError(format!("Read file: {}", e)))?;
    serde_json::from_slice(&contents).map_err(|e| {
        TechCompareError::SerializationError(format!("Invalid JSON in '{}': {}", path.display(), e))
    })
}

/// Load an ad-hoc build from a `{"name": ..., "parts": [...]}` file.
pub fn load_build_file(path: &Path) -> Result<Build, TechCompareError> {
    let request: EvaluateRequest = read_json_file(path, MAX_BUILD_FILE_SIZE)?;
    Ok(request.to_build())
}

/// Load an array of raw laptop records.
pub fn load_import_file(path: &Path) -> Result<Vec<serde_json::Value>, TechCompareError> {
    read_json_file(path, MAX_IMPORT_FILE_SIZE)
}

// =============================================================================
// HELPERS
// =============================================================================

fn split_ids(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Assemble a build from catalog part IDs; later IDs win a contested slot.
pub fn build_from_ids(
    catalog: &Catalog,
    id: &str,
    name: &str,
    part_ids: &str,
) -> Result<Build, TechCompareError> {
    let parts = split_ids(part_ids)
        .into_iter()
        .map(|pid| catalog.part(pid).cloned())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Build::with_parts(id, name, parts))
}

/// Client for the configured collaborator, if any.
fn advisory_client(config: &AppConfig) -> Option<AdvisoryClient> {
    match AdvisoryClient::from_config(&config.advisory) {
        Ok(client) => {
            tracing::info!(url = client.base_url(), "Advisory collaborator configured");
            Some(client)
        }
        Err(AdvisoryError::NotConfigured) => {
            tracing::info!("No advisory collaborator configured, advisory answers use fallbacks");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "Advisory client unavailable");
            None
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn print_summary(build: &Build, summary: &BuildSummary) {
    println!("{} ({})", build.name, build.id);
    for category in PartCategory::ALL {
        match build.slot(category) {
            Some(part) => println!("  {:<12} {} - INR {}", category.label(), part.name, part.price),
            None => println!("  {:<12} -", category.label()),
        }
    }
    println!();
    println!("Total price: INR {}", summary.total_price);
    println!("Power draw:  {}W", summary.total_power_draw);
    if summary.compatibility.compatible {
        println!("Compatible:  yes");
    } else {
        println!("Compatible:  no");
        for message in summary.compatibility.messages() {
            println!("  - {}", message);
        }
    }
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    config: &AppConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), TechCompareError> {
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    let advisory = advisory_client(config);

    println!("TechCompare Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:     {}", host);
    println!("  Port:     {}", port);
    println!(
        "  Advisory: {}",
        advisory.as_ref().map_or("fallbacks only", |c| c.base_url())
    );
    println!();
    println!("Endpoints:");
    println!("  GET  /laptops          - Laptops with PPI");
    println!("  GET  /parts            - Part catalog");
    println!("  GET  /builds/{{id}}      - Build and evaluation");
    println!("  POST /builds/evaluate  - Evaluate an ad-hoc build");
    println!("  POST /compare/laptops  - Laptop comparison");
    println!("  POST /chat             - Hardware consultant");
    println!("  GET  /health           - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let state = AppState::with_advisory(Session::new(), advisory);
    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, state).await
}

// =============================================================================
// STATUS COMMAND
// =============================================================================

/// Show catalog status.
pub fn cmd_status(config: &AppConfig, json_mode: bool) -> Result<(), TechCompareError> {
    let catalog = Catalog::seed();
    let advisory = config.advisory.url.as_deref();

    if json_mode {
        print_json(&serde_json::json!({
            "laptop_count": catalog.laptops().len(),
            "part_count": catalog.parts().len(),
            "brands": catalog.brands(),
            "advisory_url": advisory,
        }));
        return Ok(());
    }

    println!("TechCompare Catalog Status");
    println!("==========================");
    println!("Laptops:  {}", catalog.laptops().len());
    println!("Parts:    {}", catalog.parts().len());
    for category in PartCategory::ALL {
        println!("  {:<12} {}", category.label(), catalog.parts_in(category).len());
    }
    println!("Brands:   {}", catalog.brands().join(", "));
    println!("Advisory: {}", advisory.unwrap_or("not configured"));

    Ok(())
}

// =============================================================================
// LAPTOP COMMANDS
// =============================================================================

/// List laptops matching `filter`, optionally ranked by PPI.
pub fn cmd_laptops(filter: &LaptopFilter, rank: bool, json_mode: bool) -> Result<(), TechCompareError> {
    let catalog = Catalog::seed();
    let matches = filter.apply(catalog.laptops());
    let scored: Vec<(&Laptop, f64)> = if rank {
        rank_by_ppi(matches)
    } else {
        matches.into_iter().map(|l| (l, calculate_ppi(l))).collect()
    };

    if json_mode {
        let views: Vec<api::types::LaptopView> =
            scored.iter().map(|(l, _)| api::types::LaptopView::from(*l)).collect();
        print_json(&views);
        return Ok(());
    }

    if scored.is_empty() {
        println!("No laptops match the filter");
        return Ok(());
    }
    println!("{:<4} {:<40} {:>10} {:>8}", "ID", "Name", "Price", "PPI");
    for (laptop, ppi) in scored {
        println!(
            "{:<4} {:<40} {:>10} {:>8.2}",
            laptop.id, laptop.name, laptop.price, ppi
        );
    }
    Ok(())
}

/// Show one laptop's PPI.
pub fn cmd_ppi(id: &str, json_mode: bool) -> Result<(), TechCompareError> {
    let catalog = Catalog::seed();
    let laptop = catalog.laptop(id)?;

    if json_mode {
        print_json(&api::types::LaptopView::from(laptop));
        return Ok(());
    }

    println!("{} ({})", laptop.name, laptop.brand);
    println!(
        "  Benchmarks: cpu {} / gpu {} / build {}",
        laptop.benchmarks.cpu, laptop.benchmarks.gpu, laptop.benchmarks.build_quality
    );
    println!("  Price:      INR {}", laptop.price);
    println!("  PPI:        {:.2}", calculate_ppi(laptop));
    Ok(())
}

// =============================================================================
// PART AND BUILD COMMANDS
// =============================================================================

/// List parts, optionally of one category.
pub fn cmd_parts(category: Option<&str>, json_mode: bool) -> Result<(), TechCompareError> {
    let catalog = Catalog::seed();
    let parts = match category {
        Some(name) => catalog.parts_in(name.parse()?),
        None => catalog.parts().iter().collect(),
    };

    if json_mode {
        print_json(&parts);
        return Ok(());
    }

    for part in parts {
        let mut extras = Vec::new();
        if let Some(socket) = &part.socket {
            extras.push(socket.clone());
        }
        if let Some(tdp) = part.tdp {
            extras.push(format!("{}W TDP", tdp));
        }
        if let Some(wattage) = part.wattage {
            extras.push(format!("{}W", wattage));
        }
        println!(
            "{:<24} {:<12} {:<40} INR {:>7} {}",
            part.id,
            part.category.label(),
            part.name,
            part.price,
            extras.join(", ")
        );
    }
    Ok(())
}

/// Evaluate a build from a file or from catalog part IDs.
pub fn cmd_evaluate(
    file: Option<&Path>,
    parts: Option<&str>,
    json_mode: bool,
) -> Result<(), TechCompareError> {
    let build = match (file, parts) {
        (Some(path), _) => {
            tracing::info!("Evaluating build from {:?}", path);
            load_build_file(path)?
        }
        (None, Some(ids)) => build_from_ids(&Catalog::seed(), "cli", "CLI build", ids)?,
        (None, None) => {
            return Err(TechCompareError::Validation(
                "either --file or --parts is required".to_string(),
            ));
        }
    };
    let summary = BuildSummary::evaluate(&build);

    if json_mode {
        print_json(&summary);
    } else {
        print_summary(&build, &summary);
    }
    Ok(())
}

/// Compare two builds assembled from catalog IDs.
pub fn cmd_compare_builds(a: &str, b: &str, json_mode: bool) -> Result<(), TechCompareError> {
    let catalog = Catalog::seed();
    let build_a = build_from_ids(&catalog, "build-a", "Build A", a)?;
    let build_b = build_from_ids(&catalog, "build-b", "Build B", b)?;
    let comparison = BuildComparison::between(&build_a, &build_b);

    if json_mode {
        print_json(&comparison);
        return Ok(());
    }

    print_summary(&build_a, &comparison.a);
    println!();
    print_summary(&build_b, &comparison.b);
    println!();
    println!("Price difference: INR {}", comparison.price_delta);
    println!("Power difference: {}W", comparison.power_delta);
    match comparison.cheaper() {
        Some(id) => println!("Cheaper: {}", id),
        None => println!("Cheaper: equal price"),
    }
    Ok(())
}

// =============================================================================
// COMPARISON COMMAND
// =============================================================================

/// Compare laptops side by side.
pub async fn cmd_compare(
    config: &AppConfig,
    ids: &str,
    advise: bool,
    json_mode: bool,
) -> Result<(), TechCompareError> {
    let catalog = Catalog::seed();
    let ids = split_ids(ids);
    if ids.is_empty() || ids.len() > MAX_COMPARE_LAPTOPS {
        return Err(TechCompareError::Validation(format!(
            "between 1 and {} laptop IDs are required",
            MAX_COMPARE_LAPTOPS
        )));
    }
    let laptops = ids
        .iter()
        .map(|id| catalog.laptop(id))
        .collect::<Result<Vec<_>, _>>()?;
    let comparison = LaptopComparison::of(&laptops);

    let advisory = if advise {
        Some(service::comparison_advisory(advisory_client(config).as_ref(), &laptops).await)
    } else {
        None
    };

    if json_mode {
        print_json(&api::types::CompareResponse {
            comparison,
            advisory,
        });
        return Ok(());
    }

    println!(
        "{:<4} {:<36} {:>10} {:>8} {:>5} {:>5} {:>7}",
        "ID", "Name", "Price", "PPI", "CPU", "GPU", "Weight"
    );
    for row in &comparison.rows {
        println!(
            "{:<4} {:<36} {:>10} {:>8.2} {:>5} {:>5} {:>6}kg",
            row.id,
            row.name,
            row.price,
            row.ppi,
            row.benchmarks.cpu,
            row.benchmarks.gpu,
            row.weight
        );
    }
    println!();
    if let Some(id) = &comparison.best_ppi {
        println!("Best value: {}", id);
    }
    if let Some(id) = &comparison.cheapest {
        println!("Cheapest:   {}", id);
    }
    if let Some(text) = advisory {
        println!();
        println!("{}", text);
    }
    Ok(())
}

// =============================================================================
// IMPORT COMMAND
// =============================================================================

/// Import laptop records from a file or through the collaborator.
pub async fn cmd_import(
    config: &AppConfig,
    file: Option<&Path>,
    urls: &[String],
    json_mode: bool,
) -> Result<(), TechCompareError> {
    let mut session = Session::new();
    let outcome: ImportOutcome = match file {
        Some(path) => {
            let records = load_import_file(path)?;
            service::merge_records(&mut session, records, &service::batch_tag())
        }
        None => service::import_from_urls(advisory_client(config).as_ref(), &mut session, urls).await,
    };

    if json_mode {
        print_json(&outcome);
        return Ok(());
    }

    println!("Imported {} laptops", outcome.imported_count());
    for id in &outcome.imported {
        if let Ok(laptop) = session.catalog().laptop(id) {
            println!("  {:<16} {} (PPI {:.2})", id, laptop.name, calculate_ppi(laptop));
        }
    }
    if !outcome.rejected.is_empty() {
        println!("Rejected {} records", outcome.rejected.len());
        for rejected in &outcome.rejected {
            println!("  #{}: {}", rejected.index, rejected.reason);
        }
    }
    Ok(())
}

// =============================================================================
// CHAT COMMAND
// =============================================================================

/// One-shot question to the hardware consultant.
pub async fn cmd_chat(config: &AppConfig, message: &str, json_mode: bool) -> Result<(), TechCompareError> {
    let reply = service::chat_reply(
        advisory_client(config).as_ref(),
        &[ChatMessage::user(message)],
        &serde_json::Value::Null,
        None,
    )
    .await;

    if json_mode {
        print_json(&api::types::ChatResponse { reply });
    } else {
        println!("{}", reply);
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn build_file_is_evaluated() {
        let file = write_temp(
            r#"{
                "name": "Budget AM5",
                "parts": [
                    {"id": "c", "name": "Ryzen 5", "category": "CPU", "price": 18500, "tdp": 65, "socket": "AM5"},
                    {"id": "m", "name": "B650M", "category": "Motherboard", "price": 14800, "socket": "AM5"},
                    {"id": "p", "name": "650W", "category": "PSU", "price": 4800, "wattage": 650}
                ]
            }"#,
        );

        let build = load_build_file(file.path()).expect("load");
        let summary = BuildSummary::evaluate(&build);
        assert_eq!(build.name, "Budget AM5");
        assert_eq!(summary.total_price, 38_100);
        assert!(summary.compatibility.compatible);
    }

    #[test]
    fn malformed_build_file_is_a_serialization_error() {
        let file = write_temp("{\"parts\": 3}");
        assert!(matches!(
            load_build_file(file.path()),
            Err(TechCompareError::SerializationError(_))
        ));
    }

    #[test]
    fn directories_and_missing_files_are_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(matches!(
            validate_file_path(dir.path()),
            Err(TechCompareError::IoError(_))
        ));
        assert!(validate_file_path(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn oversized_files_are_rejected() {
        let file = write_temp(&"x".repeat(64));
        assert!(validate_file_size(file.path(), 32).is_err());
        assert!(validate_file_size(file.path(), 64).is_ok());
    }

    #[test]
    fn import_file_must_hold_an_array() {
        let file = write_temp(r#"[{"name": "a"}, 3]"#);
        assert_eq!(load_import_file(file.path()).map(|r| r.len()).ok(), Some(2));

        let file = write_temp(r#"{"name": "a"}"#);
        assert!(load_import_file(file.path()).is_err());
    }

    #[test]
    fn builds_from_catalog_ids() {
        let catalog = Catalog::seed();
        let build = build_from_ids(
            &catalog,
            "x",
            "X",
            "cpu-r5-7600, mobo-b650m-ds3h,,psu-cv650",
        )
        .expect("known ids");
        assert_eq!(build.occupied_count(), 3);

        assert!(matches!(
            build_from_ids(&catalog, "x", "X", "cpu-r5-7600,nope"),
            Err(TechCompareError::PartNotFound(_))
        ));
    }
}
