//! Prompt builders for each advisory operation.

use super::{AdvisoryPrompt, ChatMessage, ImageAttachment, ResponseFormat};
use serde_json::Value;
use techcompare_core::{Build, BuildSummary, Laptop, LaptopBrief};

const COMPARISON_TEMPERATURE: f64 = 0.2;
const CHAT_TEMPERATURE: f64 = 0.7;
const EXTRACTION_TEMPERATURE: f64 = 0.1;
const BUILD_REVIEW_TEMPERATURE: f64 = 0.2;

/// Tool the collaborator may use to look up live product data.
pub const WEB_SEARCH_TOOL: &str = "web_search";

fn text_prompt(prompt: String, temperature: f64) -> AdvisoryPrompt {
    AdvisoryPrompt {
        prompt,
        history: Vec::new(),
        system_instruction: None,
        temperature,
        response_format: ResponseFormat::Text,
        tools: Vec::new(),
        image: None,
    }
}

/// Dense prose verdict over the laptops in the comparison tray.
#[must_use]
pub fn comparison(laptops: &[&Laptop]) -> AdvisoryPrompt {
    let briefs: Vec<LaptopBrief> = laptops.iter().map(|l| l.brief()).collect();
    let data = serde_json::to_string(&briefs).unwrap_or_else(|_| "[]".to_string());

    text_prompt(
        format!(
            "Task: Compare {count} laptops for a buyer in India.\n\
             Data: {data}\n\
             \n\
             Constraint: Provide a DENSE, 3-4 line technical summary ONLY.\n\
             Format:\n\
             [WINNER] Identify the best choice and why.\n\
             [STATS] Highlight the key spec delta (e.g., \"RTX 4060 vs 3050\").\n\
             [BEST_FOR] Use-case recommendation.\n\
             [VERDICT] Final one-word buying signal.\n\
             \n\
             Tone: Cybernetic, professional, ultra-concise.",
            count = laptops.len(),
        ),
        COMPARISON_TEMPERATURE,
    )
}

/// System instruction for the hardware consultant chat.
#[must_use]
pub fn chat_system_instruction(context: &Value) -> String {
    format!(
        "You are TechCompare AI, a world-class hardware consultant.\n\
         Users will ask you about laptops and hardware troubleshooting.\n\
         Context Data of Current Comparison: {context}\n\
         Always be objective, prioritize performance-to-price ratios, and identify potential bottlenecks."
    )
}

/// Chat turn: the last message becomes the prompt, earlier ones the history.
///
/// Returns `None` when there is no message to answer.
#[must_use]
pub fn chat(
    messages: &[ChatMessage],
    context: &Value,
    image: Option<ImageAttachment>,
) -> Option<AdvisoryPrompt> {
    let (last, history) = messages.split_last()?;
    Some(AdvisoryPrompt {
        prompt: last.text.clone(),
        history: history.to_vec(),
        system_instruction: Some(chat_system_instruction(context)),
        temperature: CHAT_TEMPERATURE,
        response_format: ResponseFormat::Text,
        tools: Vec::new(),
        image,
    })
}

/// Batch extraction of laptop records from product URLs, answered as JSON.
#[must_use]
pub fn extraction(urls: &[String]) -> AdvisoryPrompt {
    AdvisoryPrompt {
        prompt: format!(
            "Analyze the following product URLs concurrently:\n\
             {urls}\n\
             \n\
             Requirement: For EACH URL, use web search to identify the EXACT model, current Indian pricing (INR), and technical specs.\n\
             Extract: Brand, Model Name, CPU, GPU, RAM, Storage (GB), Display Size (Inches), Weight (kg), Screen (Nits, sRGB, Res).\n\
             Generate benchmarks (0-100).\n\
             Return a JSON array of objects with the fields: id, name, brand, cpu, gpu, ram, storageSize, \
             displaySize, weight, screen {{nits, srgb, resolution}}, benchmarks {{cpu, gpu, buildQuality}}, price, image.",
            urls = urls.join("\n"),
        ),
        history: Vec::new(),
        system_instruction: None,
        temperature: EXTRACTION_TEMPERATURE,
        response_format: ResponseFormat::Json,
        tools: vec![WEB_SEARCH_TOOL.to_string()],
        image: None,
    }
}

/// Review of a PC build, given the engine's own verdict.
#[must_use]
pub fn build_review(build: &Build, summary: &BuildSummary) -> AdvisoryPrompt {
    let parts: Vec<String> = build
        .parts()
        .map(|p| format!("- {}: {} (INR {})", p.category, p.name, p.price))
        .collect();
    let missing: Vec<&str> = build.missing().iter().map(|c| c.label()).collect();
    let issues = summary.compatibility.messages();

    text_prompt(
        format!(
            "Task: Review the PC build \"{name}\" for a buyer in India.\n\
             Parts:\n{parts}\n\
             Empty slots: {missing}\n\
             Total price: INR {price}\n\
             Estimated power draw: {power}W\n\
             Compatibility issues: {issues}\n\
             \n\
             Constraint: 3-4 lines. Name the main bottleneck, one upgrade or saving, and a final verdict.\n\
             Do not contradict the compatibility issues listed above.",
            name = build.name,
            parts = if parts.is_empty() { "(none)".to_string() } else { parts.join("\n") },
            missing = if missing.is_empty() { "none".to_string() } else { missing.join(", ") },
            price = summary.total_price,
            power = summary.total_power_draw,
            issues = if issues.is_empty() { "none".to_string() } else { issues.join("; ") },
        ),
        BUILD_REVIEW_TEMPERATURE,
    )
}

// =============================================================================
// TESTS
// =============================================================================
