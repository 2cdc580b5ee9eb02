//! # Advisory Service
//!
//! Advisory operations with their fixed fallbacks. Every function here is
//! infallible from the caller's point of view: collaborator errors are logged
//! at `warn` and replaced by the operation's fallback.

use super::{AdvisoryClient, AdvisoryError, AdvisoryPrompt, ChatMessage, ImageAttachment, prompts};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};
use techcompare_core::primitives::MAX_IMPORT_URLS;
use techcompare_core::{Build, BuildSummary, ImportOutcome, Laptop, LaptopDraft, Session};

/// Reply when the chat collaborator cannot be reached.
pub const CHAT_FAILURE_REPLY: &str = "Sorry, I hit a technical snag. Please try again.";

/// Reply when the chat collaborator answers with nothing.
pub const CHAT_EMPTY_REPLY: &str = "I'm sorry, I couldn't generate a response.";

/// Comparison advisory fallback.
pub const COMPARISON_FALLBACK: &str = "DECISION_MATRIX_FAILURE: DATA_SYNC_ERROR";

/// Build advisory fallback.
pub const BUILD_ADVISORY_FALLBACK: &str = "BUILD_ADVISORY_UNAVAILABLE";

async fn generate(
    client: Option<&AdvisoryClient>,
    prompt: &AdvisoryPrompt,
    operation: &'static str,
) -> Option<String> {
    let result = match client {
        Some(client) => client.generate_advisory(prompt).await,
        None => Err(AdvisoryError::NotConfigured),
    };
    match result {
        Ok(text) if !text.trim().is_empty() => Some(text),
        Ok(_) => {
            tracing::warn!(operation, "Advisory collaborator returned empty text");
            None
        }
        Err(e) => {
            tracing::warn!(operation, error = %e, "Advisory request failed");
            None
        }
    }
}

/// Answer the latest chat message.
pub async fn chat_reply(
    client: Option<&AdvisoryClient>,
    messages: &[ChatMessage],
    context: &Value,
    image: Option<ImageAttachment>,
) -> String {
    let Some(prompt) = prompts::chat(messages, context, image) else {
        return CHAT_EMPTY_REPLY.to_string();
    };

    let result = match client {
        Some(client) => client.generate_advisory(&prompt).await,
        None => Err(AdvisoryError::NotConfigured),
    };
    match result {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => CHAT_EMPTY_REPLY.to_string(),
        Err(e) => {
            tracing::warn!(operation = "chat", error = %e, "Advisory request failed");
            CHAT_FAILURE_REPLY.to_string()
        }
    }
}

/// Prose verdict over the compared laptops.
pub async fn comparison_advisory(client: Option<&AdvisoryClient>, laptops: &[&Laptop]) -> String {
    generate(client, &prompts::comparison(laptops), "comparison")
        .await
        .unwrap_or_else(|| COMPARISON_FALLBACK.to_string())
}

/// Prose review of a build.
pub async fn build_advisory(
    client: Option<&AdvisoryClient>,
    build: &Build,
    summary: &BuildSummary,
) -> String {
    generate(client, &prompts::build_review(build, summary), "build_review")
        .await
        .unwrap_or_else(|| BUILD_ADVISORY_FALLBACK.to_string())
}

/// Ask the collaborator for laptop records. Any failure yields no records.
///
/// URLs beyond `MAX_IMPORT_URLS` are not sent.
pub async fn fetch_laptop_records(client: Option<&AdvisoryClient>, urls: &[String]) -> Vec<Value> {
    let urls: Vec<String> = urls
        .iter()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .take(MAX_IMPORT_URLS)
        .collect();
    if urls.is_empty() {
        return Vec::new();
    }

    let result = match client {
        Some(client) => client.extract_structured_data(&urls).await,
        None => Err(AdvisoryError::NotConfigured),
    };
    result.unwrap_or_else(|e| {
        tracing::warn!(operation = "extract", error = %e, "Batch extraction failed");
        Vec::new()
    })
}

/// Tag distinguishing one import batch from another: milliseconds since epoch.
#[must_use]
pub fn batch_tag() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
        .to_string()
}

/// Decode raw records into drafts and merge them into the session catalog.
///
/// Records that are not even draft-shaped are rejected with the decode error.
pub fn merge_records(session: &mut Session, records: Vec<Value>, batch_tag: &str) -> ImportOutcome {
    let drafts = records.into_iter().map(|record| {
        serde_json::from_value::<LaptopDraft>(record).map_err(|e| format!("malformed record: {e}"))
    });
    let outcome = session.import_laptops(drafts, batch_tag);

    for rejected in &outcome.rejected {
        tracing::warn!(
            index = rejected.index,
            reason = %rejected.reason,
            "Dropped imported laptop record"
        );
    }
    tracing::info!(
        imported = outcome.imported_count(),
        rejected = outcome.rejected.len(),
        "Laptop import merged"
    );
    outcome
}

/// Fetch records for the URLs and merge them into the session catalog.
pub async fn import_from_urls(
    client: Option<&AdvisoryClient>,
    session: &mut Session,
    urls: &[String],
) -> ImportOutcome {
    let records = fetch_laptop_records(client, urls).await;
    if records.is_empty() {
        return ImportOutcome::nothing();
    }
    merge_records(session, records, &batch_tag())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdvisoryConfig;
    use axum::{Router, http::StatusCode, routing::post};
    use serde_json::json;

    /// Serve a fixed `/generate` answer on an ephemeral port and return a client for it.
    async fn collaborator(status: StatusCode, body: String) -> AdvisoryClient {
        let app = Router::new().route(
            "/generate",
            post(move || {
                let body = body.clone();
                async move { (status, body) }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move { axum::serve(listener, app).await });

        let config = AdvisoryConfig {
            url: Some(format!("http://{addr}")),
            ..AdvisoryConfig::default()
        };
        AdvisoryClient::from_config(&config).expect("configured")
    }

    fn answer(text: &str) -> String {
        json!({ "text": text }).to_string()
    }

    #[tokio::test]
    async fn fallbacks_without_collaborator() {
        let catalog = techcompare_core::Catalog::seed();
        let laptops: Vec<&Laptop> = catalog.laptops().iter().take(2).collect();
        assert_eq!(comparison_advisory(None, &laptops).await, COMPARISON_FALLBACK);

        let build = Build::new("build-a", "A");
        let summary = BuildSummary::evaluate(&build);
        assert_eq!(build_advisory(None, &build, &summary).await, BUILD_ADVISORY_FALLBACK);

        let reply = chat_reply(None, &[ChatMessage::user("hi")], &Value::Null, None).await;
        assert_eq!(reply, CHAT_FAILURE_REPLY);

        let reply = chat_reply(None, &[], &Value::Null, None).await;
        assert_eq!(reply, CHAT_EMPTY_REPLY);
    }

    #[tokio::test]
    async fn import_without_collaborator_imports_nothing() {
        let mut session = Session::new();
        let outcome =
            import_from_urls(None, &mut session, &["https://shop.example/x".to_string()]).await;
        assert_eq!(outcome, ImportOutcome::nothing());
        assert_eq!(session.catalog().laptops().len(), 15);
    }

    #[tokio::test]
    async fn generated_text_is_returned() {
        let client = collaborator(StatusCode::OK, answer("[WINNER] Laptop 1")).await;
        let catalog = techcompare_core::Catalog::seed();
        let laptops: Vec<&Laptop> = catalog.laptops().iter().take(2).collect();
        assert_eq!(
            comparison_advisory(Some(&client), &laptops).await,
            "[WINNER] Laptop 1"
        );
    }

    #[tokio::test]
    async fn error_statuses_fall_back() {
        let catalog = techcompare_core::Catalog::seed();
        let laptops: Vec<&Laptop> = catalog.laptops().iter().take(2).collect();
        let failing = collaborator(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()).await;
        assert_eq!(
            comparison_advisory(Some(&failing), &laptops).await,
            COMPARISON_FALLBACK
        );

        let build = Build::new("build-a", "A");
        let summary = BuildSummary::evaluate(&build);
        let unauthorized = collaborator(StatusCode::UNAUTHORIZED, String::new()).await;
        assert_eq!(
            build_advisory(Some(&unauthorized), &build, &summary).await,
            BUILD_ADVISORY_FALLBACK
        );

        let limited = collaborator(StatusCode::TOO_MANY_REQUESTS, String::new()).await;
        let reply = chat_reply(Some(&limited), &[ChatMessage::user("hi")], &Value::Null, None).await;
        assert_eq!(reply, CHAT_FAILURE_REPLY);
    }

    #[tokio::test]
    async fn unparseable_body_falls_back() {
        let client = collaborator(StatusCode::OK, "not json".to_string()).await;
        let reply = chat_reply(Some(&client), &[ChatMessage::user("hi")], &Value::Null, None).await;
        assert_eq!(reply, CHAT_FAILURE_REPLY);

        let empty = collaborator(StatusCode::OK, answer("   ")).await;
        let reply = chat_reply(Some(&empty), &[ChatMessage::user("hi")], &Value::Null, None).await;
        assert_eq!(reply, CHAT_EMPTY_REPLY);
    }

    #[tokio::test]
    async fn non_array_extraction_imports_nothing() {
        let client = collaborator(StatusCode::OK, answer("{}")).await;
        let mut session = Session::new();
        let outcome =
            import_from_urls(Some(&client), &mut session, &["https://shop.example/x".to_string()])
                .await;
        assert_eq!(outcome, ImportOutcome::nothing());
        assert_eq!(session.catalog().laptops().len(), 15);
    }

    #[tokio::test]
    async fn extracted_record_is_imported() {
        let mut session = Session::new();
        let mut record = serde_json::to_value(LaptopDraft::from(&session.catalog().laptops()[0]))
            .expect("serialize");
        record["id"] = json!("zb14");
        record["name"] = json!("ZenBook 14");
        let text = serde_json::to_string(&json!([record])).expect("serialize");

        let client = collaborator(StatusCode::OK, answer(&text)).await;
        let outcome =
            import_from_urls(Some(&client), &mut session, &["https://shop.example/zb14".to_string()])
                .await;

        assert_eq!(outcome.imported, vec!["zb14"]);
        assert!(outcome.rejected.is_empty());
        assert_eq!(session.catalog().laptops().len(), 16);
        assert_eq!(session.catalog().laptops()[0].id, "zb14");
    }

    #[test]
    fn merge_records_rejects_malformed_shapes() {
        let mut session = Session::new();
        let mut good = serde_json::to_value(LaptopDraft::from(&session.catalog().laptops()[0]))
            .expect("serialize");
        good["id"] = Value::Null;

        let outcome = merge_records(
            &mut session,
            vec![json!("just a string"), good, json!({"ram": "lots"})],
            "5",
        );

        assert_eq!(outcome.imported, vec!["ext-5-1"]);
        let indices: Vec<_> = outcome.rejected.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 2]);
        assert!(outcome.rejected[0].reason.starts_with("malformed record"));
    }

    #[test]
    fn batch_tag_is_numeric() {
        assert!(batch_tag().chars().all(|c| c.is_ascii_digit()));
    }
}
