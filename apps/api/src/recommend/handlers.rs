//! Axum route handlers for the Recommendation API.

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::extract_pdf_text;
use crate::llm_client::prompts::ADVISOR_PROMPT_TEMPLATE;
use crate::recommend::parser::{parse_recommendations, Recommendation};
use crate::state::AppState;
use crate::storage::store_upload;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub resume_text: String,
    pub recommendations: Vec<Recommendation>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// Accepts a multipart form with a single `resume` PDF field. The upload is
/// persisted, its text extracted, and the advisor model asked for matching
/// internship domains. Returns the extracted text together with the parsed
/// recommendations; an empty `recommendations` array means the model replied
/// without any `Domain:` block, not that the call failed.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<RecommendationResponse>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("resume") {
            let filename = field.file_name().unwrap_or("resume.pdf").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Could not read resume field: {e}")))?;
            upload = Some((filename, bytes));
        }
    }

    let (filename, bytes) =
        upload.ok_or_else(|| AppError::Validation("Missing resume file field".to_string()))?;

    if bytes.is_empty() {
        return Err(AppError::Validation(
            "Uploaded resume file is empty".to_string(),
        ));
    }

    let stored_path = store_upload(&state.config.upload_dir, &filename, &bytes).await?;
    info!("Stored resume upload at {}", stored_path.display());

    let resume_text = extract_pdf_text(&bytes)?;

    let prompt = ADVISOR_PROMPT_TEMPLATE.replace("{resume_text}", &resume_text);
    let reply = state
        .generator
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Recommendation call failed: {e}")))?;

    let recommendations = parse_recommendations(&reply);
    info!("Parsed {} recommendation(s) from reply", recommendations.len());

    Ok(Json(RecommendationResponse {
        resume_text,
        recommendations,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{Generator, LlmError};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct CannedGenerator {
        reply: String,
    }

    #[async_trait]
    impl Generator for CannedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.reply.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl Generator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    #[tokio::test]
    async fn test_generate_then_parse_through_trait_object() {
        let generator: Arc<dyn Generator> = Arc::new(CannedGenerator {
            reply: "Domain: Web Development\nReason: Has HTML/CSS projects\n- Learn React"
                .to_string(),
        });

        let prompt = ADVISOR_PROMPT_TEMPLATE.replace("{resume_text}", "sample resume text");
        let reply = generator.generate(&prompt).await.unwrap();
        let records = parse_recommendations(&reply);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].domain, "Web Development");
        assert_eq!(records[0].improvements, vec!["Learn React"]);
    }

    #[tokio::test]
    async fn test_generator_failure_maps_to_llm_error() {
        let generator: Arc<dyn Generator> = Arc::new(FailingGenerator);

        let result = generator
            .generate("prompt")
            .await
            .map_err(|e| AppError::Llm(format!("Recommendation call failed: {e}")));

        assert!(matches!(result, Err(AppError::Llm(_))));
    }
}
