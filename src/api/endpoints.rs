// Endpoint handlers for the four pipeline operations plus health.
// Each operation is independently invokable; none goes through another's
// stage boundaries.

use axum::extract::State;
use axum::Json;
use std::time::Instant;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{
    ComprehensiveResponse, DetectAiResponse, HealthResponse, HumanizeNumbersResponse,
    HumanizeRequest, RewriteTextResponse, ServiceStatus,
};
use crate::services::{detect_indicators, humanize_numbers};

const SIGNIFICANT: &str = "Significant";
const MINOR: &str = "Minor";

fn require_text(req: &HumanizeRequest) -> Result<&str, ApiError> {
    if req.text.is_empty() {
        return Err(ApiError::MissingText);
    }
    Ok(&req.text)
}

fn round3(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}

/// `POST /api/humanize/text` — lexical rewrite only.
pub async fn rewrite_text(
    State(ctx): State<ApiContext>,
    Json(req): Json<HumanizeRequest>,
) -> Result<Json<RewriteTextResponse>, ApiError> {
    let text = require_text(&req)?;

    let started = Instant::now();
    let humanized_text = ctx.pipeline.rewriter().rewrite(text);
    let processing_time = round3(started.elapsed().as_secs_f64());

    let changes_made = if humanized_text != text { SIGNIFICANT } else { MINOR };
    Ok(Json(RewriteTextResponse {
        word_count: text.split_whitespace().count(),
        humanized_text,
        processing_time,
        changes_made: changes_made.to_string(),
        success: true,
    }))
}

/// `POST /api/humanize/numbers` — numeric humanizer only.
pub async fn humanize_numbers_in_text(
    State(_ctx): State<ApiContext>,
    Json(req): Json<HumanizeRequest>,
) -> Result<Json<HumanizeNumbersResponse>, ApiError> {
    let text = require_text(&req)?;

    let started = Instant::now();
    let humanized_text = humanize_numbers(text);
    let processing_time = round3(started.elapsed().as_secs_f64());

    Ok(Json(HumanizeNumbersResponse {
        numbers_processed: humanized_text != text,
        humanized_text,
        processing_time,
        success: true,
    }))
}

/// `POST /api/humanize/comprehensive` — full three-stage pipeline. The
/// change flags are literal string inequalities between stage boundaries.
pub async fn comprehensive(
    State(ctx): State<ApiContext>,
    Json(req): Json<HumanizeRequest>,
) -> Result<Json<ComprehensiveResponse>, ApiError> {
    let text = require_text(&req)?;

    let result = ctx.pipeline.process(text);

    let text_changes = if result.humanized_text != result.original_text { SIGNIFICANT } else { MINOR };
    let number_changes = if result.final_text != result.humanized_text { SIGNIFICANT } else { "None" };
    let total_changes = if result.final_text != result.original_text { SIGNIFICANT } else { MINOR };

    Ok(Json(ComprehensiveResponse {
        humanized_text: result.final_text,
        processing_time: round3(result.processing_time),
        text_changes: text_changes.to_string(),
        number_changes: number_changes.to_string(),
        total_changes: total_changes.to_string(),
        success: true,
    }))
}

/// `POST /api/detect/ai` — indicator detection only.
pub async fn detect_ai(
    State(_ctx): State<ApiContext>,
    Json(req): Json<HumanizeRequest>,
) -> Result<Json<DetectAiResponse>, ApiError> {
    let text = require_text(&req)?;

    let result = detect_indicators(text);
    let analysis = format!(
        "Text shows {}% confidence of being AI-generated",
        result.confidence
    );

    Ok(Json(DetectAiResponse {
        is_ai_generated: result.is_ai_generated,
        confidence: result.confidence,
        indicators: result.indicators,
        analysis,
        success: true,
    }))
}

/// `GET /api/health` — availability check.
pub async fn health(State(_ctx): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services: ServiceStatus {
            text_rewriting: "available".to_string(),
            number_formatting: "available".to_string(),
            ai_detection: "available".to_string(),
            comprehensive_pipeline: "available".to_string(),
        },
    })
}
