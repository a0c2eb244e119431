// Humaniser Data Models
// Request/response types for the API surface plus the core result records.

use serde::{Deserialize, Serialize};

// ============ Requests ============

/// Body accepted by every POST operation. A missing `text` field
/// deserializes to the empty string and is rejected by the handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HumanizeRequest {
    #[serde(default)]
    pub text: String,
}

// ============ Detection ============

/// Raw metrics backing the detection verdict. `avg_sentence_length` is
/// only populated when the text has more than three sentences; otherwise
/// it is reported as 0 (observable contract, kept from the reference).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionAnalysis {
    pub vocabulary_diversity: f64,
    pub formal_word_count: usize,
    pub jargon_count: usize,
    pub avg_sentence_length: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    pub is_ai_generated: bool,
    /// Bounded to [0, 100].
    pub confidence: u32,
    pub indicators: Vec<String>,
    pub analysis: DetectionAnalysis,
}

// ============ Pipeline ============

/// Aggregate result of the three-stage pipeline. Owned entirely by the
/// caller; never cached or shared between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    pub original_text: String,
    /// Text after the lexical rewrite stage.
    pub humanized_text: String,
    /// Text after numeric humanization of the rewritten text.
    pub final_text: String,
    /// Computed against the original text, not any rewritten stage.
    pub ai_detection: DetectionResult,
    /// Wall-clock seconds across all three stages.
    pub processing_time: f64,
}

// ============ Responses ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteTextResponse {
    pub humanized_text: String,
    pub processing_time: f64,
    pub word_count: usize,
    pub changes_made: String,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HumanizeNumbersResponse {
    pub humanized_text: String,
    pub numbers_processed: bool,
    pub processing_time: f64,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComprehensiveResponse {
    pub humanized_text: String,
    pub processing_time: f64,
    pub text_changes: String,
    pub number_changes: String,
    pub total_changes: String,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectAiResponse {
    pub is_ai_generated: bool,
    pub confidence: u32,
    pub indicators: Vec<String>,
    pub analysis: String,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub text_rewriting: String,
    pub number_formatting: String,
    pub ai_detection: String,
    pub comprehensive_pipeline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub services: ServiceStatus,
}
