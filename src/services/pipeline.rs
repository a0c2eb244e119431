// Comprehensive Pipeline Orchestrator
// Sequences lexical rewrite -> numeric humanization -> indicator detection
// over one input. Stateless; concurrent calls need no coordination.

use crate::models::PipelineResult;
use crate::services::detector::detect_indicators;
use crate::services::number_humanizer::humanize_numbers;
use crate::services::rewriter::TextRewriter;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

pub struct Pipeline {
    rewriter: Arc<dyn TextRewriter>,
}

impl Pipeline {
    pub fn new(rewriter: Arc<dyn TextRewriter>) -> Self {
        Self { rewriter }
    }

    /// The lexical stage on its own, for the rewrite-only endpoint.
    pub fn rewriter(&self) -> &dyn TextRewriter {
        self.rewriter.as_ref()
    }

    /// Run all three stages. Detection deliberately runs against the
    /// original text, not the rewritten variants, so the score reflects the
    /// input as submitted.
    pub fn process(&self, text: &str) -> PipelineResult {
        let started = Instant::now();
        debug!(chars = text.len(), "pipeline.start");

        let humanized_text = self.rewriter.rewrite(text);
        debug!(changed = humanized_text != text, "pipeline.rewrite_done");

        let final_text = humanize_numbers(&humanized_text);
        debug!(changed = final_text != humanized_text, "pipeline.numbers_done");

        let ai_detection = detect_indicators(text);
        let processing_time = started.elapsed().as_secs_f64();
        info!(
            processing_ms = started.elapsed().as_millis() as u64,
            confidence = ai_detection.confidence,
            is_ai_generated = ai_detection.is_ai_generated,
            "pipeline.done"
        );

        PipelineResult {
            original_text: text.to_string(),
            humanized_text,
            final_text,
            ai_detection,
            processing_time,
        }
    }
}
