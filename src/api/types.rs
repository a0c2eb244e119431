// Shared state for the API layer.

use crate::services::{Pipeline, TextRewriter};
use std::sync::Arc;

/// Shared context for all routes. The pipeline is stateless, so a single
/// instance serves concurrent requests without coordination.
#[derive(Clone)]
pub struct ApiContext {
    pub pipeline: Arc<Pipeline>,
}

impl ApiContext {
    pub fn new(rewriter: Arc<dyn TextRewriter>) -> Self {
        Self {
            pipeline: Arc::new(Pipeline::new(rewriter)),
        }
    }
}
