// Humaniser Core Services

pub mod detector;
pub mod number_humanizer;
pub mod pipeline;
pub mod rewriter;

pub use detector::detect_indicators;
pub use number_humanizer::humanize_numbers;
pub use pipeline::Pipeline;
pub use rewriter::{clean_symbols, LexicalRewriter, RewriterError, TextRewriter};
