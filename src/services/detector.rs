// AI-Indicator Detector
// Deterministic, explainable rule engine: four weighted checks over the raw
// input text, accumulated into a bounded confidence score. Not a calibrated
// classifier.

use crate::models::{DetectionAnalysis, DetectionResult};
use regex::Regex;
use std::collections::HashSet;

const FORMAL_WORDS: [&str; 5] = ["furthermore", "moreover", "consequently", "thus", "therefore"];
const JARGON_WORDS: [&str; 5] = ["implementation", "methodology", "framework", "optimization", "algorithm"];

const DIVERSITY_THRESHOLD: f64 = 0.30;
const FORMAL_COUNT_THRESHOLD: usize = 2;
const JARGON_COUNT_THRESHOLD: usize = 1;
const MIN_SENTENCES_FOR_COMPLEXITY: usize = 3;
const AVG_SENTENCE_WORDS_THRESHOLD: f64 = 25.0;

const DIVERSITY_SCORE: u32 = 20;
const FORMAL_SCORE: u32 = 15;
const COMPLEXITY_SCORE: u32 = 10;
const JARGON_SCORE: u32 = 10;

const MAX_CONFIDENCE: u32 = 100;
const AI_DECISION_THRESHOLD: u32 = 30;

/// Score `text` for signals of machine authorship.
///
/// Checks run in a fixed order (vocabulary, formal language, sentence
/// complexity, jargon) so the indicator list is deterministic. Zero-token
/// input is a defined edge case: the reference computation divides by the
/// word count, so here it short-circuits to a zero-confidence result with a
/// single "insufficient text" indicator instead.
pub fn detect_indicators(text: &str) -> DetectionResult {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return DetectionResult {
            is_ai_generated: false,
            confidence: 0,
            indicators: vec!["Insufficient text for analysis".to_string()],
            analysis: DetectionAnalysis::default(),
        };
    }

    let mut indicators = Vec::new();
    let mut confidence: u32 = 0;
    let lower = text.to_lowercase();

    // Vocabulary diversity: unique words over total words.
    let unique: HashSet<&str> = words.iter().copied().collect();
    let vocabulary_diversity = unique.len() as f64 / words.len() as f64;
    if vocabulary_diversity < DIVERSITY_THRESHOLD {
        indicators.push("Low vocabulary diversity".to_string());
        confidence += DIVERSITY_SCORE;
    }

    // Formal connectives, counted by substring presence (one per list word).
    let formal_word_count = FORMAL_WORDS.iter().filter(|w| lower.contains(*w)).count();
    if formal_word_count > FORMAL_COUNT_THRESHOLD {
        indicators.push("Excessive formal language".to_string());
        confidence += FORMAL_SCORE;
    }

    // Sentence complexity. Splitting on terminator runs keeps the empty
    // trailing fragment, which is part of the observed averaging behavior.
    let sentence_re = Regex::new(r"[.!?]+").unwrap();
    let sentences: Vec<&str> = sentence_re.split(text).collect();
    let avg_sentence_length = if sentences.len() > MIN_SENTENCES_FOR_COMPLEXITY {
        sentences.iter().map(|s| s.split_whitespace().count()).sum::<usize>() as f64
            / sentences.len() as f64
    } else {
        0.0
    };
    if sentences.len() > MIN_SENTENCES_FOR_COMPLEXITY && avg_sentence_length > AVG_SENTENCE_WORDS_THRESHOLD {
        indicators.push("Long, complex sentences".to_string());
        confidence += COMPLEXITY_SCORE;
    }

    // Technical jargon, same substring counting as the formal check.
    let jargon_count = JARGON_WORDS.iter().filter(|w| lower.contains(*w)).count();
    if jargon_count > JARGON_COUNT_THRESHOLD {
        indicators.push("Technical jargon".to_string());
        confidence += JARGON_SCORE;
    }

    let confidence = confidence.min(MAX_CONFIDENCE);

    DetectionResult {
        is_ai_generated: confidence > AI_DECISION_THRESHOLD,
        confidence,
        indicators,
        analysis: DetectionAnalysis {
            vocabulary_diversity,
            formal_word_count,
            jargon_count,
            avg_sentence_length,
        },
    }
}
