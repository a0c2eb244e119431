// Lexical Rewriter
// Synonym substitution and symbol cleanup behind the TextRewriter trait so
// the pipeline can run against a stub in tests.

use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;
use tracing::info;

/// Capability interface for the lexical rewrite stage.
pub trait TextRewriter: Send + Sync {
    fn rewrite(&self, text: &str) -> String;
}

#[derive(Debug, Error)]
pub enum RewriterError {
    #[error("lexicon line {line} is malformed: {content:?}")]
    MalformedLexicon { line: usize, content: String },
    #[error("lexicon contains no entries")]
    EmptyLexicon,
}

const LEXICON: &str = include_str!("lexicon.tsv");

/// Built-in lexical rewriter: normalizes typographic symbols, then replaces
/// formal words with plain equivalents from the embedded lexicon.
pub struct LexicalRewriter {
    synonyms: HashMap<String, String>,
    word_re: Regex,
}

impl LexicalRewriter {
    /// Parse the embedded lexicon. A malformed lexicon is fatal at startup:
    /// the service refuses to start rather than rewriting with a partial
    /// word table.
    pub fn load() -> Result<Self, RewriterError> {
        let synonyms = parse_lexicon(LEXICON)?;
        info!(entries = synonyms.len(), "lexicon.loaded");

        Ok(Self {
            synonyms,
            word_re: Regex::new(r"[A-Za-z]+(?:'[A-Za-z]+)?").unwrap(),
        })
    }

    fn replace_words(&self, text: &str) -> String {
        self.word_re
            .replace_all(text, |caps: &regex::Captures<'_>| {
                let word = &caps[0];
                match self.synonyms.get(&word.to_lowercase()) {
                    Some(replacement) => match_case(replacement, word),
                    None => word.to_string(),
                }
            })
            .into_owned()
    }
}

impl TextRewriter for LexicalRewriter {
    fn rewrite(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        self.replace_words(&clean_symbols(text))
    }
}

/// Parse lexicon source into a lowercase word table. Lines are
/// tab-separated pairs; blank lines and `#` comments are skipped.
fn parse_lexicon(source: &str) -> Result<HashMap<String, String>, RewriterError> {
    let mut synonyms = HashMap::new();
    for (idx, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (from, to) = trimmed.split_once('\t').ok_or(RewriterError::MalformedLexicon {
            line: idx + 1,
            content: trimmed.to_string(),
        })?;
        let (from, to) = (from.trim(), to.trim());
        if from.is_empty() || to.is_empty() {
            return Err(RewriterError::MalformedLexicon {
                line: idx + 1,
                content: trimmed.to_string(),
            });
        }
        synonyms.insert(from.to_lowercase(), to.to_lowercase());
    }
    if synonyms.is_empty() {
        return Err(RewriterError::EmptyLexicon);
    }
    Ok(synonyms)
}

/// Normalize typographic symbols to plain ASCII equivalents. Deliberately
/// conservative: plain ASCII text passes through unchanged.
pub fn clean_symbols(text: &str) -> String {
    text.replace(['\u{201c}', '\u{201d}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'")
        .replace('\u{2014}', "-")
        .replace(['\u{00A0}', '\u{3000}'], " ")
}

/// Carry the source word's capitalization over to the replacement.
fn match_case(replacement: &str, original: &str) -> String {
    if original.chars().all(|c| c.is_uppercase()) && original.len() > 1 {
        return replacement.to_uppercase();
    }
    if original.chars().next().is_some_and(|c| c.is_uppercase()) {
        let mut chars = replacement.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        };
    }
    replacement.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewriter() -> LexicalRewriter {
        LexicalRewriter::load().expect("embedded lexicon should parse")
    }

    #[test]
    fn test_load_embedded_lexicon() {
        let r = rewriter();
        assert!(r.synonyms.len() >= 20);
    }

    #[test]
    fn test_malformed_lexicon_line_is_an_error() {
        let source = "utilize\tuse\ncommence begin\n";
        let err = parse_lexicon(source).unwrap_err();
        assert!(matches!(
            err,
            RewriterError::MalformedLexicon { line: 2, ref content } if content == "commence begin"
        ));
    }

    #[test]
    fn test_lexicon_pair_with_blank_side_is_an_error() {
        let err = parse_lexicon("utilize\t \n").unwrap_err();
        assert!(matches!(err, RewriterError::MalformedLexicon { line: 1, .. }));
    }

    #[test]
    fn test_lexicon_without_entries_is_an_error() {
        for source in ["", "# comments only\n\n"] {
            let err = parse_lexicon(source).unwrap_err();
            assert!(matches!(err, RewriterError::EmptyLexicon));
        }
    }

    #[test]
    fn test_lexicon_skips_comments_and_blank_lines() {
        let table = parse_lexicon("# header\n\nutilize\tuse\n").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table["utilize"], "use");
    }

    #[test]
    fn test_replaces_formal_words() {
        let r = rewriter();
        let out = r.rewrite("We utilize the tool to facilitate progress.");
        assert_eq!(out, "We use the tool to help progress.");
    }

    #[test]
    fn test_preserves_capitalization() {
        let r = rewriter();
        assert_eq!(r.rewrite("Utilize it."), "Use it.");
        assert_eq!(r.rewrite("UTILIZE it."), "USE it.");
    }

    #[test]
    fn test_whole_word_only() {
        let r = rewriter();
        // "utilizer" is not a lexicon entry and must not be partially rewritten.
        assert_eq!(r.rewrite("the utilizer"), "the utilizer");
    }

    #[test]
    fn test_clean_symbols() {
        assert_eq!(clean_symbols("\u{201c}quoted\u{201d}"), "\"quoted\"");
        assert_eq!(clean_symbols("a\u{2014}b"), "a-b");
        assert_eq!(clean_symbols("a\u{00A0}b"), "a b");
    }

    #[test]
    fn test_plain_ascii_is_untouched() {
        let r = rewriter();
        let text = "Nothing here needs rewriting at all.";
        assert_eq!(r.rewrite(text), text);
    }

    #[test]
    fn test_empty_input() {
        let r = rewriter();
        assert_eq!(r.rewrite(""), "");
    }
}
