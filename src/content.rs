//! Content scoring
//!
//! This module scores the transcribed answer on five dimensions using lexical
//! heuristics: token and sentence counts plus keyword matching. No dimension
//! depends on another; the rules are order-insensitive.

use crate::types::ContentScores;

/// Phrases indicating the answer grounds itself in a concrete example
pub const EXAMPLE_KEYWORDS: &[&str] =
    &["example", "instance", "experience", "situation", "time when"];

/// Filler phrases that weaken the written answer
pub const FILLER_PHRASES: &[&str] = &["um", "uh", "like", "you know", "kind of", "sort of"];

/// Content scorer for the question/answer text pair
pub struct ContentScorer;

impl ContentScorer {
    /// Score an answer against its question.
    ///
    /// The question is accepted for interface symmetry; no current rule
    /// consults it. Always returns a fully populated record, including for
    /// empty input.
    pub fn score(answer: &str, _question: &str) -> ContentScores {
        let words = word_count(answer);
        let sentences = sentence_count(answer);

        let relevance = if answer.chars().count() > 50 {
            (5 + words / 20).min(10) as f64
        } else {
            4.0
        };

        let clarity = if sentences > 2 {
            (6.0 + sentences as f64 / 2.0).min(10.0)
        } else {
            5.0
        };

        let depth = if contains_any(answer, EXAMPLE_KEYWORDS) {
            8.0
        } else {
            6.0
        };

        let professional = if contains_any(answer, FILLER_PHRASES) {
            6.0
        } else {
            8.0
        };

        let conciseness = if words > 300 {
            6.0
        } else if words < 50 {
            5.0
        } else {
            8.0
        };

        ContentScores {
            relevance,
            clarity,
            depth,
            professional,
            conciseness,
        }
    }
}

/// Whitespace-delimited token count of the trimmed text.
///
/// Empty text counts as one token: splitting an empty string upstream yields
/// a single empty segment, and the scoring thresholds assume that count.
pub(crate) fn word_count(text: &str) -> usize {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        1
    } else {
        trimmed.split_whitespace().count()
    }
}

/// Count of non-empty segments between sentence terminators
fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// Case-insensitive substring test against a keyword set
pub(crate) fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}
