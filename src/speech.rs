//! Speech-delivery analysis
//!
//! This module classifies pause, pace, filler, and vocal-confidence metrics
//! into a confidence level with supporting insights. The rules form an
//! ordered table evaluated top-to-bottom; a later rule may overwrite the
//! level set by an earlier one, so table order is load-bearing: a strong
//! vocal-confidence reading wins over a Low level set by pauses or fillers.

use crate::types::{ConfidenceLevel, SpeechAnalysis, SpeechMetrics};

/// One classification rule: when the predicate holds, the insight is
/// appended and the level override, if any, is applied.
struct SpeechRule {
    applies: fn(&SpeechMetrics) -> bool,
    insight: &'static str,
    set_level: Option<ConfidenceLevel>,
}

/// Ordered rule table. Alternatives over the same metric carry mutually
/// exclusive predicates, so at most one fires per metric. The pace rules are
/// exhaustive: exactly one always fires, and the balanced predicate is the
/// complement of the other two so an unmeasured (NaN) rate still lands there.
const RULES: &[SpeechRule] = &[
    SpeechRule {
        applies: |m| m.pause_seconds > 2.0,
        insight: "Long pauses suggest uncertainty or difficulty organizing thoughts",
        set_level: Some(ConfidenceLevel::Low),
    },
    SpeechRule {
        applies: |m| m.pause_seconds < 0.5,
        insight: "Very short pauses indicate good fluency and preparation",
        set_level: None,
    },
    SpeechRule {
        applies: |m| m.wpm < 120.0,
        insight: "Slow speaking pace may indicate nervousness or over-thinking",
        set_level: None,
    },
    SpeechRule {
        applies: |m| m.wpm > 160.0,
        insight: "Fast speaking pace suggests nervousness or rushing",
        set_level: None,
    },
    SpeechRule {
        applies: |m| !(m.wpm < 120.0) && !(m.wpm > 160.0),
        insight: "Speaking pace is well-balanced and professional",
        set_level: None,
    },
    SpeechRule {
        applies: |m| m.filler_count > 10.0,
        insight: "High filler word usage reduces professional impression",
        set_level: Some(ConfidenceLevel::Low),
    },
    SpeechRule {
        applies: |m| m.filler_count < 3.0,
        insight: "Minimal filler words demonstrate strong communication skills",
        set_level: None,
    },
    SpeechRule {
        applies: |m| m.confidence_score < 0.5,
        insight: "Voice analysis indicates low confidence levels",
        set_level: Some(ConfidenceLevel::Low),
    },
    SpeechRule {
        applies: |m| m.confidence_score > 0.75,
        insight: "Strong vocal confidence detected",
        set_level: Some(ConfidenceLevel::High),
    },
];

/// Speech analyzer for vocal-delivery metrics
pub struct SpeechAnalyzer;

impl SpeechAnalyzer {
    /// Classify delivery metrics into a confidence level and insights
    pub fn assess(metrics: &SpeechMetrics) -> SpeechAnalysis {
        let mut level = ConfidenceLevel::Medium;
        let mut insights = Vec::new();

        for rule in RULES {
            if (rule.applies)(metrics) {
                insights.push(rule.insight.to_string());
                if let Some(new_level) = rule.set_level {
                    level = new_level;
                }
            }
        }

        SpeechAnalysis { level, insights }
    }
}
