//! Non-verbal analysis
//!
//! This module classifies eye-contact, smile, and free-text gesture metrics
//! into a body-language impression with supporting insights. Like the speech
//! analyzer, the rules form an ordered table and a later rule may overwrite
//! the impression set by an earlier one: a nervous-gesture match wins over a
//! Strong impression earned through eye contact.
//!
//! The emotion-distribution descriptor is carried on the metrics but not
//! consulted by any current rule.

use crate::content::contains_any;
use crate::types::{Impression, NonVerbalAnalysis, NonVerbalMetrics};

/// Gesture descriptors that read as nervous
pub const NERVOUS_GESTURE_KEYWORDS: &[&str] = &["excessive", "fidgeting"];

/// Gesture descriptors that read as controlled
pub const CONTROLLED_GESTURE_KEYWORDS: &[&str] = &["minimal", "none"];

/// One classification rule: when the predicate holds, the insight is
/// appended and the impression override, if any, is applied.
struct NonVerbalRule {
    applies: fn(&NonVerbalMetrics) -> bool,
    insight: &'static str,
    set_impression: Option<Impression>,
}

/// Ordered rule table. The controlled-gesture predicate carries the negation
/// of the nervous-gesture match because a description can contain keywords
/// from both sets and the nervous reading takes precedence.
const RULES: &[NonVerbalRule] = &[
    NonVerbalRule {
        applies: |m| m.eye_contact > 0.7,
        insight: "Excellent eye contact shows engagement and confidence",
        set_impression: Some(Impression::Strong),
    },
    NonVerbalRule {
        applies: |m| m.eye_contact < 0.4,
        insight: "Limited eye contact may suggest nervousness or discomfort",
        set_impression: Some(Impression::NeedsImprovement),
    },
    NonVerbalRule {
        applies: |m| m.smile_freq > 3.0,
        insight: "Appropriate smiling creates a friendly, approachable impression",
        set_impression: None,
    },
    NonVerbalRule {
        applies: |m| m.smile_freq == 0.0,
        insight: "No smiling detected - consider showing more warmth",
        set_impression: None,
    },
    NonVerbalRule {
        applies: |m| contains_any(&m.gestures, NERVOUS_GESTURE_KEYWORDS),
        insight: "Nervous gestures detected - focus on calming techniques",
        set_impression: Some(Impression::NeedsImprovement),
    },
    NonVerbalRule {
        applies: |m| {
            !contains_any(&m.gestures, NERVOUS_GESTURE_KEYWORDS)
                && contains_any(&m.gestures, CONTROLLED_GESTURE_KEYWORDS)
        },
        insight: "Natural, controlled body language observed",
        set_impression: None,
    },
];

/// Non-verbal analyzer for visual and body-language metrics
pub struct NonVerbalAnalyzer;

impl NonVerbalAnalyzer {
    /// Classify non-verbal metrics into an impression and insights
    pub fn assess(metrics: &NonVerbalMetrics) -> NonVerbalAnalysis {
        let mut impression = Impression::Moderate;
        let mut insights = Vec::new();

        for rule in RULES {
            if (rule.applies)(metrics) {
                insights.push(rule.insight.to_string());
                if let Some(new_impression) = rule.set_impression {
                    impression = new_impression;
                }
            }
        }

        NonVerbalAnalysis {
            impression,
            insights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(eye_contact: f64, smile_freq: f64, gestures: &str) -> NonVerbalMetrics {
        NonVerbalMetrics {
            eye_contact,
            smile_freq,
            gestures: gestures.to_string(),
            emotion_distribution: String::new(),
        }
    }

    #[test]
    fn strong_eye_contact_sets_strong() {
        let analysis = NonVerbalAnalyzer::assess(&metrics(0.85, 2.0, "calm hands"));
        assert_eq!(analysis.impression, Impression::Strong);
        assert!(analysis.insights[0].contains("Excellent eye contact"));
    }

    #[test]
    fn limited_eye_contact_needs_improvement() {
        let analysis = NonVerbalAnalyzer::assess(&metrics(0.2, 2.0, ""));
        assert_eq!(analysis.impression, Impression::NeedsImprovement);
        assert!(analysis.insights[0].contains("Limited eye contact"));
    }

    #[test]
    fn fidgeting_overrides_strong_eye_contact() {
        let analysis = NonVerbalAnalyzer::assess(&metrics(0.9, 4.0, "excessive fidgeting"));
        assert_eq!(analysis.impression, Impression::NeedsImprovement);
        assert!(analysis
            .insights
            .iter()
            .any(|i| i.contains("Nervous gestures")));
    }

    #[test]
    fn nervous_match_beats_controlled_match() {
        // Both keyword sets match; only the nervous insight fires.
        let analysis = NonVerbalAnalyzer::assess(&metrics(0.6, 1.0, "Excessive at first, minimal later"));
        assert_eq!(analysis.impression, Impression::NeedsImprovement);
        assert_eq!(analysis.insights.len(), 1);
        assert!(analysis.insights[0].contains("Nervous gestures"));
    }

    #[test]
    fn controlled_gestures_add_insight_without_override() {
        let analysis = NonVerbalAnalyzer::assess(&metrics(0.9, 4.0, "Minimal"));
        assert_eq!(analysis.impression, Impression::Strong);
        assert!(analysis
            .insights
            .iter()
            .any(|i| i.contains("controlled body language")));
    }

    #[test]
    fn smile_rules_are_exclusive() {
        let frequent = NonVerbalAnalyzer::assess(&metrics(0.6, 5.0, ""));
        assert!(frequent
            .insights
            .iter()
            .any(|i| i.contains("Appropriate smiling")));

        let never = NonVerbalAnalyzer::assess(&metrics(0.6, 0.0, ""));
        assert!(never.insights.iter().any(|i| i.contains("No smiling")));

        let occasional = NonVerbalAnalyzer::assess(&metrics(0.6, 2.0, ""));
        assert!(!occasional.insights.iter().any(|i| i.contains("smiling")));
    }

    #[test]
    fn neutral_metrics_stay_moderate() {
        let analysis = NonVerbalAnalyzer::assess(&metrics(0.5, 2.0, "steady"));
        assert_eq!(analysis.impression, Impression::Moderate);
        assert!(analysis.insights.is_empty());
    }

    #[test]
    fn unmeasured_metrics_fall_through() {
        let analysis = NonVerbalAnalyzer::assess(&metrics(f64::NAN, f64::NAN, ""));
        assert_eq!(analysis.impression, Impression::Moderate);
        assert!(analysis.insights.is_empty());
    }
}
