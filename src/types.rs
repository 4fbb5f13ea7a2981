//! Core types for the Podium Coach pipeline
//!
//! This module defines the data structures that flow through each stage of the
//! pipeline: the analysis request, per-dimension content scores, the two
//! delivery analyses, and the final feedback report.

use serde::{Deserialize, Serialize};

/// Interview format the attempt was practiced for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewType {
    #[serde(rename = "HR")]
    Hr,
    Technical,
    Behavioral,
}

impl InterviewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewType::Hr => "HR",
            InterviewType::Technical => "Technical",
            InterviewType::Behavioral => "Behavioral",
        }
    }
}

impl Default for InterviewType {
    fn default() -> Self {
        InterviewType::Hr
    }
}

/// Difficulty level the attempt was practiced at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

/// Descriptive context for an attempt. No scoring rule reads these fields;
/// they are carried through to report provenance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttemptContext {
    /// Target job role (e.g., "Software Engineer")
    pub job_role: String,
    /// Target company type (e.g., "Tech Startup")
    pub company_type: String,
    /// Interview format
    pub interview_type: InterviewType,
    /// Practice difficulty
    pub difficulty: Difficulty,
}

/// Speech-delivery metrics measured over the attempt.
///
/// All fields are `f64`: a caller that failed to measure a metric may pass
/// NaN, which falls through every threshold comparison to the neutral branch
/// of each rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechMetrics {
    /// Average pause duration (seconds)
    pub pause_seconds: f64,
    /// Speaking rate (words per minute)
    pub wpm: f64,
    /// Number of filler words used
    pub filler_count: f64,
    /// Vocal confidence score (0-1)
    pub confidence_score: f64,
}

/// Non-verbal metrics measured over the attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NonVerbalMetrics {
    /// Fraction of time eye contact was held (0-1)
    pub eye_contact: f64,
    /// Number of smiles observed
    pub smile_freq: f64,
    /// Free-text gesture description (matched by keyword only)
    pub gestures: String,
    /// Free-text emotion distribution description. Accepted but not consulted
    /// by any current rule.
    pub emotion_distribution: String,
}

/// One complete practice attempt submitted for analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The interview question asked
    pub question: String,
    /// The transcribed answer given
    pub answer: String,
    /// Speech-delivery metrics
    pub speech: SpeechMetrics,
    /// Non-verbal metrics
    pub non_verbal: NonVerbalMetrics,
    /// Attempt context
    pub context: AttemptContext,
}

/// Per-dimension content scores, each on a 1-10 scale.
///
/// Clarity is real-valued (half-point steps); the other four are integral by
/// construction of the scoring rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentScores {
    /// How directly the answer addresses the question
    pub relevance: f64,
    /// Sentence-level structure of the answer
    pub clarity: f64,
    /// Use of examples and concrete detail
    pub depth: f64,
    /// Absence of filler phrasing in the written answer
    pub professional: f64,
    /// Answer length relative to the expected range
    pub conciseness: f64,
}

impl ContentScores {
    /// Arithmetic mean of the five dimensions
    pub fn average(&self) -> f64 {
        (self.relevance + self.clarity + self.depth + self.professional + self.conciseness) / 5.0
    }
}

/// Categorical speech-delivery verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "Low",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::High => "High",
        }
    }
}

/// Speech-delivery analysis: a confidence level plus supporting insights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechAnalysis {
    /// Overall confidence level
    pub level: ConfidenceLevel,
    /// Human-readable insights, in rule-firing order
    pub insights: Vec<String>,
}

/// Categorical non-verbal-communication verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impression {
    Strong,
    Moderate,
    #[serde(rename = "Needs improvement")]
    NeedsImprovement,
}

impl Impression {
    pub fn as_str(&self) -> &'static str {
        match self {
            Impression::Strong => "Strong",
            Impression::Moderate => "Moderate",
            Impression::NeedsImprovement => "Needs improvement",
        }
    }
}

/// Non-verbal analysis: an impression plus supporting insights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NonVerbalAnalysis {
    /// Overall body-language impression
    pub impression: Impression,
    /// Human-readable insights, in rule-firing order
    pub insights: Vec<String>,
}

/// The complete feedback report for one attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReport {
    /// One-sentence overall performance summary
    pub summary: String,
    /// Per-dimension content scores
    pub content_scores: ContentScores,
    /// Speech-delivery analysis
    pub speech_analysis: SpeechAnalysis,
    /// Non-verbal analysis
    pub non_verbal_analysis: NonVerbalAnalysis,
    /// Observed strengths, in fixed order
    pub strengths: Vec<String>,
    /// Areas for improvement, in fixed order
    pub improvements: Vec<String>,
    /// Actionable tips, in fixed order
    pub tips: Vec<String>,
    /// Template-based improved-answer suggestion
    pub improved_answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interview_type_round_trip() {
        let json = serde_json::to_string(&InterviewType::Hr).unwrap();
        assert_eq!(json, "\"HR\"");
        let back: InterviewType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, InterviewType::Hr);
    }

    #[test]
    fn impression_serializes_with_space() {
        let json = serde_json::to_string(&Impression::NeedsImprovement).unwrap();
        assert_eq!(json, "\"Needs improvement\"");
        assert_eq!(Impression::NeedsImprovement.as_str(), "Needs improvement");
    }

    #[test]
    fn content_average() {
        let scores = ContentScores {
            relevance: 8.0,
            clarity: 7.5,
            depth: 8.0,
            professional: 8.0,
            conciseness: 8.0,
        };
        assert!((scores.average() - 7.9).abs() < 1e-9);
    }
}
