//! Attempt form intake
//!
//! The collaborating UI collects every field as free text and submits the
//! form with camelCase wire keys. This module defines that wire shape and
//! converts it into a typed [`AnalysisRequest`], rejecting a numeric field
//! that does not parse with an error naming the field. Callers that bypass
//! intake may still hand NaN metrics to [`AnalysisRequest`] directly; every
//! threshold rule treats NaN as its neutral branch.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::types::{
    AnalysisRequest, AttemptContext, Difficulty, InterviewType, NonVerbalMetrics, SpeechMetrics,
};

/// Current intake schema version
pub const FORM_SCHEMA_VERSION: &str = "coach.attempt_form.v1";

/// Raw attempt form as submitted by the collaborating UI.
///
/// Every field is a string; missing fields default to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAttemptForm {
    /// Target job role (e.g., "Software Engineer")
    pub job_role: String,
    /// Target company type (e.g., "Tech Startup")
    pub company_type: String,
    /// Interview format ("HR", "Technical", "Behavioral")
    pub interview_type: String,
    /// Practice difficulty ("easy", "medium", "hard")
    pub difficulty: String,
    /// The interview question asked
    pub question: String,
    /// The transcribed answer given
    pub answer: String,
    /// Average pause duration in seconds (e.g., "1.5")
    pub pause_seconds: String,
    /// Speaking rate in words per minute (e.g., "140")
    pub wpm: String,
    /// Number of filler words used (e.g., "5")
    pub filler_count: String,
    /// Vocal confidence score 0-1 (e.g., "0.75")
    pub confidence_score: String,
    /// Eye-contact ratio 0-1 (e.g., "0.65")
    pub eye_contact: String,
    /// Number of smiles observed (e.g., "4")
    pub smile_freq: String,
    /// Free-text gesture description
    pub gestures: String,
    /// Free-text emotion distribution description
    pub emotion_distribution: String,
}

impl RawAttemptForm {
    /// Parse a single form from JSON
    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert the form into a typed analysis request
    pub fn to_request(&self) -> Result<AnalysisRequest, AnalysisError> {
        Ok(AnalysisRequest {
            question: self.question.clone(),
            answer: self.answer.clone(),
            speech: SpeechMetrics {
                pause_seconds: parse_numeric("pauseSeconds", &self.pause_seconds)?,
                wpm: parse_numeric("wpm", &self.wpm)?,
                filler_count: parse_numeric("fillerCount", &self.filler_count)?,
                confidence_score: parse_numeric("confidenceScore", &self.confidence_score)?,
            },
            non_verbal: NonVerbalMetrics {
                eye_contact: parse_numeric("eyeContact", &self.eye_contact)?,
                smile_freq: parse_numeric("smileFreq", &self.smile_freq)?,
                gestures: self.gestures.clone(),
                emotion_distribution: self.emotion_distribution.clone(),
            },
            context: AttemptContext {
                job_role: self.job_role.clone(),
                company_type: self.company_type.clone(),
                interview_type: parse_interview_type(&self.interview_type)?,
                difficulty: parse_difficulty(&self.difficulty)?,
            },
        })
    }
}

fn parse_numeric(field: &'static str, value: &str) -> Result<f64, AnalysisError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| AnalysisError::InvalidInput {
            field,
            value: value.to_string(),
        })
}

/// Empty selector values fall back to the form default ("HR")
fn parse_interview_type(value: &str) -> Result<InterviewType, AnalysisError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(InterviewType::default());
    }
    if trimmed.eq_ignore_ascii_case("hr") {
        Ok(InterviewType::Hr)
    } else if trimmed.eq_ignore_ascii_case("technical") {
        Ok(InterviewType::Technical)
    } else if trimmed.eq_ignore_ascii_case("behavioral") {
        Ok(InterviewType::Behavioral)
    } else {
        Err(AnalysisError::UnknownInterviewType(trimmed.to_string()))
    }
}

/// Empty selector values fall back to the form default ("medium")
fn parse_difficulty(value: &str) -> Result<Difficulty, AnalysisError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(Difficulty::default());
    }
    if trimmed.eq_ignore_ascii_case("easy") {
        Ok(Difficulty::Easy)
    } else if trimmed.eq_ignore_ascii_case("medium") {
        Ok(Difficulty::Medium)
    } else if trimmed.eq_ignore_ascii_case("hard") {
        Ok(Difficulty::Hard)
    } else {
        Err(AnalysisError::UnknownDifficulty(trimmed.to_string()))
    }
}
