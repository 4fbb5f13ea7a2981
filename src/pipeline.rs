//! Pipeline orchestration
//!
//! This module provides the public API for Podium Coach: the core `analyze`
//! operation over a typed request, and conveniences that go from raw form
//! JSON to an encoded report payload in one call.

use crate::content::ContentScorer;
use crate::error::AnalysisError;
use crate::intake::RawAttemptForm;
use crate::nonverbal::NonVerbalAnalyzer;
use crate::report::{ReportEncoder, ReportPayload};
use crate::speech::SpeechAnalyzer;
use crate::synthesis::FeedbackSynthesizer;
use crate::types::{AnalysisRequest, FeedbackReport};

/// Analyze one practice attempt.
///
/// Pipeline stages:
/// 1. ContentScorer - Score the answer text on five dimensions
/// 2. SpeechAnalyzer - Classify vocal delivery
/// 3. NonVerbalAnalyzer - Classify body language
/// 4. FeedbackSynthesizer - Aggregate into one report
///
/// Pure and synchronous: identical input yields identical output, and
/// concurrent calls never interact.
pub fn analyze(request: &AnalysisRequest) -> FeedbackReport {
    let content = ContentScorer::score(&request.answer, &request.question);
    let speech = SpeechAnalyzer::assess(&request.speech);
    let non_verbal = NonVerbalAnalyzer::assess(&request.non_verbal);
    FeedbackSynthesizer::synthesize(content, speech, non_verbal, request)
}

/// Convert raw attempt-form JSON to an encoded report payload JSON.
///
/// # Example
/// ```ignore
/// let report_json = form_to_report_json(&form_json)?;
/// ```
pub fn form_to_report_json(form_json: &str) -> Result<String, AnalysisError> {
    CoachEngine::new().analyze_form_json(form_json)
}

/// Engine handle that pins a producer instance ID across calls.
///
/// The analysis itself is stateless; the handle only exists so every report
/// produced by one UI session carries the same instance ID.
pub struct CoachEngine {
    encoder: ReportEncoder,
}

impl Default for CoachEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CoachEngine {
    /// Create an engine with a fresh instance ID
    pub fn new() -> Self {
        Self {
            encoder: ReportEncoder::new(),
        }
    }

    /// Create an engine with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self {
            encoder: ReportEncoder::with_instance_id(instance_id),
        }
    }

    /// Analyze a parsed form and return the encoded payload
    pub fn analyze_form(&self, form: &RawAttemptForm) -> Result<ReportPayload, AnalysisError> {
        let request = form.to_request()?;
        let report = analyze(&request);
        Ok(self.encoder.encode(report, &request.context))
    }

    /// Analyze form JSON and return payload JSON
    pub fn analyze_form_json(&self, form_json: &str) -> Result<String, AnalysisError> {
        let form = RawAttemptForm::from_json(form_json)?;
        let request = form.to_request()?;
        let report = analyze(&request);
        self.encoder.encode_to_json(report, &request.context)
    }
}
