//! Report encoding
//!
//! This module wraps a feedback report in a versioned payload with producer
//! and provenance metadata, so downstream consumers can identify which engine
//! instance produced a report and for which kind of attempt.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AnalysisError;
use crate::types::{AttemptContext, FeedbackReport};
use crate::{ENGINE_VERSION, PRODUCER_NAME};

/// Current report schema version
pub const REPORT_VERSION: &str = "coach.report.v1";

/// Report producer metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Report provenance: the attempt context this report was computed for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProvenance {
    pub job_role: String,
    pub company_type: String,
    pub interview_type: String,
    pub difficulty: String,
    pub computed_at_utc: String,
}

/// Complete report payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPayload {
    pub report_version: String,
    pub producer: ReportProducer,
    pub provenance: ReportProvenance,
    pub report: FeedbackReport,
}

/// Encoder producing versioned report payloads
pub struct ReportEncoder {
    instance_id: String,
}

impl Default for ReportEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    /// Wrap a feedback report in a versioned payload
    pub fn encode(&self, report: FeedbackReport, context: &AttemptContext) -> ReportPayload {
        ReportPayload {
            report_version: REPORT_VERSION.to_string(),
            producer: ReportProducer {
                name: PRODUCER_NAME.to_string(),
                version: ENGINE_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            provenance: ReportProvenance {
                job_role: context.job_role.clone(),
                company_type: context.company_type.clone(),
                interview_type: context.interview_type.as_str().to_string(),
                difficulty: context.difficulty.as_str().to_string(),
                computed_at_utc: Utc::now().to_rfc3339(),
            },
            report,
        }
    }

    /// Encode to a pretty-printed JSON string
    pub fn encode_to_json(
        &self,
        report: FeedbackReport,
        context: &AttemptContext,
    ) -> Result<String, AnalysisError> {
        let payload = self.encode(report, context);
        serde_json::to_string_pretty(&payload).map_err(AnalysisError::JsonError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        ConfidenceLevel, ContentScores, Difficulty, Impression, InterviewType, NonVerbalAnalysis,
        SpeechAnalysis,
    };

    fn sample_report() -> FeedbackReport {
        FeedbackReport {
            summary: "Good performance overall.".to_string(),
            content_scores: ContentScores {
                relevance: 8.0,
                clarity: 7.5,
                depth: 8.0,
                professional: 8.0,
                conciseness: 8.0,
            },
            speech_analysis: SpeechAnalysis {
                level: ConfidenceLevel::High,
                insights: vec!["Strong vocal confidence detected".to_string()],
            },
            non_verbal_analysis: NonVerbalAnalysis {
                impression: Impression::Strong,
                insights: vec![],
            },
            strengths: vec!["Confident vocal delivery".to_string()],
            improvements: vec![],
            tips: vec!["Record yourself".to_string()],
            improved_answer: String::new(),
        }
    }

    fn sample_context() -> AttemptContext {
        AttemptContext {
            job_role: "Software Engineer".to_string(),
            company_type: "Tech Startup".to_string(),
            interview_type: InterviewType::Behavioral,
            difficulty: Difficulty::Hard,
        }
    }

    #[test]
    fn encode_payload_metadata() {
        let encoder = ReportEncoder::with_instance_id("test-instance".to_string());
        let payload = encoder.encode(sample_report(), &sample_context());

        assert_eq!(payload.report_version, REPORT_VERSION);
        assert_eq!(payload.producer.name, PRODUCER_NAME);
        assert_eq!(payload.producer.version, ENGINE_VERSION);
        assert_eq!(payload.producer.instance_id, "test-instance");
        assert_eq!(payload.provenance.interview_type, "Behavioral");
        assert_eq!(payload.provenance.difficulty, "hard");
        assert_eq!(payload.provenance.job_role, "Software Engineer");
    }

    #[test]
    fn encode_to_json_is_valid() {
        let encoder = ReportEncoder::new();
        let json = encoder
            .encode_to_json(sample_report(), &sample_context())
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.get("report_version").is_some());
        assert!(parsed.get("producer").is_some());
        assert!(parsed.get("provenance").is_some());
        assert_eq!(parsed["report"]["speech_analysis"]["level"], "High");
        assert_eq!(parsed["report"]["non_verbal_analysis"]["impression"], "Strong");
    }
}
