//! Podium Coach - On-device feedback engine for interview practice attempts
//!
//! Podium turns one practice attempt (transcribed answer, speech-delivery
//! metrics, non-verbal metrics) into a structured feedback report through a
//! deterministic pipeline: content scoring → speech analysis → non-verbal
//! analysis → feedback synthesis.
//!
//! ## Modules
//!
//! - **Analyzers**: Score answer content and classify speech/non-verbal delivery
//! - **Synthesis**: Aggregate the three analyses into one coherent report
//! - **Intake/Report**: Parse the raw attempt form and encode versioned report payloads

pub mod content;
pub mod error;
pub mod intake;
pub mod nonverbal;
pub mod pipeline;
pub mod report;
pub mod speech;
pub mod synthesis;
pub mod types;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use error::AnalysisError;
pub use intake::{RawAttemptForm, FORM_SCHEMA_VERSION};
pub use pipeline::{analyze, form_to_report_json, CoachEngine};
pub use report::{ReportEncoder, ReportPayload, REPORT_VERSION};
pub use types::{AnalysisRequest, ConfidenceLevel, FeedbackReport, Impression};

/// Engine version embedded in all report payloads
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for report payloads
pub const PRODUCER_NAME: &str = "podium-coach";
