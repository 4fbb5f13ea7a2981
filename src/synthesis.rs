//! Feedback synthesis
//!
//! This module aggregates the three analyses and the raw request into the
//! final report: a summary tier, strengths, improvements, ordered tips, and
//! the improved-answer template. Strengths, improvements, and tips are each
//! assembled in a fixed, deterministic order.

use crate::types::{
    AnalysisRequest, ConfidenceLevel, ContentScores, FeedbackReport, NonVerbalAnalysis,
    SpeechAnalysis,
};

const EXCELLENT_SUMMARY: &str = "Excellent performance! You demonstrated strong content \
     knowledge, confident delivery, and professional presence. With minor refinements, \
     you're well-positioned for success.";

const GOOD_SUMMARY: &str = "Good performance overall. Your answer showed solid understanding \
     with room for enhancement in delivery and structure. Focus on the improvement areas to \
     elevate your interview presence.";

const GROWTH_SUMMARY: &str = "Your interview shows potential with several areas for growth. \
     Focus on structured preparation, practice your delivery, and work on building \
     confidence through mock interviews.";

const STAR_TIP: &str =
    "Use the STAR method (Situation, Task, Action, Result) to structure behavioral answers";

const SILENT_PAUSE_TIP: &str =
    "Practice pausing silently instead of using filler words - silence is more professional";

const SLOW_DOWN_TIP: &str = "Take deep breaths and consciously slow down your speaking pace";

const EYE_CONTACT_RULE_TIP: &str =
    "Practice the 50/70 rule: maintain eye contact 50% while speaking, 70% while listening";

const RECORD_YOURSELF_TIP: &str = "Record yourself practicing and review for areas of improvement";

/// Synthesizer combining the three analyses into one report
pub struct FeedbackSynthesizer;

impl FeedbackSynthesizer {
    /// Build the complete feedback report
    pub fn synthesize(
        content: ContentScores,
        speech: SpeechAnalysis,
        non_verbal: NonVerbalAnalysis,
        request: &AnalysisRequest,
    ) -> FeedbackReport {
        let summary = select_summary(content.average(), speech.level);
        let strengths = build_strengths(&content, &speech, request);
        let improvements = build_improvements(&content, request);
        let tips = build_tips(request);
        let improved_answer = improved_answer_template(&request.question, &request.answer);

        FeedbackReport {
            summary,
            content_scores: content,
            speech_analysis: speech,
            non_verbal_analysis: non_verbal,
            strengths,
            improvements,
            tips,
            improved_answer,
        }
    }
}

/// Pick the summary tier from the content average and speech level
fn select_summary(avg_content: f64, level: ConfidenceLevel) -> String {
    if avg_content >= 8.0 && level == ConfidenceLevel::High {
        EXCELLENT_SUMMARY
    } else if avg_content >= 6.0 && level != ConfidenceLevel::Low {
        GOOD_SUMMARY
    } else {
        GROWTH_SUMMARY
    }
    .to_string()
}

fn build_strengths(
    content: &ContentScores,
    speech: &SpeechAnalysis,
    request: &AnalysisRequest,
) -> Vec<String> {
    let mut strengths = Vec::new();

    if content.relevance >= 8.0 {
        strengths.push("Strong answer relevance to the question".to_string());
    }
    if content.depth >= 8.0 {
        strengths.push("Good use of examples and detailed explanations".to_string());
    }
    if speech.level == ConfidenceLevel::High {
        strengths.push("Confident vocal delivery".to_string());
    }
    if request.non_verbal.eye_contact > 0.7 {
        strengths.push("Excellent eye contact and engagement".to_string());
    }
    if request.speech.filler_count < 3.0 {
        strengths.push("Minimal use of filler words".to_string());
    }

    strengths
}

fn build_improvements(content: &ContentScores, request: &AnalysisRequest) -> Vec<String> {
    let mut improvements = Vec::new();

    if content.relevance < 6.0 {
        improvements.push("Answer could be more directly relevant to the question".to_string());
    }
    if content.depth < 6.0 {
        improvements.push("Include more specific examples and details".to_string());
    }
    if request.speech.filler_count > 10.0 {
        improvements.push("Reduce filler words (um, uh, like)".to_string());
    }
    if request.speech.pause_seconds > 2.0 {
        improvements.push("Work on reducing long pauses".to_string());
    }
    if request.non_verbal.eye_contact < 0.4 {
        improvements.push("Maintain better eye contact with the interviewer".to_string());
    }

    improvements
}

/// Tips always open with the STAR tip and close with the record-yourself tip
fn build_tips(request: &AnalysisRequest) -> Vec<String> {
    let mut tips = vec![STAR_TIP.to_string()];

    if request.speech.filler_count > 5.0 {
        tips.push(SILENT_PAUSE_TIP.to_string());
    }
    if request.speech.wpm > 160.0 {
        tips.push(SLOW_DOWN_TIP.to_string());
    }
    if request.non_verbal.eye_contact < 0.5 {
        tips.push(EYE_CONTACT_RULE_TIP.to_string());
    }

    tips.push(RECORD_YOURSELF_TIP.to_string());
    tips
}

/// STAR-structure rewrite suggestion.
///
/// Only the question is interpolated; the original answer is accepted so a
/// future template revision can quote it.
fn improved_answer_template(question: &str, _answer: &str) -> String {
    format!(
        "When answering \"{question}\", consider this structure:\n\n\
         \"That's a great question. In my previous role at [Company], I encountered a \
         similar situation where [Situation]. I was responsible for [Task]. I approached \
         this by [Action - specific steps you took]. As a result, [Result - quantifiable \
         outcome]. This experience taught me [Key learning], which I believe would be \
         valuable in this role because [Connection to job].\"\n\n\
         Key improvements:\n\
         \u{2022} Opens with confidence\n\
         \u{2022} Follows STAR structure\n\
         \u{2022} Includes specific examples\n\
         \u{2022} Quantifies results\n\
         \u{2022} Connects to the role"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AttemptContext, Impression, NonVerbalMetrics, SpeechMetrics};

    fn request(fillers: f64, pause: f64, wpm: f64, eye_contact: f64) -> AnalysisRequest {
        AnalysisRequest {
            question: "Tell me about a challenge you overcame".to_string(),
            answer: "I rebuilt our alerting stack.".to_string(),
            speech: SpeechMetrics {
                pause_seconds: pause,
                wpm,
                filler_count: fillers,
                confidence_score: 0.6,
            },
            non_verbal: NonVerbalMetrics {
                eye_contact,
                smile_freq: 2.0,
                gestures: String::new(),
                emotion_distribution: String::new(),
            },
            context: AttemptContext::default(),
        }
    }

    fn scores(relevance: f64, depth: f64) -> ContentScores {
        ContentScores {
            relevance,
            clarity: 7.0,
            depth,
            professional: 8.0,
            conciseness: 8.0,
        }
    }

    fn speech(level: ConfidenceLevel) -> SpeechAnalysis {
        SpeechAnalysis {
            level,
            insights: vec![],
        }
    }

    fn non_verbal() -> NonVerbalAnalysis {
        NonVerbalAnalysis {
            impression: Impression::Moderate,
            insights: vec![],
        }
    }

    #[test]
    fn tips_always_bracketed_by_fixed_entries() {
        let report = FeedbackSynthesizer::synthesize(
            scores(8.0, 8.0),
            speech(ConfidenceLevel::Medium),
            non_verbal(),
            &request(0.0, 1.0, 140.0, 0.8),
        );
        assert!(report.tips.len() >= 2);
        assert!(report.tips.first().unwrap().contains("STAR method"));
        assert!(report.tips.last().unwrap().contains("Record yourself"));
    }

    #[test]
    fn conditional_tips_fire_in_fixed_order() {
        let report = FeedbackSynthesizer::synthesize(
            scores(8.0, 8.0),
            speech(ConfidenceLevel::Medium),
            non_verbal(),
            &request(8.0, 1.0, 180.0, 0.3),
        );
        assert_eq!(report.tips.len(), 5);
        assert!(report.tips[1].contains("pausing silently"));
        assert!(report.tips[2].contains("slow down"));
        assert!(report.tips[3].contains("50/70 rule"));
    }

    #[test]
    fn summary_tiers() {
        let excellent = FeedbackSynthesizer::synthesize(
            scores(9.0, 9.0),
            speech(ConfidenceLevel::High),
            non_verbal(),
            &request(1.0, 1.0, 140.0, 0.8),
        );
        assert!(excellent.summary.starts_with("Excellent performance!"));

        let good = FeedbackSynthesizer::synthesize(
            scores(7.0, 6.0),
            speech(ConfidenceLevel::Medium),
            non_verbal(),
            &request(4.0, 1.0, 140.0, 0.6),
        );
        assert!(good.summary.starts_with("Good performance overall."));

        let growth = FeedbackSynthesizer::synthesize(
            scores(4.0, 6.0),
            speech(ConfidenceLevel::Low),
            non_verbal(),
            &request(12.0, 3.0, 100.0, 0.3),
        );
        assert!(growth.summary.starts_with("Your interview shows potential"));
    }

    #[test]
    fn high_content_without_high_speech_is_not_excellent() {
        let report = FeedbackSynthesizer::synthesize(
            scores(9.0, 9.0),
            speech(ConfidenceLevel::Medium),
            non_verbal(),
            &request(1.0, 1.0, 140.0, 0.8),
        );
        assert!(report.summary.starts_with("Good performance overall."));
    }

    #[test]
    fn strengths_and_improvements_follow_fixed_order() {
        let report = FeedbackSynthesizer::synthesize(
            scores(8.0, 8.0),
            speech(ConfidenceLevel::High),
            non_verbal(),
            &request(2.0, 1.0, 140.0, 0.8),
        );
        assert_eq!(
            report.strengths,
            vec![
                "Strong answer relevance to the question",
                "Good use of examples and detailed explanations",
                "Confident vocal delivery",
                "Excellent eye contact and engagement",
                "Minimal use of filler words",
            ]
        );
        assert!(report.improvements.is_empty());

        let weak = FeedbackSynthesizer::synthesize(
            scores(4.0, 5.0),
            speech(ConfidenceLevel::Low),
            non_verbal(),
            &request(12.0, 3.0, 100.0, 0.2),
        );
        assert_eq!(weak.improvements.len(), 5);
        assert!(weak.improvements[0].contains("more directly relevant"));
        assert!(weak.improvements[4].contains("eye contact"));
    }

    #[test]
    fn improved_answer_quotes_the_question_only() {
        let req = request(1.0, 1.0, 140.0, 0.8);
        let report = FeedbackSynthesizer::synthesize(
            scores(8.0, 8.0),
            speech(ConfidenceLevel::High),
            non_verbal(),
            &req,
        );
        assert!(report
            .improved_answer
            .contains("When answering \"Tell me about a challenge you overcame\""));
        assert!(!report.improved_answer.contains("alerting stack"));
        assert!(report.improved_answer.contains("Follows STAR structure"));
    }
}
