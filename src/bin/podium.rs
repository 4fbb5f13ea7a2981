//! Podium CLI - Command-line interface for Podium Coach
//!
//! Commands:
//! - analyze: Turn attempt forms into feedback report payloads (batch mode)
//! - validate: Validate attempt-form fields
//! - schema: Print schema information
//! - doctor: Diagnose engine health and configuration

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use podium_coach::report::ReportPayload;
use podium_coach::{AnalysisError, CoachEngine, RawAttemptForm};
use podium_coach::{ENGINE_VERSION, FORM_SCHEMA_VERSION, PRODUCER_NAME, REPORT_VERSION};

/// Podium - On-device feedback engine for interview practice attempts
#[derive(Parser)]
#[command(name = "podium")]
#[command(author = "Podium Labs")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Turn interview practice attempts into feedback reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn attempt forms into feedback report payloads (batch mode)
    Analyze {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long)]
        output: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "ndjson")]
        output_format: OutputFormat,

        /// Producer instance ID to stamp into payloads
        #[arg(long)]
        instance_id: Option<String>,
    },

    /// Validate attempt-form fields
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print schema information
    Schema {
        /// Schema to print (input or output)
        #[arg(value_enum)]
        schema_type: SchemaType,
    },

    /// Diagnose engine health and configuration
    Doctor {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Newline-delimited JSON (one form per line)
    Ndjson,
    /// JSON array of forms
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Newline-delimited JSON (one report payload per line)
    Ndjson,
    /// JSON array of report payloads
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

#[derive(Clone, ValueEnum)]
enum SchemaType {
    /// Input schema (coach.attempt_form.v1)
    Input,
    /// Output schema (coach.report.v1)
    Output,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), PodiumCliError> {
    match cli.command {
        Commands::Analyze {
            input,
            output,
            input_format,
            output_format,
            instance_id,
        } => cmd_analyze(&input, &output, input_format, output_format, instance_id),

        Commands::Validate {
            input,
            input_format,
            json,
        } => cmd_validate(&input, input_format, json),

        Commands::Schema { schema_type } => cmd_schema(schema_type),

        Commands::Doctor { json } => cmd_doctor(json),
    }
}

fn cmd_analyze(
    input: &PathBuf,
    output: &PathBuf,
    input_format: InputFormat,
    output_format: OutputFormat,
    instance_id: Option<String>,
) -> Result<(), PodiumCliError> {
    let input_data = read_input(input)?;
    let forms = parse_forms(&input_data, &input_format)?;

    if forms.is_empty() {
        return Err(PodiumCliError::NoForms);
    }

    let engine = match instance_id {
        Some(id) => CoachEngine::with_instance_id(id),
        None => CoachEngine::new(),
    };

    let mut payloads: Vec<ReportPayload> = Vec::new();
    for form in &forms {
        payloads.push(engine.analyze_form(form)?);
    }

    let output_data = format_output(&payloads, &output_format)?;

    if output.to_string_lossy() == "-" {
        print!("{}", output_data);
    } else {
        fs::write(output, output_data)?;
    }

    Ok(())
}

fn cmd_validate(
    input: &PathBuf,
    input_format: InputFormat,
    json: bool,
) -> Result<(), PodiumCliError> {
    let input_data = read_input(input)?;
    let forms = parse_forms(&input_data, &input_format)?;

    let errors: Vec<ValidationErrorDetail> = forms
        .iter()
        .enumerate()
        .filter_map(|(index, form)| {
            form.to_request().err().map(|e| ValidationErrorDetail {
                index,
                error: e.to_string(),
            })
        })
        .collect();

    let report = ValidationReport {
        total_forms: forms.len(),
        valid_forms: forms.len() - errors.len(),
        invalid_forms: errors.len(),
        errors,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Validation Report");
        println!("=================");
        println!("Total forms:   {}", report.total_forms);
        println!("Valid forms:   {}", report.valid_forms);
        println!("Invalid forms: {}", report.invalid_forms);

        if !report.errors.is_empty() {
            println!("\nErrors:");
            for err in &report.errors {
                println!("  - Form {}: {}", err.index, err.error);
            }
        }
    }

    if report.invalid_forms > 0 {
        Err(PodiumCliError::ValidationFailed(report.invalid_forms))
    } else {
        Ok(())
    }
}

fn cmd_schema(schema_type: SchemaType) -> Result<(), PodiumCliError> {
    match schema_type {
        SchemaType::Input => {
            println!("Input Schema: {}", FORM_SCHEMA_VERSION);
            println!();
            println!("The attempt form is a flat JSON object with camelCase string fields:");
            println!();
            println!("  question, answer - the practiced question/answer text pair");
            println!("  pauseSeconds, wpm, fillerCount, confidenceScore - speech metrics");
            println!("  eyeContact, smileFreq, gestures, emotionDistribution - non-verbal metrics");
            println!("  jobRole, companyType, interviewType, difficulty - attempt context");
            println!();
            println!("Numeric fields are submitted as text and must parse; an empty or");
            println!("non-numeric value is rejected with the offending field name.");
            println!("interviewType: HR | Technical | Behavioral (default HR)");
            println!("difficulty: easy | medium | hard (default medium)");
        }
        SchemaType::Output => {
            println!("Output Schema: {}", REPORT_VERSION);
            println!();
            println!("The report payload contains:");
            println!();
            println!("- report_version: Schema version");
            println!("- producer: {{ name, version, instance_id }}");
            println!("- provenance: {{ job_role, company_type, interview_type, difficulty, computed_at_utc }}");
            println!("- report:");
            println!("  - summary: one-sentence overall verdict");
            println!("  - content_scores: {{ relevance, clarity, depth, professional, conciseness }}");
            println!("  - speech_analysis: {{ level: Low|Medium|High, insights }}");
            println!("  - non_verbal_analysis: {{ impression: Strong|Moderate|Needs improvement, insights }}");
            println!("  - strengths, improvements, tips: ordered text lists");
            println!("  - improved_answer: STAR-structure rewrite suggestion");
        }
    }

    Ok(())
}

fn cmd_doctor(json: bool) -> Result<(), PodiumCliError> {
    let mut checks: Vec<DoctorCheck> = Vec::new();

    checks.push(DoctorCheck {
        name: "engine_version".to_string(),
        status: CheckStatus::Ok,
        message: format!("Podium Coach version {}", ENGINE_VERSION),
    });

    checks.push(DoctorCheck {
        name: "input_schema".to_string(),
        status: CheckStatus::Ok,
        message: format!("Input schema: {}", FORM_SCHEMA_VERSION),
    });

    checks.push(DoctorCheck {
        name: "output_schema".to_string(),
        status: CheckStatus::Ok,
        message: format!("Output schema: {}", REPORT_VERSION),
    });

    // End-to-end smoke run over a minimal zeroed form
    let smoke_form: RawAttemptForm = serde_json::from_str(
        r#"{
            "question": "smoke", "answer": "smoke",
            "pauseSeconds": "0", "wpm": "0", "fillerCount": "0", "confidenceScore": "0",
            "eyeContact": "0", "smileFreq": "0"
        }"#,
    )?;
    let smoke_check = match CoachEngine::with_instance_id("doctor".to_string())
        .analyze_form(&smoke_form)
    {
        Ok(payload) if payload.report_version == REPORT_VERSION => DoctorCheck {
            name: "smoke_run".to_string(),
            status: CheckStatus::Ok,
            message: "Engine produced a report payload".to_string(),
        },
        Ok(payload) => DoctorCheck {
            name: "smoke_run".to_string(),
            status: CheckStatus::Error,
            message: format!("Unexpected report version: {}", payload.report_version),
        },
        Err(e) => DoctorCheck {
            name: "smoke_run".to_string(),
            status: CheckStatus::Error,
            message: format!("Engine error: {}", e),
        },
    };
    checks.push(smoke_check);

    let stdin_check = if atty::is(atty::Stream::Stdin) {
        DoctorCheck {
            name: "stdin".to_string(),
            status: CheckStatus::Ok,
            message: "stdin is a TTY (interactive mode)".to_string(),
        }
    } else {
        DoctorCheck {
            name: "stdin".to_string(),
            status: CheckStatus::Ok,
            message: "stdin is a pipe (batch mode ready)".to_string(),
        }
    };
    checks.push(stdin_check);

    let report = DoctorReport {
        producer: PRODUCER_NAME.to_string(),
        version: ENGINE_VERSION.to_string(),
        checks,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Podium Doctor Report");
        println!("====================");
        println!("Producer: {}", report.producer);
        println!("Version:  {}", report.version);
        println!("\nChecks:");

        for check in &report.checks {
            let status_icon = match check.status {
                CheckStatus::Ok => "[OK]",
                CheckStatus::Error => "[ERR]",
            };
            println!("  {} {}: {}", status_icon, check.name, check.message);
        }
    }

    let has_errors = report
        .checks
        .iter()
        .any(|c| matches!(c.status, CheckStatus::Error));
    if has_errors {
        Err(PodiumCliError::DoctorFailed)
    } else {
        Ok(())
    }
}

// Helper functions

fn read_input(input: &PathBuf) -> Result<String, PodiumCliError> {
    if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn parse_forms(
    input_data: &str,
    format: &InputFormat,
) -> Result<Vec<RawAttemptForm>, PodiumCliError> {
    match format {
        InputFormat::Ndjson => {
            let mut forms = Vec::new();
            for line in input_data.lines() {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                forms.push(serde_json::from_str(trimmed)?);
            }
            Ok(forms)
        }
        InputFormat::Json => Ok(serde_json::from_str(input_data)?),
    }
}

fn format_output(
    payloads: &[ReportPayload],
    format: &OutputFormat,
) -> Result<String, PodiumCliError> {
    match format {
        OutputFormat::Ndjson => {
            let mut lines: Vec<String> = Vec::new();
            for payload in payloads {
                lines.push(serde_json::to_string(payload)?);
            }
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::Json => Ok(serde_json::to_string(payloads)?),
        OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(payloads)?),
    }
}

// Error types

#[derive(Debug)]
enum PodiumCliError {
    Io(io::Error),
    Analysis(AnalysisError),
    Json(serde_json::Error),
    NoForms,
    ValidationFailed(usize),
    DoctorFailed,
}

impl From<io::Error> for PodiumCliError {
    fn from(e: io::Error) -> Self {
        PodiumCliError::Io(e)
    }
}

impl From<AnalysisError> for PodiumCliError {
    fn from(e: AnalysisError) -> Self {
        PodiumCliError::Analysis(e)
    }
}

impl From<serde_json::Error> for PodiumCliError {
    fn from(e: serde_json::Error) -> Self {
        PodiumCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<PodiumCliError> for CliError {
    fn from(e: PodiumCliError) -> Self {
        match e {
            PodiumCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            PodiumCliError::Analysis(e) => CliError {
                code: "ANALYSIS_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Run 'podium validate' for a per-form report".to_string()),
            },
            PodiumCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            PodiumCliError::NoForms => CliError {
                code: "NO_FORMS".to_string(),
                message: "No attempt forms found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
            PodiumCliError::ValidationFailed(count) => CliError {
                code: "VALIDATION_FAILED".to_string(),
                message: format!("{} forms failed validation", count),
                hint: Some("Fix validation errors and retry".to_string()),
            },
            PodiumCliError::DoctorFailed => CliError {
                code: "DOCTOR_FAILED".to_string(),
                message: "One or more health checks failed".to_string(),
                hint: Some("Review the doctor report for details".to_string()),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct ValidationReport {
    total_forms: usize,
    valid_forms: usize,
    invalid_forms: usize,
    errors: Vec<ValidationErrorDetail>,
}

#[derive(serde::Serialize)]
struct ValidationErrorDetail {
    index: usize,
    error: String,
}

#[derive(serde::Serialize)]
struct DoctorReport {
    producer: String,
    version: String,
    checks: Vec<DoctorCheck>,
}

#[derive(serde::Serialize)]
struct DoctorCheck {
    name: String,
    status: CheckStatus,
    message: String,
}

#[derive(serde::Serialize)]
enum CheckStatus {
    Ok,
    Error,
}
