//! Stage-by-stage rendering of a diagnostic run. Each function consumes the
//! typed result of one stage; the text mirrors what the run looks like to an
//! operator watching a live pass.

use super::Console;
use auditdx_engine::{AnalysisOutcome, RemediationReport, ResponseAnalysis};
use auditdx_runtime::{
    DiagnosticProgress, ProcessorScanReport, ServiceScanReport, StructureReport,
};
use auditdx_types::{
    ArtifactClassification, DiagnosisTier, ExchangeOutcome, FieldStatus, ProbeOutcome,
};

pub fn render_progress(console: &Console, event: &DiagnosticProgress) {
    match event {
        DiagnosticProgress::StructureChecked(report) => render_structure(console, report),
        DiagnosticProgress::ProbeFinished(outcome) => render_probe(console, outcome),
        DiagnosticProgress::ExchangeStarted => {
            console.header("API RESPONSE TEST");
            console.plain("Sending audit request with LM Finishing data...");
            console.plain("This may take 10-30 seconds...");
        }
        DiagnosticProgress::ExchangeSkipped => {
            console.warning("Backend not running - API test skipped");
        }
        DiagnosticProgress::ExchangeFinished(outcome) => render_exchange(console, outcome),
        DiagnosticProgress::ScratchWritten(path) => {
            console.info(&format!("Full response saved to: {}", path.display()));
        }
        DiagnosticProgress::ScratchWriteFailed { path, detail } => {
            console.warning(&format!(
                "Could not save response to {}: {}",
                path.display(),
                detail
            ));
        }
        DiagnosticProgress::ResponseAnalyzed(outcome) => render_analysis(console, outcome),
        DiagnosticProgress::ServicesScanned(report) => render_services(console, report),
        DiagnosticProgress::ProcessorScanned(report) => render_processor(console, report),
    }
}

pub fn render_structure(console: &Console, report: &StructureReport) {
    console.header("PROJECT STRUCTURE CHECK");
    for check in &report.checks {
        if check.found {
            console.success(&format!("Found: {}", check.path));
        } else {
            console.error(&format!("Missing: {}", check.path));
        }
    }
    if report.is_complete() {
        console.success("Project structure looks good!");
    } else {
        console.warning("Project structure issues detected");
    }
}

pub fn render_probe(console: &Console, outcome: &ProbeOutcome) {
    console.header("BACKEND HEALTH CHECK");
    match outcome {
        ProbeOutcome::Healthy { status_text } => {
            console.success("Backend is running and responding");
            console.info(&format!("Health response: {}", status_text));
        }
        ProbeOutcome::UnexpectedStatus { code } => {
            console.error(&format!("Backend responded with status {}", code));
        }
        ProbeOutcome::Unreachable => {
            console.error("Backend is not running or not accessible");
            console.info("Start backend with: cd backend && npm run dev");
        }
        ProbeOutcome::TimedOut => {
            console.error("Backend health check timed out");
        }
        ProbeOutcome::Failed { detail } => {
            console.error(&format!("Backend health check failed: {}", detail));
        }
    }
}

pub fn render_exchange(console: &Console, outcome: &ExchangeOutcome) {
    match outcome {
        ExchangeOutcome::Success { .. } => {
            console.success("API responded successfully!");
        }
        ExchangeOutcome::RateLimited { reason } => {
            console.warning("Rate limited - audit already exists for this business");
            if let Some(reason) = reason {
                console.info(&format!("Duplicate reason: {}", reason));
            }
        }
        ExchangeOutcome::HttpError { code, body_preview } => {
            console.error(&format!("API returned status {}", code));
            console.plain(&format!("Response: {}", body_preview));
        }
        ExchangeOutcome::MalformedJson { body_preview } => {
            console.error("API returned invalid JSON");
            console.plain(&format!("Raw response: {}", body_preview));
        }
        ExchangeOutcome::Unreachable => {
            console.error("Could not connect to API - is backend running?");
        }
        ExchangeOutcome::TimedOut => {
            console.error("API request timed out");
        }
        ExchangeOutcome::Failed { detail } => {
            console.error(&format!("API test failed: {}", detail));
        }
    }
}

pub fn render_analysis(console: &Console, outcome: &AnalysisOutcome) {
    console.header("ANALYZING API RESPONSE");
    match outcome {
        AnalysisOutcome::BackendError { error, message } => {
            console.error(&format!("API returned error: {}", error));
            if let Some(message) = message {
                console.error(&format!("Error message: {}", message));
            }
        }
        AnalysisOutcome::Scored(analysis) => render_scored(console, analysis),
    }
}

fn render_scored(console: &Console, analysis: &ResponseAnalysis) {
    console.info(&format!("Total fields returned: {}", analysis.total_fields));

    console.section("Critical field check:");
    for check in &analysis.field_report {
        match check.status {
            FieldStatus::Present => console.success(&check.name),
            FieldStatus::NullOrEmpty => {
                console.warning(&format!("{}: present but null/undefined", check.name));
            }
            FieldStatus::Missing => console.error(&format!("{}: missing", check.name)),
        }
    }

    console.section("Completion analysis:");
    console.plain(&format!(
        "   Present: {} fields",
        analysis.count(FieldStatus::Present)
    ));
    console.plain(&format!(
        "   Missing: {} fields",
        analysis.count(FieldStatus::Missing)
    ));
    console.plain(&format!(
        "   Undefined: {} fields",
        analysis.count(FieldStatus::NullOrEmpty)
    ));
    console.plain(&format!("   Completion rate: {}%", analysis.completion_score));

    match analysis.tier {
        DiagnosisTier::CriticalFailure => {
            console.error("CRITICAL: Major data pipeline failure");
        }
        DiagnosisTier::PartialFailure => {
            console.warning("MODERATE: Partial data pipeline issues");
        }
        DiagnosisTier::MostlyWorking => {
            console.success("GOOD: Data pipeline mostly working");
        }
    }

    let samples = &analysis.samples;
    if samples.business_name.is_some()
        || samples.visibility_score.is_some()
        || samples.action_items.is_some()
    {
        console.section("Sample data:");
        if let Some(name) = &samples.business_name {
            console.plain(&format!("Business name: {}", name));
        }
        if let Some(score) = &samples.visibility_score {
            console.plain(&format!("Visibility score: {}", score));
        }
        if let Some(counts) = &samples.action_items {
            console.plain(&format!(
                "Action items: {} critical, {} moderate",
                counts.critical, counts.moderate
            ));
        }
    }
}

pub fn render_services(console: &Console, report: &ServiceScanReport) {
    console.header("SERVICE FILES ANALYSIS");
    match report {
        ServiceScanReport::MissingDir { path } => {
            console.error(&format!("Services directory not found: {}", path.display()));
        }
        ServiceScanReport::Scanned { entries, .. } => {
            for entry in entries {
                match &entry.classification {
                    ArtifactClassification::Missing => {
                        console.error(&format!("{}: MISSING FILE", entry.name));
                    }
                    ArtifactClassification::TooShort(lines) => {
                        console.error(&format!(
                            "{}: {} lines - too short, likely placeholder",
                            entry.name, lines
                        ));
                    }
                    ArtifactClassification::Basic(lines) => {
                        console.warning(&format!(
                            "{}: {} lines - basic implementation",
                            entry.name, lines
                        ));
                    }
                    ArtifactClassification::Comprehensive(lines) => {
                        console.success(&format!("{}: {} lines - comprehensive", entry.name, lines));
                    }
                    ArtifactClassification::ReadError(detail) => {
                        console.error(&format!("{}: error reading file - {}", entry.name, detail));
                    }
                }
            }
        }
    }
}

pub fn render_processor(console: &Console, report: &ProcessorScanReport) {
    console.header("AUDIT PROCESSOR DEEP ANALYSIS");
    match report {
        ProcessorScanReport::Missing { path } => {
            console.error(&format!("auditProcessor.js not found at {}", path.display()));
        }
        ProcessorScanReport::ReadError { path, detail } => {
            console.error(&format!(
                "Error reading {}: {}",
                path.display(),
                detail
            ));
        }
        ProcessorScanReport::Scanned {
            line_count,
            markers,
            undersized,
            ..
        } => {
            console.info(&format!("auditProcessor.js: {} lines", line_count));

            console.section("Checking key patterns:");
            for marker in markers {
                if marker.present {
                    console.success(&format!("Has {}", marker.description));
                } else {
                    console.error(&format!("Missing {}", marker.description));
                }
            }

            if *undersized {
                console.error(&format!(
                    "CRITICAL: auditProcessor.js too short ({} lines)",
                    line_count
                ));
                console.plain("   Expected: 500+ lines for comprehensive processing");
                console.plain("   Current: basic processor that doesn't aggregate service data");
            }

            let missing = markers.iter().filter(|m| !m.present).count();
            if missing > 0 {
                console.warning(&format!("Missing {} key patterns", missing));
            }
        }
    }
}

pub fn render_remediation(console: &Console, report: &RemediationReport) {
    console.header("RECOMMENDATIONS & FIXES");

    if let Some(advice) = &report.advice {
        match report.tier {
            Some(DiagnosisTier::CriticalFailure) => console.error(&advice.headline),
            Some(DiagnosisTier::PartialFailure) => console.warning(&advice.headline),
            _ => console.success(&advice.headline),
        }
        if let Some(summary) = &advice.summary {
            console.plain(&format!("Root cause: {}", summary));
        }

        console.section(fixes_label(report.tier));
        for (i, fix) in advice.fixes.iter().enumerate() {
            console.plain(&format!("{}. {}", i + 1, fix));
        }

        if !advice.fix_steps.is_empty() {
            console.section("Step-by-step fix:");
            for (i, step) in advice.fix_steps.iter().enumerate() {
                console.plain(&format!("{}. {}", i + 1, step));
            }
        }
    }

    console.section("Service issues found:");
    if report.issues.is_empty() {
        console.plain("  No major service issues detected");
    } else {
        for issue in &report.issues {
            console.plain(&format!("  • {}", issue));
        }
    }

    console.section("Next steps:");
    for (i, step) in report.next_steps.iter().enumerate() {
        console.plain(&format!("{}. {}", i + 1, step));
    }
}

fn fixes_label(tier: Option<DiagnosisTier>) -> &'static str {
    match tier {
        Some(DiagnosisTier::CriticalFailure) => "Immediate fixes:",
        Some(DiagnosisTier::PartialFailure) => "Likely fixes:",
        _ => "Minor improvements:",
    }
}
