use crate::types::OutputFormat;
use crate::views::{Console, diagnostic};
use anyhow::Result;
use auditdx_runtime::{DiagnosticProgress, DiagnosticService, RunContext};

/// One full diagnostic pass. Plain mode renders stages as they finish;
/// JSON mode runs silently and prints the final report.
pub fn handle(ctx: &RunContext, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let report = DiagnosticService::run_full(ctx, None::<fn(DiagnosticProgress)>)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Plain => {
            let console = Console::stdout();
            console.title("Running full diagnostic...");

            let report = DiagnosticService::run_full(
                ctx,
                Some(|event: DiagnosticProgress| diagnostic::render_progress(&console, &event)),
            )?;

            if !report.structure.is_complete() {
                console.error("Cannot continue - project structure issues");
                return Ok(());
            }

            if let Some(remediation) = &report.remediation {
                diagnostic::render_remediation(&console, remediation);
            }

            console.plain("");
            console.success("Full diagnostic complete!");
        }
    }

    Ok(())
}
