use crate::types::OutputFormat;
use crate::views::{Console, diagnostic};
use anyhow::Result;
use auditdx_runtime::{DiagnosticProgress, DiagnosticService, RunContext};

/// Exchange-only check: probe, then one audit round trip. No file scans.
pub fn handle(ctx: &RunContext, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let report = DiagnosticService::run_quick(ctx, None::<fn(DiagnosticProgress)>)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Plain => {
            let console = Console::stdout();
            console.title("Running quick API test...");

            let report = DiagnosticService::run_quick(
                ctx,
                Some(|event: DiagnosticProgress| diagnostic::render_progress(&console, &event)),
            )?;

            console.plain("");
            if report.exchange.as_ref().is_some_and(|e| e.is_success()) {
                console.success("Quick test complete!");
            } else {
                console.error("Quick test failed!");
            }
        }
    }

    Ok(())
}
