use crate::config::Config;
use crate::exchange::{run_audit_exchange, save_response_scratch};
use crate::probe::check_backend;
use crate::scan::{scan_processor, scan_service_files, ProcessorScanReport, ServiceScanReport};
use crate::structure::{check_project_structure, StructureReport};
use anyhow::Result;
use auditdx_engine::{analyze_response, build_remediation, AnalysisOutcome, RemediationReport};
use auditdx_types::{
    sample_audit_request, DiagnosisTier, ExchangeOutcome, ProbeOutcome, PROCESSOR_FILE,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Inputs for one diagnostic pass
#[derive(Debug, Clone)]
pub struct RunContext {
    pub project_root: PathBuf,
    pub config: Config,
}

/// Stage notifications emitted while a run progresses. Each event carries
/// an owned copy of the stage result so callers can render live without
/// touching the final report.
#[derive(Debug, Clone)]
pub enum DiagnosticProgress {
    StructureChecked(StructureReport),
    ProbeFinished(ProbeOutcome),
    ExchangeStarted,
    ExchangeSkipped,
    ExchangeFinished(ExchangeOutcome),
    ScratchWritten(PathBuf),
    ScratchWriteFailed { path: PathBuf, detail: String },
    ResponseAnalyzed(AnalysisOutcome),
    ServicesScanned(ServiceScanReport),
    ProcessorScanned(ProcessorScanReport),
}

/// Owned results of a full diagnostic pass. Stages that never ran stay
/// `None`; a fresh report is built for every run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub project_root: PathBuf,
    pub structure: StructureReport,
    pub probe: Option<ProbeOutcome>,
    pub exchange: Option<ExchangeOutcome>,
    pub analysis: Option<AnalysisOutcome>,
    pub scratch_path: Option<PathBuf>,
    pub services: Option<ServiceScanReport>,
    pub processor: Option<ProcessorScanReport>,
    pub remediation: Option<RemediationReport>,
}

impl DiagnosticReport {
    /// Tier of the scored analysis, when one exists
    pub fn scored_tier(&self) -> Option<DiagnosisTier> {
        match &self.analysis {
            Some(AnalysisOutcome::Scored(analysis)) => Some(analysis.tier),
            _ => None,
        }
    }
}

/// Results of the exchange-only check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickCheckReport {
    pub probe: ProbeOutcome,
    pub exchange: Option<ExchangeOutcome>,
    pub analysis: Option<AnalysisOutcome>,
    pub scratch_path: Option<PathBuf>,
}

/// Everything the exchange step produced, folded back into whichever
/// report kind requested it
struct ExchangePhase {
    exchange: ExchangeOutcome,
    analysis: Option<AnalysisOutcome>,
    scratch_path: Option<PathBuf>,
}

pub struct DiagnosticService;

impl DiagnosticService {
    /// Full pass: structure, liveness, exchange, scans, remediation.
    ///
    /// An incomplete project structure ends the run immediately; the file
    /// scans run regardless of backend health, and the remediation block is
    /// built for every run that gets past the structure check.
    pub fn run_full<F>(ctx: &RunContext, mut progress_fn: Option<F>) -> Result<DiagnosticReport>
    where
        F: FnMut(DiagnosticProgress),
    {
        let structure = check_project_structure(&ctx.project_root);
        emit(
            &mut progress_fn,
            DiagnosticProgress::StructureChecked(structure.clone()),
        );

        let mut report = DiagnosticReport {
            project_root: ctx.project_root.clone(),
            structure,
            probe: None,
            exchange: None,
            analysis: None,
            scratch_path: None,
            services: None,
            processor: None,
            remediation: None,
        };

        if !report.structure.is_complete() {
            return Ok(report);
        }

        let probe = check_backend(
            &ctx.config.backend.base_url,
            ctx.config.backend.health_timeout(),
        );
        emit(&mut progress_fn, DiagnosticProgress::ProbeFinished(probe.clone()));
        let healthy = probe.is_healthy();
        report.probe = Some(probe);

        if healthy {
            let phase = Self::step_exchange(ctx, &mut progress_fn);
            report.exchange = Some(phase.exchange);
            report.analysis = phase.analysis;
            report.scratch_path = phase.scratch_path;
        } else {
            emit(&mut progress_fn, DiagnosticProgress::ExchangeSkipped);
        }

        let services_dir = ctx.project_root.join("backend").join("services");
        let services = scan_service_files(&services_dir, &ctx.config.thresholds);
        emit(
            &mut progress_fn,
            DiagnosticProgress::ServicesScanned(services.clone()),
        );

        let processor = scan_processor(&services_dir.join(PROCESSOR_FILE), &ctx.config.thresholds);
        emit(
            &mut progress_fn,
            DiagnosticProgress::ProcessorScanned(processor.clone()),
        );

        let mut issues: Vec<String> = Vec::new();
        issues.extend_from_slice(services.issues());
        issues.extend_from_slice(processor.issues());

        report.remediation = Some(build_remediation(report.scored_tier(), &issues));
        report.services = Some(services);
        report.processor = Some(processor);

        Ok(report)
    }

    /// Exchange-only pass: liveness, then one audit round trip. No file
    /// scans, no remediation.
    pub fn run_quick<F>(ctx: &RunContext, mut progress_fn: Option<F>) -> Result<QuickCheckReport>
    where
        F: FnMut(DiagnosticProgress),
    {
        let probe = check_backend(
            &ctx.config.backend.base_url,
            ctx.config.backend.health_timeout(),
        );
        emit(&mut progress_fn, DiagnosticProgress::ProbeFinished(probe.clone()));

        let mut report = QuickCheckReport {
            probe,
            exchange: None,
            analysis: None,
            scratch_path: None,
        };

        if !report.probe.is_healthy() {
            return Ok(report);
        }

        let phase = Self::step_exchange(ctx, &mut progress_fn);
        report.exchange = Some(phase.exchange);
        report.analysis = phase.analysis;
        report.scratch_path = phase.scratch_path;

        Ok(report)
    }

    fn step_exchange<F>(ctx: &RunContext, progress_fn: &mut Option<F>) -> ExchangePhase
    where
        F: FnMut(DiagnosticProgress),
    {
        emit(progress_fn, DiagnosticProgress::ExchangeStarted);
        let exchange = run_audit_exchange(
            &ctx.config.backend.base_url,
            sample_audit_request(),
            ctx.config.backend.exchange_timeout(),
        );
        emit(
            progress_fn,
            DiagnosticProgress::ExchangeFinished(exchange.clone()),
        );

        let mut phase = ExchangePhase {
            exchange,
            analysis: None,
            scratch_path: None,
        };

        if let ExchangeOutcome::Success { body } = &phase.exchange {
            // keep the raw body on disk before anything else looks at it
            let scratch_path = ctx.config.response_scratch_path();
            match save_response_scratch(body, &scratch_path) {
                Ok(()) => {
                    emit(
                        progress_fn,
                        DiagnosticProgress::ScratchWritten(scratch_path.clone()),
                    );
                    phase.scratch_path = Some(scratch_path);
                }
                Err(e) => emit(
                    progress_fn,
                    DiagnosticProgress::ScratchWriteFailed {
                        path: scratch_path,
                        detail: e.to_string(),
                    },
                ),
            }

            let analysis = analyze_response(body, &ctx.config.thresholds);
            emit(
                progress_fn,
                DiagnosticProgress::ResponseAnalyzed(analysis.clone()),
            );
            phase.analysis = Some(analysis);
        }

        phase
    }
}

fn emit<F>(progress_fn: &mut Option<F>, event: DiagnosticProgress)
where
    F: FnMut(DiagnosticProgress),
{
    if let Some(f) = progress_fn {
        f(event);
    }
}
