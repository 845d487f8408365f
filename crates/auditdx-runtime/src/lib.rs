pub mod config;
pub mod diagnostic;
pub mod discover;
pub mod error;
pub mod exchange;
pub mod probe;
pub mod scan;
pub mod structure;

#[cfg(test)]
mod testutil;

pub use config::{BackendConfig, Config, ScratchConfig};
pub use diagnostic::{
    DiagnosticProgress, DiagnosticReport, DiagnosticService, QuickCheckReport, RunContext,
};
pub use discover::find_project_root;
pub use error::{Error, Result};
pub use exchange::{default_scratch_path, run_audit_exchange, save_response_scratch};
pub use probe::check_backend;
pub use scan::{scan_processor, scan_service_files, ProcessorScanReport, ServiceScanReport};
pub use structure::{check_project_structure, PathCheck, StructureReport};
