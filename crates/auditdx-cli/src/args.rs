use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "auditdx")]
#[command(about = "Diagnose incomplete audit responses from the local-business-audit backend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Root of the audited checkout; discovered from well-known locations
    /// when omitted
    #[arg(long, global = true)]
    pub project_root: Option<PathBuf>,

    /// Backend base URL, overriding the configured one
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path to the config file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full diagnostic: structure, health, API exchange, service
    /// file scans, and recommendations
    Run,

    /// Probe the backend and exercise the audit endpoint, skipping the
    /// file scans
    Quick,
}
