use auditdx_engine::{classify_source, scan_markers, Thresholds};
use auditdx_types::{ArtifactClassification, MarkerCheck, SERVICE_FILES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Classification for one expected service file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub name: String,
    pub classification: ArtifactClassification,
}

/// Result of sizing every expected service file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
#[serde(rename_all = "snake_case")]
pub enum ServiceScanReport {
    /// The services directory itself is absent
    MissingDir { path: PathBuf },

    /// Per-file classifications plus the issue tags they produced
    Scanned {
        entries: Vec<ServiceEntry>,
        issues: Vec<String>,
    },
}

impl ServiceScanReport {
    pub fn issues(&self) -> &[String] {
        match self {
            ServiceScanReport::Scanned { issues, .. } => issues,
            ServiceScanReport::MissingDir { .. } => &[],
        }
    }
}

/// Size every expected service file in the table, in table order.
/// A file only reaches the issue list when its classification says so;
/// comprehensive files pass silently.
pub fn scan_service_files(services_dir: &Path, thresholds: &Thresholds) -> ServiceScanReport {
    if !services_dir.exists() {
        return ServiceScanReport::MissingDir {
            path: services_dir.to_path_buf(),
        };
    }

    let mut entries = Vec::new();
    let mut issues = Vec::new();

    for name in SERVICE_FILES {
        let path = services_dir.join(name);
        let classification = if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => classify_source(&content, thresholds),
                Err(e) => ArtifactClassification::ReadError(e.to_string()),
            }
        } else {
            ArtifactClassification::Missing
        };

        if let Some(suffix) = classification.issue_suffix() {
            issues.push(format!("{}: {}", name, suffix));
        }
        entries.push(ServiceEntry {
            name: name.to_string(),
            classification,
        });
    }

    ServiceScanReport::Scanned { entries, issues }
}

/// Result of the processor deep scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
#[serde(rename_all = "snake_case")]
pub enum ProcessorScanReport {
    /// auditProcessor.js does not exist; marker checks are skipped
    Missing { path: PathBuf },

    /// The file exists but could not be read
    ReadError { path: PathBuf, detail: String },

    Scanned {
        path: PathBuf,
        line_count: usize,
        /// One entry per expected pattern, in table order
        markers: Vec<MarkerCheck>,
        /// Line count fell below the processor minimum
        undersized: bool,
        issues: Vec<String>,
    },
}

impl ProcessorScanReport {
    pub fn issues(&self) -> &[String] {
        match self {
            ProcessorScanReport::Scanned { issues, .. } => issues,
            _ => &[],
        }
    }
}

/// Deep-scan the aggregation processor: size it and probe for the patterns
/// a comprehensive implementation carries. Missing patterns are advisory
/// only; undersizing is the one finding that becomes an issue tag.
pub fn scan_processor(processor_path: &Path, thresholds: &Thresholds) -> ProcessorScanReport {
    if !processor_path.exists() {
        return ProcessorScanReport::Missing {
            path: processor_path.to_path_buf(),
        };
    }

    let content = match std::fs::read_to_string(processor_path) {
        Ok(content) => content,
        Err(e) => {
            return ProcessorScanReport::ReadError {
                path: processor_path.to_path_buf(),
                detail: e.to_string(),
            };
        }
    };

    let line_count = content.lines().count();
    let undersized = line_count < thresholds.processor_min_lines;
    let issues = if undersized {
        vec!["auditProcessor: too_short_critical".to_string()]
    } else {
        Vec::new()
    };

    ProcessorScanReport::Scanned {
        path: processor_path.to_path_buf(),
        line_count,
        markers: scan_markers(&content),
        undersized,
        issues,
    }
}
