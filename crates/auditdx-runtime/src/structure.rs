use auditdx_types::REQUIRED_PROJECT_PATHS;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One required path, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathCheck {
    pub path: String,
    pub found: bool,
}

/// Existence check over the paths every usable checkout must have
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureReport {
    pub checks: Vec<PathCheck>,
}

impl StructureReport {
    pub fn is_complete(&self) -> bool {
        self.checks.iter().all(|check| check.found)
    }

    pub fn missing(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|check| !check.found)
            .map(|check| check.path.as_str())
            .collect()
    }
}

/// Verify the checkout has the layout the deeper checks rely on.
/// Anything missing here makes file scans meaningless, so the orchestrator
/// treats an incomplete report as terminal.
pub fn check_project_structure(project_root: &Path) -> StructureReport {
    StructureReport {
        checks: REQUIRED_PROJECT_PATHS
            .iter()
            .map(|&path| PathCheck {
                path: path.to_string(),
                found: project_root.join(path).exists(),
            })
            .collect(),
    }
}
