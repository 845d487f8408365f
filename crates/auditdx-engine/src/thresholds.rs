use serde::{Deserialize, Serialize};

/// Severity cutoffs for field scoring and artifact sizing.
/// Overriding these moves the bands; it never changes which checks run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Completion score below this is a critical failure
    pub critical_below: u8,
    /// Completion score below this is a partial failure
    pub partial_below: u8,
    /// Service files under this many lines are placeholder stubs
    pub too_short_lines: usize,
    /// Service files under this many lines are basic implementations
    pub basic_lines: usize,
    /// A processor below this many lines cannot be aggregating all services
    pub processor_min_lines: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            critical_below: 30,
            partial_below: 70,
            too_short_lines: 20,
            basic_lines: 100,
            processor_min_lines: 200,
        }
    }
}
