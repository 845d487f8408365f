use auditdx_types::{ArtifactClassification, MarkerCheck, PROCESSOR_MARKERS};

use crate::thresholds::Thresholds;

/// Classify service source content by line count.
///
/// Line counts are a coarse but reliable signal here: the real service
/// implementations run hundreds of lines, so a file under the too-short
/// threshold is a placeholder left behind by scaffolding.
pub fn classify_source(content: &str, thresholds: &Thresholds) -> ArtifactClassification {
    let lines = content.lines().count();
    if lines < thresholds.too_short_lines {
        ArtifactClassification::TooShort(lines)
    } else if lines < thresholds.basic_lines {
        ArtifactClassification::Basic(lines)
    } else {
        ArtifactClassification::Comprehensive(lines)
    }
}

/// Probe processor source for the expected aggregation patterns.
/// Returns one entry per table pattern, in table order, for any input.
pub fn scan_markers(content: &str) -> Vec<MarkerCheck> {
    PROCESSOR_MARKERS
        .iter()
        .map(|&(pattern, description)| MarkerCheck {
            pattern: pattern.to_string(),
            description: description.to_string(),
            present: content.contains(pattern),
        })
        .collect()
}
