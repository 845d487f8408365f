//! Constant test fixture and scan tables.
//!
//! The sample payload is a real ActivePieces intake submission kept as mock
//! data so every diagnostic run exercises the backend with identical input.

use once_cell::sync::Lazy;
use serde_json::{Value, json};

/// Top-level keys a complete audit response must populate
pub const CRITICAL_FIELDS: [&str; 17] = [
    "businessName",
    "visibilityScore",
    "currentRank",
    "reviewCount",
    "rating",
    "photoCount",
    "websiteScore",
    "actionItems",
    "keywordPerformance",
    "pagespeedAnalysis",
    "businessImpact",
    "socialMediaAnalysis",
    "citationAnalysis",
    "competitiveGaps",
    "industryBenchmarks",
    "progressMetrics",
    "highlights",
];

/// Backend service sources inspected by the artifact scan, processor first
pub const SERVICE_FILES: [&str; 8] = [
    "auditProcessor.js",
    "competitorService.js",
    "keywordService.js",
    "pagespeedService.js",
    "citationService.js",
    "reviewService.js",
    "schemaService.js",
    "websiteService.js",
];

/// The aggregation entry point that merges per-service results
pub const PROCESSOR_FILE: &str = "auditProcessor.js";

/// Substring patterns a comprehensive processor should contain,
/// paired with what each one indicates
pub const PROCESSOR_MARKERS: [(&str, &str); 8] = [
    ("keywordPerformance", "keyword performance structure"),
    ("pagespeedAnalysis", "pagespeed analysis structure"),
    ("businessImpact", "business impact structure"),
    ("socialMediaAnalysis", "social media analysis structure"),
    ("processAuditLikeActivePieces", "ActivePieces-style processing"),
    ("competitorService", "competitor service import"),
    ("keywordService", "keyword service import"),
    ("pagespeedService", "pagespeed service import"),
];

/// Paths (relative to the project root) that must exist before any
/// deeper check is worth running
pub const REQUIRED_PROJECT_PATHS: [&str; 4] = [
    "backend",
    "frontend",
    "backend/services",
    "backend/package.json",
];

static SAMPLE_AUDIT_REQUEST: Lazy<Value> = Lazy::new(|| {
    json!({
        "businessName": "LM Finishing and Construction",
        "businessType": "Carpenter",
        "address": "1760 E Fall St",
        "city": "Eagle Mountain",
        "state": "Utah",
        "zipCode": "84005",
        "phone": "13855008437",
        "website": "https://lmfinishing.com/",
        "serviceAreas": "Eagle Mountain, Utah County, Salt Lake County",
        "primaryGoal": "Get More Leads",
        "challenges": ["Not Getting Enough Leads", "Website Isnt Bringing In Leads"],
        "currentMarketing": ["Word of Mouth", "Direct Mail", "SEO Optimization"],
        "budget": "Under $500",
        "competitors": "Local handyman services, general contractors in Utah County",
        "contactInfo": {
            "firstName": "Ross",
            "lastName": "Logan",
            "email": "rosswlogan@gmail.com"
        },
        "businessContext": {
            "employeeCount": "2-5",
            "businessAge": "1-3 years",
            "uniqueSellingPoint": "Quality finishing work",
            "targetCustomer": "Homeowners in Utah County",
            "desiredLeads": "11-20"
        },
        "isMockData": true,
        "mockDataSource": "LM Finishing ActivePieces Submission"
    })
});

/// Fully populated sample submission sent on every exchange test
pub fn sample_audit_request() -> &'static Value {
    &SAMPLE_AUDIT_REQUEST
}
