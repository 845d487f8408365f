mod common;

use common::{StubBackend, TestFixture, json_response, refused_base_url, text_response};

#[test]
fn test_quick_check_scores_partial_response() {
    let fixture = TestFixture::new();

    let stub = StubBackend::serve(vec![
        text_response("200 OK", "OK"),
        json_response("200 OK", r#"{"businessName": "LM Finishing and Construction"}"#),
    ]);

    let output = fixture
        .command()
        .arg("--base-url")
        .arg(stub.base_url())
        .arg("quick")
        .output()
        .expect("Failed to run quick check");

    stub.finish();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("API responded successfully!"));
    // one of seventeen fields present
    assert!(stdout.contains("Completion rate: 5%"));
    assert!(stdout.contains("CRITICAL: Major data pipeline failure"));
    assert!(stdout.contains("Quick test complete!"));
    // no file scans in quick mode
    assert!(!stdout.contains("SERVICE FILES ANALYSIS"));

    assert!(fixture.scratch_path().exists());
}

#[test]
fn test_quick_check_rate_limited_skips_analysis() {
    let fixture = TestFixture::new();

    let stub = StubBackend::serve(vec![
        text_response("200 OK", "OK"),
        json_response(
            "429 Too Many Requests",
            r#"{"duplicateInfo": {"reason": "duplicate business"}}"#,
        ),
    ]);

    let output = fixture
        .command()
        .arg("--base-url")
        .arg(stub.base_url())
        .arg("quick")
        .output()
        .expect("Failed to run quick check");

    stub.finish();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Rate limited - audit already exists for this business"));
    assert!(stdout.contains("Duplicate reason: duplicate business"));
    // the analyzer never runs for a rate-limited exchange
    assert!(!stdout.contains("Critical field check:"));
    assert!(stdout.contains("Quick test failed!"));
    assert!(!fixture.scratch_path().exists());
}

#[test]
fn test_quick_check_stops_on_dead_backend() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .arg("--base-url")
        .arg(refused_base_url())
        .arg("quick")
        .output()
        .expect("Failed to run quick check");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Backend is not running or not accessible"));
    assert!(!stdout.contains("API RESPONSE TEST"));
    assert!(stdout.contains("Quick test failed!"));
}

#[test]
fn test_quick_check_json_format() {
    let fixture = TestFixture::new();

    let stub = StubBackend::serve(vec![
        text_response("200 OK", "OK"),
        json_response("200 OK", r#"{"error": "Audit processing failed"}"#),
    ]);

    let output = fixture
        .command()
        .arg("--format")
        .arg("json")
        .arg("--base-url")
        .arg(stub.base_url())
        .arg("quick")
        .output()
        .expect("Failed to run quick check");

    stub.finish();
    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout))
            .expect("Failed to parse JSON report");

    assert_eq!(report["probe"]["type"], "healthy");
    assert_eq!(report["exchange"]["type"], "success");
    assert_eq!(report["analysis"]["type"], "backend_error");
    assert_eq!(
        report["analysis"]["content"]["error"],
        "Audit processing failed"
    );
}
