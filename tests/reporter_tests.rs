//! End-to-end reporting through the library API
use std::fs;
use std::path::PathBuf;

use errorf_lint::{Reporter, ReporterConfig, SummarySink};

fn write_go(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write go file");
    path
}

#[test]
fn reports_violation_with_exact_annotation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_go(&dir, "a.go", "fmt.Errorf(\"could not open config\")\n");

    let mut reporter = Reporter::new(ReporterConfig::default(), Vec::new());
    let summary = reporter.run(std::slice::from_ref(&path)).expect("run");
    let out = String::from_utf8(reporter.into_inner()).expect("utf-8");

    assert_eq!(summary.total_errors, 1);
    assert_eq!(summary.exit_code(), 1);
    assert_eq!(
        out,
        format!(
            "::error title=Incorrect error message format,file={},line=1,col=13,endLine=1,endColumn=33::Error message must start with \"failed to\". Found: \"could not open config\"\n\nFound 1 formatting error(s).\n",
            path.display()
        )
    );
}

#[test]
fn summary_goes_to_sink_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bad = write_go(&dir, "bad.go", "fmt.Errorf(\"x\")\nfmt.Errorf(\"y\")\n");
    let good = write_go(&dir, "good.go", "fmt.Errorf(\"failed to z\")\n");
    let sink = dir.path().join("step-summary.md");

    let config = ReporterConfig {
        summary: SummarySink::File(sink.clone()),
        ..ReporterConfig::default()
    };
    let mut reporter = Reporter::new(config, Vec::new());
    let summary = reporter.run(&[good, bad]).expect("run");
    let out = String::from_utf8(reporter.into_inner()).expect("utf-8");

    assert_eq!(summary.total_errors, 2);
    assert_eq!(out.lines().count(), 2);
    assert!(out.lines().all(|l| l.starts_with("::error title=")));
    assert_eq!(
        fs::read_to_string(&sink).expect("read sink"),
        "### Go Error Message Linting\n\nFound 2 formatting error(s).\n"
    );
}

#[test]
fn clean_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let good = write_go(&dir, "good.go", "return fmt.Errorf(\"failed to open config: %w\", err)\n");
    let sink = dir.path().join("step-summary.md");

    let config = ReporterConfig {
        summary: SummarySink::File(sink.clone()),
        ..ReporterConfig::default()
    };
    let mut reporter = Reporter::new(config, Vec::new());
    let summary = reporter.run(&[good]).expect("run");

    assert_eq!(summary.exit_code(), 0);
    assert!(reporter.into_inner().is_empty());
    assert!(!sink.exists());
}
