//! Integration tests for the `kinds`, `validate`, and `init` commands.

use kwmetrics_lib::Host;
use std::fs;
use tempfile::TempDir;

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

fn tables() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let files = [
        ("metric_kind.dat", "1;CYCLOMATIC;Cyclomatic complexity\n2;PARAMS;Parameter count\n3;LOC;Lines of code\n"),
        ("metric.dat", "E1;1;3\n"),
        ("file.dat", "F1;foo.c\n"),
        ("entity.dat", "E1;0;0;bar;0;F1\n"),
        ("attribute.dat", "E1;signature;int bar(void)\n"),
        ("kwmetrics.toml", "metrics = [\"CYCLOMATIC\", \"LOC / PARAMS\"]\n"),
    ];
    for (file_name, contents) in files {
        fs::write(dir.path().join(file_name), contents).expect("Failed to write table");
    }
    dir
}

#[test]
fn test_kinds_lists_every_metric_kind() {
    let tables = tables();
    let mut host = TestHost::new();

    kwmetrics_lib::run(
        &mut host,
        ["kwmetrics", "kinds", "--tables-dir", tables.path().to_str().unwrap(), "--log-level", "none"],
    )
    .unwrap();

    insta::assert_snapshot!(host.output_str().trim_end(), @r"
    Reference   Id  Description
    CYCLOMATIC  1   Cyclomatic complexity
    PARAMS      2   Parameter count
    LOC         3   Lines of code
    ");
}

#[test]
fn test_validate_with_configured_metrics() {
    let tables = tables();
    let config = tables.path().join("kwmetrics.toml");
    let mut host = TestHost::new();

    kwmetrics_lib::run(
        &mut host,
        [
            "kwmetrics",
            "validate",
            "--tables-dir",
            tables.path().to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--log-level",
            "none",
        ],
    )
    .unwrap();

    assert!(host.output_str().contains("2 requested metrics use 3 metric kinds"));
    assert_eq!(host.exit_code, None);
}

#[test]
fn test_validate_rejects_malformed_expression() {
    let tables = tables();
    let config = tables.path().join("kwmetrics.toml");
    let mut host = TestHost::new();

    let _ = kwmetrics_lib::run(
        &mut host,
        [
            "kwmetrics",
            "validate",
            "--tables-dir",
            tables.path().to_str().unwrap(),
            "--metrics-ref",
            "CYCLOMATIC % 2",
            "--config",
            config.to_str().unwrap(),
            "--log-level",
            "none",
        ],
    )
    .unwrap_err();

    assert_eq!(host.exit_code, Some(1));
}

#[test]
fn test_init_writes_default_configuration() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("kwmetrics.toml");
    let mut host = TestHost::new();

    kwmetrics_lib::run(&mut host, ["kwmetrics", "init", output.to_str().unwrap()]).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("metrics = []"));
    assert!(text.contains("metrics_report = \"metrics.csv\""));

    let config: kwmetrics_lib::commands::Config = toml::from_str(&text).unwrap();
    assert!(config.metrics.is_empty());
}
