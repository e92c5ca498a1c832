use std::fs;

use annolint_cli::output::{render_json, render_text};
use annolint_cli::{AnnolintOptions, run_check};
use annolint_core::{CheckConfig, DiagnosticCode};
use tempfile::tempdir;

fn fixture_source() -> &'static str {
    "\
def typed(a: int) -> int:
    return a


def untyped(a, b):
    return a
"
}

fn write_fixture() -> (tempfile::TempDir, String) {
    let dir = tempdir().expect("tempdir");
    let file_path = dir.path().join("fixture.py");
    fs::write(&file_path, fixture_source()).expect("write fixture");
    (dir, file_path.display().to_string())
}

fn base_options(file: String) -> AnnolintOptions {
    AnnolintOptions {
        files: vec![file],
        dirs: Vec::new(),
        config: CheckConfig::default(),
    }
}

#[test]
fn reports_missing_annotations_for_a_file() {
    let (_dir, file) = write_fixture();

    let reports = run_check(&base_options(file)).expect("check run");
    assert_eq!(reports.len(), 1);

    let diagnostics = reports[0].result.as_ref().expect("file checks");
    let codes: Vec<DiagnosticCode> = diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            DiagnosticCode::Ann001,
            DiagnosticCode::Ann001,
            DiagnosticCode::Ann201,
        ]
    );
}

#[test]
fn text_rendering_is_editor_friendly() {
    let (_dir, file) = write_fixture();

    let reports = run_check(&base_options(file.clone())).expect("check run");
    let rendered = render_text(&reports);

    // Columns render 1-indexed: `a` sits at column 13 of the def line
    assert!(
        rendered.contains(&format!("{file}:5:13: ANN001")),
        "unexpected text output: {rendered}"
    );
    assert!(
        rendered.contains("Missing return type annotation for public function"),
        "missing return message: {rendered}"
    );
}

#[test]
fn json_rendering_carries_paths_and_codes() {
    let (_dir, file) = write_fixture();

    let reports = run_check(&base_options(file.clone())).expect("check run");
    let rendered = render_json(&reports).expect("json render");

    let first_line = rendered.lines().next().expect("at least one record");
    let record: serde_json::Value = serde_json::from_str(first_line).expect("valid json");
    assert_eq!(record["path"], serde_json::json!(file));
    assert_eq!(record["code"], serde_json::json!("ANN001"));
    assert_eq!(record["line"], serde_json::json!(5));
}

#[test]
fn directory_discovery_finds_python_files() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("a.py"), "def f(x):\n    return x\n").expect("write a.py");
    fs::write(dir.path().join("b.txt"), "not python").expect("write b.txt");

    let cache = dir.path().join("__pycache__");
    fs::create_dir(&cache).expect("mkdir");
    fs::write(cache.join("c.py"), "def g(x):\n    return x\n").expect("write cached");

    let opts = AnnolintOptions {
        files: Vec::new(),
        dirs: vec![dir.path().display().to_string()],
        config: CheckConfig::default(),
    };

    let reports = run_check(&opts).expect("check run");
    assert_eq!(reports.len(), 1);
    assert!(reports[0].path.ends_with("a.py"));
}

#[test]
fn configuration_reaches_the_checker() {
    let (_dir, file) = write_fixture();

    let mut opts = base_options(file);
    opts.config.allow_untyped_defs = true;
    opts.config.suppress_none_returning = true;

    let reports = run_check(&opts).expect("check run");
    // `untyped` is dynamically typed and skipped entirely
    assert_eq!(reports[0].diagnostic_count(), 0);
}

#[test]
fn broken_files_fail_without_stopping_the_run() {
    let dir = tempdir().expect("tempdir");
    let good = dir.path().join("good.py");
    let bad = dir.path().join("bad.py");
    fs::write(&good, "def f(x):\n    return x\n").expect("write good");
    fs::write(&bad, "def broken(:\n").expect("write bad");

    let opts = AnnolintOptions {
        files: vec![bad.display().to_string(), good.display().to_string()],
        dirs: Vec::new(),
        config: CheckConfig::default(),
    };

    let reports = run_check(&opts).expect("check run");
    assert_eq!(reports.len(), 2);

    let by_name = |suffix: &str| {
        reports
            .iter()
            .find(|report| report.path.ends_with(suffix))
            .expect("report present")
    };
    assert!(by_name("bad.py").is_failed());
    assert!(!by_name("good.py").is_failed());
    assert_eq!(by_name("good.py").diagnostic_count(), 2);

    let rendered = render_text(&reports);
    assert!(rendered.contains("error:"), "missing failure line: {rendered}");
}

#[test]
fn no_inputs_is_an_error() {
    let dir = tempdir().expect("tempdir");

    let opts = AnnolintOptions {
        files: Vec::new(),
        dirs: vec![dir.path().display().to_string()],
        config: CheckConfig::default(),
    };

    let err = run_check(&opts).expect_err("empty directory should fail");
    assert!(
        err.to_string().contains("No input files"),
        "unexpected error: {err}"
    );
}
