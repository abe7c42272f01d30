use std::io::Write;
use std::process::Command;

fn run_check(config: &str) -> std::process::Output {
    let mut file = tempfile::NamedTempFile::new().expect("temp config");
    file.write_all(config.as_bytes()).expect("write config");

    Command::new(env!("CARGO_BIN_EXE_customer-desk"))
        .arg("--config")
        .arg(file.path())
        .arg("--check")
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to start customer-desk binary")
}

#[test]
fn check_mode_accepts_valid_config() {
    let output = run_check(
        "api:\n  base_url: http://127.0.0.1:9000\nui:\n  page_size: 10\n",
    );
    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("http://127.0.0.1:9000"));
}

#[test]
fn check_mode_rejects_zero_page_size() {
    let output = run_check("ui:\n  page_size: 0\n");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("page_size"));
}

#[test]
fn check_mode_fails_for_missing_explicit_config() {
    let output = Command::new(env!("CARGO_BIN_EXE_customer-desk"))
        .arg("--config")
        .arg("/nonexistent/customer-desk.yaml")
        .arg("--check")
        .output()
        .expect("Failed to start customer-desk binary");
    assert!(!output.status.success());
}
