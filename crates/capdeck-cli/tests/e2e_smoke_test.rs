use tempfile::tempdir;

use capdeck_cli::{Args, run};

#[test]
fn e2e_smoke_test_renders_deck() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("deck.pdf");

    let args = Args {
        output: output_path.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    };

    run(&args).expect("CLI run failed");

    let bytes = std::fs::read(&output_path).expect("Output file missing");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn e2e_missing_config_file_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("deck.pdf");

    let args = Args {
        output: output_path.to_string_lossy().to_string(),
        config: Some("does-not-exist.toml".to_string()),
        log_level: "off".to_string(),
    };

    assert!(run(&args).is_err());
    assert!(!output_path.exists());
}
