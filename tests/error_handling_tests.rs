use std::fs;
use tempfile::TempDir;
use tailwind_translator::{extract, DisplayArgs, ExtractArgs, TranslatorConfig, TranslatorError};

fn args(input: Vec<String>) -> ExtractArgs {
    ExtractArgs {
        input,
        output: None,
        verbose: false,
        jobs: None,
        exclude: vec![],
        dry_run: true,
        compact: false,
        display: DisplayArgs::default(),
    }
}

#[tokio::test]
async fn test_no_files_found() {
    let temp_dir = TempDir::new().unwrap();
    let result = extract(args(vec![format!("{}/*.tsx", temp_dir.path().display())])).await;

    match result {
        Err(TranslatorError::NoFilesFound) => {}
        other => panic!("expected NoFilesFound, got {:?}", other.map(|r| r.total_files_processed)),
    }
}

#[tokio::test]
async fn test_everything_excluded_counts_as_no_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.html"), "<p class=\"p-4\"></p>").unwrap();

    let mut extract_args = args(vec![format!("{}/*.html", temp_dir.path().display())]);
    extract_args.exclude = vec!["**/a.html".to_string()];

    assert!(matches!(extract(extract_args).await, Err(TranslatorError::NoFilesFound)));
}

#[tokio::test]
async fn test_zero_jobs_rejected() {
    let mut extract_args = args(vec!["src/**/*.rs".to_string()]);
    extract_args.jobs = Some(0);

    match extract(extract_args).await {
        Err(TranslatorError::InvalidInput(message)) => assert!(message.contains("jobs")),
        other => panic!("expected InvalidInput, got {:?}", other.map(|r| r.total_files_processed)),
    }
}

#[tokio::test]
async fn test_blank_pattern_rejected() {
    let result = extract(args(vec!["  ".to_string()])).await;
    assert!(matches!(result, Err(TranslatorError::InvalidInput(_))));
}

#[tokio::test]
async fn test_invalid_glob_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let result = extract(args(vec![format!("{}/[*.html", temp_dir.path().display())])).await;

    let error_msg = format!("{}", result.err().unwrap());
    assert!(error_msg.contains("Pattern error"), "{}", error_msg);
}

#[tokio::test]
async fn test_unsupported_config_extension() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("translator.toml");
    fs::write(&config_path, "display = {}").unwrap();

    let mut extract_args = args(vec![]);
    extract_args.display.config = Some(config_path);

    match extract(extract_args).await {
        Err(TranslatorError::ConfigError { message }) => {
            assert!(message.contains("Unsupported config file format"), "{}", message);
        }
        other => panic!("expected ConfigError, got {:?}", other.map(|r| r.total_files_processed)),
    }
}

#[test]
fn test_malformed_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("translator.yaml");
    fs::write(&config_path, "display: [unclosed").unwrap();

    let err = TranslatorConfig::from_file(&config_path).unwrap_err();
    assert!(matches!(err, TranslatorError::Yaml(_)), "{:?}", err);
    assert!(format!("{}", err).starts_with("YAML parsing error"));
}

#[test]
fn test_missing_json_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("missing.json");

    let error_msg = format!("{}", TranslatorConfig::from_file(&config_path).unwrap_err());
    assert!(error_msg.contains("missing.json"), "{}", error_msg);
}

#[tokio::test]
async fn test_invalid_utf8_is_read_lossily() {
    let temp_dir = TempDir::new().unwrap();
    let mut bytes = b"<p class=\"flex\">".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, 0xfd]);
    bytes.extend_from_slice(b"</p>");
    fs::write(temp_dir.path().join("binary.html"), bytes).unwrap();

    let result = extract(args(vec![format!("{}/*.html", temp_dir.path().display())])).await.unwrap();
    assert_eq!(result.total_occurrences, 1);
}
