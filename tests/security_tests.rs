use std::fs;
use std::os::unix::fs::symlink;
use tempfile::TempDir;
use tailwind_translator::{
    collect_files_with_security, extract, validate_input_file, DisplayArgs, ExtractArgs,
    SecurityConfig, TranslatorError,
};

fn args(input: Vec<String>) -> ExtractArgs {
    ExtractArgs {
        input,
        output: None,
        verbose: true, // Enable verbose to see security warnings
        jobs: None,
        exclude: vec![],
        dry_run: true,
        compact: false,
        display: DisplayArgs::default(),
    }
}

#[tokio::test]
async fn test_file_size_limit() {
    let temp_dir = TempDir::new().unwrap();

    // Create a file that's too large (> 10MB)
    let large_file = temp_dir.path().join("large_file.jsx");
    fs::write(&large_file, "a".repeat(11 * 1024 * 1024)).unwrap();

    let normal_file = temp_dir.path().join("normal_file.jsx");
    fs::write(&normal_file, r#"export const Component = () => <div className="flex">Test</div>;"#).unwrap();

    // Should succeed but skip the large file
    let result = extract(args(vec![format!("{}/*.jsx", temp_dir.path().display())])).await.unwrap();
    assert_eq!(result.total_files_processed, 1);
    assert_eq!(result.total_occurrences, 1);
}

#[tokio::test]
async fn test_symlinks_are_skipped() {
    let temp_dir = TempDir::new().unwrap();

    let real_file = temp_dir.path().join("real_file.jsx");
    fs::write(&real_file, r#"export const Component = () => <div className="flex">Test</div>;"#).unwrap();

    let symlink_file = temp_dir.path().join("symlink_file.jsx");
    symlink(&real_file, &symlink_file).unwrap();

    let outside_dir = TempDir::new().unwrap();
    let outside_file = outside_dir.path().join("outside.jsx");
    fs::write(&outside_file, r#"export const Bad = () => <div className="bg-red-500">Bad</div>;"#).unwrap();
    let bad_symlink = temp_dir.path().join("bad_symlink.jsx");
    symlink(&outside_file, &bad_symlink).unwrap();

    let result = extract(args(vec![format!("{}/*.jsx", temp_dir.path().display())])).await.unwrap();
    assert_eq!(result.total_files_processed, 1);
    let path = result.manifest.files.keys().next().unwrap();
    assert!(path.ends_with("real_file.jsx"));
}

#[test]
fn test_symlink_target_must_stay_inside_working_directory() {
    let work = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();

    let inside_file = work.path().join("inside.html");
    fs::write(&inside_file, "<p class=\"p-4\"></p>").unwrap();
    let outside_file = outside.path().join("outside.html");
    fs::write(&outside_file, "<p class=\"p-4\"></p>").unwrap();

    let good_link = work.path().join("good.html");
    symlink(&inside_file, &good_link).unwrap();
    let bad_link = work.path().join("bad.html");
    symlink(&outside_file, &bad_link).unwrap();

    let security = SecurityConfig {
        allow_symlinks: true,
        working_directory: work.path().to_path_buf(),
        ..SecurityConfig::default()
    };

    assert!(validate_input_file(&good_link, &security).is_ok());
    match validate_input_file(&bad_link, &security) {
        Err(TranslatorError::SecurityError(message)) => {
            assert!(message.contains("outside working directory"), "{}", message);
        }
        other => panic!("expected a security error, got {:?}", other),
    }
}

#[test]
fn test_size_limit_is_configurable() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("small.html"), "<p class=\"m-2\"></p>").unwrap();
    fs::write(temp_dir.path().join("big.html"), "x".repeat(4096)).unwrap();

    let security = SecurityConfig {
        max_file_size: 1024,
        ..SecurityConfig::default()
    };
    let files = collect_files_with_security(
        &[format!("{}/*.html", temp_dir.path().display())],
        &[],
        &security,
    )
    .unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].0.ends_with("small.html"));
}

#[tokio::test]
async fn test_output_path_traversal_rejected() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.html"), "<p class=\"m-2\"></p>").unwrap();

    let mut extract_args = args(vec![format!("{}/*.html", temp_dir.path().display())]);
    extract_args.dry_run = false;
    extract_args.output = Some("../../../../../../../tmp/escaped-report.json".into());

    match extract(extract_args).await {
        Err(TranslatorError::SecurityError(message)) => assert!(message.contains("path traversal")),
        other => panic!("expected a security error, got {:?}", other.map(|r| r.total_files_processed)),
    }
}
