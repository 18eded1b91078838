use clap::Parser;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tailwind_translator::{Cli, Commands};

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tailwind-translator"))
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = binary()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn tailwind-translator");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .expect("Failed to write to stdin");

    child.wait_with_output().expect("Failed to read output")
}

#[test]
fn test_cli_parse_extract() {
    let cli = Cli::parse_from([
        "tailwind-translator",
        "extract",
        "-i", "src/**/*.tsx",
        "-i", "src/**/*.vue",
        "-e", "**/vendor/**",
        "-o", "report.json",
        "--verbose",
        "--dry-run",
        "-j", "4",
    ]);

    match cli.command {
        Commands::Extract(args) => {
            assert_eq!(args.input, vec!["src/**/*.tsx", "src/**/*.vue"]);
            assert_eq!(args.exclude, vec!["**/vendor/**"]);
            assert_eq!(args.output.unwrap().to_str().unwrap(), "report.json");
            assert!(args.verbose);
            assert!(args.dry_run);
            assert!(!args.compact);
            assert_eq!(args.jobs, Some(4));
            assert!(!args.display.group_by_category);
        }
        other => panic!("Unexpected command {:?}", other),
    }
}

#[test]
fn test_cli_parse_translate_defaults() {
    let cli = Cli::parse_from(["tailwind-translator", "translate"]);
    match cli.command {
        Commands::Translate(args) => {
            assert!(args.classes.is_empty());
            assert_eq!(args.display.emojis_override(), None);
            assert!(args.display.config.is_none());
        }
        other => panic!("Unexpected command {:?}", other),
    }
}

#[test]
fn test_cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["tailwind-translator", "generate-css"]).is_err());
}

#[test]
fn test_translate_arguments() {
    let output = binary()
        .args(["translate", "p-4 flex", "hover:bg-white/50"])
        .output()
        .expect("Failed to run translate");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "padding 1rem, flexbox container",
            "white background with 50% opacity on hover",
        ]
    );
}

#[test]
fn test_translate_grouped_from_stdin() {
    let output = run_with_stdin(&["translate", "--group-by-category", "--no-emojis"], "p-4 flex\n\nw-full\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Flexbox & Grid: flexbox container | Spacing: padding 1rem",
            "",
            "Sizing: full width",
        ]
    );
}

#[test]
fn test_pipe_outputs_json_occurrences() {
    let source = r#"<div className="flex p-4"><span className={on && "underline"} /></div>"#;
    let output = run_with_stdin(&["pipe"], source);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("pipe output is JSON");
    let occurrences = json.as_array().unwrap();
    assert_eq!(occurrences.len(), 2);
    assert_eq!(occurrences[0]["type"], "simple");
    assert_eq!(occurrences[0]["translation"], "flexbox container, padding 1rem");
    assert_eq!(occurrences[0]["line"], 1);
    assert_eq!(occurrences[1]["type"], "expression");
    assert_eq!(occurrences[1]["conditional_classes"][0]["condition"], "on");
}

#[test]
fn test_pipe_empty_input() {
    let output = run_with_stdin(&["pipe"], "");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[]");
}

#[test]
fn test_extract_without_matches_fails() {
    let dir = tempfile::tempdir().unwrap();
    let pattern = format!("{}/*.nothing", dir.path().display());
    let output = binary()
        .args(["extract", "-i", &pattern])
        .output()
        .expect("Failed to run extract");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No files found"));
}
