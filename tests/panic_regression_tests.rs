//! Malformed class strings and half-written markup must never panic the
//! translator or the extractor.

use std::io::Write;
use std::process::{Command, Stdio};
use tailwind_translator::{extract_all_class_names, parse_expression, process_source, translate_classes, Translator};

const WEIRD_CLASSES: &[&str] = &[
    "flex-invalid-value",
    "text-overflow-bad",
    "bg-[",
    "bg-[]",
    "w-[calc(100%-",
    "grid-cols-[repeat(auto-fill,minmax(",
    "-",
    "-m",
    "--x",
    "/",
    "p-4/",
    "p-4//50",
    "text-red-500/[",
    "!",
    "!!",
    "hover:",
    ":hover",
    "[&",
    "[&>*]:",
    "group-[",
    "peer-has-[",
    "data-[state=open",
    "supports-[",
    "tw\\:",
    "\\",
    "💥",
    "hover:💥/💥!",
    "ü-ö",
    "w-1/0",
    "w-0/0",
    "z-99999999999999999999999",
    "rotate-99999999999999999999",
];

const WEIRD_SOURCES: &[&str] = &[
    "<div className=",
    "<div className=\"",
    "<div className={",
    "<div className={`",
    "<div className={`${",
    "<div className={a ? \"x\" :",
    "<div className={cn(",
    "<div className={cn(\"a\", {",
    "cva(\"base\", { variants: { size: {",
    ":class=\"{",
    "[ngClass]=\"[",
    "classList={{",
    "class:",
    "class:x={",
    "<p class='unterminated>",
    "className={\"a\" + \"b\"}",
    "className={cond && `x ${y && \"z\"}`}",
    "className={((((((((((a))))))))))}",
    "className={a ? b ? \"x\" : \"y\" : \"z\"}",
    "\u{0}\u{1}class=\"p-4\"\u{7f}",
    "class=\"é\" class=\"ü\"",
];

#[test]
fn test_translator_handles_weird_classes() {
    let grouped = Translator::new(tailwind_translator::DisplaySettings {
        group_by_category: true,
        show_category_emojis: true,
    });
    for class in WEIRD_CLASSES {
        let _ = translate_classes(class);
        let _ = grouped.translate_classes(class);
        let _ = translate_classes(&format!("md:hover:{}!", class));
    }
    assert!(!translate_classes(&WEIRD_CLASSES.join(" ")).is_empty());
}

#[test]
fn test_extractor_handles_truncated_markup() {
    let translator: Translator = Translator::default();
    for source in WEIRD_SOURCES {
        let extractions = extract_all_class_names(source);
        for extraction in &extractions {
            assert!(extraction.range.end <= source.len(), "{:?} in {:?}", extraction.range, source);
            assert!(source.is_char_boundary(extraction.range.start));
            assert!(source.is_char_boundary(extraction.range.end));
        }
        let _ = process_source(source, &translator);
    }
}

#[test]
fn test_expression_parser_handles_garbage() {
    for source in WEIRD_SOURCES {
        let _ = parse_expression(source);
    }
    assert_eq!(parse_expression(""), None);
    assert_eq!(parse_expression("a ? : "), None);
}

fn run_pipe(input: &str) -> (bool, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tailwind-translator"))
        .arg("pipe")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn tailwind-translator");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .expect("Failed to write to stdin");

    let output = child.wait_with_output().expect("Failed to read output");
    (output.status.success(), String::from_utf8_lossy(&output.stderr).to_string())
}

#[test]
fn test_pipe_binary_never_panics() {
    let mut source = String::new();
    for class in WEIRD_CLASSES {
        source.push_str(&format!("<div className=\"{}\"></div>\n", class));
    }
    for fragment in WEIRD_SOURCES {
        source.push_str(fragment);
        source.push('\n');
    }

    let (success, stderr) = run_pipe(&source);
    assert!(success, "pipe failed: {}", stderr);
    assert!(!stderr.contains("panicked at"), "pipe panicked: {}", stderr);
}
