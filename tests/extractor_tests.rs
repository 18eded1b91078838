use tailwind_translator::{
    extract_all_class_names, find_extraction_at_position, ConditionalClassFragment,
    ExtractionKind, Translator,
};

fn frag(classes: &str, condition: Option<&str>) -> ConditionalClassFragment {
    ConditionalClassFragment {
        classes: classes.to_string(),
        condition: condition.map(String::from),
    }
}

const REACT_COMPONENT: &str = r#"
import { cn } from "@/lib/utils";

export function Card({ active, size, title }) {
  return (
    <div className="rounded-lg border p-6 shadow-sm">
      <h2 className={`text-lg ${active ? "font-bold" : "font-normal"}`}>{title}</h2>
      <p className={size === "sm" ? "text-sm" : size === "lg" ? "text-lg" : "text-base"} />
      <button className={cn("px-4 py-2", active && "bg-blue-500 text-white", { "opacity-50": !active })}>
        Go
      </button>
    </div>
  );
}
"#;

#[test]
fn test_react_component() {
    let found = extract_all_class_names(REACT_COMPONENT);
    let kinds: Vec<ExtractionKind> = found.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ExtractionKind::Simple,
            ExtractionKind::Template,
            ExtractionKind::Expression,
            ExtractionKind::Helper,
        ]
    );

    assert_eq!(found[0].class_strings, vec!["rounded-lg border p-6 shadow-sm"]);

    assert_eq!(found[1].class_strings, vec!["text-lg"]);
    assert_eq!(
        found[1].conditional_classes,
        vec![frag("font-bold", Some("active")), frag("font-normal", Some("!active"))]
    );

    assert_eq!(
        found[2].conditional_classes,
        vec![
            frag("text-sm", Some(r#"size === "sm""#)),
            frag("text-lg", Some(r#"!size === "sm" && size === "lg""#)),
            frag("text-base", Some(r#"!size === "sm" && !size === "lg""#)),
        ]
    );

    assert_eq!(found[3].class_strings, vec!["px-4 py-2"]);
    assert_eq!(
        found[3].conditional_classes,
        vec![
            frag("bg-blue-500 text-white", Some("active")),
            frag("opacity-50", Some("!active")),
        ]
    );
}

#[test]
fn test_ranges_are_ordered_disjoint_and_addressable() {
    let found = extract_all_class_names(REACT_COMPONENT);
    for pair in found.windows(2) {
        assert!(pair[0].range.end <= pair[1].range.start);
    }
    for extraction in &found {
        let covered = &REACT_COMPONENT[extraction.range.start..extraction.range.end];
        assert!(!covered.is_empty());
        let middle = extraction.range.start + extraction.range.len() / 2;
        assert_eq!(find_extraction_at_position(&found, middle), Some(extraction));
    }
    assert!(find_extraction_at_position(&found, 0).is_none());
}

#[test]
fn test_vue_template() {
    let src = r#"
<template>
  <nav class="flex gap-2" :class="[isOpen ? 'block' : 'hidden', 'md:flex']">
    <a v-bind:class="{ 'text-blue-600': current, underline: hovered }">Home</a>
  </nav>
</template>
"#;
    let found = extract_all_class_names(src);
    assert_eq!(found.len(), 3);
    assert_eq!(found[0].kind, ExtractionKind::Simple);
    assert_eq!(found[0].class_strings, vec!["flex gap-2"]);

    assert_eq!(found[1].kind, ExtractionKind::Vue);
    assert_eq!(found[1].class_strings, vec!["md:flex"]);
    assert_eq!(
        found[1].conditional_classes,
        vec![frag("block", Some("isOpen")), frag("hidden", Some("!isOpen"))]
    );

    assert_eq!(found[2].kind, ExtractionKind::Vue);
    assert_eq!(
        found[2].conditional_classes,
        vec![frag("text-blue-600", Some("current")), frag("underline", Some("hovered"))]
    );
}

#[test]
fn test_svelte_component() {
    let src = r#"<button class="btn px-3" class:active class:disabled={count > 3}>+</button>"#;
    let found = extract_all_class_names(src);
    assert_eq!(found.len(), 3);
    assert_eq!(found[0].class_strings, vec!["btn px-3"]);
    assert_eq!(found[1].kind, ExtractionKind::Svelte);
    assert_eq!(found[1].conditional_classes, vec![frag("active", Some("active"))]);
    assert_eq!(found[2].conditional_classes, vec![frag("disabled", Some("count > 3"))]);
}

#[test]
fn test_angular_template() {
    let src = r#"<li class="item" [ngClass]="['p-2', selected ? 'bg-gray-100' : '']" [class.font-bold]="isLead"></li>"#;
    let found = extract_all_class_names(src);
    assert_eq!(found.len(), 3);
    assert_eq!(found[1].kind, ExtractionKind::Angular);
    assert_eq!(found[1].class_strings, vec!["p-2"]);
    assert_eq!(found[1].conditional_classes, vec![frag("bg-gray-100", Some("selected"))]);
    assert_eq!(found[2].conditional_classes, vec![frag("font-bold", Some("isLead"))]);
}

#[test]
fn test_solid_component() {
    let src = "<div class=\"row\" classList={{ 'ring-2': focused(), hidden: !visible() }} />";
    let found = extract_all_class_names(src);
    assert_eq!(found.len(), 2);
    assert_eq!(found[1].kind, ExtractionKind::Solid);
    assert_eq!(
        found[1].conditional_classes,
        vec![frag("ring-2", Some("focused()")), frag("hidden", Some("!visible()"))]
    );
}

#[test]
fn test_unparseable_expressions_are_skipped() {
    let src = r#"
<div className={styles.card} />
<div className={getClasses(variant)} />
<div className="" />
<span className="   " />
<p className="mt-1" />
"#;
    let found = extract_all_class_names(src);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].class_strings, vec!["mt-1"]);
}

#[test]
fn test_partial_template_classes_are_dropped() {
    let src = "<div className={`bg-${color}-500 p-4 text-${size}`} />";
    let found = extract_all_class_names(src);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].class_strings, vec!["p-4"]);
    assert!(found[0].conditional_classes.is_empty());
}

#[test]
fn test_translated_occurrences() {
    let translator: Translator = Translator::default();
    let found = extract_all_class_names(r#"<div className={cn("p-4", open && "flex")} />"#);
    assert_eq!(found.len(), 1);
    assert_eq!(
        translator.translate_extraction(&found[0]),
        "padding 1rem; flexbox container (open)"
    );
}

#[test]
fn test_unicode_source() {
    let src = "<p class=\"mt-2\">héllo ✨</p><p class=\"mb-2\">wörld</p>";
    let found = extract_all_class_names(src);
    assert_eq!(found.len(), 2);
    let second = &src[found[1].range.start..found[1].range.end];
    assert_eq!(second, "class=\"mb-2\"");
}

#[test]
fn test_helper_nested_in_helper() {
    let found = extract_all_class_names("<div className={cn('p-4', clsx(a && 'b'))} />");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, ExtractionKind::Helper);
    assert_eq!(found[0].class_strings, vec!["p-4"]);
    assert_eq!(found[0].conditional_classes, vec![frag("b", Some("a"))]);
}

#[test]
fn test_helper_in_ternary_branch() {
    let found = extract_all_class_names("<div className={isActive ? cn('a', 'b') : 'c'} />");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, ExtractionKind::Expression);
    assert!(found[0].class_strings.is_empty());
    assert_eq!(
        found[0].conditional_classes,
        vec![
            frag("a", Some("isActive")),
            frag("b", Some("isActive")),
            frag("c", Some("!isActive")),
        ]
    );
}

#[test]
fn test_helper_in_template_interpolation() {
    let found = extract_all_class_names("<div className={`p-4 ${cn('x', y && 'z')}`} />");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, ExtractionKind::Template);
    assert_eq!(found[0].class_strings, vec!["p-4", "x"]);
    assert_eq!(found[0].conditional_classes, vec![frag("z", Some("y"))]);
}
