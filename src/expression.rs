//! Conditional class expressions: `cond && 'a'`, ternaries, object maps,
//! template literals and the like.
//!
//! Nothing is evaluated. Conditions are carried as trimmed source text so the
//! caller can display them next to the classes they guard.

use serde::{Deserialize, Serialize};

use crate::scan::{
    find_closing, find_top_level, split_top_level, strip_outer_parens, string_literal,
    top_level_chars, top_level_matches,
};

/// Classes that apply when `condition` holds (always, when `None`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalClassFragment {
    pub classes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl ConditionalClassFragment {
    /// Build a fragment with whitespace-normalized classes. Blank class lists
    /// yield `None`.
    pub fn new(classes: &str, condition: Option<String>) -> Option<Self> {
        let classes = classes.split_whitespace().collect::<Vec<_>>().join(" ");
        if classes.is_empty() {
            return None;
        }
        Some(Self { classes, condition })
    }

    pub(crate) fn guarded_by(self, outer: &str) -> Self {
        let condition = match self.condition {
            Some(inner) => format!("{} && {}", outer, inner),
            None => outer.to_string(),
        };
        Self {
            classes: self.classes,
            condition: Some(condition),
        }
    }
}

pub type Fragments = Vec<ConditionalClassFragment>;

/// Which object keys name classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStyle {
    /// JSX helpers: `{ 'bg-red-500': cond }`.
    QuotedOnly,
    /// Vue, Angular and Solid also allow `{ active: cond }` and `{ active }`.
    Bare,
}

type Parser = fn(&str) -> Option<Fragments>;

const PARSERS: &[Parser] = &[
    parse_object,
    parse_string,
    parse_and,
    parse_or,
    parse_nullish,
    parse_ternary,
    parse_template,
    parse_helper_call,
];

/// Class-composing helpers whose arguments are class values.
pub const HELPER_NAMES: &[&str] = &["clsx", "classnames", "classNames", "cn", "twMerge", "twJoin", "cva"];

/// Parse a class-bearing expression. `None` means the shape is not
/// recognized and the expression should be skipped.
pub fn parse_expression(expr: &str) -> Option<Fragments> {
    let expr = unwrap_parens(expr);
    if expr.is_empty() {
        return None;
    }
    PARSERS.iter().find_map(|parse| parse(expr))
}

/// Objects, arrays or any expression form, for framework bindings.
pub fn parse_class_value(expr: &str, style: KeyStyle) -> Option<Fragments> {
    let expr = unwrap_parens(expr);
    if expr.starts_with('{') {
        return parse_object_with(expr, style);
    }
    if expr.starts_with('[') {
        return parse_array(expr, style);
    }
    parse_expression(expr)
}

/// `[a, cond && 'b', { c: d }]`, element by element. Unparseable elements
/// contribute nothing.
pub fn parse_array(expr: &str, style: KeyStyle) -> Option<Fragments> {
    let body = enclosed(expr, '[')?;
    Some(
        split_top_level(body, ',')
            .into_iter()
            .filter(|item| !item.trim().is_empty())
            .filter_map(|item| parse_class_value(item, style))
            .flatten()
            .collect(),
    )
}

pub fn parse_object_with(expr: &str, style: KeyStyle) -> Option<Fragments> {
    let mut fragments = Vec::new();
    for (classes, value) in object_entries(expr, style)? {
        let condition = match value {
            "true" => None,
            "false" => continue,
            other => Some(strip_outer_parens(other).to_string()),
        };
        fragments.extend(ConditionalClassFragment::new(&classes, condition));
    }
    Some(fragments)
}

/// `(key, raw value)` pairs of an object literal. Entries whose key does not
/// fit `style` are skipped; an object with no usable entry at all is `None`.
pub fn object_entries(expr: &str, style: KeyStyle) -> Option<Vec<(String, &str)>> {
    let body = enclosed(expr, '{')?;
    let entries: Vec<&str> = split_top_level(body, ',')
        .into_iter()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();
    let total = entries.len();
    let parsed: Vec<_> = entries
        .into_iter()
        .filter_map(|entry| object_entry(entry, style))
        .collect();
    if total > 0 && parsed.is_empty() {
        return None;
    }
    Some(parsed)
}

fn parse_object(expr: &str) -> Option<Fragments> {
    parse_object_with(expr, KeyStyle::QuotedOnly)
}

/// Key text and raw value of one `key: value` entry.
fn object_entry(entry: &str, style: KeyStyle) -> Option<(String, &str)> {
    let Some(colon) = find_top_level(entry, ":") else {
        // `{ active }` shorthand
        return match style {
            KeyStyle::Bare if is_bare_key(entry) => Some((entry.to_string(), entry)),
            _ => None,
        };
    };
    let key = entry[..colon].trim();
    let value = entry[colon + 1..].trim();
    if value.is_empty() {
        return None;
    }
    if let Some((quote, text)) = string_literal(key) {
        if quote == '`' && text.contains("${") {
            return None;
        }
        return Some((text.to_string(), value));
    }
    match style {
        KeyStyle::Bare if is_bare_key(key) => Some((key.to_string(), value)),
        _ => None,
    }
}

fn is_bare_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '-'))
}

fn parse_string(expr: &str) -> Option<Fragments> {
    let (quote, body) = string_literal(expr)?;
    if quote == '`' && body.contains("${") {
        return None;
    }
    Some(ConditionalClassFragment::new(body, None).into_iter().collect())
}

fn parse_and(expr: &str) -> Option<Fragments> {
    if find_ternary(expr).is_some()
        || find_top_level(expr, "||").is_some()
        || find_top_level(expr, "??").is_some()
    {
        return None;
    }
    let at = *top_level_matches(expr, "&&").last()?;
    let condition = strip_outer_parens(&expr[..at]);
    let fragments = parse_expression(&expr[at + 2..])?;
    Some(
        fragments
            .into_iter()
            .map(|f| f.guarded_by(condition))
            .collect(),
    )
}

fn parse_or(expr: &str) -> Option<Fragments> {
    if find_ternary(expr).is_some() || find_top_level(expr, "??").is_some() {
        return None;
    }
    let at = *top_level_matches(expr, "||").last()?;
    let condition = negate(strip_outer_parens(&expr[..at]));
    let fragments = parse_expression(&expr[at + 2..])?;
    Some(
        fragments
            .into_iter()
            .map(|f| f.guarded_by(&condition))
            .collect(),
    )
}

fn parse_nullish(expr: &str) -> Option<Fragments> {
    if find_ternary(expr).is_some() {
        return None;
    }
    let at = *top_level_matches(expr, "??").last()?;
    let condition = format!("{} == null", strip_outer_parens(&expr[..at]));
    let fragments = parse_expression(&expr[at + 2..])?;
    Some(
        fragments
            .into_iter()
            .map(|f| f.guarded_by(&condition))
            .collect(),
    )
}

fn parse_ternary(expr: &str) -> Option<Fragments> {
    let question = find_ternary(expr)?;
    let rest = &expr[question + 1..];
    let colon = find_ternary_colon(rest)?;

    let condition = strip_outer_parens(&expr[..question]);
    let when_true = parse_expression(&rest[..colon]);
    let when_false = parse_expression(&rest[colon + 1..]);
    if when_true.is_none() && when_false.is_none() {
        return None;
    }

    // The false branch negates the condition text as written, so a nested
    // ternary on `v === "a"` reads `!v === "a" && ...`.
    let negated = format!("!{}", condition);
    let mut fragments: Fragments = when_true
        .unwrap_or_default()
        .into_iter()
        .map(|f| f.guarded_by(condition))
        .collect();
    fragments.extend(
        when_false
            .unwrap_or_default()
            .into_iter()
            .map(|f| f.guarded_by(&negated)),
    );
    Some(fragments)
}

fn parse_template(expr: &str) -> Option<Fragments> {
    let body = enclosed(expr, '`')?;
    let mut static_text = String::new();
    let mut conditional = Vec::new();
    let mut cursor = 0;
    let mut after_interpolation = false;

    while let Some(found) = body[cursor..].find("${") {
        let start = cursor + found;
        let close = find_closing(body, start + 1)?;
        let glued_before = body[..start]
            .chars()
            .next_back()
            .is_some_and(|c| !c.is_whitespace());
        let glued_after = body[close + 1..]
            .chars()
            .next()
            .is_some_and(|c| !c.is_whitespace());

        push_static(&mut static_text, &body[cursor..start], after_interpolation, true);
        if !glued_before && !glued_after {
            if let Some(fragments) = parse_expression(&body[start + 2..close]) {
                conditional.extend(fragments);
            }
        }
        cursor = close + 1;
        after_interpolation = true;
    }
    push_static(&mut static_text, &body[cursor..], after_interpolation, false);

    let mut fragments: Fragments = ConditionalClassFragment::new(&static_text, None)
        .into_iter()
        .collect();
    fragments.extend(conditional);
    Some(fragments)
}

/// `cn('a', cond && 'b')` as a whole expression, so helpers nested in
/// ternaries, templates or other helpers keep their classes.
fn parse_helper_call(expr: &str) -> Option<Fragments> {
    let paren = expr.find('(')?;
    let name = expr[..paren].trim_end();
    if !HELPER_NAMES.contains(&name) {
        return None;
    }
    let close = find_closing(expr, paren)?;
    if !expr[close + 1..].trim().is_empty() {
        return None;
    }
    Some(helper_arguments(name, &expr[paren + 1..close]))
}

/// Fragments of a helper's argument list. Unparseable arguments contribute
/// nothing.
pub fn helper_arguments(name: &str, args: &str) -> Fragments {
    if name == "cva" {
        return cva_fragments(args);
    }
    split_top_level(args, ',')
        .into_iter()
        .filter(|arg| !arg.trim().is_empty())
        .filter_map(|arg| parse_class_value(arg, KeyStyle::QuotedOnly))
        .flatten()
        .collect()
}

/// `cva(base, { variants: { size: { sm: '...' } } })`: the base classes, then
/// each variant option guarded by `size: sm`.
fn cva_fragments(args: &str) -> Fragments {
    let args = split_top_level(args, ',');
    let mut fragments = args
        .first()
        .and_then(|base| parse_class_value(base, KeyStyle::QuotedOnly))
        .unwrap_or_default();

    let Some(options) = args.get(1).and_then(|o| object_entries(o, KeyStyle::Bare)) else {
        return fragments;
    };
    let Some((_, variants)) = options.into_iter().find(|(key, _)| key == "variants") else {
        return fragments;
    };
    for (variant, choices) in object_entries(variants, KeyStyle::Bare).unwrap_or_default() {
        for (choice, value) in object_entries(choices, KeyStyle::Bare).unwrap_or_default() {
            let guard = format!("{}: {}", variant, choice);
            let Some(parsed) = parse_class_value(value, KeyStyle::QuotedOnly) else {
                continue;
            };
            fragments.extend(parsed.into_iter().map(|f| f.guarded_by(&guard)));
        }
    }
    fragments
}

/// Append the complete class tokens of one static template segment. A token
/// touching an interpolation is only part of a class name and is dropped.
fn push_static(out: &mut String, segment: &str, after_interpolation: bool, before_interpolation: bool) {
    let mut tokens: Vec<&str> = segment.split_whitespace().collect();
    if after_interpolation && !segment.starts_with(char::is_whitespace) && !tokens.is_empty() {
        tokens.remove(0);
    }
    if before_interpolation && !segment.ends_with(char::is_whitespace) {
        tokens.pop();
    }
    for token in tokens {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
}

/// Body of `expr` when the whole expression is one `open ... close` pair.
fn enclosed(expr: &str, open: char) -> Option<&str> {
    let expr = expr.trim();
    if !expr.starts_with(open) {
        return None;
    }
    let close = find_closing(expr, 0)?;
    if close != expr.len() - 1 {
        return None;
    }
    Some(&expr[1..close])
}

fn unwrap_parens(expr: &str) -> &str {
    let mut current = expr.trim();
    loop {
        let next = strip_outer_parens(current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Offset of the first top-level `?` that starts a conditional operator,
/// skipping `??` and `?.`.
fn find_ternary(expr: &str) -> Option<usize> {
    let bytes = expr.as_bytes();
    let mut skip_until = 0;
    for (idx, ch) in top_level_chars(expr) {
        if idx < skip_until || ch != '?' {
            continue;
        }
        match bytes.get(idx + 1) {
            Some(b'?') => skip_until = idx + 2,
            Some(b'.') if !bytes.get(idx + 2).is_some_and(u8::is_ascii_digit) => {}
            _ => return Some(idx),
        }
    }
    None
}

/// The `:` that pairs with a ternary's `?`, given the text after the `?`.
fn find_ternary_colon(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut nested = 0usize;
    let mut skip_until = 0;
    for (idx, ch) in top_level_chars(rest) {
        if idx < skip_until {
            continue;
        }
        match ch {
            '?' => match bytes.get(idx + 1) {
                Some(b'?') => skip_until = idx + 2,
                Some(b'.') if !bytes.get(idx + 2).is_some_and(u8::is_ascii_digit) => {}
                _ => nested += 1,
            },
            ':' if nested == 0 => return Some(idx),
            ':' => nested -= 1,
            _ => {}
        }
    }
    None
}

fn negate(condition: &str) -> String {
    let simple = condition
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.'));
    if simple {
        format!("!{}", condition)
    } else {
        format!("!({})", condition)
    }
}
