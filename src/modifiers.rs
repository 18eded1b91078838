//! Splitting a class token into its modifiers, and putting a translated base
//! phrase back together with them.

use serde::{Deserialize, Serialize};

use crate::variants::describe_variant;

/// Utilities whose values may be written as fractions (`w-1/2`). A trailing
/// `/<digits>` on these is part of the value, not an opacity modifier.
const FRACTION_UTILITIES: &[&str] = &[
    "w", "h", "size", "min-w", "max-w", "min-h", "max-h", "basis", "inset", "inset-x", "inset-y",
    "top", "right", "bottom", "left", "start", "end", "translate-x", "translate-y", "aspect",
];

/// The pieces of a single class token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedModifiers {
    /// Custom prefix written as `prefix\:`, empty when absent.
    pub prefix: String,
    /// Variants, outermost first.
    pub variants: Vec<String>,
    /// Opacity modifier digits, e.g. `"50"` for `/50`.
    pub opacity: Option<String>,
    pub is_important: bool,
    pub base_class: String,
}

/// Decompose a class token. Never fails; malformed input degrades to a best
/// effort split.
pub fn parse_modifiers(token: &str) -> ParsedModifiers {
    let mut parsed = ParsedModifiers::default();
    if token.is_empty() {
        return parsed;
    }

    let rest = match split_prefix(token) {
        Some((prefix, rest)) => {
            parsed.prefix = prefix.to_string();
            rest
        }
        None => token,
    };

    let mut segments = split_variants(rest);
    let base = segments.pop().unwrap_or_default();
    parsed.variants = segments
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    let base = match base.strip_suffix('!') {
        Some(stripped) => {
            parsed.is_important = true;
            stripped
        }
        None => base,
    };

    let (base, opacity) = split_opacity(base);
    parsed.opacity = opacity.map(String::from);
    parsed.base_class = base.to_string();
    parsed
}

/// `tw\:rest` -> `("tw", "rest")`. The prefix must be an identifier and must
/// be followed by more content.
fn split_prefix(token: &str) -> Option<(&str, &str)> {
    let idx = token.find("\\:")?;
    let (prefix, rest) = (&token[..idx], &token[idx + 2..]);
    let mut chars = prefix.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid && !rest.is_empty() {
        Some((prefix, rest))
    } else {
        None
    }
}

/// Split at colons that are outside brackets and not escaped. The last
/// segment is the base class.
pub fn split_variants(input: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut escaped = false;

    for (idx, ch) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                segments.push(&input[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    segments.push(&input[start..]);
    segments
}

fn split_opacity(base: &str) -> (&str, Option<&str>) {
    let Some((head, tail)) = base.rsplit_once('/') else {
        return (base, None);
    };
    if head.is_empty() || tail.is_empty() || !tail.chars().all(|c| c.is_ascii_digit()) {
        return (base, None);
    }
    if is_fraction_value(head) {
        return (base, None);
    }
    (head, Some(tail))
}

fn is_fraction_value(head: &str) -> bool {
    let unsigned = head.strip_prefix('-').unwrap_or(head);
    match unsigned.rsplit_once('-') {
        Some((utility, numerator)) => {
            !numerator.is_empty()
                && numerator.chars().all(|c| c.is_ascii_digit())
                && FRACTION_UTILITIES.contains(&utility)
        }
        None => false,
    }
}

/// Append the opacity clause, if any.
pub fn apply_opacity(translation: &str, opacity: Option<&str>) -> String {
    match opacity {
        Some(value) => format!("{} with {}% opacity", translation, value),
        None => translation.to_string(),
    }
}

/// Rebuild the full phrase: base, opacity, variants in source order,
/// importance, then the prefix marker in front.
pub fn compose(base_translation: &str, modifiers: &ParsedModifiers) -> String {
    let mut out = apply_opacity(base_translation, modifiers.opacity.as_deref());

    for (i, variant) in modifiers.variants.iter().enumerate() {
        out.push_str(if i == 0 { " " } else { ", " });
        out.push_str(&describe_variant(variant));
    }

    if modifiers.is_important {
        out.push_str(" !important");
    }

    if !modifiers.prefix.is_empty() {
        out = format!("[{}] {}", modifiers.prefix, out);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_class() {
        let parsed = parse_modifiers("flex");
        assert_eq!(parsed.base_class, "flex");
        assert!(parsed.variants.is_empty());
        assert_eq!(parsed.opacity, None);
        assert!(!parsed.is_important);
        assert_eq!(parsed.prefix, "");
    }

    #[test]
    fn test_all_modifiers() {
        let parsed = parse_modifiers("tw\\:md:hover:bg-blue-500/50!");
        assert_eq!(parsed.prefix, "tw");
        assert_eq!(parsed.variants, vec!["md", "hover"]);
        assert_eq!(parsed.opacity.as_deref(), Some("50"));
        assert!(parsed.is_important);
        assert_eq!(parsed.base_class, "bg-blue-500");
    }

    #[test]
    fn test_arbitrary_selector_variant_is_one_unit() {
        let parsed = parse_modifiers("[&:nth-child(3)]:underline");
        assert_eq!(parsed.variants, vec!["[&:nth-child(3)]"]);
        assert_eq!(parsed.base_class, "underline");
    }

    #[test]
    fn test_colons_inside_brackets_stay_in_base() {
        let parsed = parse_modifiers("hover:[mask-type:luminance]");
        assert_eq!(parsed.variants, vec!["hover"]);
        assert_eq!(parsed.base_class, "[mask-type:luminance]");
    }

    #[test]
    fn test_non_numeric_opacity_stays_attached() {
        let parsed = parse_modifiers("bg-white/abc");
        assert_eq!(parsed.opacity, None);
        assert_eq!(parsed.base_class, "bg-white/abc");
    }

    #[test]
    fn test_large_opacity_is_accepted() {
        let parsed = parse_modifiers("bg-white/150");
        assert_eq!(parsed.opacity.as_deref(), Some("150"));
        assert_eq!(parsed.base_class, "bg-white");
    }

    #[test]
    fn test_fractions_are_not_opacity() {
        let parsed = parse_modifiers("md:w-1/2");
        assert_eq!(parsed.opacity, None);
        assert_eq!(parsed.base_class, "w-1/2");

        let parsed = parse_modifiers("-translate-x-1/2");
        assert_eq!(parsed.base_class, "-translate-x-1/2");
    }

    #[test]
    fn test_leading_bang_is_not_important() {
        let parsed = parse_modifiers("!flex");
        assert!(!parsed.is_important);
        assert_eq!(parsed.base_class, "!flex");
    }

    #[test]
    fn test_prefix_needs_content() {
        let parsed = parse_modifiers("tw\\:");
        assert_eq!(parsed.prefix, "");
    }

    #[test]
    fn test_degenerate_tokens() {
        assert_eq!(parse_modifiers(""), ParsedModifiers::default());

        let parsed = parse_modifiers("::::");
        assert!(parsed.variants.is_empty());
        assert_eq!(parsed.base_class, "");

        let parsed = parse_modifiers("!");
        assert!(parsed.is_important);
        assert_eq!(parsed.base_class, "");
    }

    #[test]
    fn test_base_never_contains_top_level_colon() {
        for token in ["a:b:c", "::x", "x::", "[a:b]:c:d", "tw\\:a:b", "hover:", "a\\:b:c"] {
            let base = parse_modifiers(token).base_class;
            assert_eq!(split_variants(&base).len(), 1, "token {token} gave base {base}");
        }
    }

    #[test]
    fn test_apply_opacity() {
        assert_eq!(
            apply_opacity("white background", Some("50")),
            "white background with 50% opacity"
        );
        assert_eq!(apply_opacity("white background", None), "white background");
    }

    #[test]
    fn test_compose_order() {
        let parsed = parse_modifiers("tw\\:md:hover:bg-white/50!");
        let out = compose("white background", &parsed);
        assert_eq!(
            out,
            "[tw] white background with 50% opacity on medium screens (≥768px), on hover !important"
        );
    }
}
