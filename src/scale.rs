//! Value formatting shared by the resolver's pattern matchers.

/// The default spacing scale. Listed explicitly because the low end of the
/// scale is not linear (`px`, `0.5`, `1.5`, ...).
const SPACING_SCALE: &[(&str, &str)] = &[
    ("0", "0"),
    ("px", "1px"),
    ("0.5", "0.125rem"),
    ("1", "0.25rem"),
    ("1.5", "0.375rem"),
    ("2", "0.5rem"),
    ("2.5", "0.625rem"),
    ("3", "0.75rem"),
    ("3.5", "0.875rem"),
    ("4", "1rem"),
    ("5", "1.25rem"),
    ("6", "1.5rem"),
    ("7", "1.75rem"),
    ("8", "2rem"),
    ("9", "2.25rem"),
    ("10", "2.5rem"),
    ("11", "2.75rem"),
    ("12", "3rem"),
    ("14", "3.5rem"),
    ("16", "4rem"),
    ("20", "5rem"),
    ("24", "6rem"),
    ("28", "7rem"),
    ("32", "8rem"),
    ("36", "9rem"),
    ("40", "10rem"),
    ("44", "11rem"),
    ("48", "12rem"),
    ("52", "13rem"),
    ("56", "14rem"),
    ("60", "15rem"),
    ("64", "16rem"),
    ("72", "18rem"),
    ("80", "20rem"),
    ("96", "24rem"),
];

pub const COLOR_NAMES: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

pub fn spacing_value(key: &str) -> Option<&'static str> {
    SPACING_SCALE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Format a number with at most three decimals and no trailing zeros.
pub fn format_number(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `1/2` -> `50%`, `2/3` -> `66.667%`.
pub fn fraction_percent(fraction: &str) -> Option<String> {
    let (num, den) = fraction.split_once('/')?;
    let num: f64 = num.parse().ok()?;
    let den: f64 = den.parse().ok()?;
    if den == 0.0 {
        return None;
    }
    Some(format!("{}%", format_number(num / den * 100.0)))
}

/// Underscores stand in for spaces inside arbitrary values; `\_` keeps a
/// literal underscore.
pub fn clean_arbitrary(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek() == Some(&'_') => {
                out.push('_');
                chars.next();
            }
            '_' => out.push(' '),
            _ => out.push(ch),
        }
    }
    out
}

/// Unwrap `[value]` or `(--var)` into a display value.
pub fn bracket_value(raw: &str) -> Option<String> {
    if let Some(inner) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        if inner.is_empty() {
            return None;
        }
        return Some(clean_arbitrary(inner));
    }
    let inner = raw.strip_prefix('(').and_then(|r| r.strip_suffix(')'))?;
    let inner = strip_type_hint(inner);
    if inner.starts_with("--") {
        Some(format!("var({})", inner))
    } else {
        None
    }
}

/// `length:200px` -> `200px`. Only strips hints made of lowercase letters
/// followed by a colon, so `var(--a)` and urls are left alone.
pub fn strip_type_hint(value: &str) -> &str {
    match value.split_once(':') {
        Some((hint, rest)) if !hint.is_empty() && hint.chars().all(|c| c.is_ascii_lowercase() || c == '-') && !hint.starts_with("--") => rest,
        _ => value,
    }
}

/// The `hint` of a `hint:value` arbitrary value, if any.
pub fn type_hint(value: &str) -> Option<&str> {
    let (hint, _) = value.split_once(':')?;
    if !hint.is_empty() && hint.chars().all(|c| c.is_ascii_lowercase() || c == '-') && !hint.starts_with("--") {
        Some(hint)
    } else {
        None
    }
}

/// Spacing-scale value, fraction, keyword or arbitrary value.
pub fn length_value(raw: &str) -> Option<String> {
    if let Some(v) = spacing_value(raw) {
        return Some(v.to_string());
    }
    if raw.contains('/') && !raw.starts_with('[') {
        return fraction_percent(raw);
    }
    match raw {
        "full" => return Some("100%".to_string()),
        "auto" => return Some("auto".to_string()),
        _ => {}
    }
    bracket_value(raw)
}

pub fn is_color_value(value: &str) -> bool {
    let v = value.trim().to_ascii_lowercase();
    const FUNCTIONS: &[&str] = &[
        "rgb(", "rgba(", "hsl(", "hsla(", "hwb(", "lab(", "lch(", "oklab(", "oklch(", "color(",
        "color-mix(",
    ];
    const KEYWORDS: &[&str] = &[
        "transparent", "currentcolor", "black", "white", "red", "green", "blue", "yellow",
        "orange", "purple", "pink", "gray", "grey",
    ];
    v.starts_with('#')
        || v.starts_with("color:")
        || FUNCTIONS.iter().any(|f| v.starts_with(f))
        || KEYWORDS.contains(&v.as_str())
}

pub fn is_length_value(value: &str) -> bool {
    let v = value.trim();
    if v.starts_with("length:") || v.starts_with("calc(") || v.starts_with("clamp(") || v.starts_with("min(") || v.starts_with("max(") {
        return true;
    }
    let digits_end = v
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(v.len());
    if digits_end == 0 {
        return false;
    }
    let unit = &v[digits_end..];
    matches!(
        unit,
        "" | "px" | "rem" | "em" | "%" | "vh" | "vw" | "dvh" | "dvw" | "svh" | "svw" | "lvh"
            | "lvw" | "cqw" | "cqh" | "cqi" | "cqb" | "ch" | "ex" | "pt" | "vmin" | "vmax"
    )
}

/// Lightness adjective for a color shade. The 500 shade is the plain color.
pub fn shade_adjective(shade: &str) -> Option<&'static str> {
    Some(match shade {
        "50" => "lightest",
        "100" => "very light",
        "200" => "lighter",
        "300" => "light",
        "400" => "medium-light",
        "500" => "",
        "600" => "medium-dark",
        "700" => "dark",
        "800" => "darker",
        "900" => "very dark",
        "950" => "darkest",
        _ => return None,
    })
}

/// Spelled-out side or axis for a directional suffix letter.
pub fn direction_word(letter: &str) -> Option<&'static str> {
    Some(match letter {
        "" => "",
        "x" => "horizontal",
        "y" => "vertical",
        "t" => "top",
        "r" => "right",
        "b" => "bottom",
        "l" => "left",
        "s" => "inline-start",
        "e" => "inline-end",
        _ => return None,
    })
}

/// Join words with single spaces, skipping empty ones.
pub fn words(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
