//! Semantic grouping of utilities for the "group by category" display mode.

use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::modifiers::parse_modifiers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Layout,
    #[serde(rename = "Flexbox & Grid")]
    FlexboxGrid,
    Spacing,
    Sizing,
    Colors,
    Backgrounds,
    Borders,
    Typography,
    Tables,
    #[serde(rename = "Transitions & Animation")]
    Transitions,
    Transforms,
    Interactivity,
    Effects,
    Filters,
    #[serde(rename = "SVG")]
    Svg,
    Accessibility,
    Other,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Layout => "Layout",
            Category::FlexboxGrid => "Flexbox & Grid",
            Category::Spacing => "Spacing",
            Category::Sizing => "Sizing",
            Category::Colors => "Colors",
            Category::Backgrounds => "Backgrounds",
            Category::Borders => "Borders",
            Category::Typography => "Typography",
            Category::Tables => "Tables",
            Category::Transitions => "Transitions & Animation",
            Category::Transforms => "Transforms",
            Category::Interactivity => "Interactivity",
            Category::Effects => "Effects",
            Category::Filters => "Filters",
            Category::Svg => "SVG",
            Category::Accessibility => "Accessibility",
            Category::Other => "Other",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Category::Layout => "📐",
            Category::FlexboxGrid => "🧩",
            Category::Spacing => "↔️",
            Category::Sizing => "📏",
            Category::Colors => "🎨",
            Category::Backgrounds => "🖼️",
            Category::Borders => "🔲",
            Category::Typography => "🔤",
            Category::Tables => "📊",
            Category::Transitions => "🎬",
            Category::Transforms => "🔄",
            Category::Interactivity => "👆",
            Category::Effects => "✨",
            Category::Filters => "🌫️",
            Category::Svg => "🖌️",
            Category::Accessibility => "♿",
            Category::Other => "📦",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification order. Earlier entries win, so the specific shapes sit in
/// front of the broad prefixes that would otherwise swallow them.
const MATCH_ORDER: &[(Category, &[&str])] = &[
    (
        Category::Tables,
        &[
            r"^table",
            r"^inline-table$",
            r"^border-(collapse|separate)$",
            r"^border-spacing-",
            r"^caption-",
        ],
    ),
    (
        Category::Layout,
        &[
            r"^m[xy]?-auto$",
            r"^(container|block|inline-block|inline|hidden|contents|flow-root|list-item)$",
            r"^(static|fixed|absolute|relative|sticky)$",
            r"^-?inset(-[xy])?-(\d|px|auto|full|\[|\()",
            r"^-?(top|right|bottom|left|start|end)-",
            r"^-?z-",
            r"^(float|clear)-",
            r"^(isolate|isolation-auto)$",
            r"^(object|overflow|overscroll|box)-",
            r"^(visible|invisible|collapse)$",
            r"^break-(after|before|inside)-",
            r"^(columns|aspect)-",
            r"^@container",
        ],
    ),
    (
        Category::FlexboxGrid,
        &[
            r"^(flex|inline-flex|grid|inline-grid)$",
            r"^(flex|grid|basis|gap|justify|items|self|place)-",
            r"^(grow|shrink)(-|$)",
            r"^-?order-",
            r"^(col|row)-",
            r"^auto-(cols|rows)-",
            r"^content-(normal|start|end|center|between|around|evenly|stretch|baseline)$",
        ],
    ),
    (
        Category::Spacing,
        &[r"^-?[pm][xytrblse]?-", r"^-?space-[xy]-"],
    ),
    (
        Category::Sizing,
        &[r"^(w|h|size|min-w|max-w|min-h|max-h)-"],
    ),
    (
        Category::Typography,
        &[
            r"^font-",
            r"^text-(xs|sm|base|lg|\d?xl|left|center|right|justify|start|end|wrap|nowrap|balance|pretty|ellipsis|clip)$",
            r"^text-\[(length:)?\d",
            r"^(italic|not-italic|antialiased|subpixel-antialiased|underline|overline|line-through|no-underline|uppercase|lowercase|capitalize|normal-case|truncate)$",
            r"^(leading|tracking|whitespace|wrap|hyphens|list|align|line-clamp|underline-offset|content)-",
            r"^-?indent-",
            r"^break-(normal|words|all|keep)$",
            r"^decoration-(solid|double|dotted|dashed|wavy|auto|from-font|\d+)$",
            r"^(normal-nums|ordinal|slashed-zero|lining-nums|oldstyle-nums|proportional-nums|tabular-nums|diagonal-fractions|stacked-fractions)$",
        ],
    ),
    (
        Category::Backgrounds,
        &[
            r"^bg-(fixed|local|scroll|auto|cover|contain|none|no-repeat)$",
            r"^bg-(clip|origin|repeat)(-|$)",
            r"^bg-(center|top|bottom|left|right)(-top|-bottom)?$",
            r"^-?bg-(gradient|linear|radial|conic)",
            r"^bg-(\[|\()",
            r"^(from|via|to)-(\d+%|\[)",
        ],
    ),
    (
        Category::Borders,
        &[
            r"^border(-[xytrblse])?(-\d+)?$",
            r"^border-(solid|dashed|dotted|double|hidden|none)$",
            r"^border(-[xytrblse])?-\[",
            r"^rounded",
            r"^divide-(x|y)(-\d+|-reverse)?$",
            r"^divide-(solid|dashed|dotted|double|none)$",
            r"^outline(-\d+|-none|-hidden|-solid|-dashed|-dotted|-double|-\[.+\])?$",
            r"^-?outline-offset-",
            r"^ring(-\d+|-inset|-\[.+\])?$",
            r"^ring-offset-(\d+|\[.+\])$",
            r"^inset-ring(-\d+)?$",
        ],
    ),
    (
        Category::Effects,
        &[
            r"^(shadow|inset-shadow|text-shadow)(-|$)",
            r"^opacity-",
            r"^(mix|bg)-blend-",
        ],
    ),
    (
        Category::Filters,
        &[
            r"^(filter|backdrop-filter)(-none)?$",
            r"^-?(backdrop-)?(blur|brightness|contrast|drop-shadow|grayscale|hue-rotate|invert|saturate|sepia|opacity)(-|$)",
        ],
    ),
    (
        Category::Transitions,
        &[r"^transition", r"^(duration|ease|delay|animate)-"],
    ),
    (
        Category::Transforms,
        &[
            r"^transform",
            r"^-?(scale|rotate|translate|skew)-",
            r"^(origin|backface|perspective)-",
        ],
    ),
    (
        Category::Interactivity,
        &[
            r"^(cursor|select|snap|touch|pointer-events|appearance|will-change|scheme|field-sizing|accent|caret)-",
            r"^resize(-|$)",
            r"^-?scroll-",
            r"^(group|peer)(/.+)?$",
        ],
    ),
    (Category::Svg, &[r"^(fill|stroke)-"]),
    (
        Category::Accessibility,
        &[r"^(sr-only|not-sr-only)$", r"^forced-color-adjust-"],
    ),
    (
        Category::Colors,
        &[r"^(text|bg|border|ring|outline|divide|placeholder|decoration|from|via|to)-"],
    ),
];

/// Order in which groups are rendered.
const DISPLAY_ORDER: &[Category] = &[
    Category::Layout,
    Category::FlexboxGrid,
    Category::Spacing,
    Category::Sizing,
    Category::Typography,
    Category::Colors,
    Category::Backgrounds,
    Category::Borders,
    Category::Effects,
    Category::Filters,
    Category::Tables,
    Category::Transitions,
    Category::Transforms,
    Category::Interactivity,
    Category::Svg,
    Category::Accessibility,
    Category::Other,
];

static COMPILED: LazyLock<Vec<(Category, Vec<Regex>)>> = LazyLock::new(|| {
    MATCH_ORDER
        .iter()
        .map(|(category, patterns)| {
            let compiled = patterns
                .iter()
                .filter_map(|p| match Regex::new(p) {
                    Ok(re) => Some(re),
                    Err(e) => {
                        tracing::warn!(category = category.name(), pattern = p, "invalid category pattern: {}", e);
                        None
                    }
                })
                .collect();
            (*category, compiled)
        })
        .collect()
});

/// Classify a class token. Variants and other modifiers are ignored.
pub fn categorize_class(class_name: &str) -> Category {
    let base = parse_modifiers(class_name).base_class;
    COMPILED
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|re| re.is_match(&base)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

pub fn get_category_order() -> &'static [Category] {
    DISPLAY_ORDER
}

/// Bucket `translations[i]` under the category of `class_names[i]` and render
/// the non-empty buckets in display order, as `"<emoji> Name: a, b"`.
pub fn group_by_category<C, T>(class_names: &[C], translations: &[T], show_emojis: bool) -> Vec<String>
where
    C: AsRef<str>,
    T: AsRef<str>,
{
    let mut buckets: IndexMap<Category, Vec<&str>> = IndexMap::new();
    for (class, translation) in class_names.iter().zip(translations) {
        buckets
            .entry(categorize_class(class.as_ref()))
            .or_default()
            .push(translation.as_ref());
    }

    DISPLAY_ORDER
        .iter()
        .filter_map(|category| {
            let members = buckets.get(category)?;
            let label = if show_emojis {
                format!("{} {}", category.emoji(), category.name())
            } else {
                category.name().to_string()
            };
            Some(format!("{}: {}", label, members.join(", ")))
        })
        .collect()
}

pub fn group_translations_by_category<C, T>(class_names: &[C], translations: &[T], show_emojis: bool) -> String
where
    C: AsRef<str>,
    T: AsRef<str>,
{
    group_by_category(class_names, translations, show_emojis).join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mappings::GROUPS;
    use std::collections::HashSet;

    #[test]
    fn test_every_pattern_compiles() {
        for ((category, patterns), (_, compiled)) in MATCH_ORDER.iter().zip(COMPILED.iter()) {
            assert_eq!(patterns.len(), compiled.len(), "bad pattern in {category}");
        }
    }

    #[test]
    fn test_display_order_lists_every_category_once() {
        let order = get_category_order();
        assert_eq!(order.len(), 17);
        let unique: HashSet<_> = order.iter().collect();
        assert_eq!(unique.len(), 17);
        assert_eq!(order, get_category_order());
    }

    #[test]
    fn test_match_and_display_orders_differ() {
        let matched: Vec<Category> = MATCH_ORDER.iter().map(|(c, _)| *c).collect();
        assert_ne!(matched.as_slice(), &DISPLAY_ORDER[..matched.len()]);
        assert_eq!(matched[0], Category::Tables);
    }

    #[test]
    fn test_categorize() {
        assert_eq!(categorize_class("mx-auto"), Category::Layout);
        assert_eq!(categorize_class("mt-4"), Category::Spacing);
        assert_eq!(categorize_class("flex"), Category::FlexboxGrid);
        assert_eq!(categorize_class("md:hover:bg-blue-500/50"), Category::Colors);
        assert_eq!(categorize_class("bg-cover"), Category::Backgrounds);
        assert_eq!(categorize_class("border-collapse"), Category::Tables);
        assert_eq!(categorize_class("border-2"), Category::Borders);
        assert_eq!(categorize_class("border-red-500"), Category::Colors);
        assert_eq!(categorize_class("text-lg"), Category::Typography);
        assert_eq!(categorize_class("text-red-500"), Category::Colors);
        assert_eq!(categorize_class("text-shadow-md"), Category::Effects);
        assert_eq!(categorize_class("inset-shadow-sm"), Category::Effects);
        assert_eq!(categorize_class("inset-0"), Category::Layout);
        assert_eq!(categorize_class("sr-only"), Category::Accessibility);
        assert_eq!(categorize_class("wobbly-thing"), Category::Other);
        assert_eq!(categorize_class(""), Category::Other);
    }

    #[test]
    fn test_static_phrases_rarely_fall_into_other() {
        let other: Vec<&str> = GROUPS
            .iter()
            .flat_map(|(_, table)| table.iter().map(|(class, _)| *class))
            .filter(|class| categorize_class(class) == Category::Other)
            .collect();
        assert!(other.is_empty(), "uncategorized: {other:?}");
    }

    #[test]
    fn test_group_by_category_display_order() {
        let classes = ["p-4", "flex", "text-red-500", "items-center"];
        let translations = ["padding 1rem", "flexbox container", "red text", "items centered vertically"];
        let groups = group_by_category(&classes, &translations, false);
        assert_eq!(
            groups,
            vec![
                "Flexbox & Grid: flexbox container, items centered vertically",
                "Spacing: padding 1rem",
                "Colors: red text",
            ]
        );
    }

    #[test]
    fn test_group_translations_with_emojis() {
        let out = group_translations_by_category(&["mx-auto", "w-full"], &["horizontally centered", "full width"], true);
        insta::assert_snapshot!(out, @"📐 Layout: horizontally centered | 📏 Sizing: full width");
    }
}
