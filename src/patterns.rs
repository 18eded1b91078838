//! Ordered shape matchers for utilities that have no literal table entry.
//!
//! Each matcher owns one regex and a builder. A builder returning `None`
//! hands the class on to the next matcher, so a matcher only claims classes
//! whose value it can actually describe.

use regex::Captures;

use crate::matcher::{first_match, group, static_regex, Matcher};
use crate::scale::{
    bracket_value, clean_arbitrary, direction_word, is_color_value, is_length_value,
    length_value, shade_adjective, spacing_value, strip_type_hint, type_hint, words, COLOR_NAMES,
};

static_regex!(SPACING_RE, r"^(-?)(p|m)([xytrblse]?)-(.+)$");
static_regex!(SPACE_BETWEEN_RE, r"^(-?)space-(x|y)-(.+)$");
static_regex!(GAP_RE, r"^gap-(?:(x|y)-)?(.+)$");
static_regex!(SIZING_RE, r"^(min-w|max-w|min-h|max-h|w|h|size)-(.+)$");
static_regex!(INSET_RE, r"^(-?)(inset-x|inset-y|inset|top|right|bottom|left|start|end)-(.+)$");
/// Utilities that take a palette color.
const COLOR_UTILITIES: &str = "text-shadow|text|bg|border-[xytrblse]|border|ring-offset|inset-ring|ring|outline|divide|placeholder|accent|caret|fill|stroke|decoration|from|via|to|inset-shadow|drop-shadow|shadow";

static_regex!(
    SHADE_COLOR_RE,
    &format!(
        r"^({})-({})-(50|100|200|300|400|500|600|700|800|900|950)$",
        COLOR_UTILITIES,
        COLOR_NAMES.join("|")
    )
);
static_regex!(
    NAMED_COLOR_RE,
    &format!(r"^({})-(white|black|transparent|current|inherit)$", COLOR_UTILITIES)
);
static_regex!(GRID_TRACKS_RE, r"^grid-(cols|rows)-(\d+)$");
static_regex!(GRID_TEMPLATE_RE, r"^grid-(cols|rows)-\[(.+)\]$");
static_regex!(GRID_SPAN_RE, r"^(col|row)-span-(\d+)$");
static_regex!(GRID_LINE_RE, r"^(col|row)-(start|end)-(\d+)$");
static_regex!(ORDER_RE, r"^(-?)order-(\d+)$");
static_regex!(BASIS_RE, r"^basis-(.+)$");
static_regex!(GROW_SHRINK_RE, r"^(?:flex-)?(grow|shrink)-(\d+|\[.+\])$");
static_regex!(SCALE_RE, r"^(-?)scale-(?:(x|y|z)-)?(\d+|\[.+\])$");
static_regex!(ROTATE_RE, r"^(-?)rotate-(?:(x|y|z)-)?(\d+|\[.+\])$");
static_regex!(TRANSLATE_RE, r"^(-?)translate-(x|y|z)-(.+)$");
static_regex!(SKEW_RE, r"^(-?)skew-(x|y)-(\d+|\[.+\])$");
static_regex!(OPACITY_RE, r"^opacity-(\d+)$");
static_regex!(SHADOW_ARBITRARY_RE, r"^(inset-shadow|drop-shadow|text-shadow|shadow)-\[(.+)\]$");
static_regex!(RING_WIDTH_RE, r"^(ring-offset|inset-ring|ring)-(\d+)$");
static_regex!(RING_ARBITRARY_RE, r"^(ring-offset|inset-ring|ring)-\[(.+)\]$");
static_regex!(BORDER_SPACING_RE, r"^border-spacing-(?:(x|y)-)?(.+)$");
static_regex!(BORDER_WIDTH_RE, r"^border(?:-([xytrblse]))?-(\d+)$");
static_regex!(BORDER_ARBITRARY_RE, r"^border(?:-([xytrblse]))?-\[(.+)\]$");
static_regex!(DIVIDE_WIDTH_RE, r"^divide-(x|y)-(\d+)$");
static_regex!(OUTLINE_WIDTH_RE, r"^outline-(\d+)$");
static_regex!(OUTLINE_OFFSET_RE, r"^(-?)outline-offset-(\d+)$");
static_regex!(OUTLINE_ARBITRARY_RE, r"^outline-\[(.+)\]$");
static_regex!(ROUNDED_SIDE_RE, r"^rounded-(tl|tr|br|bl|ss|se|es|ee|t|r|b|l|s|e)(?:-(.+))?$");
static_regex!(ROUNDED_ARBITRARY_RE, r"^rounded-\[(.+)\]$");
static_regex!(LINEAR_ANGLE_RE, r"^(-?)bg-linear-(\d+)$");
static_regex!(LINEAR_TO_RE, r"^bg-linear-to-(tl|tr|bl|br|t|r|b|l)$");
static_regex!(GRADIENT_ARBITRARY_RE, r"^bg-(linear|radial|conic)-\[(.+)\]$");
static_regex!(CONIC_ANGLE_RE, r"^(-?)bg-conic-(\d+)$");
static_regex!(BG_ARBITRARY_RE, r"^bg-\[(.+)\]$");
static_regex!(BG_VAR_RE, r"^bg-\((.+)\)$");
static_regex!(GRADIENT_STOP_POSITION_RE, r"^(from|via|to)-(\d+)%$");
static_regex!(GRADIENT_STOP_ARBITRARY_RE, r"^(from|via|to)-\[(.+)\]$");
static_regex!(LEADING_RE, r"^leading-(\d+(?:\.\d+)?|\[.+\])$");
static_regex!(LINE_CLAMP_RE, r"^line-clamp-(\d+)$");
static_regex!(INDENT_RE, r"^(-?)indent-(.+)$");
static_regex!(DECORATION_WIDTH_RE, r"^decoration-(\d+)$");
static_regex!(UNDERLINE_OFFSET_RE, r"^underline-offset-(\d+)$");
static_regex!(TEXT_ARBITRARY_RE, r"^text-\[(.+)\]$");
static_regex!(FONT_ARBITRARY_RE, r"^font-\[(.+)\]$");
static_regex!(TRACKING_ARBITRARY_RE, r"^tracking-\[(.+)\]$");
static_regex!(Z_INDEX_RE, r"^(-?)z-(\d+)$");
static_regex!(COLUMNS_RE, r"^columns-(\d+)$");
static_regex!(ASPECT_RATIO_RE, r"^aspect-(\d+)/(\d+)$");
static_regex!(TIMING_RE, r"^(duration|delay)-(\d+)$");
static_regex!(
    FILTER_RE,
    r"^(-?)(backdrop-)?(blur|brightness|contrast|grayscale|hue-rotate|invert|saturate|sepia|opacity)-(\d+|\[.+\])$"
);
static_regex!(STROKE_WIDTH_RE, r"^stroke-(\d+)$");
static_regex!(STROKE_ARBITRARY_RE, r"^stroke-\[(.+)\]$");
static_regex!(SCROLL_SPACING_RE, r"^(-?)scroll-(m|p)([xytrblse]?)-(.+)$");
static_regex!(NAMED_GROUP_RE, r"^(group|peer)/(.+)$");
static_regex!(CONTAINER_RE, r"^@container(?:/(.+))?$");
static_regex!(GENERIC_ARBITRARY_RE, r"^(-?)([a-z][a-z0-9-]*?)-\[(.+)\]$");
static_regex!(CUSTOM_PROPERTY_RE, r"^(-?)([a-z][a-z0-9-]*?)-\((.+)\)$");

/// Utility prefix → the CSS concept it sets, for arbitrary values that no
/// dedicated matcher claimed.
const PROPERTY_NAMES: &[(&str, &str)] = &[
    ("w", "width"),
    ("h", "height"),
    ("size", "width and height"),
    ("min-w", "min width"),
    ("max-w", "max width"),
    ("min-h", "min height"),
    ("max-h", "max height"),
    ("p", "padding"),
    ("px", "horizontal padding"),
    ("py", "vertical padding"),
    ("pt", "top padding"),
    ("pr", "right padding"),
    ("pb", "bottom padding"),
    ("pl", "left padding"),
    ("m", "margin"),
    ("mx", "horizontal margin"),
    ("my", "vertical margin"),
    ("mt", "top margin"),
    ("mr", "right margin"),
    ("mb", "bottom margin"),
    ("ml", "left margin"),
    ("gap", "gap"),
    ("inset", "inset"),
    ("top", "top offset"),
    ("right", "right offset"),
    ("bottom", "bottom offset"),
    ("left", "left offset"),
    ("z", "z-index"),
    ("opacity", "opacity"),
    ("bg", "background"),
    ("text", "text"),
    ("border", "border"),
    ("rounded", "border radius"),
    ("shadow", "shadow"),
    ("col", "grid column"),
    ("row", "grid row"),
    ("auto-cols", "implicit column size"),
    ("auto-rows", "implicit row size"),
    ("basis", "flex basis"),
    ("flex", "flex"),
    ("order", "order"),
    ("leading", "line height"),
    ("tracking", "letter spacing"),
    ("font", "font"),
    ("duration", "duration"),
    ("delay", "delay"),
    ("ease", "easing"),
    ("animate", "animation"),
    ("transition", "transition properties"),
    ("rotate", "rotation"),
    ("scale", "scale"),
    ("translate", "translation"),
    ("translate-x", "horizontal translation"),
    ("translate-y", "vertical translation"),
    ("skew", "skew"),
    ("origin", "transform origin"),
    ("perspective", "perspective"),
    ("columns", "columns"),
    ("content", "content"),
    ("fill", "fill"),
    ("stroke", "stroke"),
    ("outline", "outline"),
    ("ring", "ring"),
    ("cursor", "cursor"),
    ("list", "list style"),
    ("object", "object position"),
    ("aspect", "aspect ratio"),
    ("grid-cols", "grid columns"),
    ("grid-rows", "grid rows"),
    ("will-change", "will change"),
    ("mask", "mask"),
    ("decoration", "text decoration"),
    ("underline-offset", "underline offset"),
    ("indent", "text indent"),
    ("line-clamp", "line clamp"),
    ("caret", "caret color"),
    ("accent", "accent color"),
    ("placeholder", "placeholder text"),
    ("divide", "divider"),
    ("space-x", "horizontal space between children"),
    ("space-y", "vertical space between children"),
    ("scroll-m", "scroll margin"),
    ("scroll-p", "scroll padding"),
];

fn negative(caps: &Captures<'_>, i: usize) -> bool {
    group(caps, i) == "-"
}

fn signed(caps: &Captures<'_>, i: usize, value: &str) -> String {
    if negative(caps, i) {
        format!("-{}", value)
    } else {
        value.to_string()
    }
}

/// A spacing-scale key or an arbitrary value.
fn spacing_or_arbitrary(raw: &str) -> Option<String> {
    spacing_value(raw)
        .map(String::from)
        .or_else(|| bracket_value(raw))
}

fn color_noun(utility: &str) -> Option<String> {
    if let Some(side) = utility.strip_prefix("border-") {
        return Some(words(&[direction_word(side)?, "border"]));
    }
    let noun = match utility {
        "text" => "text",
        "bg" => "background",
        "border" => "border",
        "ring" => "ring",
        "ring-offset" => "ring offset",
        "inset-ring" => "inset ring",
        "outline" => "outline",
        "divide" => "divider",
        "placeholder" => "placeholder text",
        "accent" => "accent",
        "caret" => "caret",
        "fill" => "fill",
        "stroke" => "stroke",
        "decoration" => "text decoration",
        "from" => "gradient start",
        "via" => "gradient middle",
        "to" => "gradient end",
        "shadow" => "shadow",
        "inset-shadow" => "inset shadow",
        "text-shadow" => "text shadow",
        "drop-shadow" => "drop shadow",
        _ => return None,
    };
    Some(noun.to_string())
}

fn corner_words(side: &str) -> Option<(&'static str, &'static str)> {
    Some(match side {
        "t" => ("top", "corners"),
        "r" => ("right", "corners"),
        "b" => ("bottom", "corners"),
        "l" => ("left", "corners"),
        "s" => ("inline-start", "corners"),
        "e" => ("inline-end", "corners"),
        "tl" => ("top-left", "corner"),
        "tr" => ("top-right", "corner"),
        "br" => ("bottom-right", "corner"),
        "bl" => ("bottom-left", "corner"),
        "ss" => ("start-start", "corner"),
        "se" => ("start-end", "corner"),
        "es" => ("end-start", "corner"),
        "ee" => ("end-end", "corner"),
        _ => return None,
    })
}

fn radius_adjective(size: &str) -> Option<&'static str> {
    Some(match size {
        "" => "rounded",
        "none" => "square",
        "xs" => "barely rounded",
        "sm" => "slightly rounded",
        "md" => "medium rounded",
        "lg" => "large rounded",
        "xl" => "extra large rounded",
        "2xl" => "2x large rounded",
        "3xl" => "3x large rounded",
        "4xl" => "4x large rounded",
        "full" => "fully rounded",
        _ => return None,
    })
}

fn gradient_direction(dir: &str) -> Option<&'static str> {
    Some(match dir {
        "t" => "top",
        "tr" => "top right",
        "r" => "right",
        "br" => "bottom right",
        "b" => "bottom",
        "bl" => "bottom left",
        "l" => "left",
        "tl" => "top left",
        _ => return None,
    })
}

/// Arbitrary value for a hybrid utility: color or size.
fn color_or_size(noun: &str, raw: &str, size_word: &str) -> String {
    let value = clean_arbitrary(raw);
    if is_color_value(&value) {
        format!("{} color {}", noun, strip_type_hint(&value))
    } else {
        format!("{} {} {}", noun, size_word, strip_type_hint(&value))
    }
}

fn spacing(caps: &Captures<'_>) -> Option<String> {
    let side = direction_word(group(caps, 3))?;
    let noun = if group(caps, 2) == "p" { "padding" } else { "margin" };
    let raw = group(caps, 4);
    let value = match raw {
        "auto" if noun == "margin" => "auto".to_string(),
        _ => spacing_or_arbitrary(raw)?,
    };
    let sign = if negative(caps, 1) { "negative" } else { "" };
    Some(words(&[sign, side, noun, &value]))
}

fn space_between(caps: &Captures<'_>) -> Option<String> {
    let axis = direction_word(group(caps, 2))?;
    let value = spacing_or_arbitrary(group(caps, 3))?;
    Some(format!(
        "{} space between children {}",
        axis,
        signed(caps, 1, &value)
    ))
}

fn gap(caps: &Captures<'_>) -> Option<String> {
    let value = spacing_or_arbitrary(group(caps, 2))?;
    let noun = match group(caps, 1) {
        "x" => "column gap",
        "y" => "row gap",
        _ => "gap",
    };
    Some(format!("{} {}", noun, value))
}

fn sizing(caps: &Captures<'_>) -> Option<String> {
    let noun = match group(caps, 1) {
        "w" => "width",
        "h" => "height",
        "size" => "width and height",
        "min-w" => "min width",
        "max-w" => "max width",
        "min-h" => "min height",
        "max-h" => "max height",
        _ => return None,
    };
    let value = length_value(group(caps, 2))?;
    Some(format!("{} {}", noun, value))
}

fn inset(caps: &Captures<'_>) -> Option<String> {
    let noun = match group(caps, 2) {
        "inset" => "inset",
        "inset-x" => "horizontal inset",
        "inset-y" => "vertical inset",
        "top" => "top offset",
        "right" => "right offset",
        "bottom" => "bottom offset",
        "left" => "left offset",
        "start" => "inline-start offset",
        "end" => "inline-end offset",
        _ => return None,
    };
    let value = length_value(group(caps, 3))?;
    Some(format!("{} {}", noun, signed(caps, 1, &value)))
}

fn shade_color(caps: &Captures<'_>) -> Option<String> {
    let noun = color_noun(group(caps, 1))?;
    let adjective = shade_adjective(group(caps, 3))?;
    Some(words(&[adjective, group(caps, 2), &noun]))
}

fn named_color(caps: &Captures<'_>) -> Option<String> {
    let noun = color_noun(group(caps, 1))?;
    Some(match group(caps, 2) {
        "current" => format!("{} in current color", noun),
        "inherit" => format!("inherited {} color", noun),
        name => format!("{} {}", name, noun),
    })
}

fn grid_tracks(caps: &Captures<'_>) -> Option<String> {
    let count: u32 = group(caps, 2).parse().ok()?;
    let noun = if group(caps, 1) == "cols" { "column" } else { "row" };
    let plural = if count == 1 { "" } else { "s" };
    Some(format!("grid with {} {}{}", count, noun, plural))
}

fn grid_template(caps: &Captures<'_>) -> Option<String> {
    let noun = if group(caps, 1) == "cols" { "columns" } else { "rows" };
    Some(format!("grid {} {}", noun, clean_arbitrary(group(caps, 2))))
}

fn grid_span(caps: &Captures<'_>) -> Option<String> {
    let count: u32 = group(caps, 2).parse().ok()?;
    let noun = if group(caps, 1) == "col" { "column" } else { "row" };
    let plural = if count == 1 { "" } else { "s" };
    Some(format!("spans {} {}{}", count, noun, plural))
}

fn grid_line(caps: &Captures<'_>) -> Option<String> {
    let noun = if group(caps, 1) == "col" { "column" } else { "row" };
    let edge = if group(caps, 2) == "start" { "starts" } else { "ends" };
    Some(format!("{} {} at line {}", noun, edge, group(caps, 3)))
}

fn order(caps: &Captures<'_>) -> Option<String> {
    Some(format!("order {}", signed(caps, 1, group(caps, 2))))
}

fn basis(caps: &Captures<'_>) -> Option<String> {
    Some(format!("flex basis {}", length_value(group(caps, 1))?))
}

fn grow_shrink(caps: &Captures<'_>) -> Option<String> {
    let raw = group(caps, 2);
    let value = bracket_value(raw).unwrap_or_else(|| raw.to_string());
    Some(format!("flex {} factor {}", group(caps, 1), value))
}

fn axis_phrase(axis: &str) -> &'static str {
    match axis {
        "x" => " horizontally",
        "y" => " vertically",
        "z" => " on the z axis",
        _ => "",
    }
}

fn scale(caps: &Captures<'_>) -> Option<String> {
    let raw = group(caps, 3);
    let value = match bracket_value(raw) {
        Some(v) => v,
        None => format!("{}%", raw),
    };
    Some(format!(
        "scaled{} to {}",
        axis_phrase(group(caps, 2)),
        signed(caps, 1, &value)
    ))
}

fn rotate(caps: &Captures<'_>) -> Option<String> {
    let raw = group(caps, 3);
    let value = match bracket_value(raw) {
        Some(v) => v,
        None => format!("{}°", raw),
    };
    let axis = match group(caps, 2) {
        "" => String::new(),
        a => format!(" around {} axis", a),
    };
    Some(format!("rotated {}{}", signed(caps, 1, &value), axis))
}

fn translate(caps: &Captures<'_>) -> Option<String> {
    let value = length_value(group(caps, 3))?;
    let neg = negative(caps, 1);
    let direction = match (group(caps, 2), neg) {
        ("x", false) => "right",
        ("x", true) => "left",
        ("y", false) => "down",
        ("y", true) => "up",
        ("z", false) => "forward",
        ("z", true) => "back",
        _ => return None,
    };
    Some(format!("moved {} {}", direction, value))
}

fn skew(caps: &Captures<'_>) -> Option<String> {
    let raw = group(caps, 3);
    let value = match bracket_value(raw) {
        Some(v) => v,
        None => format!("{}°", raw),
    };
    Some(format!(
        "skewed{} {}",
        axis_phrase(group(caps, 2)),
        signed(caps, 1, &value)
    ))
}

fn opacity(caps: &Captures<'_>) -> Option<String> {
    Some(format!("{}% opacity", group(caps, 1)))
}

fn shadow_arbitrary(caps: &Captures<'_>) -> Option<String> {
    let noun = color_noun(group(caps, 1))?;
    let value = clean_arbitrary(group(caps, 2));
    if is_color_value(&value) {
        Some(format!("{} color {}", noun, strip_type_hint(&value)))
    } else {
        Some(format!("custom {} {}", noun, value))
    }
}

fn ring_width(caps: &Captures<'_>) -> Option<String> {
    let width = group(caps, 2);
    Some(match group(caps, 1) {
        "ring-offset" => format!("ring offset {}px", width),
        "inset-ring" => format!("{}px inset ring", width),
        _ => format!("{}px ring", width),
    })
}

fn ring_arbitrary(caps: &Captures<'_>) -> Option<String> {
    let noun = color_noun(group(caps, 1))?;
    Some(color_or_size(&noun, group(caps, 2), "width"))
}

fn border_spacing(caps: &Captures<'_>) -> Option<String> {
    let value = spacing_or_arbitrary(group(caps, 2))?;
    let axis = direction_word(group(caps, 1))?;
    Some(words(&[axis, "table border spacing", &value]))
}

fn border_width(caps: &Captures<'_>) -> Option<String> {
    let side = direction_word(group(caps, 1))?;
    let width = format!("{}px", group(caps, 2));
    Some(words(&[&width, side, "border"]))
}

fn border_arbitrary(caps: &Captures<'_>) -> Option<String> {
    let side = direction_word(group(caps, 1))?;
    let noun = words(&[side, "border"]);
    Some(color_or_size(&noun, group(caps, 2), "width"))
}

fn divide_width(caps: &Captures<'_>) -> Option<String> {
    let lines = if group(caps, 1) == "x" { "vertical" } else { "horizontal" };
    Some(format!(
        "{}px {} dividers between children",
        group(caps, 2),
        lines
    ))
}

fn outline_width(caps: &Captures<'_>) -> Option<String> {
    Some(format!("{}px outline", group(caps, 1)))
}

fn outline_offset(caps: &Captures<'_>) -> Option<String> {
    let value = format!("{}px", group(caps, 2));
    Some(format!("outline offset {}", signed(caps, 1, &value)))
}

fn outline_arbitrary(caps: &Captures<'_>) -> Option<String> {
    Some(color_or_size("outline", group(caps, 1), "width"))
}

fn rounded_side(caps: &Captures<'_>) -> Option<String> {
    let (side, corners) = corner_words(group(caps, 1))?;
    let size = group(caps, 2);
    if let Some(value) = bracket_value(size) {
        return Some(format!("{} {} radius {}", side, corners, value));
    }
    let adjective = radius_adjective(size)?;
    Some(format!("{} {} {}", adjective, side, corners))
}

fn rounded_arbitrary(caps: &Captures<'_>) -> Option<String> {
    Some(format!("border radius {}", clean_arbitrary(group(caps, 1))))
}

fn linear_angle(caps: &Captures<'_>) -> Option<String> {
    let angle = format!("{}°", group(caps, 2));
    Some(format!("linear gradient at {}", signed(caps, 1, &angle)))
}

fn linear_to(caps: &Captures<'_>) -> Option<String> {
    Some(format!(
        "linear gradient to {}",
        gradient_direction(group(caps, 1))?
    ))
}

fn gradient_arbitrary(caps: &Captures<'_>) -> Option<String> {
    Some(format!(
        "{} gradient {}",
        group(caps, 1),
        clean_arbitrary(group(caps, 2))
    ))
}

fn conic_angle(caps: &Captures<'_>) -> Option<String> {
    let angle = format!("{}°", group(caps, 2));
    Some(format!("conic gradient from {}", signed(caps, 1, &angle)))
}

fn background_arbitrary(caps: &Captures<'_>) -> Option<String> {
    let raw = clean_arbitrary(group(caps, 1));
    let value = strip_type_hint(&raw);
    let aspect = match type_hint(&raw) {
        Some("url" | "image") => "image",
        Some("length" | "size") => "size",
        Some("position") => "position",
        Some("color") => "color",
        Some(_) => "",
        None if raw.starts_with("url(") || raw.contains("gradient(") => "image",
        None if is_color_value(&raw) => "color",
        None if is_length_value(&raw) => "size",
        None => "",
    };
    Some(words(&["background", aspect, value]))
}

fn background_var(caps: &Captures<'_>) -> Option<String> {
    let inner = group(caps, 1);
    let value = bracket_value(&format!("({})", inner))?;
    let aspect = match type_hint(inner) {
        Some("image" | "url") => "image",
        Some("length" | "size") => "size",
        Some("position") => "position",
        _ => "",
    };
    Some(words(&["background", aspect, &value]))
}

fn gradient_stop_position(caps: &Captures<'_>) -> Option<String> {
    let noun = color_noun(group(caps, 1))?;
    Some(format!("{} at {}%", noun, group(caps, 2)))
}

fn gradient_stop_arbitrary(caps: &Captures<'_>) -> Option<String> {
    let noun = color_noun(group(caps, 1))?;
    Some(color_or_size(&noun, group(caps, 2), "position"))
}

fn leading(caps: &Captures<'_>) -> Option<String> {
    let value = spacing_or_arbitrary(group(caps, 1))?;
    Some(format!("line height {}", value))
}

fn line_clamp(caps: &Captures<'_>) -> Option<String> {
    let count: u32 = group(caps, 1).parse().ok()?;
    let plural = if count == 1 { "" } else { "s" };
    Some(format!("clamped to {} line{}", count, plural))
}

fn indent(caps: &Captures<'_>) -> Option<String> {
    let value = spacing_or_arbitrary(group(caps, 2))?;
    Some(format!("text indent {}", signed(caps, 1, &value)))
}

fn decoration_width(caps: &Captures<'_>) -> Option<String> {
    Some(format!("{}px text decoration thickness", group(caps, 1)))
}

fn underline_offset(caps: &Captures<'_>) -> Option<String> {
    Some(format!("underline offset {}px", group(caps, 1)))
}

fn text_arbitrary(caps: &Captures<'_>) -> Option<String> {
    let raw = clean_arbitrary(group(caps, 1));
    let value = strip_type_hint(&raw);
    if is_color_value(&raw) {
        Some(format!("text color {}", value))
    } else if is_length_value(&raw) {
        Some(format!("font size {}", value))
    } else {
        Some(format!("text {}", value))
    }
}

fn font_arbitrary(caps: &Captures<'_>) -> Option<String> {
    let value = clean_arbitrary(group(caps, 1));
    if value.chars().all(|c| c.is_ascii_digit()) {
        Some(format!("font weight {}", value))
    } else {
        Some(format!("font family {}", value))
    }
}

fn tracking_arbitrary(caps: &Captures<'_>) -> Option<String> {
    Some(format!("letter spacing {}", clean_arbitrary(group(caps, 1))))
}

fn z_index(caps: &Captures<'_>) -> Option<String> {
    Some(format!("z-index {}", signed(caps, 1, group(caps, 2))))
}

fn columns(caps: &Captures<'_>) -> Option<String> {
    Some(format!("{} column layout", group(caps, 1)))
}

fn aspect_ratio(caps: &Captures<'_>) -> Option<String> {
    Some(format!("aspect ratio {}:{}", group(caps, 1), group(caps, 2)))
}

fn timing(caps: &Captures<'_>) -> Option<String> {
    Some(format!("{}ms {}", group(caps, 2), group(caps, 1)))
}

fn filter(caps: &Captures<'_>) -> Option<String> {
    let backdrop = if caps.get(2).is_some() { "backdrop" } else { "" };
    let raw = group(caps, 4);
    let arbitrary = bracket_value(raw);
    let amount = |unit: &str| {
        let value = arbitrary.clone().unwrap_or_else(|| format!("{}{}", raw, unit));
        signed(caps, 1, &value)
    };
    let phrase = match group(caps, 3) {
        "blur" => format!("blur {}", amount("px")),
        "brightness" => format!("brightness {}", amount("%")),
        "contrast" => format!("contrast {}", amount("%")),
        "grayscale" => format!("{} grayscale", amount("%")),
        "hue-rotate" => format!("hue rotated {}", amount("°")),
        "invert" => format!("{} inverted", amount("%")),
        "saturate" => format!("saturation {}", amount("%")),
        "sepia" => format!("{} sepia", amount("%")),
        "opacity" if !backdrop.is_empty() => format!("opacity {}", amount("%")),
        _ => return None,
    };
    Some(words(&[backdrop, &phrase]))
}

fn stroke_width(caps: &Captures<'_>) -> Option<String> {
    Some(format!("stroke width {}", group(caps, 1)))
}

fn stroke_arbitrary(caps: &Captures<'_>) -> Option<String> {
    Some(color_or_size("stroke", group(caps, 1), "width"))
}

fn scroll_spacing(caps: &Captures<'_>) -> Option<String> {
    let side = direction_word(group(caps, 3))?;
    let noun = if group(caps, 2) == "m" { "margin" } else { "padding" };
    let value = spacing_or_arbitrary(group(caps, 4))?;
    let sign = if negative(caps, 1) { "negative" } else { "" };
    Some(words(&[sign, "scroll", side, noun, &value]))
}

fn named_group(caps: &Captures<'_>) -> Option<String> {
    Some(format!("{} named \"{}\"", group(caps, 1), group(caps, 2)))
}

fn container(caps: &Captures<'_>) -> Option<String> {
    Some(match caps.get(1) {
        Some(name) => format!("query container named \"{}\"", name.as_str()),
        None => "query container".to_string(),
    })
}

fn property_name(utility: &str) -> String {
    PROPERTY_NAMES
        .iter()
        .find(|(k, _)| *k == utility)
        .map(|(_, v)| v.to_string())
        .unwrap_or_else(|| utility.replace('-', " "))
}

fn generic_arbitrary(caps: &Captures<'_>) -> Option<String> {
    let value = clean_arbitrary(group(caps, 3));
    let sign = if negative(caps, 1) { "negative" } else { "" };
    Some(words(&[sign, &property_name(group(caps, 2)), strip_type_hint(&value)]))
}

fn custom_property(caps: &Captures<'_>) -> Option<String> {
    let value = bracket_value(&format!("({})", group(caps, 3)))?;
    let sign = if negative(caps, 1) { "negative" } else { "" };
    Some(words(&[sign, &property_name(group(caps, 2)), &value]))
}

pub(crate) static MATCHERS: &[Matcher] = &[
    Matcher { name: "spacing", regex: &SPACING_RE, build: spacing },
    Matcher { name: "space-between", regex: &SPACE_BETWEEN_RE, build: space_between },
    Matcher { name: "gap", regex: &GAP_RE, build: gap },
    Matcher { name: "sizing", regex: &SIZING_RE, build: sizing },
    Matcher { name: "inset", regex: &INSET_RE, build: inset },
    Matcher { name: "shade-color", regex: &SHADE_COLOR_RE, build: shade_color },
    Matcher { name: "named-color", regex: &NAMED_COLOR_RE, build: named_color },
    Matcher { name: "grid-tracks", regex: &GRID_TRACKS_RE, build: grid_tracks },
    Matcher { name: "grid-template", regex: &GRID_TEMPLATE_RE, build: grid_template },
    Matcher { name: "grid-span", regex: &GRID_SPAN_RE, build: grid_span },
    Matcher { name: "grid-line", regex: &GRID_LINE_RE, build: grid_line },
    Matcher { name: "order", regex: &ORDER_RE, build: order },
    Matcher { name: "basis", regex: &BASIS_RE, build: basis },
    Matcher { name: "grow-shrink", regex: &GROW_SHRINK_RE, build: grow_shrink },
    Matcher { name: "scale", regex: &SCALE_RE, build: scale },
    Matcher { name: "rotate", regex: &ROTATE_RE, build: rotate },
    Matcher { name: "translate", regex: &TRANSLATE_RE, build: translate },
    Matcher { name: "skew", regex: &SKEW_RE, build: skew },
    Matcher { name: "opacity", regex: &OPACITY_RE, build: opacity },
    Matcher { name: "shadow-arbitrary", regex: &SHADOW_ARBITRARY_RE, build: shadow_arbitrary },
    Matcher { name: "ring-width", regex: &RING_WIDTH_RE, build: ring_width },
    Matcher { name: "ring-arbitrary", regex: &RING_ARBITRARY_RE, build: ring_arbitrary },
    Matcher { name: "border-spacing", regex: &BORDER_SPACING_RE, build: border_spacing },
    Matcher { name: "border-width", regex: &BORDER_WIDTH_RE, build: border_width },
    Matcher { name: "border-arbitrary", regex: &BORDER_ARBITRARY_RE, build: border_arbitrary },
    Matcher { name: "divide-width", regex: &DIVIDE_WIDTH_RE, build: divide_width },
    Matcher { name: "outline-width", regex: &OUTLINE_WIDTH_RE, build: outline_width },
    Matcher { name: "outline-offset", regex: &OUTLINE_OFFSET_RE, build: outline_offset },
    Matcher { name: "outline-arbitrary", regex: &OUTLINE_ARBITRARY_RE, build: outline_arbitrary },
    Matcher { name: "rounded-side", regex: &ROUNDED_SIDE_RE, build: rounded_side },
    Matcher { name: "rounded-arbitrary", regex: &ROUNDED_ARBITRARY_RE, build: rounded_arbitrary },
    Matcher { name: "linear-angle", regex: &LINEAR_ANGLE_RE, build: linear_angle },
    Matcher { name: "linear-to", regex: &LINEAR_TO_RE, build: linear_to },
    Matcher { name: "gradient-arbitrary", regex: &GRADIENT_ARBITRARY_RE, build: gradient_arbitrary },
    Matcher { name: "conic-angle", regex: &CONIC_ANGLE_RE, build: conic_angle },
    Matcher { name: "background-arbitrary", regex: &BG_ARBITRARY_RE, build: background_arbitrary },
    Matcher { name: "background-var", regex: &BG_VAR_RE, build: background_var },
    Matcher { name: "gradient-stop-position", regex: &GRADIENT_STOP_POSITION_RE, build: gradient_stop_position },
    Matcher { name: "gradient-stop-arbitrary", regex: &GRADIENT_STOP_ARBITRARY_RE, build: gradient_stop_arbitrary },
    Matcher { name: "leading", regex: &LEADING_RE, build: leading },
    Matcher { name: "line-clamp", regex: &LINE_CLAMP_RE, build: line_clamp },
    Matcher { name: "indent", regex: &INDENT_RE, build: indent },
    Matcher { name: "decoration-width", regex: &DECORATION_WIDTH_RE, build: decoration_width },
    Matcher { name: "underline-offset", regex: &UNDERLINE_OFFSET_RE, build: underline_offset },
    Matcher { name: "text-arbitrary", regex: &TEXT_ARBITRARY_RE, build: text_arbitrary },
    Matcher { name: "font-arbitrary", regex: &FONT_ARBITRARY_RE, build: font_arbitrary },
    Matcher { name: "tracking-arbitrary", regex: &TRACKING_ARBITRARY_RE, build: tracking_arbitrary },
    Matcher { name: "z-index", regex: &Z_INDEX_RE, build: z_index },
    Matcher { name: "columns", regex: &COLUMNS_RE, build: columns },
    Matcher { name: "aspect-ratio", regex: &ASPECT_RATIO_RE, build: aspect_ratio },
    Matcher { name: "timing", regex: &TIMING_RE, build: timing },
    Matcher { name: "filter", regex: &FILTER_RE, build: filter },
    Matcher { name: "stroke-width", regex: &STROKE_WIDTH_RE, build: stroke_width },
    Matcher { name: "stroke-arbitrary", regex: &STROKE_ARBITRARY_RE, build: stroke_arbitrary },
    Matcher { name: "scroll-spacing", regex: &SCROLL_SPACING_RE, build: scroll_spacing },
    Matcher { name: "named-group", regex: &NAMED_GROUP_RE, build: named_group },
    Matcher { name: "container", regex: &CONTAINER_RE, build: container },
    Matcher { name: "generic-arbitrary", regex: &GENERIC_ARBITRARY_RE, build: generic_arbitrary },
    Matcher { name: "custom-property", regex: &CUSTOM_PROPERTY_RE, build: custom_property },
];

/// Run the matcher chain; `None` when no shape fits.
pub fn match_pattern(base_class: &str) -> Option<String> {
    first_match(MATCHERS, base_class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        for m in MATCHERS {
            assert!(m.compiled(), "pattern {} failed to compile", m.name);
        }
    }

    #[test]
    fn test_every_palette_color_matches() {
        for color in COLOR_NAMES {
            for utility in ["bg", "text", "border-t", "ring"] {
                let class = format!("{}-{}-700", utility, color);
                let out = match_pattern(&class).unwrap_or_default();
                assert!(out.contains(color), "{} -> {:?}", class, out);
            }
        }
    }

    #[test]
    fn test_spacing() {
        assert_eq!(match_pattern("p-4").as_deref(), Some("padding 1rem"));
        assert_eq!(match_pattern("px-2").as_deref(), Some("horizontal padding 0.5rem"));
        assert_eq!(match_pattern("-mt-1").as_deref(), Some("negative top margin 0.25rem"));
        assert_eq!(match_pattern("ml-auto").as_deref(), Some("left margin auto"));
        assert_eq!(match_pattern("p-[10px]").as_deref(), Some("padding 10px"));
        assert_eq!(match_pattern("space-y-4").as_deref(), Some("vertical space between children 1rem"));
        assert_eq!(match_pattern("gap-x-2").as_deref(), Some("column gap 0.5rem"));
        assert_eq!(match_pattern("gap-4").as_deref(), Some("gap 1rem"));
    }

    #[test]
    fn test_off_scale_spacing_falls_through() {
        assert_eq!(match_pattern("p-13"), None);
        assert_eq!(match_pattern("pauto-4"), None);
    }

    #[test]
    fn test_sizing_and_inset() {
        assert_eq!(match_pattern("w-1/2").as_deref(), Some("width 50%"));
        assert_eq!(match_pattern("h-64").as_deref(), Some("height 16rem"));
        assert_eq!(match_pattern("max-w-[600px]").as_deref(), Some("max width 600px"));
        assert_eq!(match_pattern("w-(--sidebar)").as_deref(), Some("width var(--sidebar)"));
        assert_eq!(match_pattern("inset-x-4").as_deref(), Some("horizontal inset 1rem"));
        assert_eq!(match_pattern("-top-2").as_deref(), Some("top offset -0.5rem"));
    }

    #[test]
    fn test_colors() {
        assert_eq!(match_pattern("bg-blue-500").as_deref(), Some("blue background"));
        assert_eq!(match_pattern("text-red-700").as_deref(), Some("dark red text"));
        assert_eq!(match_pattern("border-t-gray-200").as_deref(), Some("lighter gray top border"));
        assert_eq!(match_pattern("text-shadow-sky-300").as_deref(), Some("light sky text shadow"));
        assert_eq!(match_pattern("ring-white").as_deref(), Some("white ring"));
        assert_eq!(match_pattern("border-current").as_deref(), Some("border in current color"));
        assert_eq!(match_pattern("bg-blue-550"), None);
    }

    #[test]
    fn test_transforms() {
        assert_eq!(match_pattern("scale-150").as_deref(), Some("scaled to 150%"));
        assert_eq!(match_pattern("-rotate-45").as_deref(), Some("rotated -45°"));
        assert_eq!(match_pattern("translate-x-4").as_deref(), Some("moved right 1rem"));
        assert_eq!(match_pattern("-translate-y-1/2").as_deref(), Some("moved up 50%"));
        assert_eq!(match_pattern("skew-x-3").as_deref(), Some("skewed horizontally 3°"));
    }

    #[test]
    fn test_effects_and_borders() {
        assert_eq!(match_pattern("opacity-75").as_deref(), Some("75% opacity"));
        assert_eq!(match_pattern("shadow-[0_35px_60px_rgba(0,0,0,0.25)]").as_deref(), Some("custom shadow 0 35px 60px rgba(0,0,0,0.25)"));
        assert_eq!(match_pattern("ring-2").as_deref(), Some("2px ring"));
        assert_eq!(match_pattern("border-2").as_deref(), Some("2px border"));
        assert_eq!(match_pattern("border-b-4").as_deref(), Some("4px bottom border"));
        assert_eq!(match_pattern("border-[#333]").as_deref(), Some("border color #333"));
        assert_eq!(match_pattern("rounded-t-lg").as_deref(), Some("large rounded top corners"));
        assert_eq!(match_pattern("rounded-tl-none").as_deref(), Some("square top-left corner"));
        assert_eq!(match_pattern("border-spacing-2").as_deref(), Some("table border spacing 0.5rem"));
    }

    #[test]
    fn test_backgrounds() {
        assert_eq!(match_pattern("bg-linear-45").as_deref(), Some("linear gradient at 45°"));
        assert_eq!(match_pattern("bg-linear-to-br").as_deref(), Some("linear gradient to bottom right"));
        assert_eq!(match_pattern("bg-[url(/img/hero.png)]").as_deref(), Some("background image url(/img/hero.png)"));
        assert_eq!(match_pattern("bg-[#1da1f2]").as_deref(), Some("background color #1da1f2"));
        assert_eq!(match_pattern("bg-[length:200px_100px]").as_deref(), Some("background size 200px 100px"));
        assert_eq!(match_pattern("bg-(--brand)").as_deref(), Some("background var(--brand)"));
        assert_eq!(match_pattern("from-10%").as_deref(), Some("gradient start at 10%"));
    }

    #[test]
    fn test_typography() {
        assert_eq!(match_pattern("leading-6").as_deref(), Some("line height 1.5rem"));
        assert_eq!(match_pattern("line-clamp-3").as_deref(), Some("clamped to 3 lines"));
        assert_eq!(match_pattern("text-[14px]").as_deref(), Some("font size 14px"));
        assert_eq!(match_pattern("text-[#ff0000]").as_deref(), Some("text color #ff0000"));
        assert_eq!(match_pattern("font-[600]").as_deref(), Some("font weight 600"));
    }

    #[test]
    fn test_misc() {
        assert_eq!(match_pattern("grid-cols-3").as_deref(), Some("grid with 3 columns"));
        assert_eq!(match_pattern("col-span-2").as_deref(), Some("spans 2 columns"));
        assert_eq!(match_pattern("z-10").as_deref(), Some("z-index 10"));
        assert_eq!(match_pattern("duration-300").as_deref(), Some("300ms duration"));
        assert_eq!(match_pattern("aspect-16/9").as_deref(), Some("aspect ratio 16:9"));
        assert_eq!(match_pattern("backdrop-blur-[2px]").as_deref(), Some("backdrop blur 2px"));
        assert_eq!(match_pattern("brightness-50").as_deref(), Some("brightness 50%"));
        assert_eq!(match_pattern("group/item").as_deref(), Some("group named \"item\""));
    }

    #[test]
    fn test_generic_arbitrary_and_custom_property() {
        assert_eq!(match_pattern("content-['hello']").as_deref(), Some("content 'hello'"));
        assert_eq!(match_pattern("grid-cols-[200px_1fr]").as_deref(), Some("grid columns 200px 1fr"));
        assert_eq!(match_pattern("cursor-[grab]").as_deref(), Some("cursor grab"));
        assert_eq!(match_pattern("fill-(--icon)").as_deref(), Some("fill var(--icon)"));
        assert_eq!(match_pattern("wobble-[3]").as_deref(), Some("wobble 3"));
    }
}
