//! English descriptions of variant prefixes (`hover`, `md`, `data-[open]`, ...).

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Captures;

use crate::matcher::{first_match, group, static_regex, Matcher};
use crate::scale::clean_arbitrary;

const BREAKPOINTS: &[(&str, &str, &str)] = &[
    ("sm", "small", "640"),
    ("md", "medium", "768"),
    ("lg", "large", "1024"),
    ("xl", "extra large", "1280"),
    ("2xl", "2x large", "1536"),
];

/// Container query sizes for `@sm`, `@md`, ...
const CONTAINER_SIZES: &[(&str, &str)] = &[
    ("3xs", "16rem"),
    ("2xs", "18rem"),
    ("xs", "20rem"),
    ("sm", "24rem"),
    ("md", "28rem"),
    ("lg", "32rem"),
    ("xl", "36rem"),
    ("2xl", "42rem"),
    ("3xl", "48rem"),
    ("4xl", "56rem"),
    ("5xl", "64rem"),
    ("6xl", "72rem"),
    ("7xl", "80rem"),
];

/// Interaction and form states shared by plain, `group-` and `peer-` forms.
const STATES: &[(&str, &str)] = &[
    ("hover", "hover"),
    ("focus", "focus"),
    ("focus-within", "focus within"),
    ("focus-visible", "keyboard focus"),
    ("active", "active (pressed)"),
    ("visited", "visited"),
    ("target", "targeted"),
    ("disabled", "disabled"),
    ("enabled", "enabled"),
    ("checked", "checked"),
    ("indeterminate", "indeterminate"),
    ("default", "default"),
    ("required", "required"),
    ("optional", "optional"),
    ("valid", "valid"),
    ("invalid", "invalid"),
    ("user-valid", "valid after interaction"),
    ("user-invalid", "invalid after interaction"),
    ("in-range", "in range"),
    ("out-of-range", "out of range"),
    ("placeholder-shown", "showing placeholder"),
    ("autofill", "autofilled"),
    ("read-only", "read-only"),
    ("open", "open"),
    ("empty", "empty"),
    ("first", "first child"),
    ("last", "last child"),
    ("only", "only child"),
    ("odd", "odd child"),
    ("even", "even child"),
];

const FIXED: &[(&str, &str)] = &[
    ("hover", "on hover"),
    ("focus", "on focus"),
    ("focus-within", "when focus is within"),
    ("focus-visible", "on keyboard focus"),
    ("active", "when active (pressed)"),
    ("visited", "when visited"),
    ("target", "when targeted"),
    ("first", "first child"),
    ("last", "last child"),
    ("only", "only child"),
    ("odd", "odd children"),
    ("even", "even children"),
    ("first-of-type", "first of its type"),
    ("last-of-type", "last of its type"),
    ("only-of-type", "only one of its type"),
    ("empty", "when empty"),
    ("disabled", "when disabled"),
    ("enabled", "when enabled"),
    ("checked", "when checked"),
    ("indeterminate", "when indeterminate"),
    ("default", "when default option"),
    ("required", "when required"),
    ("optional", "when optional"),
    ("valid", "when valid"),
    ("invalid", "when invalid"),
    ("user-valid", "when valid after interaction"),
    ("user-invalid", "when invalid after interaction"),
    ("in-range", "when in range"),
    ("out-of-range", "when out of range"),
    ("placeholder-shown", "when placeholder is shown"),
    ("autofill", "when autofilled"),
    ("read-only", "when read-only"),
    ("open", "when open"),
    ("inert", "when inert"),
    ("details-content", "details content"),
    ("before", "before pseudo-element"),
    ("after", "after pseudo-element"),
    ("placeholder", "placeholder text"),
    ("file", "file input button"),
    ("marker", "list markers"),
    ("selection", "selected text"),
    ("first-line", "first line"),
    ("first-letter", "first letter"),
    ("backdrop", "backdrop"),
    ("dark", "in dark mode"),
    ("not-dark", "in light mode"),
    ("motion-safe", "when motion is allowed"),
    ("motion-reduce", "when reduced motion is preferred"),
    ("contrast-more", "when more contrast is preferred"),
    ("contrast-less", "when less contrast is preferred"),
    ("forced-colors", "in forced colors mode"),
    ("inverted-colors", "when colors are inverted"),
    ("pointer-fine", "with a precise pointer"),
    ("pointer-coarse", "with a coarse pointer"),
    ("pointer-none", "without a pointer"),
    ("any-pointer-fine", "when any pointer is precise"),
    ("any-pointer-coarse", "when any pointer is coarse"),
    ("noscript", "when scripting is disabled"),
    ("portrait", "in portrait orientation"),
    ("landscape", "in landscape orientation"),
    ("print", "when printing"),
    ("ltr", "in left-to-right text"),
    ("rtl", "in right-to-left text"),
    ("starting", "on first render (starting style)"),
    ("*", "for direct children"),
    ("**", "for all descendants"),
    ("@container", "as a query container"),
];

static LOOKUP: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    let mut map: HashMap<String, String> = FIXED
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    for (name, size, px) in BREAKPOINTS {
        map.insert(name.to_string(), format!("on {} screens (≥{}px)", size, px));
        map.insert(format!("max-{}", name), format!("on screens below {} (<{}px)", size, px));
    }
    for (name, rem) in CONTAINER_SIZES {
        map.insert(format!("@{}", name), format!("in containers ≥{}", rem));
        map.insert(format!("@max-{}", name), format!("in containers <{}", rem));
    }
    for (state, phrase) in STATES {
        map.insert(format!("group-{}", state), format!("when group is {}", phrase));
        map.insert(format!("peer-{}", state), format!("when peer is {}", phrase));
    }
    map.insert("group-hover".to_string(), "on group hover".to_string());
    map.insert("peer-hover".to_string(), "on peer hover".to_string());
    map.insert("group-focus".to_string(), "on group focus".to_string());
    map.insert("peer-focus".to_string(), "on peer focus".to_string());
    map
});

static_regex!(HAS_RE, r"^(group-|peer-)?has-\[(.+)\]$");
static_regex!(DATA_RE, r"^(group-|peer-)?data-\[(.+)\]$");
static_regex!(DATA_NAMED_RE, r"^(group-|peer-)?data-([a-z][a-z0-9-]*)$");
static_regex!(ARIA_RE, r"^(group-|peer-)?aria-\[(.+)\]$");
static_regex!(ARIA_NAMED_RE, r"^(group-|peer-)?aria-([a-z][a-z0-9-]*)$");
static_regex!(NTH_RE, r"^nth-(last-)?(of-type-)?(?:\[(.+)\]|(\d+))$");
static_regex!(SUPPORTS_RE, r"^(not-)?supports-\[(.+)\]$");
static_regex!(NOT_RE, r"^not-\[(.+)\]$");
static_regex!(NOT_NAMED_RE, r"^not-([a-z][a-z0-9-]*)$");
static_regex!(IN_RE, r"^in-\[(.+)\]$");
static_regex!(SCREEN_RE, r"^(min|max)-\[(.+)\]$");
static_regex!(CONTAINER_ARBITRARY_RE, r"^@(min|max)-\[(.+)\](?:/(.+))?$");
static_regex!(CONTAINER_NAMED_RE, r"^@(max-)?([0-9]*x?[a-z]+)/(.+)$");
static_regex!(CONTAINER_NAME_RE, r"^@container/(.+)$");
static_regex!(NAMED_STATE_RE, r"^(group|peer)-(.+)/(.+)$");
static_regex!(GROUP_ARBITRARY_RE, r"^(group|peer)-\[(.+)\]$");
static_regex!(SELECTOR_RE, r"^\[(.+)\]$");

fn who(prefix: &str) -> &'static str {
    match prefix {
        "group-" => "group ",
        "peer-" => "peer ",
        _ => "",
    }
}

fn has_variant(caps: &Captures<'_>) -> Option<String> {
    Some(format!("when {}has {}", who(group(caps, 1)), clean_arbitrary(group(caps, 2))))
}

fn data_variant(caps: &Captures<'_>) -> Option<String> {
    Some(format!("when {}data-{}", who(group(caps, 1)), clean_arbitrary(group(caps, 2))))
}

fn aria_variant(caps: &Captures<'_>) -> Option<String> {
    Some(format!("when {}aria-{}", who(group(caps, 1)), clean_arbitrary(group(caps, 2))))
}

fn nth_variant(caps: &Captures<'_>) -> Option<String> {
    let last = if caps.get(1).is_some() { "last-" } else { "" };
    let kind = if caps.get(2).is_some() { "of-type" } else { "child" };
    let arg = match caps.get(3) {
        Some(m) => clean_arbitrary(m.as_str()),
        None => group(caps, 4).to_string(),
    };
    Some(format!("when nth-{}{}({})", last, kind, arg))
}

fn supports_variant(caps: &Captures<'_>) -> Option<String> {
    let not = if caps.get(1).is_some() { "not " } else { "" };
    Some(format!("when {}supports {}", not, clean_arbitrary(group(caps, 2))))
}

fn not_variant(caps: &Captures<'_>) -> Option<String> {
    Some(format!("when not {}", clean_arbitrary(group(caps, 1))))
}

fn not_named_variant(caps: &Captures<'_>) -> Option<String> {
    let inner = group(caps, 1);
    let described = LOOKUP.get(inner)?;
    Some(format!("when not ({})", described))
}

fn in_variant(caps: &Captures<'_>) -> Option<String> {
    Some(format!("when in {}", clean_arbitrary(group(caps, 1))))
}

fn screen_variant(caps: &Captures<'_>) -> Option<String> {
    let op = if group(caps, 1) == "min" { "≥" } else { "<" };
    Some(format!("on screens {}{}", op, clean_arbitrary(group(caps, 2))))
}

fn container_arbitrary_variant(caps: &Captures<'_>) -> Option<String> {
    let op = if group(caps, 1) == "min" { "≥" } else { "<" };
    let value = clean_arbitrary(group(caps, 2));
    match caps.get(3) {
        Some(name) => Some(format!("in container \"{}\" {}{}", name.as_str(), op, value)),
        None => Some(format!("in containers {}{}", op, value)),
    }
}

fn container_named_variant(caps: &Captures<'_>) -> Option<String> {
    let size = group(caps, 2);
    let rem = CONTAINER_SIZES
        .iter()
        .find(|(k, _)| *k == size)
        .map(|(_, v)| *v)?;
    let op = if caps.get(1).is_some() { "<" } else { "≥" };
    Some(format!("in container \"{}\" {}{}", group(caps, 3), op, rem))
}

fn container_name_variant(caps: &Captures<'_>) -> Option<String> {
    Some(format!("as container \"{}\"", group(caps, 1)))
}

fn named_state_variant(caps: &Captures<'_>) -> Option<String> {
    let role = group(caps, 1);
    let state = group(caps, 2);
    let name = group(caps, 3);
    let inner = describe_variant(&format!("{}-{}", role, state));
    match inner.strip_prefix(&format!("when {} ", role)) {
        Some(rest) => Some(format!("when {} \"{}\" {}", role, name, rest)),
        None => match inner.strip_prefix(&format!("on {} ", role)) {
            Some(rest) => Some(format!("on {} \"{}\" {}", role, name, rest)),
            None => Some(format!("when {} \"{}\" {}", role, name, state)),
        },
    }
}

fn group_arbitrary_variant(caps: &Captures<'_>) -> Option<String> {
    Some(format!("when {} matches {}", group(caps, 1), clean_arbitrary(group(caps, 2))))
}

fn selector_variant(caps: &Captures<'_>) -> Option<String> {
    Some(format!("when matching {}", clean_arbitrary(group(caps, 1))))
}

static MATCHERS: &[Matcher] = &[
    Matcher { name: "has", regex: &HAS_RE, build: has_variant },
    Matcher { name: "data", regex: &DATA_RE, build: data_variant },
    Matcher { name: "aria", regex: &ARIA_RE, build: aria_variant },
    Matcher { name: "nth", regex: &NTH_RE, build: nth_variant },
    Matcher { name: "supports", regex: &SUPPORTS_RE, build: supports_variant },
    Matcher { name: "not", regex: &NOT_RE, build: not_variant },
    Matcher { name: "not-named", regex: &NOT_NAMED_RE, build: not_named_variant },
    Matcher { name: "in", regex: &IN_RE, build: in_variant },
    Matcher { name: "screen", regex: &SCREEN_RE, build: screen_variant },
    Matcher { name: "container-arbitrary", regex: &CONTAINER_ARBITRARY_RE, build: container_arbitrary_variant },
    Matcher { name: "container-named", regex: &CONTAINER_NAMED_RE, build: container_named_variant },
    Matcher { name: "container-name", regex: &CONTAINER_NAME_RE, build: container_name_variant },
    Matcher { name: "named-state", regex: &NAMED_STATE_RE, build: named_state_variant },
    Matcher { name: "group-arbitrary", regex: &GROUP_ARBITRARY_RE, build: group_arbitrary_variant },
    Matcher { name: "data-named", regex: &DATA_NAMED_RE, build: data_variant },
    Matcher { name: "aria-named", regex: &ARIA_NAMED_RE, build: aria_variant },
    Matcher { name: "selector", regex: &SELECTOR_RE, build: selector_variant },
];

/// Describe one variant. Unknown variants come back unchanged.
pub fn describe_variant(variant: &str) -> String {
    if let Some(fixed) = LOOKUP.get(variant) {
        return fixed.clone();
    }
    if let Some(described) = first_match(MATCHERS, variant) {
        return described;
    }
    if let Some(rest) = variant.strip_prefix("group-") {
        return format!("when group {}", rest);
    }
    if let Some(rest) = variant.strip_prefix("peer-") {
        return format!("when peer {}", rest);
    }
    variant.to_string()
}
