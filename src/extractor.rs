//! Finding class-bearing occurrences in source text.
//!
//! Each syntax gets its own pass over the whole buffer. The passes overlap
//! (a `clsx(...)` call sits inside a `className={...}` attribute), so the
//! candidates are merged afterwards: ascending start, longer range first on
//! ties, and nothing that overlaps an already accepted range.

use regex::{Captures, Match};
use serde::{Deserialize, Serialize};

use crate::expression::{
    helper_arguments, parse_class_value, parse_expression, ConditionalClassFragment, Fragments,
    KeyStyle, HELPER_NAMES,
};
use crate::matcher::static_regex;
use crate::scan::{find_closing, string_literal};

/// The syntax an occurrence was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionKind {
    /// `class="..."` / `className="..."`
    Simple,
    /// ``className={`...`}``
    Template,
    /// `className={cond ? 'a' : 'b'}`
    Expression,
    /// `clsx(...)`, `cn(...)`, `cva(...)` and friends
    Helper,
    Vue,
    Svelte,
    Angular,
    Solid,
}

impl ExtractionKind {
    /// Tie-breaker when two candidates cover exactly the same range.
    fn priority(self) -> u8 {
        match self {
            ExtractionKind::Helper => 0,
            ExtractionKind::Template => 1,
            ExtractionKind::Expression => 2,
            ExtractionKind::Vue => 3,
            ExtractionKind::Svelte => 4,
            ExtractionKind::Angular => 5,
            ExtractionKind::Solid => 6,
            ExtractionKind::Simple => 7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExtractionKind::Simple => "simple",
            ExtractionKind::Template => "template",
            ExtractionKind::Expression => "expression",
            ExtractionKind::Helper => "helper",
            ExtractionKind::Vue => "vue",
            ExtractionKind::Svelte => "svelte",
            ExtractionKind::Angular => "angular",
            ExtractionKind::Solid => "solid",
        }
    }
}

/// Byte range `[start, end)` into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One occurrence: unconditional class strings plus guarded fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassExtraction {
    pub class_strings: Vec<String>,
    pub conditional_classes: Vec<ConditionalClassFragment>,
    pub range: TextRange,
    #[serde(rename = "type")]
    pub kind: ExtractionKind,
}

impl ClassExtraction {
    fn from_fragments(fragments: Fragments, range: TextRange, kind: ExtractionKind) -> Option<Self> {
        let (plain, conditional): (Vec<_>, Vec<_>) =
            fragments.into_iter().partition(|f| f.condition.is_none());
        let extraction = Self {
            class_strings: plain.into_iter().map(|f| f.classes).collect(),
            conditional_classes: conditional,
            range,
            kind,
        };
        (!extraction.is_blank()).then_some(extraction)
    }

    fn simple(body: &str, range: TextRange, kind: ExtractionKind) -> Option<Self> {
        let fragment = ConditionalClassFragment::new(body, None)?;
        Self::from_fragments(vec![fragment], range, kind)
    }

    pub fn is_blank(&self) -> bool {
        self.class_strings.iter().all(|s| s.trim().is_empty())
            && self
                .conditional_classes
                .iter()
                .all(|f| f.classes.trim().is_empty())
    }

    pub fn has_conditions(&self) -> bool {
        !self.conditional_classes.is_empty()
    }
}

static_regex!(
    ATTRIBUTE_RE,
    r#"\b(?:class|className)\s*=\s*(?:"([^"]*)"|'([^']*)')"#
);
static_regex!(JSX_EXPRESSION_RE, r"\b(?:class|className)\s*=\s*\{");
static_regex!(HELPER_RE, &format!(r"\b({})\s*\(", HELPER_NAMES.join("|")));
static_regex!(
    VUE_RE,
    r#"(?:v-bind)?:class\s*=\s*(?:"([^"]*)"|'([^']*)')"#
);
static_regex!(SVELTE_RE, r"\bclass:([A-Za-z0-9_-]+)(\s*=\s*\{)?");
static_regex!(
    NG_CLASS_RE,
    r#"\[ngClass\]\s*=\s*(?:"([^"]*)"|'([^']*)')"#
);
static_regex!(
    NG_CLASS_BINDING_RE,
    r#"\[class\.([A-Za-z0-9_-]+)\]\s*=\s*(?:"([^"]*)"|'([^']*)')"#
);
static_regex!(SOLID_RE, r"\bclassList\s*=\s*\{");

fn quoted_body<'t>(caps: &Captures<'t>, first: usize) -> Option<Match<'t>> {
    caps.get(first).or_else(|| caps.get(first + 1))
}

fn previous_char(source: &str, at: usize) -> Option<char> {
    source[..at].chars().next_back()
}

/// Extract every class-bearing occurrence, ordered by start offset, with no
/// two ranges overlapping.
pub fn extract_all_class_names(source: &str) -> Vec<ClassExtraction> {
    let mut candidates = Vec::new();
    extract_attributes(source, &mut candidates);
    extract_jsx_expressions(source, &mut candidates);
    extract_helpers(source, &mut candidates);
    extract_vue(source, &mut candidates);
    extract_svelte(source, &mut candidates);
    extract_angular(source, &mut candidates);
    extract_solid(source, &mut candidates);

    let found = candidates.len();
    let merged = merge(candidates);
    tracing::debug!(candidates = found, kept = merged.len(), "class extraction pass");
    merged
}

/// First extraction whose range contains `offset`.
pub fn find_extraction_at_position(
    extractions: &[ClassExtraction],
    offset: usize,
) -> Option<&ClassExtraction> {
    extractions.iter().find(|e| e.range.contains(offset))
}

fn merge(mut candidates: Vec<ClassExtraction>) -> Vec<ClassExtraction> {
    candidates.sort_by(|a, b| {
        a.range
            .start
            .cmp(&b.range.start)
            .then(b.range.len().cmp(&a.range.len()))
            .then(a.kind.priority().cmp(&b.kind.priority()))
    });

    let mut kept: Vec<ClassExtraction> = Vec::with_capacity(candidates.len());
    let mut covered_until = 0;
    for candidate in candidates {
        if candidate.range.start < covered_until {
            continue;
        }
        covered_until = candidate.range.end;
        kept.push(candidate);
    }
    kept
}

fn extract_attributes(source: &str, out: &mut Vec<ClassExtraction>) {
    let Some(re) = ATTRIBUTE_RE.as_ref() else {
        return;
    };
    for caps in re.captures_iter(source) {
        let Some(whole) = caps.get(0) else { continue };
        // `:class` and `v-bind:class` belong to the Vue pass; `data-class`,
        // `.className` and `[class]` are not class attributes.
        if matches!(previous_char(source, whole.start()), Some(':' | '.' | '-' | '[')) {
            continue;
        }
        let Some(body) = quoted_body(&caps, 1) else { continue };
        let range = TextRange::new(whole.start(), whole.end());
        out.extend(ClassExtraction::simple(body.as_str(), range, ExtractionKind::Simple));
    }
}

fn extract_jsx_expressions(source: &str, out: &mut Vec<ClassExtraction>) {
    let Some(re) = JSX_EXPRESSION_RE.as_ref() else {
        return;
    };
    for whole in re.find_iter(source) {
        if matches!(previous_char(source, whole.start()), Some(':' | '.' | '-' | '[')) {
            continue;
        }
        let open = whole.end() - 1;
        let Some(close) = find_closing(source, open) else {
            continue;
        };
        let inner = source[open + 1..close].trim();
        let range = TextRange::new(whole.start(), close + 1);

        if inner.starts_with('`') {
            if let Some(fragments) = parse_expression(inner) {
                out.extend(ClassExtraction::from_fragments(fragments, range, ExtractionKind::Template));
            }
            continue;
        }
        if let Some((quote, body)) = string_literal(inner) {
            if quote != '`' {
                out.extend(ClassExtraction::simple(body, range, ExtractionKind::Simple));
            }
            continue;
        }
        if looks_like_call(inner) {
            // helper calls are picked up by their own pass
            continue;
        }
        if let Some(fragments) = parse_expression(inner) {
            out.extend(ClassExtraction::from_fragments(fragments, range, ExtractionKind::Expression));
        }
    }
}

/// `name(...)` or `a.b(...)` spanning the whole expression.
fn looks_like_call(expr: &str) -> bool {
    let Some(paren) = expr.find('(') else {
        return false;
    };
    let callee = expr[..paren].trim_end();
    !callee.is_empty()
        && callee
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.'))
        && find_closing(expr, paren).is_some_and(|close| expr[close + 1..].trim().is_empty())
}

fn extract_helpers(source: &str, out: &mut Vec<ClassExtraction>) {
    let Some(re) = HELPER_RE.as_ref() else {
        return;
    };
    for caps in re.captures_iter(source) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if previous_char(source, whole.start()) == Some('.') {
            continue;
        }
        if source[..whole.start()].trim_end().ends_with("function") {
            continue;
        }
        let open = whole.end() - 1;
        let Some(close) = find_closing(source, open) else {
            continue;
        };
        let fragments = helper_arguments(name.as_str(), &source[open + 1..close]);
        let range = TextRange::new(whole.start(), close + 1);
        out.extend(ClassExtraction::from_fragments(fragments, range, ExtractionKind::Helper));
    }
}

fn extract_vue(source: &str, out: &mut Vec<ClassExtraction>) {
    let Some(re) = VUE_RE.as_ref() else {
        return;
    };
    for caps in re.captures_iter(source) {
        let (Some(whole), Some(body)) = (caps.get(0), quoted_body(&caps, 1)) else {
            continue;
        };
        let Some(fragments) = parse_class_value(body.as_str(), KeyStyle::Bare) else {
            continue;
        };
        let range = TextRange::new(whole.start(), whole.end());
        out.extend(ClassExtraction::from_fragments(fragments, range, ExtractionKind::Vue));
    }
}

fn extract_svelte(source: &str, out: &mut Vec<ClassExtraction>) {
    let Some(re) = SVELTE_RE.as_ref() else {
        return;
    };
    for caps in re.captures_iter(source) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let (condition, end) = match caps.get(2) {
            Some(binding) => {
                let open = binding.end() - 1;
                let Some(close) = find_closing(source, open) else {
                    continue;
                };
                (source[open + 1..close].trim().to_string(), close + 1)
            }
            // `class:active` is shorthand for `class:active={active}`
            None => (name.as_str().to_string(), whole.end()),
        };
        let condition = match condition.as_str() {
            "true" => None,
            "false" => continue,
            _ => Some(condition),
        };
        let Some(fragment) = ConditionalClassFragment::new(name.as_str(), condition) else {
            continue;
        };
        let range = TextRange::new(whole.start(), end);
        out.extend(ClassExtraction::from_fragments(vec![fragment], range, ExtractionKind::Svelte));
    }
}

fn extract_angular(source: &str, out: &mut Vec<ClassExtraction>) {
    if let Some(re) = NG_CLASS_RE.as_ref() {
        for caps in re.captures_iter(source) {
            let (Some(whole), Some(body)) = (caps.get(0), quoted_body(&caps, 1)) else {
                continue;
            };
            let Some(fragments) = parse_class_value(body.as_str(), KeyStyle::Bare) else {
                continue;
            };
            let range = TextRange::new(whole.start(), whole.end());
            out.extend(ClassExtraction::from_fragments(fragments, range, ExtractionKind::Angular));
        }
    }

    if let Some(re) = NG_CLASS_BINDING_RE.as_ref() {
        for caps in re.captures_iter(source) {
            let (Some(whole), Some(name), Some(body)) =
                (caps.get(0), caps.get(1), quoted_body(&caps, 2))
            else {
                continue;
            };
            let condition = match body.as_str().trim() {
                "true" => None,
                "false" | "" => continue,
                other => Some(other.to_string()),
            };
            let Some(fragment) = ConditionalClassFragment::new(name.as_str(), condition) else {
                continue;
            };
            let range = TextRange::new(whole.start(), whole.end());
            out.extend(ClassExtraction::from_fragments(vec![fragment], range, ExtractionKind::Angular));
        }
    }
}

fn extract_solid(source: &str, out: &mut Vec<ClassExtraction>) {
    let Some(re) = SOLID_RE.as_ref() else {
        return;
    };
    for whole in re.find_iter(source) {
        let open = whole.end() - 1;
        let Some(close) = find_closing(source, open) else {
            continue;
        };
        let inner = source[open + 1..close].trim();
        if !inner.starts_with('{') {
            continue;
        }
        let Some(fragments) = parse_class_value(inner, KeyStyle::Bare) else {
            continue;
        };
        let range = TextRange::new(whole.start(), close + 1);
        out.extend(ClassExtraction::from_fragments(fragments, range, ExtractionKind::Solid));
    }
}
