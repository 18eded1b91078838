use crate::mappings;
use crate::patterns::match_pattern;
use crate::scale::clean_arbitrary;

/// Translate a modifier-free base class. Unknown utilities come back as-is.
pub fn resolve_base_class(base_class: &str) -> String {
    if base_class.is_empty() {
        return String::new();
    }

    if let Some(phrase) = arbitrary_property(base_class) {
        return phrase;
    }

    if let Some(phrase) = mappings::lookup(base_class) {
        return phrase.to_string();
    }

    match match_pattern(base_class) {
        Some(phrase) => phrase,
        None => {
            tracing::trace!(class = base_class, "unknown utility");
            base_class.to_string()
        }
    }
}

/// `[--name:value]` and `[property:value]`.
fn arbitrary_property(base_class: &str) -> Option<String> {
    let inner = base_class.strip_prefix('[')?.strip_suffix(']')?;
    let (name, value) = inner.split_once(':')?;
    if name.is_empty() || value.is_empty() {
        return None;
    }
    let value = clean_arbitrary(value);
    if name.starts_with("--") {
        Some(format!("CSS variable {}: {}", name, value))
    } else {
        Some(format!("CSS property {}: {}", name, value))
    }
}
