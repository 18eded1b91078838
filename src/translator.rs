//! The translation engine: class strings and conditional fragments in, one
//! display string out.

use std::sync::Arc;

use indexmap::IndexSet;

use crate::categories::group_translations_by_category;
use crate::config::DisplaySettings;
use crate::expression::ConditionalClassFragment;
use crate::extractor::ClassExtraction;
use crate::modifiers::{compose, parse_modifiers};
use crate::resolver::resolve_base_class;

/// Display flags the engine reads on every call.
pub trait TranslationSettings {
    fn group_by_category(&self) -> bool;
    fn show_category_emojis(&self) -> bool;
}

impl<T: TranslationSettings + ?Sized> TranslationSettings for &T {
    fn group_by_category(&self) -> bool {
        (**self).group_by_category()
    }

    fn show_category_emojis(&self) -> bool {
        (**self).show_category_emojis()
    }
}

impl<T: TranslationSettings + ?Sized> TranslationSettings for Arc<T> {
    fn group_by_category(&self) -> bool {
        (**self).group_by_category()
    }

    fn show_category_emojis(&self) -> bool {
        (**self).show_category_emojis()
    }
}

/// Translates class strings according to a settings provider.
#[derive(Debug, Clone, Default)]
pub struct Translator<S = DisplaySettings> {
    settings: S,
}

impl<S: TranslationSettings> Translator<S> {
    pub fn new(settings: S) -> Self {
        Self { settings }
    }

    /// Translate every whitespace-separated token. Individual translations
    /// are joined with `", "`; category groups with `" | "`.
    pub fn translate_classes(&self, class_string: &str) -> String {
        let tokens: Vec<&str> = class_string.split_whitespace().collect();
        if tokens.is_empty() {
            return String::new();
        }
        let translations: Vec<String> = tokens.iter().map(|t| translate_token(t)).collect();

        if self.settings.group_by_category() {
            group_translations_by_category(
                &tokens,
                &translations,
                self.settings.show_category_emojis(),
            )
        } else {
            translations.join(", ")
        }
    }

    /// Translate each fragment and annotate guarded ones with `(condition)`.
    pub fn translate_conditional_classes(&self, fragments: &[ConditionalClassFragment]) -> String {
        fragments
            .iter()
            .filter_map(|fragment| {
                let translated = self.translate_classes(&fragment.classes);
                if translated.is_empty() {
                    return None;
                }
                Some(match &fragment.condition {
                    Some(condition) => format!("{} ({})", translated, condition),
                    None => translated,
                })
            })
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Display text for one extracted occurrence.
    pub fn translate_extraction(&self, extraction: &ClassExtraction) -> String {
        if !extraction.has_conditions() {
            return self.translate_classes(&combine_class_strings(&extraction.class_strings));
        }

        let mut fragments: Vec<ConditionalClassFragment> = Vec::new();
        let unconditional = combine_class_strings(&extraction.class_strings);
        fragments.extend(ConditionalClassFragment::new(&unconditional, None));
        fragments.extend(extraction.conditional_classes.iter().cloned());
        self.translate_conditional_classes(&fragments)
    }
}

/// Translate a single class token. A token with no base class left after
/// modifier stripping (`"::"`, `"hover:"`) is echoed as written.
pub fn translate_token(token: &str) -> String {
    let modifiers = parse_modifiers(token);
    if modifiers.base_class.is_empty() {
        return token.to_string();
    }
    let base = resolve_base_class(&modifiers.base_class);
    compose(&base, &modifiers)
}

/// Translate with the default display settings (no grouping).
pub fn translate_classes(class_string: &str) -> String {
    Translator::<DisplaySettings>::default().translate_classes(class_string)
}

pub fn translate_conditional_classes(fragments: &[ConditionalClassFragment]) -> String {
    Translator::<DisplaySettings>::default().translate_conditional_classes(fragments)
}

/// Merge the tokens of several class strings, dropping repeats and keeping
/// first-seen order.
pub fn combine_class_strings<S: AsRef<str>>(class_strings: &[S]) -> String {
    let tokens: IndexSet<&str> = class_strings
        .iter()
        .flat_map(|s| s.as_ref().split_whitespace())
        .collect();
    tokens.into_iter().collect::<Vec<_>>().join(" ")
}
