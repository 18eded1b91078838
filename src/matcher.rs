use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Declare a lazily compiled regex. A pattern that fails to compile yields
/// `None` and its matcher never fires.
macro_rules! static_regex {
    ($name:ident, $regex_str:expr) => {
        static $name: std::sync::LazyLock<Option<regex::Regex>> =
            std::sync::LazyLock::new(|| regex::Regex::new($regex_str).ok());
    };
}

pub(crate) use static_regex;

/// One entry of an ordered "try this shape, else the next" chain.
pub struct Matcher {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub build: fn(&Captures<'_>) -> Option<String>,
}

impl Matcher {
    /// Run the matcher against `input`. `None` means "not my shape" and the
    /// caller moves on to the next matcher.
    pub fn apply(&self, input: &str) -> Option<String> {
        let re = self.regex.as_ref()?;
        let caps = re.captures(input)?;
        (self.build)(&caps)
    }

    #[cfg(test)]
    pub fn compiled(&self) -> bool {
        self.regex.is_some()
    }
}

/// First successful matcher wins.
pub fn first_match(matchers: &[Matcher], input: &str) -> Option<String> {
    matchers.iter().find_map(|m| {
        let out = m.apply(input)?;
        tracing::trace!(matcher = m.name, input, "pattern matched");
        Some(out)
    })
}

/// Capture group `i` as `&str`, empty when the group did not participate.
pub fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map(|m| m.as_str()).unwrap_or("")
}
