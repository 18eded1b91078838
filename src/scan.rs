//! Lexical scanning helpers shared by the expression parser and the extractor.
//!
//! The scanner does not parse JavaScript. It tracks just enough state to know
//! whether a character sits inside a string literal or inside a bracket pair:
//! the active quote, a pending backslash escape, the bracket depth, and the
//! stack of open `${...}` interpolations inside template literals.

use std::str::CharIndices;

/// Quote and bracket-depth state for one left-to-right walk.
#[derive(Debug, Default, Clone)]
pub struct ScanState {
    quote: Option<char>,
    escaped: bool,
    dollar: bool,
    depth: usize,
    /// Bracket depth at which each open template interpolation started.
    interpolations: Vec<usize>,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the walk is outside every string and bracket pair.
    pub fn is_neutral(&self) -> bool {
        self.quote.is_none() && self.depth == 0 && self.interpolations.is_empty()
    }

    /// Advance the state past `ch`.
    pub fn step(&mut self, ch: char) {
        if let Some(quote) = self.quote {
            if self.escaped {
                self.escaped = false;
                return;
            }
            match ch {
                '\\' => self.escaped = true,
                '$' if quote == '`' => {
                    self.dollar = true;
                    return;
                }
                '{' if quote == '`' && self.dollar => {
                    self.interpolations.push(self.depth);
                    self.depth += 1;
                    self.quote = None;
                }
                c if c == quote => self.quote = None,
                _ => {}
            }
            self.dollar = false;
            return;
        }

        match ch {
            '"' | '\'' | '`' => self.quote = Some(ch),
            '(' | '[' | '{' => self.depth += 1,
            ')' | ']' => self.depth = self.depth.saturating_sub(1),
            '}' => {
                self.depth = self.depth.saturating_sub(1);
                if self.interpolations.last() == Some(&self.depth) {
                    self.interpolations.pop();
                    self.quote = Some('`');
                }
            }
            _ => {}
        }
    }
}

/// Iterator over the characters of a string that sit at the top level:
/// outside string literals and outside any bracket pair.
pub struct TopLevelChars<'a> {
    chars: CharIndices<'a>,
    state: ScanState,
}

impl<'a> Iterator for TopLevelChars<'a> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (idx, ch) = self.chars.next()?;
            let was_neutral = self.state.is_neutral();
            self.state.step(ch);
            if was_neutral && self.state.is_neutral() {
                return Some((idx, ch));
            }
        }
    }
}

pub fn top_level_chars(s: &str) -> TopLevelChars<'_> {
    TopLevelChars {
        chars: s.char_indices(),
        state: ScanState::new(),
    }
}

/// Split `s` at every top-level occurrence of `sep`.
pub fn split_top_level(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (idx, ch) in top_level_chars(s) {
        if ch == sep {
            parts.push(&s[start..idx]);
            start = idx + ch.len_utf8();
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Byte offsets of every top-level occurrence of `needle`.
pub fn top_level_matches(s: &str, needle: &str) -> Vec<usize> {
    top_level_chars(s)
        .filter(|(idx, _)| s[*idx..].starts_with(needle))
        .map(|(idx, _)| idx)
        .collect()
}

pub fn find_top_level(s: &str, needle: &str) -> Option<usize> {
    top_level_chars(s)
        .map(|(idx, _)| idx)
        .find(|idx| s[*idx..].starts_with(needle))
}

/// Given the byte offset of an opening bracket or quote, return the offset of
/// the character that closes it.
pub fn find_closing(s: &str, open: usize) -> Option<usize> {
    let tail = s.get(open..)?;
    let first = tail.chars().next()?;
    if !matches!(first, '(' | '[' | '{' | '"' | '\'' | '`') {
        return None;
    }

    let mut state = ScanState::new();
    for (idx, ch) in tail.char_indices() {
        state.step(ch);
        if idx > 0 && state.is_neutral() {
            return Some(open + idx);
        }
    }
    None
}

/// Strip one layer of parentheses wrapping the whole (trimmed) input.
pub fn strip_outer_parens(s: &str) -> &str {
    let trimmed = s.trim();
    if trimmed.starts_with('(') && find_closing(trimmed, 0) == Some(trimmed.len() - 1) {
        trimmed[1..trimmed.len() - 1].trim()
    } else {
        trimmed
    }
}

/// If the whole (trimmed) input is one quoted string literal, return its
/// quote character and body.
pub fn string_literal(s: &str) -> Option<(char, &str)> {
    let trimmed = s.trim();
    let quote = trimmed.chars().next()?;
    if !matches!(quote, '"' | '\'' | '`') {
        return None;
    }
    if find_closing(trimmed, 0)? != trimmed.len() - 1 {
        return None;
    }
    Some((quote, &trimmed[1..trimmed.len() - 1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_respects_quotes_and_brackets() {
        let parts = split_top_level("'a, b', fn(x, y), [1, 2], { k: 'v,w' }", ',');
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0].trim(), "'a, b'");
        assert_eq!(parts[1].trim(), "fn(x, y)");
        assert_eq!(parts[3].trim(), "{ k: 'v,w' }");
    }

    #[test]
    fn test_find_closing_brace_with_quoted_brace() {
        let src = "{ a ? '}' : \"{\" } tail";
        assert_eq!(find_closing(src, 0), Some(16));
    }

    #[test]
    fn test_find_closing_template_with_interpolation() {
        let src = "`btn ${on ? `x ${y}` : '}'} end` rest";
        let close = find_closing(src, 0).unwrap();
        assert_eq!(&src[..=close], "`btn ${on ? `x ${y}` : '}'} end`");
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let src = r#""a \" b" c"#;
        assert_eq!(find_closing(src, 0), Some(7));
    }

    #[test]
    fn test_unbalanced_returns_none() {
        assert_eq!(find_closing("(a, b", 0), None);
        assert_eq!(find_closing("abc", 0), None);
    }

    #[test]
    fn test_top_level_operator_search() {
        let expr = "(a && b) && 'x && y'";
        assert_eq!(top_level_matches(expr, "&&"), vec![9]);
        assert_eq!(find_top_level(expr, "&&"), Some(9));
    }

    #[test]
    fn test_strip_outer_parens_only_when_wrapping() {
        assert_eq!(strip_outer_parens(" (a && b) "), "a && b");
        assert_eq!(strip_outer_parens("(a) && (b)"), "(a) && (b)");
        assert_eq!(strip_outer_parens("((a))"), "(a)");
    }

    #[test]
    fn test_string_literal_detection() {
        assert_eq!(string_literal(" 'p-4 m-2' "), Some(('\'', "p-4 m-2")));
        assert_eq!(string_literal("'a' + 'b'"), None);
        assert_eq!(string_literal("isActive"), None);
    }
}
