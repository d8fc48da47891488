// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Token reader over a single line.
//!
//! Every read skips leading whitespace first. A read that finds nothing
//! returns `None` and leaves the cursor at the end of the line.

/// Cursor over the characters of one line.
pub(super) struct LineScanner<'a> {
    rest: &'a str,
}

impl<'a> LineScanner<'a> {
    pub(super) const fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// Next non-whitespace character.
    pub(super) fn next_char(&mut self) -> Option<char> {
        self.skip_whitespace();
        let mut chars = self.rest.chars();
        let c = chars.next()?;
        self.rest = chars.as_str();
        Some(c)
    }

    /// Next run of non-whitespace characters.
    pub(super) fn next_word(&mut self) -> Option<&'a str> {
        self.skip_whitespace();
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .find(char::is_whitespace)
            .unwrap_or(self.rest.len());
        let (word, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(word)
    }

    /// Next string token.
    ///
    /// A token starting with `"` runs to the matching unescaped `"`, with `\`
    /// escaping the character after it; an unterminated quote yields `None`.
    /// Any other token is read like [`Self::next_word`].
    pub(super) fn next_quoted(&mut self) -> Option<String> {
        self.skip_whitespace();
        let Some(body) = self.rest.strip_prefix('"') else {
            return self.next_word().map(str::to_owned);
        };

        let mut value = String::new();
        let mut chars = body.char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                '"' => {
                    self.rest = &body[i + c.len_utf8()..];
                    return Some(value);
                }
                '\\' => value.push(chars.next().map_or('\\', |(_, escaped)| escaped)),
                _ => value.push(c),
            }
        }

        self.rest = "";
        None
    }
}

#[cfg(test)]
mod tests {
    use super::LineScanner;

    #[test]
    fn test_quoted_with_escapes() {
        let mut scanner = LineScanner::new(r#"  "a \"b\", c" rest"#);
        assert_eq!(scanner.next_quoted().as_deref(), Some(r#"a "b", c"#));
        assert_eq!(scanner.next_word(), Some("rest"));
        assert_eq!(scanner.next_word(), None);
    }

    #[test]
    fn test_quoted_unterminated() {
        let mut scanner = LineScanner::new(r#""never closed"#);
        assert_eq!(scanner.next_quoted(), None);
        assert_eq!(scanner.next_char(), None);
    }

    #[test]
    fn test_unquoted_token_reads_a_word() {
        let mut scanner = LineScanner::new("bare, next");
        assert_eq!(scanner.next_quoted().as_deref(), Some("bare,"));
        assert_eq!(scanner.next_char(), Some('n'));
    }

    #[test]
    fn test_next_char_skips_whitespace() {
        let mut scanner = LineScanner::new("\t = x");
        assert_eq!(scanner.next_char(), Some('='));
        assert_eq!(scanner.next_word(), Some("x"));
    }
}
