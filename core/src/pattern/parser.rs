//! # PATTERN PARSER
//!
//! Grammar, after comments and whitespace are removed:
//!
//! ```text
//! expression := dependency (',' dependency)* ','?
//! dependency := name | group
//! group      := '{' property (',' property)* ','? '}'
//! property   := name (':' (name | group))?
//! ```
//!
//! A name must end at a delimiter (`,`, `}`, `:`) or at the end of the text, so a parameter is
//! never cut down to a shorter key. Any malformed top-level dependency makes the whole text
//! unparseable; a partial argument list is never produced.

use crate::errors::ConrError;
use crate::pattern::types::{Group, Name, Pattern};
use crate::signature::scanner::strip_comments;

/// Deepest group nesting accepted before the text is rejected.
pub const MAX_GROUP_DEPTH: usize = 64;

/// Characters accepted in identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierSet {
    /// ASCII letters, then letters or digits.
    Strict,
    /// `Strict` plus `_` and `$` in any position.
    #[default]
    Extended,
}

impl IdentifierSet {
    fn is_start(self, b: u8) -> bool {
        b.is_ascii_alphabetic() || (self == IdentifierSet::Extended && (b == b'_' || b == b'$'))
    }

    fn is_continue(self, b: u8) -> bool {
        self.is_start(b) || b.is_ascii_digit()
    }
}

/// Parse with the default identifier set.
pub fn parse(raw: &str) -> Result<Vec<Pattern>, ConrError> {
    PatternParser::default().parse(raw)
}

/// Remove comments and all whitespace.
pub fn normalize(raw: &str) -> String {
    strip_comments(raw)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PatternParser {
    identifiers: IdentifierSet,
}

impl PatternParser {
    pub fn new(identifiers: IdentifierSet) -> Self {
        Self { identifiers }
    }

    /// Ordered top-level patterns of `raw`; empty for blank input.
    pub fn parse(&self, raw: &str) -> Result<Vec<Pattern>, ConrError> {
        let text = normalize(raw);
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let mut cursor = Cursor {
            bytes: text.as_bytes(),
            pos: 0,
            identifiers: self.identifiers,
        };

        let mut patterns = Vec::new();
        loop {
            patterns.push(cursor.dependency()?);
            if cursor.at_end() {
                break;
            }
            if !cursor.eat(b',') {
                return Err(cursor.expected("`,` between parameters"));
            }
            if cursor.at_end() {
                break;
            }
        }

        log::trace!("parsed {} top-level pattern(s) from `{}`", patterns.len(), text);
        Ok(patterns)
    }
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    identifiers: IdentifierSet,
}

impl Cursor<'_> {
    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn dependency(&mut self) -> Result<Pattern, ConrError> {
        match self.peek() {
            Some(b'{') => self.group(None, 1),
            _ => self.name().map(Pattern::name),
        }
    }

    fn group(&mut self, key: Option<String>, depth: usize) -> Result<Pattern, ConrError> {
        let start = self.pos;
        if depth > MAX_GROUP_DEPTH {
            return Err(ConrError::pattern(
                format!("groups nested deeper than {}", MAX_GROUP_DEPTH),
                start,
            ));
        }
        if !self.eat(b'{') {
            return Err(self.expected("`{`"));
        }

        let mut members = vec![self.property(depth)?];
        loop {
            if self.eat(b'}') {
                return Ok(Pattern::Group(Group { key, members }));
            }
            if !self.eat(b',') {
                return Err(self.expected("`,` or `}`"));
            }
            if self.eat(b'}') {
                return Ok(Pattern::Group(Group { key, members }));
            }
            if self.at_end() {
                self.pos = start;
                return Err(self.expected("closing `}`"));
            }
            members.push(self.property(depth)?);
        }
    }

    fn property(&mut self, depth: usize) -> Result<Pattern, ConrError> {
        let key = self.name()?;
        if !self.eat(b':') {
            return Ok(Pattern::name(key));
        }
        match self.peek() {
            Some(b'{') => self.group(Some(key), depth + 1),
            _ => {
                let alias = self.name()?;
                Ok(Pattern::Name(Name {
                    key,
                    alias: Some(alias),
                }))
            }
        }
    }

    fn name(&mut self) -> Result<String, ConrError> {
        let start = self.pos;
        match self.peek() {
            Some(b) if self.identifiers.is_start(b) => self.pos += 1,
            _ => return Err(self.expected("identifier")),
        }
        while matches!(self.peek(), Some(b) if self.identifiers.is_continue(b)) {
            self.pos += 1;
        }
        if !matches!(self.peek(), None | Some(b',' | b'}' | b':')) {
            return Err(self.expected("`,`, `}` or `:` after identifier"));
        }
        // identifier bytes are ASCII
        Ok(String::from_utf8_lossy(&self.bytes[start..self.pos]).into_owned())
    }

    fn expected(&self, what: &str) -> ConrError {
        let found = match self.bytes.get(self.pos) {
            Some(_) => {
                let rest = String::from_utf8_lossy(&self.bytes[self.pos..]);
                format!("`{}`", rest.chars().next().unwrap_or_default())
            }
            None => "end of input".to_string(),
        };
        ConrError::pattern(format!("expected {}, found {}", what, found), self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(keys: &[&str]) -> Vec<Pattern> {
        keys.iter().map(|k| Pattern::name(*k)).collect()
    }

    #[test]
    fn test_parse_combinations() {
        assert_eq!(parse("foo").unwrap(), names(&["foo"]));
        assert_eq!(
            parse("{foo}").unwrap(),
            vec![Pattern::group(names(&["foo"]))]
        );
        assert_eq!(
            parse("{foo,bar,biz}").unwrap(),
            vec![Pattern::group(names(&["foo", "bar", "biz"]))]
        );
        assert_eq!(
            parse("foo,{bar,biz}").unwrap(),
            vec![Pattern::name("foo"), Pattern::group(names(&["bar", "biz"]))]
        );
        assert_eq!(
            parse("{foo,bar},biz").unwrap(),
            vec![Pattern::group(names(&["foo", "bar"])), Pattern::name("biz")]
        );
        assert_eq!(
            parse("{foo},bar,{biz}").unwrap(),
            vec![
                Pattern::group(names(&["foo"])),
                Pattern::name("bar"),
                Pattern::group(names(&["biz"])),
            ]
        );
    }

    #[test]
    fn test_parse_is_whitespace_and_comma_insensitive() {
        let expected = names(&["foo", "bar"]);
        assert_eq!(parse("foo,bar").unwrap(), expected);
        assert_eq!(parse(" foo , bar , ").unwrap(), expected);
        assert_eq!(parse("\n    foo\n        ,\n            bar\n").unwrap(), expected);
        assert_eq!(
            parse("foo , { bar , biz }").unwrap(),
            parse("foo,{bar,biz}").unwrap()
        );
    }

    #[test]
    fn test_parse_dangling_commas() {
        assert_eq!(
            parse("{foo,}, bar,").unwrap(),
            vec![Pattern::group(names(&["foo"])), Pattern::name("bar")]
        );
    }

    #[test]
    fn test_parse_comments() {
        assert_eq!(
            parse("foo /* first */, // second\n bar").unwrap(),
            names(&["foo", "bar"])
        );
    }

    #[test]
    fn test_parse_digits_after_first_letter() {
        assert_eq!(parse("f00").unwrap(), names(&["f00"]));
        assert!(parse("0foo").is_err());
    }

    #[test]
    fn test_parse_aliases_keep_store_key() {
        assert_eq!(
            parse("{foo: anotherFoo, bar: anotherBar}").unwrap(),
            vec![Pattern::group([
                Pattern::aliased("foo", "anotherFoo"),
                Pattern::aliased("bar", "anotherBar"),
            ])]
        );
    }

    #[test]
    fn test_parse_nested_groups() {
        assert_eq!(
            parse("{foo: {bar, baz: {biz}}}, qux").unwrap(),
            vec![
                Pattern::group([Pattern::nested(
                    "foo",
                    [
                        Pattern::name("bar"),
                        Pattern::nested("baz", [Pattern::name("biz")]),
                    ]
                )]),
                Pattern::name("qux"),
            ]
        );
    }

    #[test]
    fn test_parse_identifier_sets() {
        assert_eq!(parse("foo_bar, $el").unwrap(), names(&["foo_bar", "$el"]));

        let strict = PatternParser::new(IdentifierSet::Strict);
        assert_eq!(strict.parse("foo, bar").unwrap(), names(&["foo", "bar"]));
        assert!(strict.parse("_foo").is_err());
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("  \n\t ").unwrap().is_empty());
        assert!(parse("/* nothing */").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_identifier_tails() {
        assert!(matches!(
            parse("café"),
            Err(ConrError::PatternUnparseable { offset: 3, .. })
        ));
        assert!(parse("foo, {café}").is_err());

        let strict = PatternParser::new(IdentifierSet::Strict);
        match strict.parse("foo_bar") {
            Err(ConrError::PatternUnparseable { offset, message, .. }) => {
                assert_eq!(offset, 3);
                assert!(message.contains("`_`"));
            }
            other => panic!("expected PatternUnparseable, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_unsupported_syntax_anywhere_fails_whole_list() {
        for raw in ["foo = 1, bar", "foo, ...rest", "foo, {bar = 2}", "foo, [a]", "foo;bar"] {
            assert!(parse(raw).is_err(), "{}", raw);
        }
    }

    #[test]
    fn test_parse_depth_limit() {
        let nested = |depth: usize| {
            let mut raw = String::from("{a");
            for _ in 1..depth {
                raw.push_str(":{a");
            }
            raw.push_str(&"}".repeat(depth));
            raw
        };

        assert!(parse(&nested(MAX_GROUP_DEPTH)).is_ok());
        assert!(matches!(
            parse(&nested(MAX_GROUP_DEPTH + 1)),
            Err(ConrError::PatternUnparseable { .. })
        ));
        assert!(parse(&nested(100_000)).is_err());
    }

    #[test]
    fn test_parse_unparseable() {
        for raw in ["...rest", "[a, b]", "{}", "{foo", "{foo:}", ","] {
            match parse(raw) {
                Err(ConrError::PatternUnparseable { code, .. }) => {
                    assert_eq!(code, "CONR_PATTERN_UNPARSEABLE");
                }
                other => panic!("expected PatternUnparseable for {:?}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_parse_error_offset() {
        match parse("{foo;bar}") {
            Err(ConrError::PatternUnparseable { offset, message, .. }) => {
                assert_eq!(offset, 4);
                assert!(message.contains("after identifier"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
