use crate::errors::ConrError;
use crate::signature::scanner::{matching_paren, skip_trivia};
use once_cell::sync::Lazy;
use regex::Regex;

static EXPLICIT_FN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:async\s+)?function\b").expect("valid regex"));
static FN_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*").expect("valid regex"));
static ASYNC_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^async\b").expect("valid regex"));
static BARE_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z_$][A-Za-z0-9_$]*)\s*=>").expect("valid regex"));

/// Declaration shape a callable's source text was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureForm {
    /// `function name(...) {` with an optional `async` qualifier.
    Explicit,
    /// `(...) =>` or `param =>` with an optional `async` qualifier.
    Abbreviated,
}

/// Raw parameter text of `source`, borrowed from it.
///
/// Whitespace, newlines and comments inside the parameter list are kept; the parser
/// normalises them. A zero-parameter declaration yields an empty string.
pub fn extract(source: &str) -> Result<&str, ConrError> {
    extract_with_form(source).map(|(_, raw)| raw)
}

/// Like [`extract`], also reporting which declaration shape matched.
pub fn extract_with_form(source: &str) -> Result<(SignatureForm, &str), ConrError> {
    let start = skip_trivia(source, 0);
    let text = &source[start..];

    if let Some(m) = EXPLICIT_FN.find(text) {
        let open = explicit_open(text, m.end())
            .ok_or_else(|| unrecognized("function declaration without parameter list", text))?;
        let close = matching_paren(text, open)
            .ok_or_else(|| unrecognized("unbalanced parameter list", text))?;
        return Ok((SignatureForm::Explicit, &text[open + 1..close]));
    }

    extract_abbreviated(text).map(|raw| (SignatureForm::Abbreviated, raw))
}

/// Offset of the `(` opening the parameter list after the `function` keyword ending at `from`.
///
/// Only an optional `*` and an optional name may sit in between, each separated by comments or
/// whitespace; a `(` inside a comment never counts.
fn explicit_open(text: &str, from: usize) -> Option<usize> {
    let mut at = skip_trivia(text, from);
    if text[at..].starts_with('*') {
        at = skip_trivia(text, at + 1);
    }
    if let Some(name) = FN_NAME.find(&text[at..]) {
        at = skip_trivia(text, at + name.end());
    }
    text[at..].starts_with('(').then_some(at)
}

fn extract_abbreviated(text: &str) -> Result<&str, ConrError> {
    // `async => ...` binds a parameter named `async`.
    if let Some(caps) = BARE_PARAM.captures(text) {
        if let Some(name) = caps.get(1) {
            return Ok(name.as_str());
        }
    }

    let rest = match ASYNC_PREFIX.find(text) {
        Some(m) => skip_trivia(text, m.end()),
        None => 0,
    };

    if text[rest..].starts_with('(') {
        let close = matching_paren(text, rest)
            .ok_or_else(|| unrecognized("unbalanced parameter list", text))?;
        let marker = skip_trivia(text, close + 1);
        if text[marker..].starts_with("=>") {
            return Ok(&text[rest + 1..close]);
        }
        return Err(unrecognized("parameter list not followed by `=>`", text));
    }

    BARE_PARAM
        .captures(&text[rest..])
        .and_then(|caps| caps.get(1))
        .map(|name| &text[rest + name.start()..rest + name.end()])
        .ok_or_else(|| unrecognized("neither a function declaration nor an arrow form", text))
}

fn unrecognized(reason: &str, text: &str) -> ConrError {
    let head: String = text.chars().take(40).collect();
    ConrError::signature(format!("{}: `{}`", reason, head))
}
