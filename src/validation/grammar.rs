use once_cell::sync::Lazy;
use regex::Regex as TextRegex;
use regex::bytes::Regex;

/// Characters RFC 3696 permits unquoted in a local part, besides alphanumerics.
const LOCAL_SPECIALS: &str = r"!#$%\&'*\-/=?+^_`{|}\~";

/// Whole-string matcher: the entire input must be one address.
///
/// Compiled case-insensitive and without Unicode awareness, so it runs over raw
/// bytes and an escaped 8-bit byte inside a quoted local part is matched as-is.
pub static PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i-u)\A{}\z", address()))
        .expect("built-in address grammar must compile")
});

/// Unanchored matcher for pulling addresses out of free text.
pub static SCANNER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i-u){}", address())).expect("built-in address grammar must compile")
});

/// Separator between addresses in a multi-address value.
pub static SEPARATOR: Lazy<TextRegex> = Lazy::new(|| {
    TextRegex::new(r"(?-u)[;,\s]\s*").expect("built-in separator must compile")
});

/// Dot- or plus-separated atoms; no leading, trailing or doubled separator.
fn local_unquoted() -> String {
    format!(r"(?:[[:alnum:]{LOCAL_SPECIALS}]+[.+])*[[:alnum:]{LOCAL_SPECIALS}]+")
}

/// Double-quoted form. A backslash escapes any single byte.
fn local_quoted() -> String {
    format!(r#""(?:[[:alnum:]{LOCAL_SPECIALS}.]|\\[\x00-\xFF])*""#)
}

fn domain() -> &'static str {
    r"(?:(?:\w+-+[^_])|(?:\w+\.[a-z0-9-]*))*[a-z0-9-]{1,63}\.[a-z]{2,6}(?:\.[a-z]{2,6})?"
}

fn address() -> String {
    format!("(?:{}|{})+@{}", local_unquoted(), local_quoted(), domain())
}

/// Returns every address embedded in `text`, in order of appearance.
pub fn extract(text: &str) -> Vec<String> {
    SCANNER
        .find_iter(text.as_bytes())
        .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
        .collect()
}

/// Splits a multi-address value on [`SEPARATOR`].
///
/// Trailing empty tokens are dropped; leading and inner ones are kept so that
/// a stray separator at the front still counts as a (bad) address.
pub fn split_addresses(text: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = SEPARATOR.split(text).collect();
    while tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }
    tokens
}
