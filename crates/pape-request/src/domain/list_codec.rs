//! Space-delimited list encoding
//!
//! Tokens are joined with a single ASCII space. No escaping is performed:
//! callers only pass URIs and aliases, which never contain whitespace.
//! Decoding drops empty tokens, so runs of spaces collapse.

const SEPARATOR: char = ' ';

/// Join `items` with a single space. An empty sequence encodes as `""`.
pub fn encode<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(item.as_ref());
    }
    out
}

/// Split on ASCII space, discarding empty tokens and preserving order.
pub fn decode(text: &str) -> Vec<String> {
    decode_borrowed(text).map(str::to_owned).collect()
}

/// Borrowing form of [`decode`].
pub fn decode_borrowed(text: &str) -> impl Iterator<Item = &str> {
    text.split(SEPARATOR).filter(|token| !token.is_empty())
}
