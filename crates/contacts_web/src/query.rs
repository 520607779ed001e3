//! URL query-string helpers shared by loaders and the navigation model.

use percent_encoding::percent_decode_str;
use std::str::Utf8Error;
use url::form_urlencoded;

/// Name of the sidebar search parameter.
pub const SEARCH_PARAM: &str = "q";

/// Extracts the search term from a raw query string.
///
/// Returns the first `q` value verbatim, including `""` for `?q=`.
/// Absent or undecodable values (invalid UTF-8 after percent-decoding)
/// normalize to `None`; this never fails.
pub fn search_param(raw_query: Option<&str>) -> Option<String> {
    let raw_value = first_raw_value(raw_query?, SEARCH_PARAM)?;
    decode_component(raw_value).ok()
}

/// Returns whether `key` is present at all, even with an empty value.
pub fn has_param(raw_query: &str, key: &str) -> bool {
    form_urlencoded::parse(raw_query.as_bytes()).any(|(name, _)| name == key)
}

/// Still-encoded value of the first pair whose decoded name is `key`.
fn first_raw_value<'a>(raw_query: &'a str, key: &str) -> Option<&'a str> {
    raw_query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(name, _)| decode_component(name).is_ok_and(|name| name == key))
        .map(|(_, value)| value)
}

/// `application/x-www-form-urlencoded` decoding that rejects invalid UTF-8.
fn decode_component(raw: &str) -> Result<String, Utf8Error> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
}
