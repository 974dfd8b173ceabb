//! Request parameter parsing for route handlers.
//!
//! Queries and HTMX POST bodies arrive URL-encoded. Decoding buffers
//! raw bytes and runs them through UTF-8 at the end, since values here
//! carry accented French copy that a byte-to-char widening would mangle.

/// Parsed key-value parameters from a query string or form body.
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Parse a query string, with or without its leading `?`.
    pub fn from_query(query: &str) -> Self {
        Self::from_form(query.strip_prefix('?').unwrap_or(query))
    }

    /// Parse a `key=value&key2=value2` form body (HTMX POST).
    pub fn from_form(body: &str) -> Self {
        if body.is_empty() {
            return Params(Vec::new());
        }
        let pairs = body
            .split('&')
            .filter_map(|pair| {
                let mut parts = pair.splitn(2, '=');
                let key = parts.next()?;
                let val = parts.next().unwrap_or("");
                Some((percent_decode(key), percent_decode(val)))
            })
            .collect();
        Params(pairs)
    }

    /// First value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value for a key, parsed as a literal `true`/`false`.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

/// Percent-decode a URL-encoded value. Malformed escapes pass through
/// untouched; invalid UTF-8 degrades lossily instead of failing.
pub fn percent_decode(input: &str) -> String {
    let mut bytes = Vec::with_capacity(input.len());
    let mut iter = input.bytes();
    while let Some(b) = iter.next() {
        match b {
            b'%' => match (iter.next(), iter.next()) {
                (Some(hi), Some(lo)) => {
                    let decoded = core::str::from_utf8(&[hi, lo])
                        .ok()
                        .and_then(|s| u8::from_str_radix(s, 16).ok());
                    match decoded {
                        Some(v) => bytes.push(v),
                        None => bytes.extend_from_slice(&[b'%', hi, lo]),
                    }
                }
                (Some(hi), None) => bytes.extend_from_slice(&[b'%', hi]),
                _ => bytes.push(b'%'),
            },
            b'+' => bytes.push(b' '),
            _ => bytes.push(b),
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}
