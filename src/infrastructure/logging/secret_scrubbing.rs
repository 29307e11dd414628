//! Best-effort removal of credentials from line-oriented text.
//!
//! Input is treated as YAML or INI flavoured `key: value` / `key=value`
//! records, one per line. Values of secret-like keys are masked, keeping
//! the last character to aid troubleshooting. Secrets on lines that do not
//! look like key/value pairs, or values spanning several lines, are not
//! detected.

/// Substrings that mark a key as secret-like anywhere in the raw key
const SECRET_FRAGMENTS: [&str; 3] = ["pass", "secret", "_key"];

/// Keys that are secret-like only as an exact (trimmed) match
const SECRET_KEYS: [&str; 2] = ["key", "token"];

/// Replacement written in front of the retained last character
const MASK: &str = "****";

/// Strip secret values from YAML or INI formatted text.
///
/// Every line of the output ends with `\n`, including the last one, so the
/// presence or absence of a trailing newline in the input is not preserved.
///
/// # Examples
///
/// ```
/// use logshim::infrastructure::logging::strip_secrets;
///
/// let text = "host: example.com\napi_secret: abcdef123";
/// assert_eq!(strip_secrets(text), "host: example.com\napi_secret:****3\n");
/// ```
pub fn strip_secrets(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    for line in text.split('\n') {
        let (key, sep, value) = split_line(line);
        out.push_str(key);
        out.push_str(sep);
        if is_secret_key(key) {
            if let Some(last) = value.chars().next_back() {
                out.push_str(MASK);
                out.push(last);
            }
        } else {
            out.push_str(value);
        }
        out.push('\n');
    }
    out
}

/// Whether `key` names a credential.
///
/// Substring checks run against the key exactly as written; the exact
/// matches ignore surrounding whitespace. Matching is case-sensitive.
pub fn is_secret_key(key: &str) -> bool {
    SECRET_FRAGMENTS.iter().any(|fragment| key.contains(fragment))
        || SECRET_KEYS.contains(&key.trim())
}

/// Split a line into `(key, separator, value)`.
///
/// `:` wins over `=`. Only the text between the first and second separator
/// is kept as the value; anything after a second separator is dropped.
/// Lines without a separator are all value.
fn split_line(line: &str) -> (&str, &str, &str) {
    let sep = if line.contains(':') {
        ":"
    } else if line.contains('=') {
        "="
    } else {
        return ("", "", line);
    };

    let mut parts = line.split(sep);
    let key = parts.next().unwrap_or_default();
    let value = parts.next().unwrap_or_default();
    (key, sep, value)
}
