//! Early escaping of resource paths.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Bytes outside the URL path allowed set. Alphanumerics and
/// `-._~!$&'()*+,=:@/` pass through; non-ASCII is always encoded.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b';')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode `path` and lowercase the hex digits of every escape.
pub fn escape_path(path: &str) -> String {
    let encoded = utf8_percent_encode(path, PATH).to_string();
    lowercase_escapes(&encoded)
}

/// Lowercase the two characters following each `%`.
fn lowercase_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending = 0;

    for c in text.chars() {
        if pending > 0 {
            out.push(c.to_ascii_lowercase());
            pending -= 1;
        } else {
            if c == '%' {
                pending = 2;
            }
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_path_untouched() {
        let path = "/images/cat-1_a.b~c/!$&'()*+,=:@";
        assert_eq!(escape_path(path), path);
    }

    #[test]
    fn test_reserved_characters_encoded() {
        assert_eq!(escape_path("/a b"), "/a%20b");
        assert_eq!(escape_path("/q?x=1#frag"), "/q%3fx=1%23frag");
        assert_eq!(escape_path("stupid:example^path"), "stupid:example%5epath");
        assert_eq!(escape_path("100%"), "100%25");
    }

    #[test]
    fn test_semicolon_encoded() {
        assert_eq!(escape_path("/a;b"), "/a%3bb");
        assert_eq!(escape_path("/v;jsessionid=1"), "/v%3bjsessionid=1");
    }

    #[test]
    fn test_non_ascii_lowercased() {
        assert_eq!(escape_path("/caf\u{e9}"), "/caf%c3%a9");
    }

    #[test]
    fn test_no_uppercase_escapes() {
        let escaped = escape_path("/{[|]}\\^`<>\"");
        let bytes = escaped.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            if *b == b'%' {
                assert!(!bytes[i + 1].is_ascii_uppercase());
                assert!(!bytes[i + 2].is_ascii_uppercase());
            }
        }
        assert_eq!(escaped, "/%7b%5b%7c%5d%7d%5c%5e%60%3c%3e%22");
    }
}
