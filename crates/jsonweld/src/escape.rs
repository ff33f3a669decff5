//! Escaping of raw text into the body of a JSON string literal.

use alloc::string::String;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Escapes `src` so that wrapping the result in double quotes yields a valid
/// JSON string literal decoding back to `src`.
///
/// Characters with a dedicated two-character escape (`\b`, `\f`, `\n`, `\r`,
/// `\t`, `\"`, `\\`) use it; every other Unicode control character (category
/// `Cc`, not only ASCII C0) becomes a `\uXXXX` escape with exactly four
/// lowercase hex digits; everything else passes through unchanged.
///
/// ```rust
/// # use jsonweld::escape;
/// assert_eq!(escape("say \"hi\"\n"), r#"say \"hi\"\n"#);
/// assert_eq!(escape("\u{0}\u{7f}"), "\\u0000\\u007f");
/// ```
#[must_use]
pub fn escape(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    escape_onto(src, &mut out);
    out
}

/// Appends the escaped form of `src` to `out`.
pub(crate) fn escape_onto(src: &str, out: &mut String) {
    for c in src.chars() {
        match c {
            '\u{0008}' => out.push_str("\\b"),
            '\u{000c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if c.is_control() => push_unicode_escape(out, c as u32),
            c => out.push(c),
        }
    }
}

/// Appends `\u` followed by the full four-digit hex form of `code`, never a
/// leading-zero-compressed one.
fn push_unicode_escape(out: &mut String, code: u32) {
    out.push_str("\\u");
    for shift in [12u32, 8, 4, 0] {
        out.push(char::from(HEX_DIGITS[((code >> shift) & 0xf) as usize]));
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::escape;

    #[test]
    fn empty_input_produces_empty_output() {
        assert_eq!(escape(""), "");
    }

    #[test]
    fn named_escapes_take_priority_over_numeric_ones() {
        assert_eq!(escape("\u{8}\u{c}\n\r\t"), "\\b\\f\\n\\r\\t");
    }

    #[test]
    fn quote_and_backslash_are_escaped() {
        assert_eq!(escape("\"\\"), "\\\"\\\\");
    }

    #[test]
    fn c0_and_c1_controls_get_numeric_escapes() {
        assert_eq!(escape("\u{0}"), "\\u0000");
        assert_eq!(escape("\u{1f}"), "\\u001f");
        assert_eq!(escape("\u{7f}"), "\\u007f");
        assert_eq!(escape("\u{9b}"), "\\u009b");
    }

    #[test]
    fn line_and_paragraph_separators_pass_through() {
        // U+2028/U+2029 are format-effecting but not control characters, so
        // they stay literal; JSON permits them inside string literals.
        assert_eq!(escape("\u{2028}\u{2029}"), "\u{2028}\u{2029}");
    }

    #[test]
    fn non_ascii_text_passes_through_unchanged() {
        let src = "héllo ✨ 日本語";
        assert_eq!(escape(src), src);
    }

    #[test]
    fn mixed_text_is_escaped_in_place() {
        let src = String::from("a\tb\"c\u{1}d");
        assert_eq!(escape(&src), "a\\tb\\\"c\\u0001d");
    }
}
