//! Emoji extraction
//!
//! Tweets carry emojis in two encodings: escaped `\UXXXXXXXX` code-point
//! sequences (backslash text that survived the upstream feed) and literal
//! Unicode symbols. Both are extracted to the decimal string of the code
//! point, escaped sequences first.

use regex::Regex;

use crate::{Error, Result};

/// Inclusive code-point ranges classified as emoji.
const EMOJI_RANGES: [(u32, u32); 4] = [
    (127744, 129750),
    (126980, 127569),
    (169, 174),
    (8205, 12953),
];

/// Result of scanning one tweet's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Decimal code-point strings, escaped-pass results first
    pub emojis: Vec<String>,
    /// Input text with every escaped sequence removed
    pub residual: String,
}

/// Two-pass emoji scanner with a pre-compiled escape pattern.
pub struct EmojiExtractor {
    escaped: Regex,
}

impl EmojiExtractor {
    /// Compile the escape pattern.
    ///
    /// Failure here is a configuration error, not a per-tweet condition.
    pub fn new() -> Result<Self> {
        // Word characters, not hex digits: lexical matches can still fail
        // the numeric decode below.
        let escaped = Regex::new(r"\\U[0-9A-Za-z_]{8}")
            .map_err(|e| Error::Extraction(format!("compile escape pattern: {e}")))?;
        Ok(Self { escaped })
    }

    /// Extract every emoji in `text`, escaped sequences first.
    ///
    /// A sequence that matches the escape pattern but does not decode as a
    /// 32-bit hex value aborts the whole extraction; no partial list is
    /// returned. Output is deterministic for identical input.
    pub fn extract(&self, text: &str) -> Result<Extraction> {
        let mut emojis = Vec::new();
        for m in self.escaped.find_iter(text) {
            emojis.push(decode_escape(m.as_str())?);
        }

        let residual = self.escaped.replace_all(text, "").into_owned();
        for c in residual.chars() {
            if is_emoji(c) {
                emojis.push((c as u32).to_string());
            }
        }

        Ok(Extraction { emojis, residual })
    }
}

/// Example: `\U0001f9c3` -> `129475`
fn decode_escape(seq: &str) -> Result<String> {
    let hex = seq.strip_prefix(r"\U").unwrap_or(seq);
    let dec = i32::from_str_radix(hex, 16)
        .map_err(|e| Error::Extraction(format!("escape {seq:?}: {e}")))?;
    Ok(dec.to_string())
}

/// Whether a code point falls in one of the emoji ranges.
fn is_emoji(c: char) -> bool {
    let code = c as u32;
    EMOJI_RANGES
        .iter()
        .any(|&(min, max)| code >= min && code <= max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> EmojiExtractor {
        EmojiExtractor::new().unwrap()
    }

    #[test]
    fn test_plain_text_yields_nothing() {
        let out = extractor().extract("just words, no symbols").unwrap();
        assert!(out.emojis.is_empty());
        assert_eq!(out.residual, "just words, no symbols");
    }

    #[test]
    fn test_escaped_sequence_decodes_to_decimal() {
        let out = extractor().extract(r"cheese \U0001f9c3 wedge").unwrap();
        assert_eq!(out.emojis, vec!["129475"]);
        assert_eq!(out.residual, "cheese  wedge");
    }

    #[test]
    fn test_escape_removal_leaves_surrounding_text() {
        let out = extractor().extract(r"a\U0001F600b").unwrap();
        assert_eq!(out.emojis, vec!["128512"]);
        assert_eq!(out.residual, "ab");
    }

    #[test]
    fn test_literal_emoji_decodes_to_decimal() {
        let out = extractor().extract("hello 😀").unwrap();
        assert_eq!(out.emojis, vec!["128512"]);
    }

    #[test]
    fn test_both_encodings_share_one_representation() {
        let out = extractor().extract("hi \\U0001F600 team 😀").unwrap();
        assert_eq!(out.emojis, vec!["128512", "128512"]);
        assert_eq!(out.residual, "hi  team 😀");
    }

    #[test]
    fn test_escaped_pass_comes_first() {
        // The literal symbol appears before the escape in the text but the
        // escaped pass is emitted first.
        let out = extractor().extract("😀 then \\U0001F44D").unwrap();
        assert_eq!(out.emojis, vec!["128077", "128512"]);
    }

    #[test]
    fn test_range_boundaries() {
        assert!(is_emoji('\u{1F300}')); // 127744
        assert!(is_emoji('\u{1FAD6}')); // 129750
        assert!(!is_emoji('\u{1FAD7}')); // 129751

        assert!(is_emoji('\u{1F004}')); // 126980
        assert!(is_emoji('\u{1F251}')); // 127569

        assert!(is_emoji('©')); // 169
        assert!(is_emoji('®')); // 174
        assert!(!is_emoji('¨')); // 168
        assert!(!is_emoji('¯')); // 175

        assert!(is_emoji('\u{200D}')); // 8205, zero-width joiner
        assert!(is_emoji('\u{3299}')); // 12953
        assert!(!is_emoji('\u{329A}')); // 12954
        assert!(!is_emoji('a'));
    }

    #[test]
    fn test_malformed_escape_aborts_extraction() {
        let err = extractor().extract(r"bad \Uzzzzzzzz here 😀").unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }

    #[test]
    fn test_escape_overflowing_i32_aborts_extraction() {
        assert!(extractor().extract(r"\UFFFFFFFF").is_err());
    }

    #[test]
    fn test_short_escape_is_not_matched() {
        // Seven trailing characters do not form an escape sequence.
        let out = extractor().extract(r"\U0001F60").unwrap();
        assert!(out.emojis.is_empty());
        assert_eq!(out.residual, r"\U0001F60");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "mix \\U0001f9c3 of ® and 😀";
        let first = extractor().extract(text).unwrap();
        let second = extractor().extract(text).unwrap();
        assert_eq!(first, second);
    }
}
