//! # UTF-8 Character Runs
//!
//! Character features operate on code-point aligned byte runs; a run is
//! never split inside a multi-byte sequence.

/// The length of the UTF-8 sequence introduced by `lead`.
///
/// Inspects the high bits of the lead byte; accepts the historical
/// 5- and 6-byte forms.
///
/// ## Returns
/// `1..=6`; or `0` if `lead` is a continuation byte or otherwise invalid.
pub fn utf8_len(lead: u8) -> usize {
    if lead < 0x80 {
        1
    } else if (lead >> 5) == 0x06 {
        2
    } else if (lead >> 4) == 0x0e {
        3
    } else if (lead >> 3) == 0x1e {
        4
    } else if (lead >> 2) == 0x3e {
        5
    } else if (lead >> 1) == 0x7e {
        6
    } else {
        0
    }
}

/// Iterator over the code-point runs of a string.
///
/// See [`utf8_runs`].
#[derive(Debug, Clone)]
pub struct Utf8Runs<'a> {
    text: &'a str,
}

impl<'a> Iterator for Utf8Runs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let lead = *self.text.as_bytes().first()?;

        let len = match utf8_len(lead) {
            n if n > 0 && self.text.is_char_boundary(n) => n,
            // Unreachable for a well-formed `str`; step one char rather than stall.
            _ => self.text.chars().next().map_or(1, char::len_utf8),
        };

        let (run, rest) = self.text.split_at(len);
        self.text = rest;
        Some(run)
    }
}

/// Split `text` into code-point aligned byte runs, one per character.
///
/// The run length is taken from each lead byte via [`utf8_len`].
pub fn utf8_runs(text: &str) -> Utf8Runs<'_> {
    Utf8Runs { text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_len() {
        assert_eq!(utf8_len(b'a'), 1);
        assert_eq!(utf8_len(0x00), 1);
        assert_eq!(utf8_len(0xC3), 2);
        assert_eq!(utf8_len(0xE4), 3);
        assert_eq!(utf8_len(0xF0), 4);
        assert_eq!(utf8_len(0xF8), 5);
        assert_eq!(utf8_len(0xFC), 6);

        // continuation bytes, and 0xFE / 0xFF.
        assert_eq!(utf8_len(0x80), 0);
        assert_eq!(utf8_len(0xBF), 0);
        assert_eq!(utf8_len(0xFE), 0);
        assert_eq!(utf8_len(0xFF), 0);
    }

    #[test]
    fn test_three_byte_code_point_is_one_run() {
        let word = "\u{4f60}";
        assert_eq!(word.len(), 3);
        assert_eq!(utf8_len(word.as_bytes()[0]), 3);
        assert_eq!(utf8_runs(word).collect::<Vec<_>>(), vec!["\u{4f60}"]);
    }

    #[test]
    fn test_mixed_runs() {
        let runs: Vec<&str> = utf8_runs("ca\u{f1}\u{4f60}\u{1f600}!").collect();
        assert_eq!(runs, vec!["c", "a", "\u{f1}", "\u{4f60}", "\u{1f600}", "!"]);
        assert_eq!(
            runs.iter().map(|r| r.len()).collect::<Vec<_>>(),
            vec![1, 1, 2, 3, 4, 1]
        );

        assert_eq!(utf8_runs("").count(), 0);
    }

    proptest::proptest! {
        #[test]
        fn runs_match_chars(text in "\\PC{0,64}") {
            let runs: Vec<&str> = utf8_runs(&text).collect();
            let chars: Vec<String> = text.chars().map(|c| c.to_string()).collect();

            proptest::prop_assert_eq!(runs.len(), chars.len());
            for (run, ch) in runs.iter().zip(chars.iter()) {
                proptest::prop_assert_eq!(*run, ch.as_str());
                proptest::prop_assert_eq!(utf8_len(run.as_bytes()[0]), run.len());
            }
        }
    }
}
