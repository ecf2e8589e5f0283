// src/processing/counter.rs

/// Counts whitespace-delimited words in raw file content.
///
/// The bytes are viewed as UTF-8 lossily, so invalid sequences become a
/// replacement character and still count toward the word they sit in.
///
/// # Examples
///
/// ```
/// use llmstxt::processing::count_words;
///
/// assert_eq!(count_words(b"Hello, world!\nThis is a test."), 6);
/// assert_eq!(count_words(b"   \n\t "), 0);
/// ```
#[inline]
pub fn count_words(content: &[u8]) -> usize {
    String::from_utf8_lossy(content).split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_basic() {
        assert_eq!(count_words(b"One two three.\nFour five.\n"), 5);
    }

    #[test]
    fn test_words_empty() {
        assert_eq!(count_words(b""), 0);
    }

    #[test]
    fn test_words_multiple_spaces() {
        assert_eq!(count_words(b"One   two \t three"), 3);
    }

    #[test]
    fn test_words_invalid_utf8() {
        assert_eq!(count_words(&[b'a', 0xFF, b'b', b' ', b'c']), 2);
    }
}
