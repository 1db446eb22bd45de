use crate::WordCount;

/// Counts maximal runs of ASCII letters and digits, folded to lowercase.
///
/// Every other byte is a separator, including each byte of a multi-byte
/// UTF-8 character. Total over all inputs; `""` yields an empty count.
pub fn count_string(text: &str) -> WordCount {
    let mut counts = WordCount::new();
    let mut word = String::new();
    for byte in text.bytes() {
        if byte.is_ascii_alphanumeric() {
            word.push(char::from(byte.to_ascii_lowercase()));
        } else if !word.is_empty() {
            counts.record(&word);
            word.clear();
        }
    }
    if !word.is_empty() {
        counts.record(&word);
    }
    counts
}
