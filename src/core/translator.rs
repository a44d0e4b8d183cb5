use crate::domain::lexicon;
use std::collections::HashMap;

/// Translates 3-digit groups into words, independently of magnitude.
///
/// Each literal group substring is memoized for the lifetime of one
/// conversion: realistic inputs often repeat groups (123 123 123), so
/// identical substrings are only translated once.
pub struct GroupTranslator {
    cache: HashMap<String, String>,
}

impl GroupTranslator {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// One phrase per group of a space-grouped digit string. Phrases for
    /// all-zero groups are empty.
    pub fn translate_groups(&mut self, grouped: &str) -> Vec<String> {
        grouped
            .split(' ')
            .map(|group| self.translate(group))
            .collect()
    }

    fn translate(&mut self, group: &str) -> String {
        if let Some(phrase) = self.cache.get(group) {
            tracing::trace!("cache hit for group '{group}'");
            return phrase.clone();
        }

        let phrase = format_digits(group);
        self.cache.insert(group.to_string(), phrase.clone());
        phrase
    }
}

impl Default for GroupTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// True when every character of the group is '0'.
pub fn all_zeros(group: &str) -> bool {
    group.bytes().all(|byte| byte == b'0')
}

fn digit(byte: u8) -> usize {
    (byte - b'0') as usize
}

/// Words for one group of up to 3 digits, as it literally appears
/// (leading zeros included). All-zero groups translate to the empty
/// phrase; they contribute nothing to the sentence, not even a suffix.
fn format_digits(group: &str) -> String {
    if all_zeros(group) {
        return String::new();
    }

    let digits = group.trim_start_matches('0');
    let bytes = digits.as_bytes();

    match bytes.len() {
        3 => {
            let hundreds = lexicon::SINGLES[digit(bytes[0])];
            let tail = format_decimals(&digits[1..]);
            if tail.is_empty() {
                format!("{} {}", hundreds, lexicon::HUNDRED)
            } else {
                format!("{} {} and {}", hundreds, lexicon::HUNDRED, tail)
            }
        }
        2 => format_decimals(digits),
        1 => lexicon::SINGLES[digit(bytes[0])].to_string(),
        _ => String::new(),
    }
}

/// Words for a trailing 1-2 digit remainder: teens first, then exact
/// multiples of ten, then tens word plus ones word, then a bare ones word.
fn format_decimals(tail: &str) -> String {
    let bytes = tail.as_bytes();
    let (tens, ones) = match bytes.len() {
        2 => (digit(bytes[0]), digit(bytes[1])),
        _ => (0, digit(bytes[0])),
    };

    if let Some(teen) = lexicon::teen(tens * 10 + ones) {
        return teen.to_string();
    }
    if tens > 0 && ones == 0 {
        return lexicon::TENS[tens].to_string();
    }
    if tens > 0 {
        return format!("{} {}", lexicon::TENS[tens], lexicon::SINGLES[ones]);
    }
    lexicon::SINGLES[ones].to_string()
}
