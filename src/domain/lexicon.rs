//! Static word tables and limits shared by the conversion stages.

pub const MINUS: &str = "minus";
pub const HUNDRED: &str = "hundred";
pub const ZERO: &str = "zero";

pub const MAX_SUPPORTED_NUMBER: u128 = 999_999_999_999_999_999_999_999_999;
pub const MAX_SUPPORTED_NUMBER_LENGTH: usize = 27;

/// Words for single digits. Index 0 is empty: a zero digit contributes
/// nothing inside a non-zero group and is never emitted on its own.
pub const SINGLES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Dedicated words for 11..=19, indexed by `value - 11`.
pub const TEENS: [&str; 9] = [
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Words for exact multiples of ten, indexed by the tens digit.
pub const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Magnitude suffixes for grades 2..=9. Each carries its leading space so
/// it can be appended to a group phrase directly.
pub const LARGE: [&str; 8] = [
    " thousand",
    " million",
    " billion",
    " trillion",
    " quadrillion",
    " quintillion",
    " sextillion",
    " septillion",
];

/// Singular suffix for a grade, if one exists. Grade 1 has no suffix.
pub fn large_suffix(grade: usize) -> Option<&'static str> {
    LARGE.get(grade.checked_sub(2)?).copied()
}

/// Teen word for a two-digit value, if it has one.
pub fn teen(value: usize) -> Option<&'static str> {
    TEENS.get(value.checked_sub(11)?).copied()
}

/// True when the phrase is exactly one basic digit word (a ones word or a
/// teen word) with no hundred part and no magnitude suffix.
pub fn is_basic_word(phrase: &str) -> bool {
    !phrase.is_empty() && (SINGLES.contains(&phrase) || TEENS.contains(&phrase))
}
