/// Inserts a single space every 3 digits counted from the right, keeping
/// left-to-right reading order. No separator before the first group.
///
/// ```
/// assert_eq!(numsay::core::grouper::group_digits("123456789"), "123 456 789");
/// assert_eq!(numsay::core::grouper::group_digits("1000000"), "1 000 000");
/// ```
pub fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    grouped
}
