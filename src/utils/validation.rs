use crate::domain::lexicon::{MAX_SUPPORTED_NUMBER, MAX_SUPPORTED_NUMBER_LENGTH};
use crate::domain::model::NumericInput;
use crate::utils::error::{ConvertError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

static SIGNED_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("literal pattern"));

/// Checks the raw input and normalizes it to a trimmed digit string with at
/// most one leading minus. Leading zeros are kept here; they fall away
/// later during formatting.
pub fn validate_number(input: &NumericInput) -> Result<String> {
    match input {
        NumericInput::Float(_) => Err(ConvertError::FloatingPointNotSupported),
        NumericInput::Int(value) => {
            if value.unsigned_abs() > MAX_SUPPORTED_NUMBER {
                return Err(ConvertError::NumberTooLarge {
                    max_digits: MAX_SUPPORTED_NUMBER_LENGTH,
                });
            }
            Ok(value.to_string())
        }
        NumericInput::Text(raw) => {
            let trimmed = raw.trim();
            if !SIGNED_DIGITS.is_match(trimmed) {
                return Err(ConvertError::NotDigitsOnly { value: raw.clone() });
            }
            let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
            if digits.len() > MAX_SUPPORTED_NUMBER_LENGTH {
                return Err(ConvertError::NumberTooLarge {
                    max_digits: MAX_SUPPORTED_NUMBER_LENGTH,
                });
            }
            Ok(trimmed.to_string())
        }
    }
}
