use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Floating point numbers are not supported")]
    FloatingPointNotSupported,

    #[error("'{value}' is not a valid number. It should contain digits only.")]
    NotDigitsOnly { value: String },

    #[error("Number is too large. The maximum number length is {max_digits} digits")]
    NumberTooLarge { max_digits: usize },
}

impl ConvertError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::FloatingPointNotSupported => {
                "Round or truncate the value to a whole number first"
            }
            Self::NotDigitsOnly { .. } => {
                "Remove everything except digits and an optional leading minus"
            }
            Self::NumberTooLarge { .. } => "Stay within 27 digits",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
