pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::converter::Converter;
pub use domain::model::{NumberText, NumericInput};
pub use utils::error::{ConvertError, Result};

/// Converts an integer or digit string into its English written-out form.
///
/// ```
/// let words = numsay::convert(9876543210i64).unwrap();
/// assert_eq!(
///     words.as_str(),
///     "nine billions, eight hundred and seventy six millions, \
///      five hundred and forty three thousand, two hundred and ten"
/// );
/// ```
pub fn convert(input: impl Into<NumericInput>) -> Result<NumberText> {
    Converter::new().convert(&input.into())
}
