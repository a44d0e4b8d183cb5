use crate::core::formatter::final_format;
use crate::core::grouper::group_digits;
use crate::core::translator::{all_zeros, GroupTranslator};
use crate::domain::lexicon;
use crate::domain::model::{NumberText, NumericInput};
use crate::utils::error::Result;
use crate::utils::validation::validate_number;

/// Drives one conversion end to end: validate, group, translate, format.
///
/// A converter owns the translation cache for exactly one conversion, so
/// separate conversions share no state and may run on any thread.
pub struct Converter {
    translator: GroupTranslator,
}

impl Converter {
    pub fn new() -> Self {
        Self {
            translator: GroupTranslator::new(),
        }
    }

    pub fn convert(mut self, input: &NumericInput) -> Result<NumberText> {
        let validated = validate_number(input)?;
        Ok(self.read_number(&validated))
    }

    fn read_number(&mut self, validated: &str) -> NumberText {
        let digits = validated.strip_prefix('-').unwrap_or(validated);

        // zero short-circuits everything, sign and padding included
        if all_zeros(digits) {
            return NumberText::new(lexicon::ZERO.to_string(), false);
        }

        let negative = validated.starts_with('-');
        let grouped = group_digits(digits);
        tracing::debug!("grouped digits: {grouped}");

        let phrases = self.translator.translate_groups(&grouped);
        let groups: Vec<&str> = grouped.split(' ').collect();
        let text = final_format(phrases, &groups, negative);

        NumberText::new(text, negative)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
