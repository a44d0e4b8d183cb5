use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw value handed to a conversion, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    Int(i128),
    Float(f64),
    Text(String),
}

macro_rules! input_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for NumericInput {
                fn from(value: $ty) -> Self {
                    Self::Int(value as i128)
                }
            }
        )*
    };
}

input_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<f32> for NumericInput {
    fn from(value: f32) -> Self {
        Self::Float(value as f64)
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Result of one conversion: the spelled-out sentence plus whether the
/// original input was negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberText {
    text: String,
    negative: bool,
}

impl NumberText {
    pub(crate) fn new(text: String, negative: bool) -> Self {
        Self { text, negative }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }
}

impl fmt::Display for NumberText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
