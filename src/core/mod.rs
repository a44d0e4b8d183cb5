pub mod converter;
pub mod formatter;
pub mod grouper;
pub mod translator;

pub use crate::domain::model::{NumberText, NumericInput};
pub use crate::utils::error::Result;
pub use self::converter::Converter;
