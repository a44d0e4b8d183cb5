use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "numsay")]
#[command(about = "Spells out an integer in English words")]
pub struct CliConfig {
    /// The number to spell out: digits with an optional leading minus
    pub number: String,

    #[arg(long, help = "Emit the result as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.number.trim().is_empty() {
            return Err(ConvertError::NotDigitsOnly {
                value: self.number.clone(),
            });
        }
        Ok(())
    }
}
