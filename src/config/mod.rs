pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::collector::{DEFAULT_CARD_COUNT, DEFAULT_USER_ID};
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::{CardGenError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_PATH: &str = "./public";
pub const DEFAULT_OUTPUT_FILE: &str = "cards.json";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "bingo-cardgen")]
#[command(about = "Generate a file of unique randomized Bingo cards")]
pub struct CliConfig {
    #[arg(long, default_value_t = DEFAULT_CARD_COUNT, help = "Number of unique cards to generate")]
    pub count: usize,

    #[arg(long, default_value = DEFAULT_USER_ID, help = "Owner id stamped on every card")]
    pub user_id: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    #[arg(long, help = "Seed for reproducible output (system entropy when omitted)")]
    pub seed: Option<u64>,

    #[arg(long, help = "Give up after this many card builds instead of retrying forever")]
    pub max_attempts: Option<u64>,

    #[arg(long, help = "Write compact JSON instead of indented output")]
    pub compact: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn card_count(&self) -> usize {
        self.count
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn pretty(&self) -> bool {
        !self.compact
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn max_attempts(&self) -> Option<u64> {
        self.max_attempts
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_number("count", self.count, 1)?;
        validation::validate_non_empty_string("user_id", &self.user_id)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_file_name("output_file", &self.output_file)?;
        if self.max_attempts == Some(0) {
            return Err(CardGenError::InvalidConfigValueError {
                field: "max_attempts".to_string(),
                value: "0".to_string(),
                reason: "Value must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["bingo-cardgen"]);
        assert_eq!(config.count, 500);
        assert_eq!(config.user_id, "67a1cf0050f98d16a51c9551");
        assert_eq!(config.output_path, "./public");
        assert_eq!(config.output_file, "cards.json");
        assert!(config.pretty());
        assert!(config.seed.is_none());
        assert!(config.max_attempts.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let config = CliConfig::parse_from([
            "bingo-cardgen",
            "--count",
            "20",
            "--user-id",
            "tenant-7",
            "--seed",
            "3",
            "--max-attempts",
            "1000",
            "--compact",
        ]);
        assert_eq!(config.card_count(), 20);
        assert_eq!(config.user_id(), "tenant-7");
        assert_eq!(config.seed(), Some(3));
        assert_eq!(config.max_attempts(), Some(1000));
        assert!(!config.pretty());
    }

    #[test]
    fn test_cli_validation_rejects_bad_values() {
        let zero = CliConfig::parse_from(["bingo-cardgen", "--count", "0"]);
        assert!(zero.validate().is_err());

        let blank_user = CliConfig::parse_from(["bingo-cardgen", "--user-id", " "]);
        assert!(blank_user.validate().is_err());

        let nested_file = CliConfig::parse_from(["bingo-cardgen", "--output-file", "a/b.json"]);
        assert!(nested_file.validate().is_err());

        let no_attempts = CliConfig::parse_from(["bingo-cardgen", "--max-attempts", "0"]);
        assert!(no_attempts.validate().is_err());

        let huge_attempts =
            CliConfig::parse_from(["bingo-cardgen", "--max-attempts", "18446744073709551615"]);
        assert!(huge_attempts.validate().is_ok());
        assert_eq!(huge_attempts.max_attempts(), Some(u64::MAX));
    }
}
