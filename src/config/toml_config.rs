use crate::config::{DEFAULT_OUTPUT_FILE, DEFAULT_OUTPUT_PATH};
use crate::core::collector::DEFAULT_USER_ID;
use crate::core::ConfigProvider;
use crate::utils::error::{CardGenError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub generation: GenerationSection,
    #[serde(default)]
    pub output: OutputSection,
    pub monitoring: Option<MonitoringSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSection {
    pub count: usize,
    #[serde(default = "default_user_id")]
    pub user_id: String,
    pub seed: Option<u64>,
    pub max_attempts: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default = "default_output_file")]
    pub filename: String,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            filename: default_output_file(),
            pretty: default_pretty(),
        }
    }
}

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringSection {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CardGenError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BINGO_USER_ID})，找不到的變數原樣保留
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_positive_number("generation.count", self.generation.count, 1)?;

        let user_id = &self.generation.user_id;
        validation::validate_non_empty_string("generation.user_id", user_id)?;
        if ENV_VAR_PATTERN.is_match(user_id) {
            return Err(CardGenError::ConfigValidationError {
                field: "generation.user_id".to_string(),
                message: format!("Unresolved environment variable in '{}'", user_id),
            });
        }

        if self.generation.max_attempts == Some(0) {
            return Err(CardGenError::InvalidConfigValueError {
                field: "generation.max_attempts".to_string(),
                value: "0".to_string(),
                reason: "Value must be at least 1".to_string(),
            });
        }

        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_file_name("output.filename", &self.output.filename)?;

        Ok(())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn card_count(&self) -> usize {
        self.generation.count
    }

    fn user_id(&self) -> &str {
        &self.generation.user_id
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_file(&self) -> &str {
        &self.output.filename
    }

    fn pretty(&self) -> bool {
        self.output.pretty
    }

    fn seed(&self) -> Option<u64> {
        self.generation.seed
    }

    fn max_attempts(&self) -> Option<u64> {
        self.generation.max_attempts
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
