use crate::core::ConfigProvider;
use crate::domain::model::Locale;
use crate::utils::error::{MagicSquareError, Result};
use crate::utils::validation::{self, Validate};
use std::env;

use super::toml_config::{DEFAULT_MAX_GRID_SIZE, MAX_GRID_SIZE_LIMIT};

/// Lambda 以環境變數設定
#[derive(Debug, Clone, PartialEq)]
pub struct LambdaConfig {
    pub max_grid_size: usize,
    pub locale: Locale,
    pub include_values: bool,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 以任意查詢函式建立，方便測試時不動到真正的環境變數
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_grid_size = match lookup("MAX_GRID_SIZE") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                MagicSquareError::InvalidConfigValueError {
                    field: "MAX_GRID_SIZE".to_string(),
                    value: raw.clone(),
                    reason: "Must be a positive integer".to_string(),
                }
            })?,
            None => DEFAULT_MAX_GRID_SIZE,
        };

        let locale = match lookup("LOCALE") {
            Some(raw) => raw.parse()?,
            None => Locale::Es,
        };

        let include_values = lookup("INCLUDE_VALUES")
            .map(|raw| matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            max_grid_size,
            locale,
            include_values,
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn max_grid_size(&self) -> usize {
        self.max_grid_size
    }

    fn locale(&self) -> Locale {
        self.locale
    }

    fn include_values(&self) -> bool {
        self.include_values
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_range("MAX_GRID_SIZE", self.max_grid_size, 1, MAX_GRID_SIZE_LIMIT)?;
        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
