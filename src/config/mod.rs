pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::Locale;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use toml_config::AppConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "magic-square")]
#[command(about = "HTTP service that checks whether a grid is a magic square")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,

    /// Largest accepted grid dimension
    #[arg(long)]
    pub max_grid_size: Option<usize>,

    /// Language for labels and messages (en, es)
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Include the cells of every line in the response
    #[arg(long)]
    pub include_values: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入 TOML（若有）再套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(max) = self.max_grid_size {
            config.validation.max_grid_size = max;
        }
        if let Some(locale) = self.locale {
            config.messages.locale = locale;
        }
        if self.include_values {
            config.validation.include_values = true;
        }
        if self.json_logs {
            config.logging.json = true;
        }

        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = CliConfig::parse_from([
            "magic-square",
            "--port",
            "8081",
            "--locale",
            "en",
            "--include-values",
            "--max-grid-size",
            "5",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.messages.locale, Locale::En);
        assert_eq!(config.validation.max_grid_size, 5);
        assert!(config.validation.include_values);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_invalid_locale_flag_is_rejected() {
        assert!(CliConfig::try_parse_from(["magic-square", "--locale", "de"]).is_err());
    }

    #[test]
    fn test_missing_config_file_is_an_io_error() {
        let cli = CliConfig {
            config: Some(PathBuf::from("/definitely/not/here/magic.toml")),
            ..Default::default()
        };
        assert!(matches!(
            cli.resolve(),
            Err(crate::utils::error::MagicSquareError::IoError(_))
        ));
    }
}
