pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::dto::{VerifyRequest, VerifyResponse};
pub use config::{lambda::LambdaConfig, toml_config::AppConfig};
pub use core::checker::SquareChecker;
pub use core::validator::{expected_magic_sum, verify, verify_with_locale};
pub use domain::model::{Grid, LineKind, LineResult, Locale, VerificationResult};
pub use utils::error::{MagicSquareError, Result};
