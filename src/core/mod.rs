pub mod checker;
pub mod messages;
pub mod validator;

pub use crate::domain::model::{Grid, LineKind, LineResult, Locale, VerificationResult};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
