use crate::config::toml_config::DEFAULT_MAX_GRID_SIZE;
use crate::core::validator;
use crate::domain::model::{Grid, Locale, VerificationResult};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_grid_size, validate_square_grid};

/// 邊界檢查 + 驗證。形狀不正確的方陣在進入驗證器之前就被拒絕。
#[derive(Debug, Clone)]
pub struct SquareChecker {
    max_grid_size: usize,
    locale: Locale,
}

impl SquareChecker {
    pub fn new(max_grid_size: usize, locale: Locale) -> Self {
        Self {
            max_grid_size,
            locale,
        }
    }

    pub fn from_provider<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.max_grid_size(), config.locale())
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn check(&self, grid: &Grid) -> Result<VerificationResult> {
        let shape =
            validate_square_grid(grid).and_then(|_| validate_grid_size(grid, self.max_grid_size));
        if let Err(e) = shape {
            tracing::warn!("⚠️ Rejected grid: {}", e);
            return Err(e);
        }

        let result = validator::verify_with_locale(grid, self.locale);

        if result.is_complete {
            tracing::debug!(
                size = grid.size(),
                valid = result.is_valid,
                expected_sum = ?result.expected_sum,
                "Verified {}x{} grid",
                grid.size(),
                grid.size()
            );
        } else {
            tracing::debug!(size = grid.size(), "Grid is incomplete");
        }

        Ok(result)
    }
}

impl Default for SquareChecker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GRID_SIZE, Locale::default())
    }
}
