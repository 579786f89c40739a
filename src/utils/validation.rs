use crate::domain::model::Grid;
use crate::utils::error::{MagicSquareError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(MagicSquareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MagicSquareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(MagicSquareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 方陣形狀檢查：至少一列，且每列長度等於列數
///
/// An empty grid is rejected on purpose even though `verify` would call it
/// valid (two zero-sum diagonals); a 0x0 submission is treated as malformed.
pub fn validate_square_grid(grid: &Grid) -> Result<()> {
    if grid.size() == 0 {
        return Err(MagicSquareError::MalformedGridError {
            reason: "the grid has no rows".to_string(),
        });
    }

    if let Some((row, len)) = grid.first_ragged_row() {
        return Err(MagicSquareError::MalformedGridError {
            reason: format!(
                "row {} has {} cells, expected {}",
                row + 1,
                len,
                grid.size()
            ),
        });
    }

    Ok(())
}

pub fn validate_grid_size(grid: &Grid, max: usize) -> Result<()> {
    if grid.size() > max {
        return Err(MagicSquareError::GridTooLargeError {
            size: grid.size(),
            max,
        });
    }
    Ok(())
}
