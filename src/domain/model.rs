use crate::utils::error::MagicSquareError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 單一格子；`None` 代表尚未填寫
pub type Cell = Option<i64>;

/// N×N 方陣，由上到下的列，每列由左到右
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// 由完整的數值建立（測試與 CLI 常用）
    pub fn from_values(rows: Vec<Vec<i64>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// 維度 N（列數）
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn is_complete(&self) -> bool {
        self.rows.iter().all(|row| row.iter().all(Option::is_some))
    }

    /// Returns the first row whose length differs from the row count.
    pub fn first_ragged_row(&self) -> Option<(usize, usize)> {
        let n = self.size();
        self.rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != n)
            .map(|(i, row)| (i, row.len()))
    }

    pub fn is_square(&self) -> bool {
        self.first_ragged_row().is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "index", rename_all = "snake_case")]
pub enum LineKind {
    /// 0-indexed
    Row(usize),
    /// 0-indexed
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineResult {
    pub label: String,
    pub kind: LineKind,
    pub values: Vec<i64>,
    pub sum: i128,
    pub matches_expected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub is_complete: bool,
    pub is_valid: bool,
    pub message: String,
    pub expected_sum: Option<i128>,
    pub details: Vec<LineResult>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl FromStr for Locale {
    type Err = MagicSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            other => Err(MagicSquareError::InvalidConfigValueError {
                field: "locale".to_string(),
                value: other.to_string(),
                reason: "Supported locales: en, es".to_string(),
            }),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Es => write!(f, "es"),
        }
    }
}
