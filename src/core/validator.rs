//! Magic square verification.
//!
//! A grid is accepted when every row, every column and both diagonals add
//! up to `N * (N² + 1) / 2`. Only line sums are checked: values are not
//! required to be a permutation of `1..=N²`, so a grid with repeated
//! entries that still hits every line sum is reported as valid.

use crate::core::messages;
use crate::domain::model::{Grid, LineKind, LineResult, Locale, VerificationResult};

/// 1..N² 平均分配到 N 條線的總和
pub fn expected_magic_sum(n: usize) -> i128 {
    let n = n as i128;
    n * (n * n + 1) / 2
}

pub fn verify(grid: &Grid) -> VerificationResult {
    verify_with_locale(grid, Locale::default())
}

/// Verifies a grid that is assumed to be square.
///
/// Details are always ordered rows `1..=N`, columns `1..=N`, main diagonal,
/// anti-diagonal. An incomplete grid short-circuits with no details.
pub fn verify_with_locale(grid: &Grid, locale: Locale) -> VerificationResult {
    if !grid.is_complete() {
        return VerificationResult {
            is_complete: false,
            is_valid: false,
            message: messages::incomplete_prompt(locale),
            expected_sum: None,
            details: Vec::new(),
        };
    }

    let n = grid.size();
    let expected = expected_magic_sum(n);

    let details: Vec<LineResult> = lines(grid)
        .into_iter()
        .map(|(kind, values)| {
            let sum = values.iter().map(|&v| v as i128).sum::<i128>();
            LineResult {
                label: messages::line_label(locale, kind),
                kind,
                values,
                sum,
                matches_expected: sum == expected,
            }
        })
        .collect();

    let is_valid = details.iter().all(|line| line.matches_expected);
    let message = if is_valid {
        messages::success(locale, expected)
    } else {
        messages::failure(locale, expected)
    };

    VerificationResult {
        is_complete: true,
        is_valid,
        message,
        expected_sum: Some(expected),
        details,
    }
}

/// 依固定順序收集所有要檢查的線
fn lines(grid: &Grid) -> Vec<(LineKind, Vec<i64>)> {
    let n = grid.size();
    let rows = grid.rows();
    let cell = |i: usize, j: usize| rows.get(i).and_then(|row| row.get(j)).copied().flatten();

    let mut lines = Vec::with_capacity(2 * n + 2);

    for (i, row) in rows.iter().enumerate() {
        lines.push((LineKind::Row(i), row.iter().flatten().copied().collect()));
    }

    for j in 0..n {
        lines.push((LineKind::Column(j), (0..n).filter_map(|i| cell(i, j)).collect()));
    }

    lines.push((
        LineKind::MainDiagonal,
        (0..n).filter_map(|i| cell(i, i)).collect(),
    ));
    lines.push((
        LineKind::AntiDiagonal,
        (0..n).filter_map(|i| cell(i, n - 1 - i)).collect(),
    ));

    lines
}
