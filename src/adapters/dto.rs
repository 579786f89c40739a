//! JSON wire format shared by the HTTP server, the Lambda handler and the
//! `verify-grid` tool.

use crate::domain::model::{Grid, LineResult, VerificationResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub grid: Grid,
}

/// 接受 `{"grid": [...]}` 或直接的二維陣列
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GridInput {
    Wrapped(VerifyRequest),
    Bare(Grid),
}

impl GridInput {
    pub fn into_grid(self) -> Grid {
        match self {
            GridInput::Wrapped(request) => request.grid,
            GridInput::Bare(grid) => grid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub completo: bool,
    pub es_valido: bool,
    pub mensaje: String,
    pub detalles: Vec<LineDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDetail {
    pub tipo: String,
    pub suma: i128,
    pub correcto: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valores: Option<String>,
}

impl LineDetail {
    fn from_line(line: &LineResult, include_values: bool) -> Self {
        let valores = include_values.then(|| {
            line.values
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(" + ")
        });

        Self {
            tipo: line.label.clone(),
            suma: line.sum,
            correcto: line.matches_expected,
            valores,
        }
    }
}

impl VerifyResponse {
    pub fn from_result(result: &VerificationResult, include_values: bool) -> Self {
        Self {
            completo: result.is_complete,
            es_valido: result.is_valid,
            mensaje: result.message.clone(),
            detalles: result
                .details
                .iter()
                .map(|line| LineDetail::from_line(line, include_values))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub suggestion: String,
}
