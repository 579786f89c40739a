use crate::domain::model::Locale;

/// 驗證服務所需的設定來源（CLI/TOML、Lambda 環境變數）
pub trait ConfigProvider: Send + Sync {
    fn max_grid_size(&self) -> usize;
    fn locale(&self) -> Locale;
    fn include_values(&self) -> bool;
}
