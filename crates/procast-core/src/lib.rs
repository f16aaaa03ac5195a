//! # Procast Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod event;
pub mod forecast;
pub mod record;

// Re-export 主要類型
pub use config::ForecastConfig;
pub use event::PurchaseEvent;
pub use forecast::{MaterialForecast, Recommendation};
pub use record::PurchaseRecord;

/// 預測引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ProcastError {
    #[error("採購歷史為空，無法彙總統計: {0}")]
    EmptyHistory(String),

    #[error("無效的日期: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, ProcastError>;
