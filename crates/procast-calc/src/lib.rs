//! # Procast Calculation Engine
//!
//! 物料採購預測與備庫決策計算引擎

pub mod analyzer;
pub mod decision;
pub mod matcher;
pub mod numbering;
pub mod statistics;

// Re-export 主要類型
pub use analyzer::MaterialAnalyzer;
pub use decision::DecisionEngine;
pub use matcher::{MatchResult, MaterialMatcher};
pub use numbering::QuotationNumberGenerator;
pub use statistics::{PurchaseStatistics, StatisticsAggregator};

/// 批次分析結果
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    /// 各物料的預測結果（依物料代碼首次出現順序）
    pub forecasts: Vec<procast_core::MaterialForecast>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl AnalysisRun {
    /// 創建空的分析結果
    pub fn empty() -> Self {
        Self {
            forecasts: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 備庫建議的物料數量
    pub fn stock_count(&self) -> usize {
        self.forecasts
            .iter()
            .filter(|f| f.recommendation.is_stock())
            .count()
    }
}
