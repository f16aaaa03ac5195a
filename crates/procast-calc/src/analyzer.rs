//! 預測分析編排

use std::collections::HashSet;

use chrono::NaiveDate;
use procast_core::{ForecastConfig, MaterialForecast, PurchaseRecord, Result};
use rayon::prelude::*;

use crate::decision::DecisionEngine;
use crate::matcher::MaterialMatcher;
use crate::statistics::StatisticsAggregator;
use crate::AnalysisRun;

/// 物料預測分析器
///
/// 編排匹配 → 統計 → 決策，組裝單一物料的預測結果。
/// 記錄集合由呼叫端注入（單次讀取的一致性快照），不持有任何全域狀態
pub struct MaterialAnalyzer {
    /// 預測參數配置
    config: ForecastConfig,
}

impl MaterialAnalyzer {
    /// 創建使用預設配置的分析器
    pub fn new() -> Self {
        Self {
            config: ForecastConfig::default(),
        }
    }

    /// 創建使用指定配置的分析器
    pub fn with_config(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// 獲取配置引用
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// 分析單一物料（以今日日期為基準）
    pub fn analyze(
        &self,
        records: &[PurchaseRecord],
        material_code: &str,
    ) -> Result<Option<MaterialForecast>> {
        self.analyze_at(records, material_code, chrono::Local::now().date_naive())
    }

    /// 分析單一物料（注入基準日期，便於測試）
    ///
    /// 無符合記錄時回傳 `Ok(None)`：屬「資料不足」的正常結果，非錯誤
    pub fn analyze_at(
        &self,
        records: &[PurchaseRecord],
        material_code: &str,
        today: NaiveDate,
    ) -> Result<Option<MaterialForecast>> {
        let matched = MaterialMatcher::match_events(records, material_code, today);

        if matched.is_empty() {
            tracing::debug!("物料 {} 無符合的採購記錄", material_code);
            return Ok(None);
        }

        let material_name = matched
            .material_name
            .clone()
            .unwrap_or_else(|| material_code.to_string());

        let stats = StatisticsAggregator::aggregate(&matched.events, &self.config)?;

        let (recommendation, recommendation_reason) = DecisionEngine::decide(
            stats.purchase_count,
            stats.average_days_between_purchases,
            stats.purchase_frequency_consistency,
            stats.average_lead_time_days,
            stats.consumption_rate_per_month,
            &self.config,
        );

        tracing::debug!(
            "物料 {} 事件 {} 筆，一致性 {:.2}，建議 {:?}",
            material_code,
            stats.purchase_count,
            stats.purchase_frequency_consistency,
            recommendation
        );

        Ok(Some(MaterialForecast {
            material_code: material_code.to_string(),
            material_name,
            average_lead_time_days: stats.average_lead_time_days,
            consumption_rate_per_month: stats.consumption_rate_per_month,
            predicted_next_order_date: stats.predicted_next_order_date,
            recommendation,
            recommendation_reason,
            purchase_history: matched.events,
            total_quantity_window: stats.total_quantity,
            purchase_count_window: stats.purchase_count,
            average_days_between_purchases: stats.average_days_between_purchases,
            purchase_frequency_consistency: stats.purchase_frequency_consistency,
        }))
    }

    /// 批次分析快照中出現的全部物料（以今日日期為基準）
    pub fn analyze_all(&self, records: &[PurchaseRecord]) -> Result<AnalysisRun> {
        self.analyze_all_at(records, chrono::Local::now().date_naive())
    }

    /// 批次分析（注入基準日期）
    ///
    /// 各物料的分析互相獨立且共用同一份不可變快照，以 rayon 併行計算；
    /// 結果依物料代碼首次出現順序排列
    pub fn analyze_all_at(
        &self,
        records: &[PurchaseRecord],
        today: NaiveDate,
    ) -> Result<AnalysisRun> {
        tracing::info!("開始批次預測：記錄 {} 筆", records.len());
        let start_time = std::time::Instant::now();

        // 收集物料代碼（依正規化代碼去重，保留首次出現的原始寫法）
        let mut seen: HashSet<String> = HashSet::new();
        let mut codes: Vec<String> = Vec::new();
        for record in records {
            if seen.insert(record.normalized_code()) {
                codes.push(record.material_code.trim().to_string());
            }
        }

        let forecasts: Vec<MaterialForecast> = codes
            .par_iter()
            .map(|code| self.analyze_at(records, code, today))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect();

        let mut run = AnalysisRun::empty();
        run.forecasts = forecasts;
        run.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!(
            "批次預測完成：物料 {} 項，建議備庫 {} 項，耗時 {:?}",
            run.forecasts.len(),
            run.stock_count(),
            start_time.elapsed()
        );

        Ok(run)
    }
}

impl Default for MaterialAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
