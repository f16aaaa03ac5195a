//! 預測參數配置模型

use serde::{Deserialize, Serialize};

/// 預測與決策參數配置
///
/// 所有閾值皆為可調常數；預設值對應標準決策規則
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// 預設提前期（天）：無可用提前期樣本時的中性假設
    pub default_lead_time_days: f64,

    /// 備庫所需的最少採購次數（低於此數一律不備庫）
    pub min_purchases_for_stocking: usize,

    /// 一致性門檻：低於此值視為採購模式不穩定
    pub consistency_gate: f64,

    /// 頻繁採購閾值（天）：平均間隔低於此值視為頻繁
    pub frequent_interval_days: f64,

    /// 長提前期閾值（天）：平均提前期高於此值視為長
    pub long_lead_time_days: f64,

    /// 高消耗閾值（每月）：月均消耗高於此值視為高
    pub high_consumption_per_month: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            default_lead_time_days: 30.0,
            min_purchases_for_stocking: 3,
            consistency_gate: 0.5,
            frequent_interval_days: 60.0,
            long_lead_time_days: 30.0,
            high_consumption_per_month: 10.0,
        }
    }
}

impl ForecastConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置預設提前期
    pub fn with_default_lead_time_days(mut self, days: f64) -> Self {
        self.default_lead_time_days = days;
        self
    }

    /// 建構器模式：設置備庫所需最少採購次數
    pub fn with_min_purchases_for_stocking(mut self, count: usize) -> Self {
        self.min_purchases_for_stocking = count;
        self
    }

    /// 建構器模式：設置一致性門檻
    pub fn with_consistency_gate(mut self, gate: f64) -> Self {
        self.consistency_gate = gate;
        self
    }

    /// 建構器模式：設置頻繁採購閾值
    pub fn with_frequent_interval_days(mut self, days: f64) -> Self {
        self.frequent_interval_days = days;
        self
    }

    /// 建構器模式：設置長提前期閾值
    pub fn with_long_lead_time_days(mut self, days: f64) -> Self {
        self.long_lead_time_days = days;
        self
    }

    /// 建構器模式：設置高消耗閾值
    pub fn with_high_consumption_per_month(mut self, rate: f64) -> Self {
        self.high_consumption_per_month = rate;
        self
    }
}
