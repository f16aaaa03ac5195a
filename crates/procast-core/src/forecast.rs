//! 物料預測結果模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::event::PurchaseEvent;

/// 備庫建議
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// 建議備庫
    Stock,
    /// 不備庫，按需訂購
    DoNotStock,
}

impl Recommendation {
    /// 檢查是否為備庫建議
    pub fn is_stock(&self) -> bool {
        *self == Recommendation::Stock
    }
}

/// 物料預測（單次分析的輸出；建構後不再變更）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialForecast {
    /// 物料代碼
    pub material_code: String,

    /// 物料名稱（取首個匹配記錄；無名稱時以代碼代替）
    pub material_name: String,

    /// 平均提前期（天）
    pub average_lead_time_days: f64,

    /// 月均消耗量
    pub consumption_rate_per_month: f64,

    /// 預測下次訂購日期
    pub predicted_next_order_date: Option<NaiveDate>,

    /// 備庫建議
    pub recommendation: Recommendation,

    /// 建議理由
    pub recommendation_reason: String,

    /// 採購歷史（依採購日期升冪）
    pub purchase_history: Vec<PurchaseEvent>,

    /// 窗口內總採購量
    pub total_quantity_window: Decimal,

    /// 窗口內採購次數
    pub purchase_count_window: usize,

    /// 平均採購間隔（天）
    pub average_days_between_purchases: f64,

    /// 採購頻率一致性分數 [0,1]
    pub purchase_frequency_consistency: f64,
}
