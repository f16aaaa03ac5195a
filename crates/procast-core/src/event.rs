//! 採購事件模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::record::PurchaseRecord;

/// 採購事件（單次分析期間由記錄衍生，不持久化）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseEvent {
    /// 採購日期
    pub purchase_date: NaiveDate,

    /// 採購數量
    pub quantity: Decimal,

    /// 單位
    pub unit: String,

    /// 來源單據（如訂單號）
    pub source_ref: Option<String>,

    /// 提前期（天數），於匹配時計算一次
    pub lead_time_days: i64,
}

impl PurchaseEvent {
    /// 由採購記錄建立事件
    pub fn from_record(record: &PurchaseRecord) -> Self {
        Self {
            purchase_date: record.order_date,
            quantity: record.quantity,
            unit: record.unit.clone(),
            source_ref: record.source_ref.clone(),
            lead_time_days: record.lead_time_days(),
        }
    }

    /// 檢查提前期是否為可用樣本（嚴格為正）
    pub fn has_usable_lead_time(&self) -> bool {
        self.lead_time_days > 0
    }
}
