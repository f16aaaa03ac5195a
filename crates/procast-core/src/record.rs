//! 採購記錄模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 採購記錄（由外部記錄庫提供，核心只讀）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// 記錄ID
    pub id: Uuid,

    /// 物料代碼（自由文本，未必已正規化）
    pub material_code: String,

    /// 物料名稱
    pub material_name: String,

    /// 下單日期
    pub order_date: NaiveDate,

    /// 有效期限（該訂單的承諾/效期邊界）
    pub expiry_date: NaiveDate,

    /// 採購數量
    pub quantity: Decimal,

    /// 單位
    pub unit: String,

    /// 來源單據（如訂單號）
    pub source_ref: Option<String>,
}

impl PurchaseRecord {
    /// 創建新的採購記錄
    pub fn new(
        material_code: String,
        material_name: String,
        order_date: NaiveDate,
        expiry_date: NaiveDate,
        quantity: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            material_code,
            material_name,
            order_date,
            expiry_date,
            quantity,
            unit: String::new(),
            source_ref: None,
        }
    }

    /// 建構器模式：設置單位
    pub fn with_unit(mut self, unit: String) -> Self {
        self.unit = unit;
        self
    }

    /// 建構器模式：設置來源單據
    pub fn with_source_ref(mut self, source_ref: String) -> Self {
        self.source_ref = Some(source_ref);
        self
    }

    /// 提前期（天數）= 有效期限 - 下單日期
    ///
    /// 不保證為正；負值視為資料雜訊，由統計彙總排除
    pub fn lead_time_days(&self) -> i64 {
        (self.expiry_date - self.order_date).num_days()
    }

    /// 正規化後的物料代碼（去空白、轉小寫）
    pub fn normalized_code(&self) -> String {
        self.material_code.trim().to_lowercase()
    }
}
