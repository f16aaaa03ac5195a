//! 採購統計彙總

use chrono::{Datelike, Duration, NaiveDate};
use procast_core::{ForecastConfig, ProcastError, PurchaseEvent, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 單一物料的採購統計
#[derive(Debug, Clone)]
pub struct PurchaseStatistics {
    /// 窗口內總採購量
    pub total_quantity: Decimal,

    /// 窗口內採購次數
    pub purchase_count: usize,

    /// 平均提前期（天）
    pub average_lead_time_days: f64,

    /// 平均採購間隔（天）
    pub average_days_between_purchases: f64,

    /// 採購頻率一致性分數 [0,1]
    pub purchase_frequency_consistency: f64,

    /// 月均消耗量
    pub consumption_rate_per_month: f64,

    /// 預測下次訂購日期
    pub predicted_next_order_date: Option<NaiveDate>,
}

/// 統計彙總計算器
pub struct StatisticsAggregator;

impl StatisticsAggregator {
    /// 彙總採購事件統計
    ///
    /// 前置條件：`events` 非空且已依採購日期升冪排序（由呼叫端保證）。
    /// 空輸入屬於合約違反，回傳 `EmptyHistory` 錯誤
    pub fn aggregate(
        events: &[PurchaseEvent],
        config: &ForecastConfig,
    ) -> Result<PurchaseStatistics> {
        let first = events
            .first()
            .ok_or_else(|| ProcastError::EmptyHistory("aggregate".to_string()))?;
        let last = events.last().expect("非空已驗證");

        let total_quantity: Decimal = events.iter().map(|e| e.quantity).sum();
        let purchase_count = events.len();

        // 提前期：僅採計嚴格為正的樣本；負值/零視為資料雜訊
        let lead_times: Vec<i64> = events
            .iter()
            .filter(|e| e.has_usable_lead_time())
            .map(|e| e.lead_time_days)
            .collect();

        let average_lead_time_days = if lead_times.is_empty() {
            config.default_lead_time_days
        } else {
            lead_times.iter().sum::<i64>() as f64 / lead_times.len() as f64
        };

        // 採購間隔：排除零或負間隔（同日重複採購）
        let intervals: Vec<i64> = events
            .windows(2)
            .map(|pair| (pair[1].purchase_date - pair[0].purchase_date).num_days())
            .filter(|&gap| gap > 0)
            .collect();

        let average_days_between_purchases = if intervals.is_empty() {
            0.0
        } else {
            intervals.iter().sum::<i64>() as f64 / intervals.len() as f64
        };

        let purchase_frequency_consistency =
            consistency_score(&intervals, average_days_between_purchases);

        let total_f64 = total_quantity.to_f64().unwrap_or(0.0);
        let months_of_data = months_between(first.purchase_date, last.purchase_date);
        let consumption_rate_per_month = if months_of_data > 0.0 {
            total_f64 / months_of_data
        } else {
            // 事件未跨越任何時間：以一年為分母的中性估計
            total_f64 / 12.0
        };

        let predicted_next_order_date = if average_days_between_purchases > 0.0 {
            last.purchase_date
                .checked_add_signed(Duration::days(average_days_between_purchases.round() as i64))
        } else {
            None
        };

        Ok(PurchaseStatistics {
            total_quantity,
            purchase_count,
            average_lead_time_days,
            average_days_between_purchases,
            purchase_frequency_consistency,
            consumption_rate_per_month,
            predicted_next_order_date,
        })
    }
}

/// 一致性分數：以採購間隔的變異係數衡量
///
/// `clamp(1 - cv/2, 0, 1)`；無可用間隔時依慣例視為完全一致（1.0）
fn consistency_score(intervals: &[i64], average: f64) -> f64 {
    if intervals.is_empty() || average <= 0.0 {
        return 1.0;
    }

    let variance = intervals
        .iter()
        .map(|&gap| {
            let deviation = gap as f64 - average;
            deviation * deviation
        })
        .sum::<f64>()
        / intervals.len() as f64;

    let cv = variance.sqrt() / average;
    (1.0 - cv / 2.0).clamp(0.0, 1.0)
}

/// 兩日期間的月數（`年*12 + 月 + 日/30` 的分數慣例）
fn months_between(start: NaiveDate, end: NaiveDate) -> f64 {
    let years = end.year() - start.year();
    let months = end.month() as i32 - start.month() as i32;
    let days = end.day() as i32 - start.day() as i32;

    (years * 12 + months) as f64 + days as f64 / 30.0
}
