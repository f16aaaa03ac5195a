//! 備庫決策規則

use procast_core::{ForecastConfig, Recommendation};

/// 決策引擎
///
/// 純函數規則集：不做 I/O，相同輸入必得相同輸出
pub struct DecisionEngine;

impl DecisionEngine {
    /// 依彙總統計產生備庫建議與理由
    ///
    /// 規則 0：採購次數不足者一律不備庫，優先於其他規則。
    /// 規則 1：一致性高於門檻為硬性前提，頻繁採購／長提前期／高消耗
    /// 三者任一成立即建議備庫；理由依固定順序列出全部成立（或全部
    /// 不成立）的條件
    pub fn decide(
        purchase_count: usize,
        average_days_between_purchases: f64,
        consistency: f64,
        average_lead_time_days: f64,
        consumption_rate_per_month: f64,
        config: &ForecastConfig,
    ) -> (Recommendation, String) {
        // 規則 0：歷史不足
        if purchase_count < config.min_purchases_for_stocking {
            return (
                Recommendation::DoNotStock,
                "Insufficient purchase history, order on-demand.".to_string(),
            );
        }

        let consistent = consistency > config.consistency_gate;
        let frequent = average_days_between_purchases < config.frequent_interval_days;
        let long_lead = average_lead_time_days > config.long_lead_time_days;
        let high_consumption = consumption_rate_per_month > config.high_consumption_per_month;

        // 規則 1：一致性為硬性門檻，其餘三條件任一即可
        if consistent && (frequent || long_lead || high_consumption) {
            let mut clauses = vec!["consistent purchase pattern".to_string()];
            if frequent {
                clauses.push(format!(
                    "frequent purchases (every {:.1} days)",
                    average_days_between_purchases
                ));
            }
            if long_lead {
                clauses.push(format!(
                    "long lead time ({:.1} days)",
                    average_lead_time_days
                ));
            }
            if high_consumption {
                clauses.push(format!(
                    "high consumption ({:.1} per month)",
                    consumption_rate_per_month
                ));
            }

            let reason = format!("{}.", capitalize_first(clauses.join(", ")));
            return (Recommendation::Stock, reason);
        }

        // 不備庫：列出所有未達標條件與量測值
        let mut clauses = Vec::new();
        if !consistent {
            clauses.push(format!(
                "inconsistent purchase pattern (consistency {:.2})",
                consistency
            ));
        }
        if !frequent {
            clauses.push(format!(
                "infrequent purchases (every {:.1} days)",
                average_days_between_purchases
            ));
        }
        if !long_lead {
            clauses.push(format!(
                "short lead time ({:.1} days)",
                average_lead_time_days
            ));
        }
        if !high_consumption {
            clauses.push(format!(
                "low consumption ({:.1} per month)",
                consumption_rate_per_month
            ));
        }
        clauses.push("order on-demand".to_string());

        let reason = format!("{}.", capitalize_first(clauses.join(", ")));
        (Recommendation::DoNotStock, reason)
    }
}

/// 首字母大寫（理由字串以句子形式呈現）
fn capitalize_first(text: String) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => text,
    }
}
