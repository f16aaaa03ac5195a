//! 物料預測示例

use chrono::NaiveDate;
use procast_calc::{MaterialAnalyzer, QuotationNumberGenerator};
use procast_core::PurchaseRecord;
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    println!("=== 物料採購預測示例 ===\n");

    // 模擬外部記錄庫的一致性快照
    let records = vec![
        PurchaseRecord::new(
            "1069685".to_string(),
            "鍍鋅鋼板".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            Decimal::from(3),
        )
        .with_unit("pcs".to_string())
        .with_source_ref("PO-2024-0101".to_string()),
        PurchaseRecord::new(
            "1069685".to_string(),
            "鍍鋅鋼板".to_string(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            Decimal::from(3),
        )
        .with_unit("pcs".to_string())
        .with_source_ref("PO-2024-0201".to_string()),
        PurchaseRecord::new(
            "1069685".to_string(),
            "鍍鋅鋼板".to_string(),
            NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            Decimal::from(3),
        )
        .with_unit("pcs".to_string())
        .with_source_ref("PO-2024-0303".to_string()),
    ];

    println!("採購歷史:");
    for record in &records {
        println!(
            "  - 物料: {}, 數量: {} {}, 下單日期: {}",
            record.material_code, record.quantity, record.unit, record.order_date
        );
    }

    // 執行單一物料分析
    let analyzer = MaterialAnalyzer::new();
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    match analyzer.analyze_at(&records, "1069685", today)? {
        Some(forecast) => {
            println!("\n預測結果:");
            println!("  物料: {} ({})", forecast.material_code, forecast.material_name);
            println!("  平均採購間隔: {:.1} 天", forecast.average_days_between_purchases);
            println!("  平均提前期: {:.1} 天", forecast.average_lead_time_days);
            println!("  月均消耗: {:.2}", forecast.consumption_rate_per_month);
            println!("  一致性分數: {:.2}", forecast.purchase_frequency_consistency);
            if let Some(next) = forecast.predicted_next_order_date {
                println!("  預測下次訂購: {}", next);
            }
            println!("  建議: {:?}", forecast.recommendation);
            println!("  理由: {}", forecast.recommendation_reason);
        }
        None => println!("\n查無符合的採購記錄"),
    }

    // 開立報價單號
    let history: Vec<String> = Vec::new();
    let number = QuotationNumberGenerator::next_number(&history, today);
    println!("\n下一個報價單號: {}", number);

    Ok(())
}
