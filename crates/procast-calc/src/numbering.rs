//! 報價單號產生

use chrono::NaiveDate;

/// 單號前綴
const NUMBER_PREFIX: &str = "ALK";

/// 序號下限（6 位數起始值）
const SERIAL_FLOOR: u32 = 100_000;

/// 序號上限（防止溢出 6 位數）
const SERIAL_CEILING: u32 = 999_998;

/// 哨兵值：低於下限，用以區分「當日尚無有效序號」與「已有序號 100000」
const SERIAL_SENTINEL: u32 = 99_998;

/// 報價單號產生器
///
/// 單號格式 `"ALK DD-MM-YYYY-SSSSSS"`；同一日內發出的序號恆為偶數
/// 且嚴格遞增
pub struct QuotationNumberGenerator;

impl QuotationNumberGenerator {
    /// 由歷史單號推導當日的下一個報價單號
    ///
    /// 僅掃描日期部分等於 `today` 的單號；格式不符的歷史項目
    /// （長度錯誤、非數字、低於下限）個別略過，不中斷掃描
    pub fn next_number(existing_numbers: &[String], today: NaiveDate) -> String {
        let date_part = today.format("%d-%m-%Y").to_string();
        let day_prefix = format!("{} {}-", NUMBER_PREFIX, date_part);

        let mut max_serial = SERIAL_SENTINEL;

        for number in existing_numbers {
            let serial_part = match number.trim().strip_prefix(&day_prefix) {
                Some(rest) => rest,
                None => continue,
            };

            if serial_part.len() != 6 {
                continue;
            }

            let serial = match serial_part.parse::<u32>() {
                Ok(value) => value,
                Err(_) => continue,
            };

            if serial < SERIAL_FLOOR {
                continue;
            }

            max_serial = max_serial.max(serial);
        }

        let next_serial = if max_serial == SERIAL_SENTINEL {
            SERIAL_FLOOR
        } else if max_serial % 2 == 0 {
            max_serial + 2
        } else {
            max_serial + 1
        };

        let next_serial = next_serial.min(SERIAL_CEILING);

        format!("{} {}-{:06}", NUMBER_PREFIX, date_part, next_serial)
    }
}
