//! Gets the current table state and converts it to JSON.

use std::sync::{Arc, Mutex};

use log::{error, info};

use crate::logic::table::Table;

/// テーブルを検査して、その結果 (`TableReport`) を JSON 文字列で返すよ。
///
/// 52枚の分け方がおかしい時 (重複や行方不明のカード) もエラーになる。
pub fn get_table_state_json(table_arc: &Arc<Mutex<Table>>) -> Result<String, String> {
    let table = match table_arc.try_lock() {
        Ok(t) => t,
        Err(e) => {
            let error_msg = format!("Failed to lock table for getting state: {}", e);
            error!("{}", error_msg);
            return Err(error_msg);
        }
    };

    let report = table.validate().map_err(|e| {
        let error_msg = format!("Table failed validation: {}", e);
        error!("{}", error_msg);
        error_msg
    })?;
    info!(
        "Collected state for {} piles ({} cards).",
        report.piles.len(),
        report.total_cards
    );

    serde_json::to_string(&report).map_err(|e| {
        let error_msg = format!("Failed to serialize table state: {}", e);
        error!("{}", error_msg);
        error_msg
    })
}
