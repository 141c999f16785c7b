// src/app/init_handler.rs
//! GameApp の初期化まわり: Canvas の取得と、テーブルの準備。

use std::sync::{Arc, Mutex};

use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::TableConfig;
use crate::logic::table::Table;

/// id で Canvas 要素を探して、2D コンテキストと一緒に返す。
///
/// Canvas の描画サイズは `config` の幅と高さに合わせるよ。
pub(crate) fn initialize_canvas(
    canvas_id: &str,
    config: &TableConfig,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let document = window()
        .ok_or("Failed to get window")?
        .document()
        .ok_or("Failed to get document")?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("Canvas element '{}' not found", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("Element '{}' is not a canvas", canvas_id)))?;

    canvas.set_width(config.canvas_width as u32);
    canvas.set_height(config.canvas_height as u32);

    let context = canvas
        .get_context("2d")?
        .ok_or("Failed to get 2d context")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("Context is not CanvasRenderingContext2d"))?;

    info!(
        "App::Init: canvas '{}' ready ({}x{})",
        canvas_id,
        canvas.width(),
        canvas.height()
    );
    Ok((canvas, context))
}

/// 配り終わったテーブルを作る。配れなかった時は全カードを山札 0 に積んだままのテーブルにするよ。
pub(crate) fn initialize_table(config: TableConfig) -> Arc<Mutex<Table>> {
    let table = match Table::dealt(config.clone()) {
        Ok(table) => table,
        Err(e) => {
            error!("App::Init: failed to deal opening layout: {}. Using a single stacked pile.", e);
            Table::new(config)
        }
    };
    info!("App::Init: table ready with {} piles", table.pile_count());
    Arc::new(Mutex::new(table))
}

/// テーブルを作り直す。`shuffle` なら山札 0 をシャッフルしてから配る。
pub(crate) fn reset_table(table_arc: &Arc<Mutex<Table>>, shuffle: bool) -> Result<(), JsValue> {
    let mut table = table_arc
        .lock()
        .map_err(|e| JsValue::from_str(&format!("Failed to lock table mutex: {}", e)))?;
    let config = table.config().clone();

    let mut fresh = if shuffle {
        Table::shuffled(config, &mut rand::thread_rng())
    } else {
        Table::new(config)
    };
    fresh
        .deal()
        .map_err(|e| JsValue::from_str(&format!("Failed to deal: {}", e)))?;

    *table = fresh;
    info!("App::Init: table reset (shuffle = {})", shuffle);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::pile::Pile;

    #[test]
    fn initialize_table_deals_opening_layout() {
        let table_arc = initialize_table(TableConfig::default());
        let table = table_arc.lock().expect("ロックできるはず");
        let sizes: Vec<usize> = table.piles().iter().map(Pile::len).collect();
        assert_eq!(sizes, vec![12, 10, 10, 5, 15]);
    }

    #[test]
    fn reset_puts_every_card_back_in_opening_layout() {
        let table_arc = initialize_table(TableConfig::default());
        {
            let mut table = table_arc.lock().expect("ロックできるはず");
            // 山札 1 の一番下を掴んで山札 4 へ
            table.handle_event(crate::PointerEvent::Down { x: 3.0, y: 150.0 });
            table.handle_event(crate::PointerEvent::Move { x: 3.0, y: 450.0 });
            table.handle_event(crate::PointerEvent::Up { x: 600.0, y: 450.0 });
            assert_eq!(table.pile(1).map(Pile::len), Some(0));
        }

        reset_table(&table_arc, true).expect("リセットできるはず");
        let table = table_arc.lock().expect("ロックできるはず");
        let sizes: Vec<usize> = table.piles().iter().map(Pile::len).collect();
        assert_eq!(sizes, vec![12, 10, 10, 5, 15]);
        assert!(!table.is_dragging());
        assert_eq!(table.validate().map(|r| r.total_cards).ok(), Some(52));
        println!("テーブルのリセットテスト、成功！🎉");
    }
}
