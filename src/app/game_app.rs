// src/app/game_app.rs

use std::sync::{Arc, Mutex};

use js_sys::Error;
use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::app::browser_event_manager::{self, Listener};
use crate::app::event_handler::{self, MouseAction};
use crate::app::renderer::{self, CardFaces};
use crate::app::{init_handler, state_getter};
use crate::components::card::CardId;
use crate::config::TableConfig;
use crate::logic::table::Table;

// --- テーブル全体のアプリケーション状態を管理する構造体 ---
#[wasm_bindgen]
pub struct GameApp {
    table: Arc<Mutex<Table>>,
    // JS から登録してもらったカードの画像
    faces: Arc<Mutex<CardFaces>>,
    // 登録中のマウスイベントリスナー (外す時に必要なので持っておく)
    listeners: Vec<Listener>,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

// GameApp 構造体のメソッドを実装していくよ！
#[wasm_bindgen]
impl GameApp {
    /// 既定の設定でテーブルを作る。`canvas_id` の Canvas に描くよ。
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<GameApp, JsValue> {
        Self::build(canvas_id, TableConfig::default())
    }

    /// JSON の設定 (`TableConfig`) でテーブルを作る。足りないフィールドは既定値になる。
    ///
    /// 値がおかしい設定 (Canvas に入らない山札の数、0 以下の寸法など) はエラーで返すよ。
    pub fn with_config(canvas_id: &str, config_json: &str) -> Result<GameApp, JsValue> {
        let config = TableConfig::from_json(config_json)
            .map_err(|e| JsValue::from(Error::new(&format!("Invalid table config: {}", e))))?;
        Self::build(canvas_id, config)
    }

    /// マウスイベントのリスナーを登録する。もう登録済みなら何もしない。
    pub fn attach_listeners(&mut self) -> Result<(), JsValue> {
        if !self.listeners.is_empty() {
            warn!("GameApp: listeners already attached");
            return Ok(());
        }
        self.listeners =
            browser_event_manager::attach_listeners(&self.table, &self.faces, &self.canvas, &self.context)?;
        Ok(())
    }

    pub fn detach_listeners(&mut self) -> Result<(), JsValue> {
        let listeners = std::mem::take(&mut self.listeners);
        browser_event_manager::detach_listeners(listeners)
    }

    /// テーブルを Canvas に描く。
    pub fn render(&self) -> Result<(), JsValue> {
        renderer::render_table(&self.table, &self.faces, &self.context)
            .map_err(|e| JsValue::from(Error::new(&format!("Render error: {:?}", e))))
    }

    /// 全カードを集め直して配り直す。`shuffle` なら配る前にシャッフルするよ。
    pub fn reset(&self, shuffle: bool) -> Result<(), JsValue> {
        init_handler::reset_table(&self.table, shuffle)?;
        self.render()
    }

    /// カードの表面の画像を登録する。`card_index` は 0..52 (rank + 13 * suit)。
    pub fn register_face_image(&self, card_index: usize, image: HtmlImageElement) -> Result<(), JsValue> {
        let card = CardId::from_index(card_index)
            .ok_or_else(|| JsValue::from(Error::new(&format!("Card index {} out of range", card_index))))?;
        self.lock_faces()?.set_face(card, image);
        Ok(())
    }

    /// 裏面の画像を登録する (全カード共通)。
    pub fn register_back_image(&self, image: HtmlImageElement) -> Result<(), JsValue> {
        self.lock_faces()?.set_back(image);
        Ok(())
    }

    /// テーブルの状態を JSON 文字列で返す。
    pub fn get_table_state_json(&self) -> Result<String, JsValue> {
        state_getter::get_table_state_json(&self.table).map_err(|e| JsValue::from(Error::new(&e)))
    }

    /// テーブルの状態を JS のオブジェクトで返す。
    pub fn get_table_state(&self) -> Result<JsValue, JsValue> {
        let json = self.get_table_state_json()?;
        js_sys::JSON::parse(&json)
    }

    pub fn is_dragging(&self) -> bool {
        match self.table.lock() {
            Ok(table) => table.is_dragging(),
            Err(e) => {
                error!("GameApp: failed to lock table in is_dragging: {}", e);
                false
            }
        }
    }

    /// リスナーを使わずに、JS からポインターイベントを直接渡す。
    ///
    /// `kind` は "down" / "move" / "up" / "dblclick"。座標は Canvas 上の位置。
    /// 処理結果 (`EventOutcome`) を JSON 文字列で返すよ。
    pub fn handle_pointer(&self, kind: &str, x: f32, y: f32) -> Result<String, JsValue> {
        let action = MouseAction::from_name(kind)
            .ok_or_else(|| JsValue::from(Error::new(&format!("Unknown pointer event '{}'", kind))))?;
        let outcome = event_handler::dispatch(&self.table, action.to_pointer(x, y));
        if outcome.needs_redraw() {
            self.render()?;
        }
        serde_json::to_string(&outcome).map_err(|e| JsValue::from(Error::new(&e.to_string())))
    }
}

// JS に見せない内部メソッド
impl GameApp {
    fn build(canvas_id: &str, config: TableConfig) -> Result<GameApp, JsValue> {
        info!("GameApp: 初期化中... (canvas '{}')", canvas_id);
        let (canvas, context) = init_handler::initialize_canvas(canvas_id, &config)?;
        let table = init_handler::initialize_table(config);

        let app = GameApp {
            table,
            faces: Arc::new(Mutex::new(CardFaces::default())),
            listeners: Vec::new(),
            canvas,
            context,
        };
        app.render()?;
        info!("GameApp: 初期化完了。");
        Ok(app)
    }

    fn lock_faces(&self) -> Result<std::sync::MutexGuard<'_, CardFaces>, JsValue> {
        self.faces
            .lock()
            .map_err(|e| JsValue::from(Error::new(&format!("Failed to lock card faces: {}", e))))
    }
}

// GameApp が不要になった時にリスナーを外す (Drop トレイト)
impl Drop for GameApp {
    fn drop(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        if let Err(e) = self.detach_listeners() {
            error!("GameApp: リスナーを外すのに失敗: {:?}", e);
        }
    }
}
