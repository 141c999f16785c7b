// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！
pub mod app; // ブラウザ側 (GameApp, Canvas 描画, マウスイベント)
pub mod components; // カードや位置などのデータ型
pub mod config; // レイアウト定数と TableConfig
pub mod error; // PileError, TableError, ConfigError
pub mod logger; // log クレートの出力先 (ブラウザのコンソール)
pub mod logic; // 山札の操作とテーブルのステートマシン

// よく使う型をクレートのルートから使えるようにしておくよ。
pub use crate::app::game_app::GameApp;
pub use crate::components::{Card, CardId, EventOutcome, InteractionState, PointerEvent, Position, Rank, Suit};
pub use crate::config::TableConfig;
pub use crate::error::{ConfigError, PileError, TableError};
pub use crate::logic::{Deck, Painter, Pile, Table, TableReport};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    log::info!("card_table: panic hook and console logger ready");
}
