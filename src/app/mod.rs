// src/app/mod.rs
//! GameApp とブラウザ側のロジックを役割ごとに分割して置くモジュールだよ！

pub mod browser_event_manager; // マウスリスナーの登録と解除
pub mod event_handler; // マウスイベント -> PointerEvent
pub mod game_app; // JS に公開する GameApp
pub mod init_handler; // Canvas とテーブルの準備
pub mod renderer; // Canvas 2D への描画
pub mod state_getter; // テーブルの状態を JSON に
