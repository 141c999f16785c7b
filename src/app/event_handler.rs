// src/app/event_handler.rs
//! マウスイベントをテーブルの `PointerEvent` に変換して、ステートマシンに渡すところ。

use std::sync::{Arc, Mutex};

use log::error;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::components::pointer::{EventOutcome, PointerEvent};
use crate::logic::table::Table;

/// どの DOM イベントから来たか。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Down,
    Move,
    Up,
    DoubleClick,
}

impl MouseAction {
    pub const ALL: [MouseAction; 4] = [MouseAction::Down, MouseAction::Move, MouseAction::Up, MouseAction::DoubleClick];

    /// DOM のイベント名。
    pub fn dom_event(self) -> &'static str {
        match self {
            MouseAction::Down => "mousedown",
            MouseAction::Move => "mousemove",
            MouseAction::Up => "mouseup",
            MouseAction::DoubleClick => "dblclick",
        }
    }

    /// JS から渡される名前 ("down", "move", "up", "dblclick") から作る。DOM のイベント名も受け付けるよ。
    pub fn from_name(name: &str) -> Option<MouseAction> {
        match name {
            "down" | "mousedown" => Some(MouseAction::Down),
            "move" | "mousemove" => Some(MouseAction::Move),
            "up" | "mouseup" => Some(MouseAction::Up),
            "dblclick" | "doubleclick" => Some(MouseAction::DoubleClick),
            _ => None,
        }
    }

    /// Canvas 上で押されたら取るイベントか (そうでなければ window で取る)。
    /// ドラッグ中にカーソルが Canvas の外に出ても、move と up を取りこぼさないようにするため。
    pub fn listens_on_canvas(self) -> bool {
        matches!(self, MouseAction::Down | MouseAction::DoubleClick)
    }

    pub fn to_pointer(self, x: f32, y: f32) -> PointerEvent {
        match self {
            MouseAction::Down => PointerEvent::Down { x, y },
            MouseAction::Move => PointerEvent::Move { x, y },
            MouseAction::Up => PointerEvent::Up { x, y },
            MouseAction::DoubleClick => PointerEvent::DoubleClick { x, y },
        }
    }
}

/// マウスの位置を Canvas の座標に変換する。CSS で Canvas が拡大縮小されてても合うようにするよ。
pub fn canvas_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let scale_x = if rect.width() > 0.0 { canvas.width() as f64 / rect.width() } else { 1.0 };
    let scale_y = if rect.height() > 0.0 { canvas.height() as f64 / rect.height() } else { 1.0 };
    let x = (event.client_x() as f64 - rect.left()) * scale_x;
    let y = (event.client_y() as f64 - rect.top()) * scale_y;
    (x as f32, y as f32)
}

/// テーブルにイベントを1つ渡す。
pub fn dispatch(table_arc: &Arc<Mutex<Table>>, event: PointerEvent) -> EventOutcome {
    let mut table = match table_arc.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            error!("Table mutex poisoned in dispatch: {:?}. Recovering...", poisoned);
            poisoned.into_inner()
        }
    };
    table.handle_event(event)
}
