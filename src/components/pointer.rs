// src/components/pointer.rs

use serde::{Deserialize, Serialize};

/// テーブルに届くポインターイベント。座標はキャンバス上の位置だよ。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32 },
    DoubleClick { x: f32, y: f32 },
}

/// イベントを処理した結果。画面を描き直す必要があるかどうかの判断に使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventOutcome {
    /// 何も起きなかった
    Ignored,
    /// ボタンが押された (まだ何も動いてない)
    Armed,
    /// カードの束を持ち上げた
    DragStarted { pile: usize, count: usize },
    /// 持ち上げた束が動いた
    DragMoved,
    /// 束を山札に置いた
    Dropped { pile: usize, count: usize },
    /// 置き場所が無かったので元の山札に戻した
    Returned { pile: usize, count: usize },
    /// ダブルクリックでカードをめくった
    Flipped { pile: usize, count: usize },
    /// ただのクリック (何も変わらない)
    Clicked,
}

impl EventOutcome {
    /// 描き直しが必要か。
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, EventOutcome::Ignored | EventOutcome::Armed | EventOutcome::Clicked)
    }
}
