// src/components/position.rs

use serde::{Deserialize, Serialize};

/// キャンバス上の位置 (x, y) だよ！📍
///
/// 山札のアンカー位置や、ドラッグ中の浮いた山札の位置に使う。
/// 座標はキャンバスの左上が (0, 0) で、右と下に向かって増える。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// 原点 (0, 0)。`split` で作られた山札の初期位置。
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Position { x, y }
    }

    /// `offset` を `steps` 回ずらした位置。
    pub fn shifted(self, offset: Offset, steps: usize) -> Position {
        let n = steps as f32;
        Position {
            x: self.x + offset.dx * n,
            y: self.y + offset.dy * n,
        }
    }
}

/// 山札の中でカード1枚ごとにずらす量 (dx, dy)。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub fn new(dx: f32, dy: f32) -> Self {
        Offset { dx, dy }
    }
}

/// カード1枚の当たり判定・描画の矩形。右端と下端は含まない (半開区間)。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardBox {
    pub origin: Position,
    pub width: f32,
    pub height: f32,
}

impl CardBox {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.origin.x
            && x < self.origin.x + self.width
            && y >= self.origin.y
            && y < self.origin.y + self.height
    }
}
