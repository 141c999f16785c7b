// src/config/mod.rs
//! テーブルの設定。定数は `layout` に、実行時に差し替えられる値は `TableConfig` にまとめてるよ。

pub mod layout;

use serde::{Deserialize, Serialize};

use crate::components::position::{Offset, Position};
use crate::error::ConfigError;
use layout::*;

/// テーブルの寸法と山札の数。
///
/// JS から JSON で渡すこともできる (`GameApp::with_config`)。
/// 足りないフィールドは `layout` の定数で埋まるよ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub pile_count: usize,
    pub row_height: f32,
    pub margin: f32,
    pub card_width: f32,
    pub card_height: f32,
    pub card_offset_x: f32,
    pub card_offset_y: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            pile_count: PILE_COUNT,
            row_height: ROW_HEIGHT,
            margin: PILE_MARGIN,
            card_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,
            card_offset_x: CARD_OFFSET_X,
            card_offset_y: CARD_OFFSET_Y,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
        }
    }
}

impl TableConfig {
    /// `index` 行目の山札のアンカー位置。
    pub fn row_anchor(&self, index: usize) -> Position {
        Position::new(self.margin, self.margin + self.row_height * index as f32)
    }

    pub fn card_offset(&self) -> Offset {
        Offset::new(self.card_offset_x, self.card_offset_y)
    }

    /// JSON 文字列から読み込んで、`validate` も通す。
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Canvas の高さに入る行の数。
    pub fn rows_that_fit(&self) -> usize {
        // as usize は飽和するので、巨大な値でも panic しない
        (self.canvas_height / self.row_height).floor().max(0.0) as usize
    }

    /// 値がテーブルとして使えるか確かめる。
    ///
    /// 寸法は全部、正の有限な値じゃないとダメ。余白とずらし幅は有限ならいい (余白は 0 以上)。
    /// 山札の数は 1 以上で、Canvas の高さに入る行数 (`canvas_height / row_height`) まで。
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("row_height", self.row_height),
            ("card_width", self.card_width),
            ("card_height", self.card_height),
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
        ];
        for (field, value) in sizes {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be positive and finite, got {}", value)));
            }
        }

        let offsets = [("card_offset_x", self.card_offset_x), ("card_offset_y", self.card_offset_y)];
        for (field, value) in offsets {
            if !value.is_finite() {
                return Err(invalid(field, format!("must be finite, got {}", value)));
            }
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(invalid("margin", format!("must be zero or more and finite, got {}", self.margin)));
        }

        let max_rows = self.rows_that_fit();
        if self.pile_count == 0 || self.pile_count > max_rows {
            return Err(invalid(
                "pile_count",
                format!("must be between 1 and {} for this canvas, got {}", max_rows, self.pile_count),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
