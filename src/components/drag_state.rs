// src/components/drag_state.rs

use serde::{Deserialize, Serialize};

use crate::components::card::CardId;

/// ポインター操作の状態だよ！🖱️➡️🃏
///
/// - `Idle`: 何もしてない
/// - `PressArmed`: ボタンを押した直後。まだ動かしてない
/// - `Dragging`: カードの束を持ち上げて動かしてる最中
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionState {
    #[default]
    Idle,
    PressArmed {
        /// 押した行の山札番号 (範囲外なら None)
        pile_index: Option<usize>,
        /// 押した位置にあったカード。ドラッグが始まったら使い終わり
        card: Option<CardId>,
    },
    Dragging {
        /// 持ち上げたカードがもともとあった山札
        origin_pile: usize,
    },
}

impl InteractionState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, InteractionState::Dragging { .. })
    }

    pub fn pressed_card(&self) -> Option<CardId> {
        match self {
            InteractionState::PressArmed { card, .. } => *card,
            _ => None,
        }
    }

    pub fn pressed_pile_index(&self) -> Option<usize> {
        match self {
            InteractionState::PressArmed { pile_index, .. } => *pile_index,
            InteractionState::Dragging { origin_pile } => Some(*origin_pile),
            InteractionState::Idle => None,
        }
    }
}
