// src/components/mod.rs

// テーブルで使うデータ型のモジュールたち！
pub mod card;
pub mod drag_state;
pub mod pointer;
pub mod position;

// よく使う型は `crate::components::X` で使えるように re-export
pub use card::{Card, CardId, Rank, Suit};
pub use drag_state::InteractionState;
pub use pointer::{EventOutcome, PointerEvent};
pub use position::{CardBox, Offset, Position};
