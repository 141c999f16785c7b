// src/logic/mod.rs
//! テーブルの中身: デッキのアリーナ、山札の操作、ステートマシン、描画の順番。
//! ブラウザに依存しないので、ネイティブの `cargo test` でそのまま試せるよ。

pub mod deck;
pub mod painter;
pub mod pile;
pub mod report;
pub mod table;

pub use deck::Deck;
pub use painter::Painter;
pub use pile::Pile;
pub use report::{CardReport, PileReport, TableReport};
pub use table::Table;
