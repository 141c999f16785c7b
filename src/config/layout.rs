// src/config/layout.rs
//! テーブル画面のレイアウトに関する定数を定義するよ！
//! キャンバスの大きさ、山札の行の高さ、カードのサイズやずらし幅など。

pub const CANVAS_WIDTH: f32 = 800.0; // キャンバスの幅
pub const CANVAS_HEIGHT: f32 = 500.0; // キャンバスの高さ

pub const PILE_COUNT: usize = 5; // テーブルに並ぶ山札の数 (1行に1つ)
pub const ROW_HEIGHT: f32 = 100.0; // 1行の高さ。y をこれで割ると山札の番号になる
pub const PILE_MARGIN: f32 = 2.0; // 行の左上から山札のアンカーまでの余白

pub const CARD_WIDTH: f32 = 72.0; // カード画像の幅
pub const CARD_HEIGHT: f32 = 96.0; // カード画像の高さ
pub const CARD_OFFSET_X: f32 = 12.0; // 山札の中でカードを右にずらす量
pub const CARD_OFFSET_Y: f32 = 0.0; // 山札の中でカードを下にずらす量

// --- 初期配置 (Table::dealt) ---
/// 山札 0 を分ける位置。i 番目の値で分けた残りが山札 i + 1 に移る。
pub const DEAL_SPLIT_POINTS: [usize; 4] = [42, 32, 22, 12];
/// 山札 3 のこの位置から先を山札 4 に重ねる。
pub const DEAL_EXTRA_SPLIT: usize = 5;

// --- 色 ---
pub const TABLE_COLOR: &str = "#004d00"; // テーブルの緑
pub const SLOT_COLOR: &str = "#000000"; // 山札の枠線
pub const CARD_FACE_COLOR: &str = "#ffffff";
pub const CARD_BACK_COLOR: &str = "#1f3f8f";
