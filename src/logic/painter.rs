// src/logic/painter.rs
//! 描画先の抽象。テーブルは「何をどの順番で描くか」だけを決めて、実際の描き方は実装側に任せるよ。

use crate::components::card::CardId;
use crate::components::position::CardBox;

/// テーブルの描画先。ブラウザでは Canvas 2D コンテキストが実装する (`app::renderer::CanvasPainter`)。
///
/// `Table::draw` は次の順番で呼ぶ:
/// 1. `clear` を1回
/// 2. 各山札について、枠 (`draw_slot`) → カードを下から順に (`draw_card`)
/// 3. 最後に、持ち上げ中のカードを下から順に (`draw_card`)
pub trait Painter {
    /// 背景を塗りつぶす。
    fn clear(&mut self, width: f32, height: f32);

    /// 山札の置き場所の枠を描く。
    fn draw_slot(&mut self, slot: CardBox);

    /// カードを1枚描く。`face_up` が true なら表、false なら裏。
    fn draw_card(&mut self, card: CardId, face_up: bool, card_box: CardBox);
}
