// src/app/renderer.rs
//! GameApp の描画関連ロジック。`Table::draw` の呼び出しを Canvas 2D の命令に変換するよ。

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use log::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::components::card::CardId;
use crate::components::position::CardBox;
use crate::config::layout::{CARD_BACK_COLOR, CARD_FACE_COLOR, SLOT_COLOR, TABLE_COLOR};
use crate::logic::painter::Painter;
use crate::logic::table::Table;

/// カードの表面と裏面の画像。JS 側で読み込んだ画像を登録してもらうよ。
///
/// 画像が登録されてないカードは、四角とラベルで描く。
#[derive(Default)]
pub struct CardFaces {
    faces: HashMap<CardId, HtmlImageElement>,
    back: Option<HtmlImageElement>,
}

impl CardFaces {
    pub fn set_face(&mut self, card: CardId, image: HtmlImageElement) {
        self.faces.insert(card, image);
    }

    pub fn set_back(&mut self, image: HtmlImageElement) {
        self.back = Some(image);
    }

    pub fn face(&self, card: CardId) -> Option<&HtmlImageElement> {
        self.faces.get(&card)
    }

    pub fn back(&self) -> Option<&HtmlImageElement> {
        self.back.as_ref()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Canvas 2D コンテキストに描く `Painter`。
pub struct CanvasPainter<'a> {
    context: &'a CanvasRenderingContext2d,
    faces: &'a CardFaces,
}

impl<'a> CanvasPainter<'a> {
    pub fn new(context: &'a CanvasRenderingContext2d, faces: &'a CardFaces) -> Self {
        CanvasPainter { context, faces }
    }

    fn draw_image(&self, image: &HtmlImageElement, card_box: CardBox) -> Result<(), JsValue> {
        self.context.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            card_box.origin.x as f64,
            card_box.origin.y as f64,
            card_box.width as f64,
            card_box.height as f64,
        )
    }

    /// 画像が無い時の表面: 白い四角 + 左上にランクとスート。
    fn draw_plain_face(&self, card: CardId, card_box: CardBox) -> Result<(), JsValue> {
        let (x, y) = (card_box.origin.x as f64, card_box.origin.y as f64);
        self.context.set_fill_style_str(CARD_FACE_COLOR);
        self.context.fill_rect(x, y, card_box.width as f64, card_box.height as f64);
        self.context.set_stroke_style_str(SLOT_COLOR);
        self.context.stroke_rect(x, y, card_box.width as f64, card_box.height as f64);

        let suit = card.suit();
        self.context.set_fill_style_str(if suit.is_red() { "#c00000" } else { "#000000" });
        self.context.set_font("14px sans-serif");
        let label = format!("{}{}", card.rank().short_label(), suit.symbol());
        self.context.fill_text(&label, x + 2.0, y + 14.0)
    }

    fn draw_plain_back(&self, card_box: CardBox) {
        let (x, y) = (card_box.origin.x as f64, card_box.origin.y as f64);
        self.context.set_fill_style_str(CARD_BACK_COLOR);
        self.context.fill_rect(x, y, card_box.width as f64, card_box.height as f64);
        self.context.set_stroke_style_str(CARD_FACE_COLOR);
        self.context.stroke_rect(x + 3.0, y + 3.0, card_box.width as f64 - 6.0, card_box.height as f64 - 6.0);
    }
}

impl Painter for CanvasPainter<'_> {
    fn clear(&mut self, width: f32, height: f32) {
        self.context.set_fill_style_str(TABLE_COLOR);
        self.context.fill_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn draw_slot(&mut self, slot: CardBox) {
        self.context.set_stroke_style_str(SLOT_COLOR);
        self.context.stroke_rect(
            slot.origin.x as f64,
            slot.origin.y as f64,
            slot.width as f64,
            slot.height as f64,
        );
    }

    fn draw_card(&mut self, card: CardId, face_up: bool, card_box: CardBox) {
        let result = match (face_up, self.faces.face(card), self.faces.back()) {
            (true, Some(image), _) => self.draw_image(image, card_box),
            (true, None, _) => self.draw_plain_face(card, card_box),
            (false, _, Some(image)) => self.draw_image(image, card_box),
            (false, _, None) => {
                self.draw_plain_back(card_box);
                Ok(())
            }
        };
        if let Err(e) = result {
            warn!("Renderer: failed to draw {}: {:?}", card, e);
        }
    }
}

/// テーブルを Canvas に描く。イベントのたびと、JS から `render()` が呼ばれた時に使うよ。
pub fn render_table(
    table_arc: &Arc<Mutex<Table>>,
    faces_arc: &Arc<Mutex<CardFaces>>,
    context: &CanvasRenderingContext2d,
) -> Result<(), JsValue> {
    let table = table_arc
        .lock()
        .map_err(|e| JsValue::from_str(&format!("Failed to lock table mutex: {}", e)))?;
    let faces = faces_arc
        .lock()
        .map_err(|e| JsValue::from_str(&format!("Failed to lock card faces mutex: {}", e)))?;

    let mut painter = CanvasPainter::new(context, &faces);
    table.draw(&mut painter);
    debug!("Renderer: table drawn ({} face images registered)", faces.face_count());
    Ok(())
}
