// src/logic/table.rs
//! テーブル: 固定の山札たち + 持ち上げ中の山札 + ポインター操作のステートマシン。
//!
//! ポインターイベントは `Table::handle_event` 1か所で受け取って、状態 (`InteractionState`) に応じて
//! 山札の split / merge / append / flip_range に変換するよ。
//! イベント1つの処理は同期的に最後まで終わるので、処理の合間 (描画するタイミング) には
//! 52枚全部がどこか1か所の山札に必ず入ってる。

use log::{debug, info, warn};
use rand::Rng;

use crate::components::card::{Card, CardId, DECK_SIZE};
use crate::components::drag_state::InteractionState;
use crate::components::pointer::{EventOutcome, PointerEvent};
use crate::components::position::{CardBox, Position};
use crate::config::layout::{DEAL_EXTRA_SPLIT, DEAL_SPLIT_POINTS};
use crate::config::TableConfig;
use crate::error::TableError;
use crate::logic::deck::{self, Deck};
use crate::logic::painter::Painter;
use crate::logic::pile::Pile;
use crate::logic::report::{self, TableReport};

/// カードを並べるテーブル全体の状態だよ！🟩
pub struct Table {
    config: TableConfig,
    deck: Deck,
    piles: Vec<Pile>,
    /// ドラッグ中のカードを入れておく山札。ドラッグしてない時は空。
    floating: Pile,
    state: InteractionState,
}

impl Table {
    /// 全カードを裏向きで山札 0 に積んだテーブルを作る。他の山札は空。
    pub fn new(config: TableConfig) -> Self {
        Self::stacked(config, deck::standard_order().collect())
    }

    /// `new` と同じだけど、山札 0 の並びをシャッフルする。
    pub fn shuffled<R: Rng + ?Sized>(config: TableConfig, rng: &mut R) -> Self {
        Self::stacked(config, deck::shuffled_order(rng))
    }

    /// 最初の配置: 山札 0 を何か所かで分けて他の行に配って、山札 0 を表向きにする。
    ///
    /// 既定の 5 行なら、枚数は上から 12 / 10 / 10 / 5 / 15 になるよ。
    pub fn dealt(config: TableConfig) -> Result<Self, TableError> {
        let mut table = Self::new(config);
        table.deal()?;
        Ok(table)
    }

    fn stacked(mut config: TableConfig, order: Vec<CardId>) -> Self {
        // 山札が 0 個だとカードの置き場所が無いので最低 1 個、多すぎる分は Canvas に入る行数まで削る
        let max_rows = config.rows_that_fit().clamp(1, DECK_SIZE);
        let pile_count = config.pile_count.clamp(1, max_rows);
        if pile_count != config.pile_count {
            warn!("Table: pile_count {} adjusted to {}", config.pile_count, pile_count);
            config.pile_count = pile_count;
        }

        let mut piles: Vec<Pile> = (0..config.pile_count)
            .map(|i| Self::layout_pile(&config, Pile::new(config.row_anchor(i))))
            .collect();
        piles[0] = Self::layout_pile(&config, Pile::from_deck_order(order, config.row_anchor(0)));

        let floating = Self::layout_pile(&config, Pile::new(Position::ORIGIN));

        Table {
            config,
            deck: Deck::new(),
            piles,
            floating,
            state: InteractionState::Idle,
        }
    }

    fn layout_pile(config: &TableConfig, pile: Pile) -> Pile {
        pile.with_layout(config.card_offset(), config.card_width, config.card_height)
    }

    /// 山札 0 から最初の配置を配る。`shuffled` の後に呼べばシャッフルした配置になるよ。
    ///
    /// 山札 0 以外が空で、全部裏向きの状態から呼ぶ前提。
    pub fn deal(&mut self) -> Result<(), TableError> {
        for (i, &at) in DEAL_SPLIT_POINTS.iter().enumerate() {
            let target = i + 1;
            if target >= self.piles.len() {
                break;
            }
            self.move_run(0, at, target)?;
        }
        if self.piles.len() > 4 {
            self.move_run(3, DEAL_EXTRA_SPLIT, 4)?;
        }
        let flipped = self.piles[0].flip_all(&mut self.deck);
        info!("Table: opening layout dealt, {} cards face up in pile 0", flipped);
        Ok(())
    }

    /// 山札 `from` の `at` 番目から上を、山札 `to` の一番上に移す。`at` 番目が無ければ何もしない。
    fn move_run(&mut self, from: usize, at: usize, to: usize) -> Result<(), TableError> {
        let Some(marker) = self.piles[from].cards().get(at).copied() else {
            return Ok(());
        };
        let mut run = self.piles[from].split(marker)?;
        self.piles[to].append(&mut run)?;
        Ok(())
    }

    // --- 読み取り ---

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn card(&self, id: CardId) -> &Card {
        self.deck.get(id)
    }

    pub fn pile_count(&self) -> usize {
        self.piles.len()
    }

    /// i 番目の山札。範囲外なら `None`。
    pub fn pile(&self, i: usize) -> Option<&Pile> {
        self.piles.get(i)
    }

    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    pub fn floating(&self) -> &Pile {
        &self.floating
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn pressed_card(&self) -> Option<CardId> {
        self.state.pressed_card()
    }

    pub fn pressed_pile_index(&self) -> Option<usize> {
        self.state.pressed_pile_index()
    }

    /// y 座標から、その行の山札番号を計算する。
    ///
    /// 行の外 (負の y や、最後の行より下) は `IndexOutOfRange`。
    pub fn pile_index_at(&self, y: f32) -> Result<usize, TableError> {
        let count = self.piles.len();
        let row = (y / self.config.row_height).floor();
        let index = if row.is_finite() { row as i64 } else { i64::MIN };
        if index < 0 || index as usize >= count {
            return Err(TableError::IndexOutOfRange { index, count });
        }
        Ok(index as usize)
    }

    /// (x, y) にあるカードと、その山札番号。
    pub fn locate_card(&self, x: f32, y: f32) -> Option<(usize, CardId)> {
        let index = self.pile_index_at(y).ok()?;
        self.piles[index].locate_card_at(x, y).map(|card| (index, card))
    }

    /// 52枚が重複なく山札 (持ち上げ中も含む) に分かれてるか確かめて、各山札の様子を返す。
    pub fn validate(&self) -> Result<TableReport, TableError> {
        report::build(self)
    }

    // --- イベント処理 ---

    /// ポインターイベントを1つ処理する。
    ///
    /// 山札操作のエラーはここで止めて `Ignored` 扱いにするよ (例えば空いてる所でボタンを離した時)。
    pub fn handle_event(&mut self, event: PointerEvent) -> EventOutcome {
        let result = match event {
            PointerEvent::Down { x, y } => Ok(self.press(x, y)),
            PointerEvent::Move { x, y } => self.drag(x, y),
            PointerEvent::Up { x, y } => self.release(x, y),
            PointerEvent::DoubleClick { x, y } => self.double_click(x, y),
        };
        result.unwrap_or_else(|e| {
            warn!("Table: {:?} ignored: {}", event, e);
            EventOutcome::Ignored
        })
    }

    fn press(&mut self, x: f32, y: f32) -> EventOutcome {
        if self.state.is_dragging() {
            // ボタンを離したイベントを取りこぼした時。ドラッグ中の束はそのまま
            debug!("Table: press at ({}, {}) while dragging, ignored", x, y);
            return EventOutcome::Ignored;
        }
        let pile_index = self.pile_index_at(y).ok();
        let card = pile_index.and_then(|i| self.piles[i].locate_card_at(x, y));
        debug!("Table: press at ({}, {}) -> pile {:?}, card {:?}", x, y, pile_index, card);
        self.state = InteractionState::PressArmed { pile_index, card };
        EventOutcome::Armed
    }

    fn drag(&mut self, x: f32, y: f32) -> Result<EventOutcome, TableError> {
        match self.state {
            InteractionState::PressArmed { pile_index: Some(origin), card: Some(card) } => {
                // 次の move でもう一度 split しないように、先に押したカードを忘れる
                self.state = InteractionState::PressArmed { pile_index: Some(origin), card: None };

                let mut run = self.piles[origin].split(card)?;
                let count = run.len();
                self.floating.append(&mut run)?;
                self.floating.set_anchor(Position::new(x, y));
                self.state = InteractionState::Dragging { origin_pile: origin };

                info!("Table: picked up {} card(s) from pile {} starting at {}", count, origin, card);
                Ok(EventOutcome::DragStarted { pile: origin, count })
            }
            InteractionState::Dragging { .. } => {
                self.floating.set_anchor(Position::new(x, y));
                Ok(EventOutcome::DragMoved)
            }
            _ => Ok(EventOutcome::Ignored),
        }
    }

    fn release(&mut self, x: f32, y: f32) -> Result<EventOutcome, TableError> {
        match std::mem::take(&mut self.state) {
            InteractionState::Dragging { origin_pile } => self.drop_floating(origin_pile, x, y),
            InteractionState::PressArmed { .. } => Ok(EventOutcome::Clicked),
            InteractionState::Idle => Ok(EventOutcome::Ignored),
        }
    }

    /// 持ち上げ中の束を (x, y) の行の山札に置く。
    ///
    /// カードの上に落としたらそのカードのすぐ後ろに、カードが無い所なら一番上に積む。
    /// 行の外に落としたら元の山札の一番上に戻す (= ドラッグ前と同じ並び)。
    fn drop_floating(&mut self, origin: usize, x: f32, y: f32) -> Result<EventOutcome, TableError> {
        let count = self.floating.len();
        let Some(lead) = self.floating.bottom() else {
            // 置くカードが無い
            return Ok(EventOutcome::Ignored);
        };
        let placed = match self.pile_index_at(y) {
            Ok(target) => self.place_floating(target, x, y).map(|()| target),
            Err(e) => Err(e),
        };

        let outcome = match placed {
            Ok(target) => {
                info!("Table: dropped {} card(s) led by {} onto pile {}", count, lead, target);
                EventOutcome::Dropped { pile: target, count }
            }
            Err(e) => {
                debug!("Table: drop at ({}, {}) not placed ({}), returning to pile {}", x, y, e, origin);
                self.piles[origin].append(&mut self.floating)?;
                EventOutcome::Returned { pile: origin, count }
            }
        };
        self.floating.set_anchor(Position::ORIGIN);
        Ok(outcome)
    }

    fn place_floating(&mut self, target: usize, x: f32, y: f32) -> Result<(), TableError> {
        let pile = &mut self.piles[target];
        match pile.locate_card_at(x, y) {
            Some(marker) => {
                pile.merge(&mut self.floating, marker)?;
            }
            None => pile.append(&mut self.floating)?,
        }
        Ok(())
    }

    fn double_click(&mut self, x: f32, y: f32) -> Result<EventOutcome, TableError> {
        let index = self.pile_index_at(y)?;
        let Some(card) = self.piles[index].locate_card_at(x, y) else {
            return Ok(EventOutcome::Ignored);
        };
        let count = self.piles[index].flip_range(card, &mut self.deck)?;
        info!("Table: flipped {} card(s) in pile {} from {}", count, index, card);
        Ok(EventOutcome::Flipped { pile: index, count })
    }

    // --- 描画 ---

    /// テーブルを描く。順番は `Painter` のドキュメントを見てね。
    pub fn draw<P: Painter + ?Sized>(&self, painter: &mut P) {
        painter.clear(self.config.canvas_width, self.config.canvas_height);
        for pile in &self.piles {
            painter.draw_slot(CardBox {
                origin: pile.anchor(),
                width: self.config.card_width,
                height: self.config.card_height,
            });
            self.draw_cards(pile, painter);
        }
        // 持ち上げ中のカードは一番最後 (一番手前)
        self.draw_cards(&self.floating, painter);
    }

    fn draw_cards<P: Painter + ?Sized>(&self, pile: &Pile, painter: &mut P) {
        for (card, card_box) in pile.layout() {
            painter.draw_card(card, self.deck.is_face_up(card), card_box);
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;
