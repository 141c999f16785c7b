// src/logic/pile.rs
//! 山札 (`Pile`) と、その分割・合体・挿入の操作。
//!
//! 山札はカード ID の並びで、0 番目が一番下 (最初に描かれる)、最後が一番上。
//! 並びを直接いじるメソッドは公開しないで、カードが2か所に存在したり消えたりしない操作だけを出してるよ。

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::components::card::CardId;
use crate::components::position::{CardBox, Offset, Position};
use crate::config::layout::{CARD_HEIGHT, CARD_OFFSET_X, CARD_OFFSET_Y, CARD_WIDTH};
use crate::error::PileError;
use crate::logic::deck::Deck;

/// キャンバス上のある位置に置かれた、カードの山だよ！🂠🂡🂢
///
/// JSON から読む時も `from_cards` を通すので、同じカードが2回入った山札は作れない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PileData")]
pub struct Pile {
    cards: Vec<CardId>,
    anchor: Position,
    offset: Offset,
    card_width: f32,
    card_height: f32,
}

/// デシリアライズ用の生データ。中身は `Pile::try_from` で検査してから `Pile` になるよ。
#[derive(Deserialize)]
struct PileData {
    cards: Vec<CardId>,
    anchor: Position,
    offset: Offset,
    card_width: f32,
    card_height: f32,
}

impl TryFrom<PileData> for Pile {
    type Error = PileError;

    fn try_from(data: PileData) -> Result<Self, Self::Error> {
        Ok(Pile::from_cards(data.cards, data.anchor)?.with_layout(data.offset, data.card_width, data.card_height))
    }
}

impl Pile {
    /// `anchor` に空の山札を作る。
    pub fn new(anchor: Position) -> Self {
        Pile {
            cards: Vec::new(),
            anchor,
            offset: Offset::new(CARD_OFFSET_X, CARD_OFFSET_Y),
            card_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,
        }
    }

    /// カードの並びから山札を作る。
    ///
    /// 同じカードが2回出てきたら `AlreadyPresent` を返すよ。
    pub fn from_cards<I>(cards: I, anchor: Position) -> Result<Self, PileError>
    where
        I: IntoIterator<Item = CardId>,
    {
        let mut pile = Pile::new(anchor);
        for card in cards {
            if pile.contains(card) {
                return Err(PileError::AlreadyPresent(card));
            }
            pile.cards.push(card);
        }
        Ok(pile)
    }

    /// 重複が無いと分かってる並び (デッキの並べ替えなど) から山札を作る。
    pub(crate) fn from_deck_order(cards: Vec<CardId>, anchor: Position) -> Self {
        debug_assert!(cards.iter().all_unique(), "deck order must not repeat a card");
        Pile { cards, ..Pile::new(anchor) }
    }

    /// カードのずらし幅とサイズを指定する。
    pub fn with_layout(mut self, offset: Offset, card_width: f32, card_height: f32) -> Self {
        self.offset = offset;
        self.card_width = card_width;
        self.card_height = card_height;
        self
    }

    // --- 読み取り ---

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }

    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    pub fn position_of(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// 一番上 (最後に描かれる) のカード。
    pub fn top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// 一番下のカード。
    pub fn bottom(&self) -> Option<CardId> {
        self.cards.first().copied()
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: Position) {
        self.anchor = anchor;
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// k 番目のカードの左上の位置。
    pub fn card_origin(&self, k: usize) -> Position {
        self.anchor.shifted(self.offset, k)
    }

    /// k 番目のカードの矩形。
    pub fn card_box(&self, k: usize) -> CardBox {
        CardBox {
            origin: self.card_origin(k),
            width: self.card_width,
            height: self.card_height,
        }
    }

    /// 描く順番 (下から上) に、カードとその矩形を返す。
    pub fn layout(&self) -> impl Iterator<Item = (CardId, CardBox)> + '_ {
        self.cards.iter().enumerate().map(move |(k, &card)| (card, self.card_box(k)))
    }

    /// (x, y) にあるカードを探す。
    ///
    /// カードは重なって描かれるので、点を含む矩形が複数あったら一番上 (番号が一番大きい) のカードが勝つよ。
    pub fn locate_card_at(&self, x: f32, y: f32) -> Option<CardId> {
        (0..self.cards.len())
            .rev()
            .find(|&k| self.card_box(k).contains(x, y))
            .map(|k| self.cards[k])
    }

    // --- 分割・合体 ---

    /// `marker` とそれより上のカード全部を抜き出して、新しい山札として返す。
    ///
    /// 新しい山札は原点に置かれて、ずらし幅とサイズはこの山札と同じ。
    /// `marker` が一番下なら、この山札は空になる。
    pub fn split(&mut self, marker: CardId) -> Result<Pile, PileError> {
        let index = self.index_of(marker)?;
        let suffix = self.cards.split_off(index);
        Ok(Pile {
            cards: suffix,
            anchor: Position::ORIGIN,
            offset: self.offset,
            card_width: self.card_width,
            card_height: self.card_height,
        })
    }

    /// `other` のカードを全部、順番を保ったまま `marker` のすぐ後ろに入れる。`other` は空になる。
    pub fn merge(&mut self, other: &mut Pile, marker: CardId) -> Result<&mut Pile, PileError> {
        self.insert_pile_after(other, marker)?;
        Ok(self)
    }

    /// `suffix` のカードを全部この山札の一番上に積む。`suffix` は空になる。
    pub fn append(&mut self, suffix: &mut Pile) -> Result<(), PileError> {
        if suffix.is_empty() {
            return Ok(());
        }
        self.check_disjoint(suffix)?;
        self.cards.append(&mut suffix.cards);
        Ok(())
    }

    /// `card` を `marker` のすぐ前 (下) に入れる。
    pub fn insert_before(&mut self, card: CardId, marker: CardId) -> Result<(), PileError> {
        let index = self.index_of(marker)?;
        self.check_absent(card)?;
        self.cards.insert(index, card);
        Ok(())
    }

    /// `card` を `marker` のすぐ後ろ (上) に入れる。
    pub fn insert_after(&mut self, card: CardId, marker: CardId) -> Result<(), PileError> {
        let index = self.index_of(marker)?;
        self.check_absent(card)?;
        self.cards.insert(index + 1, card);
        Ok(())
    }

    /// `other` を丸ごと `marker` のすぐ前に入れる。`other` は空になる。
    pub fn insert_pile_before(&mut self, other: &mut Pile, marker: CardId) -> Result<(), PileError> {
        let index = self.index_of(marker)?;
        self.splice_at(index, other)
    }

    /// `other` を丸ごと `marker` のすぐ後ろに入れる。`other` は空になる。
    pub fn insert_pile_after(&mut self, other: &mut Pile, marker: CardId) -> Result<(), PileError> {
        let index = self.index_of(marker)?;
        self.splice_at(index + 1, other)
    }

    // --- 向き ---

    /// `from` とそれより上のカードを全部めくる。めくった枚数を返すよ。
    pub fn flip_range(&self, from: CardId, deck: &mut Deck) -> Result<usize, PileError> {
        let index = self.index_of(from)?;
        let run = &self.cards[index..];
        run.iter().for_each(|&card| deck.flip(card));
        Ok(run.len())
    }

    /// 山札を全部めくる。
    pub fn flip_all(&self, deck: &mut Deck) -> usize {
        self.cards.iter().for_each(|&card| deck.flip(card));
        self.cards.len()
    }

    // --- 内部ヘルパー ---

    fn index_of(&self, marker: CardId) -> Result<usize, PileError> {
        self.position_of(marker).ok_or(PileError::NotFound(marker))
    }

    fn check_absent(&self, card: CardId) -> Result<(), PileError> {
        if self.contains(card) {
            return Err(PileError::AlreadyPresent(card));
        }
        Ok(())
    }

    fn check_disjoint(&self, other: &Pile) -> Result<(), PileError> {
        match other.iter().find(|&card| self.contains(card)) {
            Some(card) => Err(PileError::AlreadyPresent(card)),
            None => Ok(()),
        }
    }

    fn splice_at(&mut self, index: usize, other: &mut Pile) -> Result<(), PileError> {
        self.check_disjoint(other)?;
        let moved: Vec<CardId> = other.cards.drain(..).collect();
        self.cards.splice(index..index, moved);
        Ok(())
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Empty pile.")
        } else {
            write!(f, "{}", self.cards.iter().join(", "))
        }
    }
}

#[cfg(test)]
#[path = "pile_tests.rs"]
mod pile_tests;
