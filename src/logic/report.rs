// src/logic/report.rs
//! テーブルの状態チェックと、JS に渡す JSON 用のスナップショット。

use itertools::Itertools;
use serde::Serialize;

use crate::components::card::{CardId, Rank, Suit, DECK_SIZE};
use crate::error::TableError;
use crate::logic::deck;
use crate::logic::pile::Pile;
use crate::logic::table::Table;

/// カード1枚の情報。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardReport {
    pub id: CardId,
    pub name: String,
    pub rank: Rank,
    pub suit: Suit,
    pub is_face_up: bool,
    pub asset_index: usize,
}

/// 山札1つの情報。`index` は固定の山札なら行番号、持ち上げ中の山札なら `None`。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PileReport {
    pub index: Option<usize>,
    pub x: f32,
    pub y: f32,
    pub length: usize,
    pub cards: Vec<CardReport>,
}

/// テーブル全体の情報。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableReport {
    pub piles: Vec<PileReport>,
    pub floating: PileReport,
    pub is_dragging: bool,
    pub total_cards: usize,
}

/// 52枚がちょうど1回ずつ現れるか確かめてからレポートを作る。
pub(crate) fn build(table: &Table) -> Result<TableReport, TableError> {
    let all_cards = || table.piles().iter().chain(std::iter::once(table.floating())).flat_map(|pile| pile.iter());

    if let Some(card) = all_cards().duplicates().next() {
        return Err(TableError::DuplicateCard(card));
    }
    let mut seen = [false; DECK_SIZE];
    all_cards().for_each(|card| seen[card.index()] = true);
    if let Some(card) = deck::standard_order().find(|card| !seen[card.index()]) {
        return Err(TableError::MissingCard(card));
    }

    let piles = table
        .piles()
        .iter()
        .enumerate()
        .map(|(i, pile)| pile_report(table, pile, Some(i)))
        .collect();

    Ok(TableReport {
        piles,
        floating: pile_report(table, table.floating(), None),
        is_dragging: table.is_dragging(),
        total_cards: all_cards().count(),
    })
}

fn pile_report(table: &Table, pile: &Pile, index: Option<usize>) -> PileReport {
    let anchor = pile.anchor();
    PileReport {
        index,
        x: anchor.x,
        y: anchor.y,
        length: pile.len(),
        cards: pile
            .iter()
            .map(|id| CardReport {
                id,
                name: id.to_string(),
                rank: id.rank(),
                suit: id.suit(),
                is_face_up: table.card(id).is_face_up,
                asset_index: id.asset_index(),
            })
            .collect(),
    }
}
