// src/logic/pile_tests.rs
// Pile のユニットテスト！

use super::*;
use crate::components::card::{Rank, Suit};

// --- テスト用ヘルパー関数 ---

fn clubs(rank: Rank) -> CardId {
    CardId::new(rank, Suit::Clubs)
}

/// ♣2 から始まる n 枚の山札を (2, 2) に作るヘルパー。
fn run_of_clubs(n: usize) -> Pile {
    let cards = (0..n).filter_map(CardId::from_index);
    Pile::from_cards(cards, Position::new(2.0, 2.0)).expect("重複なしのはず")
}

/// 別のスートで作る山札。`run_of_clubs` と重ならないように♦を使う。
fn run_of_diamonds(n: usize) -> Pile {
    let cards = (13..13 + n).filter_map(CardId::from_index);
    Pile::from_cards(cards, Position::ORIGIN).expect("重複なしのはず")
}

// --- split ---

#[test]
fn split_scenario_two_three_four_of_clubs() {
    let mut pile = run_of_clubs(3);
    assert_eq!(pile.cards(), &[clubs(Rank::Two), clubs(Rank::Three), clubs(Rank::Four)]);

    let run = pile.split(clubs(Rank::Three)).expect("♣3 はあるはず");

    assert_eq!(pile.cards(), &[clubs(Rank::Two)]);
    assert_eq!(run.cards(), &[clubs(Rank::Three), clubs(Rank::Four)]);
    assert_eq!(run.anchor(), Position::ORIGIN, "分けた山札は原点に置かれる");
    assert_eq!(run.offset(), pile.offset());
    println!("split のシナリオテスト、成功！🎉");
}

#[test]
fn split_at_bottom_empties_the_pile() {
    let mut pile = run_of_clubs(4);
    let run = pile.split(clubs(Rank::Two)).expect("♣2 はあるはず");
    assert!(pile.is_empty());
    assert_eq!(run.len(), 4);
}

#[test]
fn split_with_absent_marker_fails_without_change() {
    let mut pile = run_of_clubs(3);
    let before = pile.clone();
    let stranger = CardId::new(Rank::King, Suit::Hearts);

    assert_eq!(pile.split(stranger), Err(PileError::NotFound(stranger)));
    assert_eq!(pile, before, "失敗した split で山札が変わっちゃダメ");
}

#[test]
fn split_then_append_restores_every_marker() {
    let original = run_of_clubs(8);
    for marker in original.iter() {
        let mut pile = original.clone();
        let prefix_len = pile.position_of(marker).expect("marker はあるはず");

        let mut run = pile.split(marker).expect("split は成功するはず");
        assert_eq!(pile.len(), prefix_len);
        assert_eq!(run.len(), original.len() - prefix_len);

        pile.append(&mut run).expect("append は成功するはず");
        assert!(run.is_empty());
        assert_eq!(pile.cards(), original.cards(), "{} で分けて戻したら元通りのはず", marker);
    }
}

// --- merge ---

#[test]
fn merge_inserts_right_after_marker_in_order() {
    let mut pile = run_of_clubs(4); // ♣2 ♣3 ♣4 ♣5
    let mut other = run_of_diamonds(3); // ♦2 ♦3 ♦4
    let moved = other.cards().to_vec();

    let marker = clubs(Rank::Three);
    pile.merge(&mut other, marker).expect("merge は成功するはず");

    assert!(other.is_empty(), "merge したら相手は空になる");
    assert_eq!(pile.len(), 7);
    let at = pile.position_of(marker).expect("marker は残ってる");
    assert_eq!(&pile.cards()[at + 1..at + 4], moved.as_slice(), "順番はそのまま (逆順じゃない)");
    assert_eq!(pile.top(), Some(clubs(Rank::Five)));
}

#[test]
fn merge_after_top_card_behaves_like_append() {
    let mut merged = run_of_clubs(3);
    let mut appended = run_of_clubs(3);
    let mut a = run_of_diamonds(2);
    let mut b = run_of_diamonds(2);

    let top = merged.top().expect("空じゃない");
    merged.merge(&mut a, top).expect("merge は成功するはず");
    appended.append(&mut b).expect("append は成功するはず");

    assert_eq!(merged.cards(), appended.cards());
}

#[test]
fn merge_with_absent_marker_leaves_both_piles_alone() {
    let mut pile = run_of_clubs(3);
    let mut other = run_of_diamonds(2);
    let stranger = CardId::new(Rank::Ace, Suit::Spades);

    let result = pile.merge(&mut other, stranger).map(|p| p.len());
    assert_eq!(result, Err(PileError::NotFound(stranger)));
    assert_eq!(pile.len(), 3);
    assert_eq!(other.len(), 2, "途中まで抜き取られてたらダメ");
}

#[test]
fn merge_rejects_overlapping_cards() {
    let mut pile = run_of_clubs(3);
    let mut other = run_of_clubs(1); // ♣2 はもう pile にある
    let result = pile.merge(&mut other, clubs(Rank::Four)).map(|p| p.len());
    assert_eq!(result, Err(PileError::AlreadyPresent(clubs(Rank::Two))));
    assert_eq!(other.len(), 1);
}

// --- insert ---

#[test]
fn insert_before_and_after_use_distinct_positions() {
    let mut pile = run_of_clubs(3); // ♣2 ♣3 ♣4
    let marker = clubs(Rank::Three);
    let before = CardId::new(Rank::Two, Suit::Hearts);
    let after = CardId::new(Rank::Three, Suit::Hearts);

    pile.insert_before(before, marker).expect("insert_before は成功するはず");
    pile.insert_after(after, marker).expect("insert_after は成功するはず");

    assert_eq!(pile.cards(), &[clubs(Rank::Two), before, marker, after, clubs(Rank::Four)]);
}

#[test]
fn insert_errors() {
    let mut pile = run_of_clubs(2);
    let stranger = CardId::new(Rank::Jack, Suit::Spades);
    let newcomer = CardId::new(Rank::Queen, Suit::Spades);

    assert_eq!(pile.insert_before(newcomer, stranger), Err(PileError::NotFound(stranger)));
    assert_eq!(pile.insert_after(newcomer, stranger), Err(PileError::NotFound(stranger)));
    assert_eq!(
        pile.insert_after(clubs(Rank::Two), clubs(Rank::Three)),
        Err(PileError::AlreadyPresent(clubs(Rank::Two))),
        "同じカードを2回入れちゃダメ"
    );
    assert_eq!(pile.len(), 2);
}

#[test]
fn insert_pile_before_and_after() {
    let marker = clubs(Rank::Three);

    let mut pile = run_of_clubs(3);
    let mut other = run_of_diamonds(2);
    pile.insert_pile_before(&mut other, marker).expect("成功するはず");
    assert!(other.is_empty());
    assert_eq!(pile.position_of(marker), Some(3));
    assert_eq!(pile.cards()[1], CardId::new(Rank::Two, Suit::Diamonds));

    let mut pile = run_of_clubs(3);
    let mut other = run_of_diamonds(2);
    pile.insert_pile_after(&mut other, marker).expect("成功するはず");
    assert_eq!(pile.position_of(marker), Some(1));
    assert_eq!(pile.cards()[2], CardId::new(Rank::Two, Suit::Diamonds));
    assert_eq!(pile.top(), Some(clubs(Rank::Four)));
}

#[test]
fn append_empty_suffix_is_noop() {
    let mut pile = run_of_clubs(3);
    let mut empty = Pile::new(Position::ORIGIN);
    pile.append(&mut empty).expect("空の append は成功する");
    assert_eq!(pile.len(), 3);

    let mut target = Pile::new(Position::ORIGIN);
    let mut source = run_of_clubs(2);
    target.append(&mut source).expect("空の山札への append");
    assert_eq!(target.len(), 2);
    assert!(source.is_empty());
}

// --- flip ---

#[test]
fn flip_range_from_bottom_flips_everything() {
    let mut deck = Deck::new();
    let pile = run_of_clubs(3);

    let flipped = pile.flip_range(clubs(Rank::Two), &mut deck).expect("♣2 はあるはず");
    assert_eq!(flipped, 3);
    assert!(pile.iter().all(|c| deck.is_face_up(c)), "3枚とも表向きのはず");
}

#[test]
fn flip_range_only_touches_the_suffix_and_is_its_own_inverse() {
    let mut deck = Deck::new();
    let pile = run_of_clubs(5);
    let from = clubs(Rank::Four);
    let original = deck.clone();

    assert_eq!(pile.flip_range(from, &mut deck), Ok(3));
    assert!(!deck.is_face_up(clubs(Rank::Two)));
    assert!(!deck.is_face_up(clubs(Rank::Three)));
    assert!(deck.is_face_up(clubs(Rank::Four)));
    assert!(deck.is_face_up(clubs(Rank::Six)));

    assert_eq!(pile.flip_range(from, &mut deck), Ok(3));
    assert_eq!(deck, original, "2回めくったら元通り");
}

#[test]
fn flip_range_with_absent_card_flips_nothing() {
    let mut deck = Deck::new();
    let pile = run_of_clubs(3);
    let stranger = CardId::new(Rank::Ace, Suit::Hearts);
    assert_eq!(pile.flip_range(stranger, &mut deck), Err(PileError::NotFound(stranger)));
    assert!(deck.iter().all(|c| !c.is_face_up));
}

// --- locate ---

#[test]
fn locate_picks_topmost_overlapping_card() {
    // (2,2) から 12 ずつ右にずれる、幅 72 のカードが 5 枚
    let pile = run_of_clubs(5);

    // x=20 は 0 番目 (2..74) と 1 番目 (14..86) に入る → 上の 1 番目が勝つ
    assert_eq!(pile.locate_card_at(20.0, 50.0), Some(clubs(Rank::Three)));
    // x=3 は 0 番目だけ
    assert_eq!(pile.locate_card_at(3.0, 50.0), Some(clubs(Rank::Two)));
    // x=100 は 3 番目 (38..110) と 4 番目 (50..122)
    assert_eq!(pile.locate_card_at(100.0, 50.0), Some(clubs(Rank::Six)));
    // 一番上のカードの右端の内側
    assert_eq!(pile.locate_card_at(121.5, 97.5), Some(clubs(Rank::Six)));
    println!("locate_card_at の重なり判定テスト、成功！🎉");
}

#[test]
fn locate_outside_every_box_is_none() {
    let pile = run_of_clubs(5);
    assert_eq!(pile.locate_card_at(1.0, 50.0), None, "左端より左");
    assert_eq!(pile.locate_card_at(122.0, 50.0), None, "一番上のカードの右端 (含まない)");
    assert_eq!(pile.locate_card_at(50.0, 98.0), None, "下端 (含まない)");
    assert_eq!(pile.locate_card_at(50.0, 1.0), None, "上端より上");

    let empty = Pile::new(Position::new(2.0, 2.0));
    assert_eq!(empty.locate_card_at(10.0, 10.0), None);
}

#[test]
fn locate_follows_anchor_and_layout() {
    let mut pile = run_of_clubs(2).with_layout(Offset::new(0.0, 20.0), 50.0, 50.0);
    pile.set_anchor(Position::new(100.0, 100.0));
    assert_eq!(pile.locate_card_at(120.0, 110.0), Some(clubs(Rank::Two)));
    assert_eq!(pile.locate_card_at(120.0, 125.0), Some(clubs(Rank::Three)));
    assert_eq!(pile.locate_card_at(160.0, 125.0), None);
}

// --- その他 ---

#[test]
fn from_cards_rejects_duplicates() {
    let card = clubs(Rank::Ten);
    assert_eq!(
        Pile::from_cards([card, card], Position::ORIGIN),
        Err(PileError::AlreadyPresent(card))
    );
}

#[test]
fn display_lists_cards_or_says_empty() {
    assert_eq!(Pile::new(Position::ORIGIN).to_string(), "Empty pile.");
    assert_eq!(run_of_clubs(2).to_string(), "Two of Clubs, Three of Clubs");
}

// --- serde ---

#[test]
fn json_with_repeated_card_is_rejected() {
    let json = r#"{"cards":[0,0,0],"anchor":{"x":2.0,"y":2.0},"offset":{"dx":12.0,"dy":0.0},"card_width":72.0,"card_height":96.0}"#;
    let result = serde_json::from_str::<Pile>(json);
    assert!(result.is_err(), "同じカードが3回入った山札は読めちゃダメ");
}

#[test]
fn serialized_pile_reads_back_the_same() {
    let pile = run_of_clubs(4).with_layout(Offset::new(0.0, 20.0), 60.0, 80.0);
    let json = serde_json::to_string(&pile).expect("JSON にできるはず");
    let read: Pile = serde_json::from_str(&json).expect("読めるはず");
    assert_eq!(read, pile);
    println!("Pile の JSON 読み込みテスト、成功！🎉");
}
