// src/components/card.rs

use std::fmt;

// serde を使う宣言！カード情報を JSON にして JS 側に渡す時に使うよ。
use serde::{Deserialize, Serialize};

/// カードのスート（マーク）を表す列挙型だよ！♣️♦️❤️♠️
///
/// 並び順は Clubs → Diamonds → Hearts → Spades。`CardId` の番号付けもこの順番に依存してる！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,    // ♣️
    Diamonds, // ♦️
    Hearts,   // ❤️
    Spades,   // ♠️
}

/// カードのランク（数字）を表す列挙型だよ！ 2, 3, ..., K, A
///
/// 2 が一番弱くて A が一番強い並び。`PartialOrd, Ord` で大小比較もできるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

/// 全スートの配列。デッキを作る時のループで使うよ！
pub const ALL_SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

/// 全ランクの配列。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// 1デッキのカード枚数。
pub const DECK_SIZE: usize = ALL_SUITS.len() * ALL_RANKS.len();

impl Suit {
    fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    /// 赤いスートかどうか。描画でラベルの色を決める時に使うよ。
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }

    /// 描画用の記号。
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

impl Rank {
    fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// カードの隅に描く短いラベル ("2", "10", "J", "A" など)。
    pub fn short_label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// カード1枚を指す安定したハンドル (0〜51) だよ！🃏
///
/// 番号は `rank + 13 * suit`。カードの実体 (`Card`) は `Deck` のアリーナにあって、
/// 山札 (`Pile`) はこのハンドルだけを持つ。コピーしても「カードが2枚になる」わけじゃないから安心！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(u8);

impl CardId {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        CardId((rank.index() + ALL_RANKS.len() * suit.index()) as u8)
    }

    /// アリーナ番号から作る。範囲外なら `None`。
    pub fn from_index(index: usize) -> Option<Self> {
        (index < DECK_SIZE).then(|| CardId(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn rank(self) -> Rank {
        ALL_RANKS[self.index() % ALL_RANKS.len()]
    }

    pub fn suit(self) -> Suit {
        ALL_SUITS[self.index() / ALL_RANKS.len()]
    }

    /// よくある 52 枚セットの画像 (1.png〜52.png) での番号。
    /// A♣ が 1 で、ランクが下がるごとに 4 ずつ増える並び。
    pub fn asset_index(self) -> usize {
        let rank_order = ALL_RANKS.len() - 1 - self.rank().index();
        let suit_order = match self.suit() {
            Suit::Clubs => 0,
            Suit::Spades => 1,
            Suit::Hearts => 2,
            Suit::Diamonds => 3,
        };
        ALL_SUITS.len() * rank_order + suit_order + 1
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank().name(), self.suit().name())
    }
}

/// カードそのものの状態だよ！ 向き (表/裏) だけが変化する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub is_face_up: bool, // カードが表向きかどうか
}

impl Card {
    /// 裏向きのカードを作る。
    pub fn face_down(id: CardId) -> Self {
        Card { id, is_face_up: false }
    }

    pub fn flip(&mut self) {
        self.is_face_up = !self.is_face_up;
    }

    pub fn rank(&self) -> Rank {
        self.id.rank()
    }

    pub fn suit(&self) -> Suit {
        self.id.suit()
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_id_round_trips_rank_and_suit() {
        for &suit in ALL_SUITS.iter() {
            for &rank in ALL_RANKS.iter() {
                let id = CardId::new(rank, suit);
                assert_eq!(id.rank(), rank);
                assert_eq!(id.suit(), suit);
                assert!(id.index() < DECK_SIZE);
            }
        }
        assert_eq!(CardId::from_index(DECK_SIZE), None);
        println!("CardId のランク/スート変換テスト、成功！🎉");
    }

    #[test]
    fn card_id_display() {
        let id = CardId::new(Rank::Two, Suit::Clubs);
        assert_eq!(id.to_string(), "Two of Clubs");
        assert_eq!(CardId::new(Rank::Ace, Suit::Spades).to_string(), "Ace of Spades");
    }

    #[test]
    fn asset_indices_cover_one_to_fifty_two() {
        let mut seen: Vec<usize> = (0..DECK_SIZE)
            .filter_map(CardId::from_index)
            .map(CardId::asset_index)
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (1..=DECK_SIZE).collect::<Vec<_>>());
        assert_eq!(CardId::new(Rank::Ace, Suit::Clubs).asset_index(), 1);
    }

    #[test]
    fn flip_toggles_orientation() {
        let mut card = Card::face_down(CardId::new(Rank::Queen, Suit::Hearts));
        assert!(!card.is_face_up);
        card.flip();
        assert!(card.is_face_up);
        card.flip();
        assert!(!card.is_face_up, "2回めくったら元に戻るはず");
    }

    #[test]
    fn rank_comparison() {
        assert!(Rank::Two < Rank::Three);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::King < Rank::Ace);
        println!("Rank の比較テスト、成功！🎉");
    }
}
