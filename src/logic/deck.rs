// src/logic/deck.rs

use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, CardId, DECK_SIZE};

/// 52枚のカードの実体を持つアリーナだよ！🃏
///
/// カードは起動時に1回だけ全部裏向きで作られて、その後は消えない。
/// 山札 (`Pile`) は `CardId` だけを持ってて、向きを変えたい時はここを通すんだ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>, // cards[i].id.index() == i
}

impl Deck {
    /// 全部裏向きの新しいデッキを作る。
    pub fn new() -> Self {
        let cards = standard_order().map(Card::face_down).collect();
        Deck { cards }
    }

    pub fn get(&self, id: CardId) -> &Card {
        // CardId は 0..52 しか作れないので、範囲外にはならない
        &self.cards[id.index()]
    }

    pub fn is_face_up(&self, id: CardId) -> bool {
        self.get(id).is_face_up
    }

    pub fn flip(&mut self, id: CardId) {
        self.cards[id.index()].flip();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// アリーナ順 (♣2, ♣3, ..., ♣A, ♦2, ...) の全カード ID。
pub fn standard_order() -> impl Iterator<Item = CardId> {
    (0..DECK_SIZE).filter_map(CardId::from_index)
}

/// シャッフルした全カード ID の並びを作る。
///
/// # 引数
/// * `rng` - 乱数生成器。テストでは seed 固定のものを渡すと再現できるよ。
pub fn shuffled_order<R: Rng + ?Sized>(rng: &mut R) -> Vec<CardId> {
    let mut order: Vec<CardId> = standard_order().collect();
    order.shuffle(rng);
    order
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn deck_creation() {
        let deck = Deck::new();

        // 1. カードが52枚あるかチェック！
        assert_eq!(deck.len(), 52);

        // 2. アリーナの番号と ID が一致してるか
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.id.index(), i, "アリーナの {} 番目の ID がずれてる", i);
        }

        // 3. すべてのカードが裏向きかチェック！
        assert!(deck.iter().all(|card| !card.is_face_up), "デッキに表向きのカードが含まれています！");

        println!("Deck::new のテスト、成功！🎉 デッキは正しく生成されました！");
    }

    #[test]
    fn flip_goes_through_arena() {
        let mut deck = Deck::new();
        let id = CardId::from_index(7).expect("7 は範囲内");
        deck.flip(id);
        assert!(deck.is_face_up(id));
        assert_eq!(deck.iter().filter(|c| c.is_face_up).count(), 1, "めくったのは1枚だけのはず");
    }

    #[test]
    fn shuffled_order_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let order = shuffled_order(&mut rng);
        assert_eq!(order.len(), DECK_SIZE);

        let unique: HashSet<CardId> = order.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE, "シャッフル後に重複カードあり！");

        let standard: Vec<CardId> = standard_order().collect();
        // ごく稀に同じ順番になる可能性もあるので、完全なテストではない
        assert_ne!(order, standard, "シャッフルしても順番が変わってない");
    }
}
