// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Top cards selection.
use holdem_cards::Card;

use super::{CardCounts, Classification, HAND_SIZE};

/// The cards that make a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Selection {
    /// The hand cards, category defining cards first then kickers.
    pub top_cards: Vec<Card>,
    /// The most significant category defining card.
    pub representative: Option<Card>,
}

/// Picks the top cards of a classified pool.
pub(crate) fn select(class: &Classification, counts: &CardCounts, pool: &[Card]) -> Selection {
    // A high card hand with less than five cards is the whole pool.
    if matches!(class, Classification::HighCard) && pool.len() < HAND_SIZE {
        let top_cards = by_rank_desc(pool.iter().copied());
        return Selection {
            representative: top_cards.first().copied(),
            top_cards,
        };
    }

    let defining = defining_cards(class, counts, pool);
    let representative = defining.first().copied();

    Selection {
        top_cards: backfill(defining, pool),
        representative,
    }
}

/// The cards that justify the category, most significant first.
fn defining_cards(class: &Classification, counts: &CardCounts, pool: &[Card]) -> Vec<Card> {
    match class {
        Classification::HighCard => pool
            .iter()
            .copied()
            .reduce(|best, c| if c.cmp_rank(&best).is_gt() { c } else { best })
            .into_iter()
            .collect(),
        Classification::OnePair(ranks)
        | Classification::TwoPair(ranks)
        | Classification::ThreeOfAKind(ranks)
        | Classification::FullHouse(ranks)
        | Classification::FourOfAKind(ranks) => {
            // Larger groups first, then higher ranks.
            let mut ranks = ranks.clone();
            ranks.sort_by(|a, b| counts.rank(*b).cmp(&counts.rank(*a)).then(b.cmp(a)));

            let mut cards = Vec::with_capacity(HAND_SIZE);
            for rank in ranks {
                for card in pool.iter().filter(|c| c.rank() == rank) {
                    if cards.len() < HAND_SIZE && !cards.contains(card) {
                        cards.push(*card);
                    }
                }
            }

            cards
        }
        Classification::Straight(run) => run
            .ranks_from_top()
            .iter()
            .filter_map(|&rank| pool.iter().find(|c| c.rank() == rank))
            .copied()
            .collect(),
        Classification::Flush(suit) => {
            let mut cards = unique(pool.iter().copied().filter(|c| c.suit() == *suit));
            cards.sort_by(|a, b| b.cmp_rank(a));
            cards.truncate(HAND_SIZE);
            cards
        }
        Classification::StraightFlush(run, suit) | Classification::RoyalFlush(run, suit) => run
            .ranks_from_top()
            .iter()
            .filter_map(|&rank| pool.iter().find(|c| c.rank() == rank && c.suit() == *suit))
            .copied()
            .collect(),
    }
}

/// Fills the hand with the highest cards not already selected.
fn backfill(mut cards: Vec<Card>, pool: &[Card]) -> Vec<Card> {
    for card in by_rank_desc(pool.iter().copied()) {
        if cards.len() >= HAND_SIZE {
            break;
        }

        if !cards.contains(&card) {
            cards.push(card);
        }
    }

    cards
}

/// Sorts cards from the highest rank to the lowest, keeping the pool order for
/// cards with the same rank.
fn by_rank_desc(cards: impl Iterator<Item = Card>) -> Vec<Card> {
    let mut cards = cards.collect::<Vec<_>>();
    cards.sort_by(|a, b| b.cmp_rank(a));
    cards
}

fn unique(cards: impl Iterator<Item = Card>) -> Vec<Card> {
    cards.fold(Vec::new(), |mut acc, card| {
        if !acc.contains(&card) {
            acc.push(card);
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_cards::parse_cards;

    fn select_str(pool: &str) -> Selection {
        let pool = parse_cards(pool).unwrap();
        let counts = CardCounts::new(&pool);
        select(&Classification::new(&counts), &counts, &pool)
    }

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn high_card() {
        let sel = select_str("2C 5D 9H JS KC 7D 3H");
        assert_eq!(sel.top_cards, cards("KC JS 9H 7D 5D"));
        assert_eq!(sel.representative, Some(cards("KC")[0]));
    }

    #[test]
    fn high_card_short_pool() {
        let sel = select_str("5D AH 9C");
        assert_eq!(sel.top_cards, cards("AH 9C 5D"));
        assert_eq!(sel.representative, Some(cards("AH")[0]));

        let sel = select_str("");
        assert!(sel.top_cards.is_empty());
        assert_eq!(sel.representative, None);
    }

    #[test]
    fn pair_kickers() {
        let sel = select_str("2C 2S 7S 8H AC 4H 3D");
        assert_eq!(sel.top_cards, cards("2C 2S AC 8H 7S"));
        assert_eq!(sel.representative, Some(cards("2C")[0]));
    }

    #[test]
    fn set_kickers() {
        let sel = select_str("2C 2S 7S 8H AC 2H 3D");
        assert_eq!(sel.top_cards, cards("2C 2S 2H AC 8H"));
        assert_eq!(sel.representative, Some(cards("2C")[0]));
    }

    #[test]
    fn two_pair_higher_pair_first() {
        let sel = select_str("4C 4S KS KH 9C 2D 3D");
        assert_eq!(sel.top_cards, cards("KS KH 4C 4S 9C"));
        assert_eq!(sel.representative, Some(cards("KS")[0]));
    }

    #[test]
    fn three_pairs_capped() {
        // The lowest pair fills the last slot.
        let sel = select_str("4C 4S KS KH 9C 9D AD");
        assert_eq!(sel.top_cards, cards("KS KH 9C 9D 4C"));
    }

    #[test]
    fn full_house_set_first() {
        let sel = select_str("KS KH 2C 2S 2D 9C 7H");
        assert_eq!(sel.top_cards, cards("2C 2S 2D KS KH"));
        assert_eq!(sel.representative, Some(cards("2C")[0]));

        // Two sets, the higher one first.
        let sel = select_str("3C 3S 3D KH KC KD 9H");
        assert_eq!(sel.top_cards, cards("KH KC KD 3C 3S"));
    }

    #[test]
    fn quads_first() {
        let sel = select_str("KS KH KD 3C 3S 3D 3H");
        assert_eq!(sel.top_cards, cards("3C 3S 3D 3H KS"));
        assert_eq!(sel.representative, Some(cards("3C")[0]));

        let sel = select_str("QS QH QD QC 4S 9D 2H");
        assert_eq!(sel.top_cards, cards("QS QH QD QC 9D"));
    }

    #[test]
    fn straight_one_card_per_rank() {
        let sel = select_str("4C 5D 5H 6H 7S 8C 2D");
        assert_eq!(sel.top_cards, cards("8C 7S 6H 5D 4C"));
        assert_eq!(sel.representative, Some(cards("8C")[0]));
    }

    #[test]
    fn wheel_representative_is_five() {
        let sel = select_str("4H 5C 7S 8H AC 2H 3D");
        assert_eq!(sel.top_cards, cards("5C 4H 3D 2H AC"));
        assert_eq!(sel.representative, Some(cards("5C")[0]));
    }

    #[test]
    fn flush_highest_suited_cards() {
        let sel = select_str("2H 5H 8H 4D 3H AH 6H");
        assert_eq!(sel.top_cards, cards("AH 8H 6H 5H 3H"));
        assert_eq!(sel.representative, Some(cards("AH")[0]));
    }

    #[test]
    fn straight_flush_suited_run() {
        let sel = select_str("9S 9D TS JS QS KS 2C");
        assert_eq!(sel.top_cards, cards("KS QS JS TS 9S"));

        let sel = select_str("AD 2D 3D 4D 5D KC QS");
        assert_eq!(sel.top_cards, cards("5D 4D 3D 2D AD"));
        assert_eq!(sel.representative, Some(cards("5D")[0]));

        // The off suit ten and jack extend the straight, not the hand.
        let sel = select_str("5S 6S TH 7S 8S JD 9S");
        assert_eq!(sel.top_cards, cards("9S 8S 7S 6S 5S"));
        assert_eq!(sel.representative, Some(cards("9S")[0]));

        let sel = select_str("AS 2S 3S 4S 5S 6H");
        assert_eq!(sel.top_cards, cards("5S 4S 3S 2S AS"));
        assert_eq!(sel.representative, Some(cards("5S")[0]));
    }

    #[test]
    fn duplicates_are_skipped() {
        let sel = select_str("KS KS 2C 7D 9H");
        assert_eq!(sel.top_cards, cards("KS 9H 7D 2C"));
    }

    #[test]
    fn short_pool_pair() {
        let sel = select_str("2C 2S 9D");
        assert_eq!(sel.top_cards, cards("2C 2S 9D"));
        assert_eq!(sel.representative, Some(cards("2C")[0]));
    }
}
