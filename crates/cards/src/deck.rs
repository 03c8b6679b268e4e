// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Serialize, Serializer};
use std::{cmp::Ordering, fmt, str::FromStr};

use crate::parser::{ParseError, parse_cards};

/// A Poker card.
///
/// A card is packed in a single byte with the rank index in the high bits and
/// the suit index in the two low bits:
///
/// ```text
///   +--------+
///   |xxrrrrss|
///   +--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   s = suit of card (clubs=0,diamonds=1,hearts=2,spades=3)
/// ```
///
/// Two cards are equal when both rank and suit match, use [Card::cmp_rank] to
/// order cards by rank only.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((rank as u8) << 2) | suit as u8)
    }

    /// This card unique id in the range 0..52.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::ALL[(self.0 >> 2) as usize]
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        Suit::ALL[(self.0 & 0x3) as usize]
    }

    /// Compares two cards by rank, aces are above every other rank.
    pub fn cmp_rank(&self, other: &Card) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_cards(s)?.as_slice() {
            [card] => Ok(*card),
            cards => Err(ParseError::NotOneCard { found: cards.len() }),
        }
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    /// All ranks from deuce to ace.
    pub const ALL: [Rank; Rank::COUNT] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// The rank bucket index, deuce is 0 and ace is 12.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The rank face value, deuce is 2 and ace is 14.
    pub fn value(self) -> u8 {
        self as u8 + 2
    }

    /// Parses a rank notation character.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// All suits.
    pub const ALL: [Suit; Suit::COUNT] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    /// The suit bucket index.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parses a suit letter or one of the filled or outlined suit glyphs.
    pub fn from_char(c: char) -> Option<Suit> {
        let suit = match c {
            'C' | '\u{2663}' | '\u{2667}' => Suit::Clubs,
            'D' | '\u{2666}' | '\u{2662}' => Suit::Diamonds,
            'H' | '\u{2665}' | '\u{2661}' => Suit::Hearts,
            'S' | '\u{2660}' | '\u{2664}' => Suit::Spades,
            _ => return None,
        };

        Some(suit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck used to enumerate hands.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// The largest hand [Deck::for_each] enumerates.
    pub const MAX_HAND: usize = 7;

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Calls the `f` closure for each k-cards hand, hands are visited in
    /// lexicographic order of the deck positions.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=Self::MAX_HAND).contains(&k), "1 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut idx = [0usize, 1, 2, 3, 4, 5, 6];
        let mut hand = [Card::new(Rank::Deuce, Suit::Clubs); Self::MAX_HAND];

        loop {
            for (slot, &pos) in hand.iter_mut().zip(&idx[..k]) {
                *slot = self.cards[pos];
            }

            f(&hand[..k]);

            // Find the rightmost position that can still move forward.
            let mut j = k;
            loop {
                if j == 0 {
                    return;
                }

                j -= 1;
                if idx[j] < n - k + j {
                    break;
                }
            }

            idx[j] += 1;
            for m in (j + 1)..k {
                idx[m] = idx[m - 1] + 1;
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut ids = HashSet::default();

        for card in Deck::default() {
            assert_eq!(card.id() >> 2, card.rank() as u8);
            assert_eq!(card.id() & 0x3, card.suit() as u8);
            assert!((card.id() as usize) < Deck::SIZE);
            ids.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(ids.len(), Deck::SIZE);

        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.rank(), Rank::King);
        assert_eq!(kd.suit(), Suit::Diamonds);
        assert_eq!(kd.id(), (11 << 2) | 1);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(c.to_string(), "AC");
        assert_eq!(format!("{c:?}"), "Card(AC)");
    }

    #[test]
    fn card_from_str() {
        assert_eq!("AS".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!(" 9\u{2661} ".parse::<Card>(), Ok(Card::new(Rank::Nine, Suit::Hearts)));
        assert_eq!("".parse::<Card>(), Err(ParseError::NotOneCard { found: 0 }));
        assert_eq!("AS KD".parse::<Card>(), Err(ParseError::NotOneCard { found: 2 }));
    }

    #[test]
    fn card_serialize() {
        let c = Card::new(Rank::Queen, Suit::Clubs);
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"QC\"");
        assert_eq!(serde_json::to_string(&Rank::Ten).unwrap(), "\"Ten\"");
    }

    #[test]
    fn rank_order() {
        let ace = Card::new(Rank::Ace, Suit::Clubs);
        let king = Card::new(Rank::King, Suit::Spades);
        let deuce = Card::new(Rank::Deuce, Suit::Spades);

        assert_eq!(ace.cmp_rank(&king), Ordering::Greater);
        assert_eq!(deuce.cmp_rank(&ace), Ordering::Less);
        assert_eq!(ace.cmp_rank(&Card::new(Rank::Ace, Suit::Hearts)), Ordering::Equal);
        assert_ne!(ace, Card::new(Rank::Ace, Suit::Hearts));

        assert_eq!(Rank::Deuce.value(), 2);
        assert_eq!(Rank::Ace.value(), 14);
        assert!(Rank::ranks().zip(Rank::ranks().skip(1)).all(|(a, b)| a < b));
    }

    #[test]
    fn rank_suit_chars() {
        for rank in Rank::ranks() {
            let c = rank.to_string().chars().next().unwrap();
            assert_eq!(Rank::from_char(c), Some(rank));
        }

        for suit in Suit::suits() {
            let c = suit.to_string().chars().next().unwrap();
            assert_eq!(Suit::from_char(c), Some(suit));
        }

        for (glyphs, suit) in [
            ("\u{2663}\u{2667}", Suit::Clubs),
            ("\u{2666}\u{2662}", Suit::Diamonds),
            ("\u{2665}\u{2661}", Suit::Hearts),
            ("\u{2660}\u{2664}", Suit::Spades),
        ] {
            assert!(glyphs.chars().all(|c| Suit::from_char(c) == Some(suit)));
        }

        assert_eq!(Rank::from_char('1'), None);
        assert_eq!(Rank::from_char('t'), None);
        assert_eq!(Suit::from_char('B'), None);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(1, |cards| {
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), Deck::SIZE);
    }

    #[test]
    fn deck_for_each_distinct_cards() {
        let deck = Deck::default();

        let mut count = 0;
        deck.for_each(3, |cards| {
            assert_ne!(cards[0], cards[1]);
            assert_ne!(cards[1], cards[2]);
            assert_ne!(cards[0], cards[2]);
            count += 1;
        });
        assert_eq!(count, 22_100);
    }

    fn deck_without(skip: impl Fn(&Card) -> bool) -> Deck {
        Deck {
            cards: Deck::default().into_iter().filter(|c| !skip(c)).collect(),
        }
    }

    #[test]
    fn deck_for_each_partial_deck() {
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        let kd = Card::new(Rank::King, Suit::Diamonds);
        let deck = deck_without(|c| *c == ad || *c == kd);
        assert_eq!(deck.count(), 50);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert!(!cards.contains(&ad));
            count += 1;
        });
        assert_eq!(count, 2_118_760);
    }

    #[test]
    fn deck_for_each_small_deck() {
        let deck = deck_without(|c| c.id() >= 3);
        assert_eq!(deck.count(), 3);

        let mut count = 0;
        deck.for_each(5, |_| count += 1);
        assert_eq!(count, 0);

        deck.for_each(3, |_| count += 1);
        assert_eq!(count, 1);
    }
}
