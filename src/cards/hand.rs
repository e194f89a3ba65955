/// An unordered set of Cards stored as a 52-bit bitstring, one bit
/// per unique card. Set operations, suit filters, and rank tallies all
/// reduce to bitwise arithmetic, which is what the odds detectors live on.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// the cards of one suit
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    /// how many cards of this rank are in the set
    pub fn count(&self, rank: &Rank) -> usize {
        (self.0 & u64::from(*rank)).count_ones() as usize
    }
    /// disjoint union
    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }

    const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

/// one-way projection onto a 13-bit rank-presence mask
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        Rank::all()
            .iter()
            .filter(|rank| Hand::count(&h, rank) > 0)
            .map(|rank| u16::from(*rank))
            .fold(0u16, |a, b| a | b)
    }
}

/// str isomorphism, whitespace-separated card codes
impl From<&str> for Hand {
    fn from(s: &str) -> Self {
        Self::from(
            s.split_whitespace()
                .map(Card::from)
                .collect::<Vec<Card>>(),
        )
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in Vec::<Card>::from(*self) {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl crate::Arbitrary for Hand {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let cards = rand::Rng::random::<u64>(rng);
        Self(cards & Self::mask())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_u64() {
        let hand = Hand::random();
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::from("Jc Ts 2c Js").into_iter();
        assert_eq!(iter.next(), Some(Card::from("2c")));
        assert_eq!(iter.next(), Some(Card::from("Ts")));
        assert_eq!(iter.next(), Some(Card::from("Jc")));
        assert_eq!(iter.next(), Some(Card::from("Js")));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn rank_tally() {
        let hand = Hand::from("7c 7d 7h 2s");
        assert_eq!(Hand::count(&hand, &Rank::Seven), 3);
        assert_eq!(Hand::count(&hand, &Rank::Two), 1);
        assert_eq!(Hand::count(&hand, &Rank::Ace), 0);
    }

    #[test]
    fn suit_filter() {
        let hand = Hand::from("2c 3d 4h 5s 6c Tc");
        assert_eq!(hand.of(&Suit::Club).size(), 3);
        assert_eq!(hand.of(&Suit::Spade).size(), 1);
    }

    #[test]
    fn rank_mask() {
        let hand = Hand::from("2c 2d Ah");
        assert_eq!(
            u16::from(hand),
            u16::from(Rank::Two) | u16::from(Rank::Ace)
        );
    }
}

use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
