#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// u64 isomorphism
/// each card is just one bit turned on
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        Self::from(n.trailing_zeros() as u8)
    }
}

/// fallible parse of a card code: rank then suit, e.g. "As", "10c", "1d".
/// numeric ranks accept 1 and 14 for the Ace.
impl std::str::FromStr for Card {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s.len().checked_sub(1).filter(|_| s.is_ascii());
        let split = split.ok_or_else(|| anyhow::anyhow!("invalid card: {}", s))?;
        let (rank, suit) = s.split_at(split);
        Ok(Self {
            rank: rank.parse::<Rank>()?,
            suit: suit.parse::<Suit>()?,
        })
    }
}

/// infallible convenience for literals in tests and demos
impl From<&str> for Card {
    fn from(s: &str) -> Self {
        s.parse().expect("valid card code")
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        Self::from(rand::Rng::random_range(&mut rand::rng(), 0..52u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_u8() {
        let card = Card::random();
        assert!(card == Card::from(u8::from(card)));
    }

    #[test]
    fn parse_codes() {
        assert_eq!(Card::from("As"), Card::from((Rank::Ace, Suit::Spade)));
        assert_eq!(Card::from("1s"), Card::from((Rank::Ace, Suit::Spade)));
        assert_eq!(Card::from("10c"), Card::from((Rank::Ten, Suit::Club)));
        assert!("Xs".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
    }
}

use super::rank::Rank;
use super::suit::Suit;
