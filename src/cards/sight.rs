/// Everything one player can see mid-hand: two pocket cards plus the
/// community cards revealed so far. This is the engine's whole input
/// on the card side; the round is derived from the board size, never
/// stored, and a Sight is immutable once constructed.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Sight {
    pocket: Hand,
    public: Hand,
}

impl Sight {
    /// validated construction. rejections name the violated
    /// constraint so adapters can surface them verbatim.
    pub fn new(pocket: Vec<Card>, public: Vec<Card>) -> Result<Self> {
        if pocket.len() != 2 {
            bail!("pocket must contain exactly 2 cards, got {}", pocket.len());
        }
        if !matches!(public.len(), 0 | 3 | 4 | 5) {
            bail!("community cards must number 0, 3, 4, or 5, got {}", public.len());
        }
        let mut seen = Hand::empty();
        for card in pocket.iter().chain(public.iter()) {
            if seen.contains(card) {
                bail!("duplicate card: {}", card);
            }
            seen = Hand::add(seen, Hand::from(*card));
        }
        Ok(Self {
            pocket: Hand::from(pocket),
            public: Hand::from(public),
        })
    }

    pub fn pocket(&self) -> &Hand {
        &self.pocket
    }
    pub fn public(&self) -> &Hand {
        &self.public
    }
    /// the two hole cards, low then high
    pub fn holes(&self) -> (Card, Card) {
        let mut cards = self.pocket.into_iter();
        let a = cards.next().expect("pocket holds 2 cards");
        let b = cards.next().expect("pocket holds 2 cards");
        (a, b)
    }
    /// union of pocket and board
    pub fn seen(&self) -> Hand {
        Hand::add(self.pocket, self.public)
    }
    /// cards neither in our hand nor on the table
    pub fn population(&self) -> usize {
        52 - self.seen().size()
    }
    pub fn street(&self) -> Street {
        Street::from(self.public.size())
    }
}

/// str isomorphism: pocket and board split by '~', e.g. "As Kd ~ 2c 3c 4c"
impl TryFrom<&str> for Sight {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self> {
        let (pocket, public) = s.split_once('~').unwrap_or((s, ""));
        let cards = |s: &str| {
            s.split_whitespace()
                .map(str::parse::<Card>)
                .collect::<Result<Vec<Card>>>()
        };
        Self::new(cards(pocket)?, cards(public)?)
    }
}

impl std::fmt::Display for Sight {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ~ {}", self.pocket, self.public)
    }
}

/// deal a random Sight at a random street
impl crate::Arbitrary for Sight {
    fn random() -> Self {
        let ref mut deck = Deck::new();
        let street = Street::all()[rand::Rng::random_range(&mut rand::rng(), 0..4usize)];
        let pocket = (0..2).map(|_| deck.draw()).collect::<Vec<Card>>();
        let public = (0..street.n_observed()).map(|_| deck.draw()).collect();
        Self::new(pocket, public).expect("deck deals are disjoint")
    }
}


use super::card::Card;
use super::deck::Deck;
use super::hand::Hand;
use super::street::Street;
use anyhow::Result;
use anyhow::bail;
