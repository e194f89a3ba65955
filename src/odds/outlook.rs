/// Eight independent completion probabilities, one per Category, each
/// meaning "the final 7-card pool contains at least this pattern".
/// Not a partition: a made royal flush reports 1.0 for straight,
/// flush, and straight flush too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outlook {
    pub pair: Probability,
    pub trips: Probability,
    pub straight: Probability,
    pub flush: Probability,
    pub full_house: Probability,
    pub quads: Probability,
    pub straight_flush: Probability,
    pub royal_flush: Probability,
}

impl Outlook {
    /// the player's completion odds, anchored on the hole cards.
    /// pure function of the Sight.
    pub fn player(sight: &Sight) -> Self {
        Hero::from(sight).outlook()
    }

    /// odds that at least one of `opponents` reaches each category,
    /// anchored on the board alone. undefined before the flop.
    pub fn villains(sight: &Sight, opponents: usize) -> Option<Self> {
        match sight.street() {
            Street::Pref => None,
            _ => Some(Villain::from(sight).outlook().map(|p| {
                // independence approximation across opponents
                1.0 - (1.0 - p).powi(opponents as i32)
            })),
        }
    }

    pub fn get(&self, category: &Category) -> Probability {
        match category {
            Category::Pair => self.pair,
            Category::Trips => self.trips,
            Category::Straight => self.straight,
            Category::Flush => self.flush,
            Category::FullHouse => self.full_house,
            Category::Quads => self.quads,
            Category::StraightFlush => self.straight_flush,
            Category::RoyalFlush => self.royal_flush,
        }
    }

    fn map(self, f: impl Fn(Probability) -> Probability) -> Self {
        Self {
            pair: f(self.pair),
            trips: f(self.trips),
            straight: f(self.straight),
            flush: f(self.flush),
            full_house: f(self.full_house),
            quads: f(self.quads),
            straight_flush: f(self.straight_flush),
            royal_flush: f(self.royal_flush),
        }
    }
}

impl std::fmt::Display for Outlook {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for category in Category::all() {
            writeln!(f, "{:<16} {:>7.2}%", category, self.get(category) * 100.0)?;
        }
        Ok(())
    }
}


use super::category::Category;
use super::player::Hero;
use super::villain::Villain;
use crate::Probability;
use crate::cards::Sight;
use crate::cards::Street;
