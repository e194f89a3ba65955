/// The eight hand categories the engine estimates. These are
/// completion targets, not a showdown ranking: each is evaluated
/// independently and a made straight flush leaves the plain flush
/// and straight at 1.0 as well.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Pair,
    Trips,
    Straight,
    Flush,
    FullHouse,
    Quads,
    StraightFlush,
    RoyalFlush,
}

impl Category {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Pair,
            Self::Trips,
            Self::Straight,
            Self::Flush,
            Self::FullHouse,
            Self::Quads,
            Self::StraightFlush,
            Self::RoyalFlush,
        ]
    }

    /// rarity weight used by the decision engine's equity scalar,
    /// roughly log-scaled against standard category frequencies
    pub const fn weight(&self) -> f64 {
        match self {
            Self::Pair => 1.0,
            Self::Trips => 2.0,
            Self::Straight => 3.0,
            Self::Flush => 4.0,
            Self::FullHouse => 5.0,
            Self::Quads => 7.0,
            Self::StraightFlush => 9.0,
            Self::RoyalFlush => 10.0,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pair => write!(f, "pair"),
            Self::Trips => write!(f, "three of a kind"),
            Self::Straight => write!(f, "straight"),
            Self::Flush => write!(f, "flush"),
            Self::FullHouse => write!(f, "full house"),
            Self::Quads => write!(f, "four of a kind"),
            Self::StraightFlush => write!(f, "straight flush"),
            Self::RoyalFlush => write!(f, "royal flush"),
        }
    }
}
