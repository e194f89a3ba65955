/// Pot economics for one decision: how many opponents are still in,
/// what the small blind is worth, and the outstanding bet we would
/// have to match to continue.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Stakes {
    opponents: usize,
    small_blind: Chips,
    bet: Chips,
}

impl Stakes {
    pub const MAX_OPPONENTS: usize = 8;
    pub const SMALL_BLIND: Chips = 5;

    pub fn new(opponents: usize, small_blind: Chips, bet: Chips) -> Result<Self> {
        if opponents > Self::MAX_OPPONENTS {
            bail!("opponents must be 0..={}, got {}", Self::MAX_OPPONENTS, opponents);
        }
        if small_blind == 0 {
            bail!("small blind must be positive");
        }
        Ok(Self {
            opponents,
            small_blind,
            bet,
        })
    }

    pub fn opponents(&self) -> usize {
        self.opponents
    }
    pub fn small_blind(&self) -> Chips {
        self.small_blind
    }
    /// the accumulated bet outstanding against us, not the total pot
    pub fn bet(&self) -> Chips {
        self.bet
    }
    /// whether there is anything to match at all
    pub fn free(&self) -> bool {
        self.bet == 0
    }
    /// cost of continuing, in small blinds
    pub fn cost(&self) -> f64 {
        self.bet as f64 / self.small_blind as f64
    }
}

/// heads-up, default blind, nothing bet
impl Default for Stakes {
    fn default() -> Self {
        Self {
            opponents: 1,
            small_blind: Self::SMALL_BLIND,
            bet: 0,
        }
    }
}

impl std::fmt::Display for Stakes {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} opponents, blind {}, bet {}",
            self.opponents, self.small_blind, self.bet
        )
    }
}


use crate::Chips;
use anyhow::Result;
use anyhow::bail;
