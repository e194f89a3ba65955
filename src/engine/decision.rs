/// blinds-to-call at which a middling hand is priced out entirely
const MIDPOINT: f64 = 40.0;
/// equity edge over the price required to raise rather than call
const EDGE: f64 = 0.15;
/// equity divisor: puts a made flush plus its side chances near 0.25
const SCALE: f64 = 20.0;

/// A recommended action plus the suggested bet increment. Derived
/// output only: callers never construct one, they get it out of a
/// Calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub action: Action,
    pub amount: Chips,
}

impl Decision {
    /// rule table, evaluated in priority order. an unbeatable made
    /// hand shoves; everything else is priced against the
    /// outstanding bet.
    pub fn make(player: &Outlook, villains: Option<&Outlook>, stakes: &Stakes) -> Self {
        // nobody else can hold the royal
        if player.royal_flush == 1.0 {
            return Self { action: Action::AllIn, amount: 0 };
        }
        if player.straight_flush == 1.0
            && villains.map_or(true, |v| v.straight_flush < 1.0)
        {
            return Self { action: Action::AllIn, amount: 0 };
        }
        if player.quads == 1.0 && villains.map_or(true, |v| v.quads < 1.0) {
            return Self { action: Action::AllIn, amount: 0 };
        }
        Self::priced(player, stakes)
    }

    /// weighted equity against the cost of continuing. thresholds are
    /// design parameters, not laws of poker; see DESIGN.md.
    fn priced(player: &Outlook, stakes: &Stakes) -> Self {
        let equity = Self::equity(player);
        let cost = stakes.cost();
        let price = cost / (cost + MIDPOINT);
        if equity > price + EDGE {
            match stakes.free() {
                true => Self { action: Action::Bet, amount: 4 * stakes.small_blind() },
                false => Self { action: Action::Raise, amount: stakes.bet() },
            }
        } else if equity >= price {
            match stakes.free() {
                true => Self { action: Action::Check, amount: 0 },
                false => Self { action: Action::Call, amount: stakes.bet() },
            }
        } else {
            match stakes.free() {
                true => Self { action: Action::Check, amount: 0 },
                false => Self { action: Action::Fold, amount: 0 },
            }
        }
    }

    /// category probabilities collapsed to one scalar, weighted by
    /// rarity and clamped to [0, 1]
    pub fn equity(outlook: &Outlook) -> Probability {
        Category::all()
            .iter()
            .map(|category| category.weight() * outlook.get(category))
            .sum::<Probability>()
            .div(SCALE)
            .min(1.0)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.action {
            Action::Fold => write!(f, "{}, let it go", self.action),
            Action::Check => write!(f, "{}, see the next card for free", self.action),
            Action::Call => write!(f, "{}, add {} to match", self.action, self.amount),
            Action::Raise => write!(f, "{}, raise by {}", self.action, self.amount),
            Action::Bet => write!(f, "{}, open for {}", self.action, self.amount),
            Action::AllIn => write!(f, "{}, nobody beats this", self.action),
        }
    }
}


use super::action::Action;
use super::stakes::Stakes;
use crate::Chips;
use crate::Probability;
use crate::odds::Category;
use crate::odds::Outlook;
use std::ops::Div;
