/// One hypergeometric completion question: out of `population` unseen
/// cards, `qualifying` of them satisfy the requirement, `draws` will be
/// revealed, and the requirement is met once at least `needed` of them
/// qualify. `needed` is signed because detectors compute it as
/// `target - current`, which goes nonpositive once the pattern is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    pub needed: isize,
    pub qualifying: usize,
    pub population: usize,
    pub draws: usize,
}

impl Draw {
    /// probability of drawing at least `needed` qualifying cards among
    /// `draws` cards taken without replacement from `population`.
    ///
    /// upper-tail sum over j = needed ..= min(draws, qualifying) of
    ///     C(q, j) * C(pop - q, draws - j) / C(pop, draws)
    pub fn probability(&self) -> Probability {
        if self.needed <= 0 {
            return 1.0;
        }
        let needed = self.needed as usize;
        if needed > self.draws {
            return 0.0;
        }
        let total = choose(self.population, self.draws);
        if total == 0 {
            return 0.0;
        }
        let misses = self.population.saturating_sub(self.qualifying);
        let hits = (needed..=self.draws.min(self.qualifying))
            .map(|j| choose(self.qualifying, j) * choose(misses, self.draws - j))
            .sum::<u128>();
        hits as Probability / total as Probability
    }
}


use super::binomial::choose;
use crate::Probability;
