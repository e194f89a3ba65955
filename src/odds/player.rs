/// Player-side category detectors. Each one reduces the Sight to a
/// handful of Draw parameters anchored on the hole cards, in places
/// summing over anchor cases (one per hole card) when the pocket is
/// unpaired or offsuit. Anchor sums can double-count runouts that
/// satisfy both anchors at once, so every detector clamps to 1.0.
pub(crate) struct Hero<'a> {
    sight: &'a Sight,
}

impl<'a> From<&'a Sight> for Hero<'a> {
    fn from(sight: &'a Sight) -> Self {
        Self { sight }
    }
}

impl Hero<'_> {
    pub fn outlook(&self) -> Outlook {
        Outlook {
            pair: self.n_oak(2),
            trips: self.n_oak(3),
            straight: self.straight(),
            flush: self.flush(),
            full_house: self.full_house(),
            quads: self.n_oak(4),
            straight_flush: self.straight_flush(),
            royal_flush: self.royal_flush(),
        }
    }

    fn draw(&self, needed: isize, qualifying: usize) -> Draw {
        Draw {
            needed,
            qualifying,
            population: self.sight.population(),
            draws: self.sight.street().n_to_come(),
        }
    }

    /// pair, trips, and quads are the same question at different
    /// targets: per hole rank, how many more of its 4 copies we need
    fn n_oak(&self, target: usize) -> Probability {
        let seen = self.sight.seen();
        let (a, b) = self.sight.holes();
        let anchors = match a.rank() == b.rank() {
            true => vec![a.rank()],
            false => vec![a.rank(), b.rank()],
        };
        anchors
            .iter()
            .map(|rank| Hand::count(&seen, rank))
            .map(|current| self.draw(target as isize - current as isize, 4 - current))
            .map(|draw| draw.probability())
            .sum::<Probability>()
            .min(1.0)
    }

    fn flush(&self) -> Probability {
        let seen = self.sight.seen();
        let (a, b) = self.sight.holes();
        let anchors = match a.suit() == b.suit() {
            true => vec![a.suit()],
            false => vec![a.suit(), b.suit()],
        };
        anchors
            .iter()
            .map(|suit| seen.of(suit).size())
            .map(|current| self.draw(5 - current as isize, 13 - current))
            .map(|draw| draw.probability())
            .sum::<Probability>()
            .min(1.0)
    }

    /// sum over the 5-slot windows inside an anchored span; any of the
    /// 4 suits of a missing rank qualifies. complete windows surface
    /// as needed = 0 terms and the clamp turns the sum into 1.0.
    fn straight(&self) -> Probability {
        let slots = windows::ladder(u16::from(self.sight.seen()));
        let (a, b) = self.sight.holes();
        match windows::shared(a.rank(), b.rank()) {
            true => self.runs(slots, a.rank().value().max(b.rank().value()), 4),
            false => [a, b]
                .iter()
                .map(|card| self.runs(slots, card.rank().value(), 4))
                .sum(),
        }
        .min(1.0)
    }

    /// same windows restricted to one suit, one exact card per missing
    /// rank. the non-shared case rebuilds the ladder per anchor so the
    /// other hole card never leaks into a foreign suit's windows.
    fn straight_flush(&self) -> Probability {
        let (a, b) = self.sight.holes();
        match a.suit() == b.suit() && windows::shared(a.rank(), b.rank()) {
            true => {
                let suited = self.sight.seen().of(&a.suit());
                let slots = windows::ladder(u16::from(suited));
                self.runs(slots, a.rank().value().max(b.rank().value()), 1)
            }
            false => [a, b]
                .iter()
                .map(|card| {
                    let board = self.sight.public().of(&card.suit());
                    let suited = Hand::add(board, Hand::from(*card));
                    let slots = windows::ladder(u16::from(suited));
                    self.runs(slots, card.rank().value(), 1)
                })
                .sum(),
        }
        .min(1.0)
    }

    /// the T..A window of a hole card's suit; hole cards below Ten
    /// cannot anchor a royal
    fn royal_flush(&self) -> Probability {
        let (a, b) = self.sight.holes();
        let royal = windows::RUN << windows::ROYAL;
        match a.suit() == b.suit() && a.rank() >= Rank::Ten && b.rank() >= Rank::Ten {
            true => {
                let suited = self.sight.seen().of(&a.suit());
                let present = (windows::ladder(u16::from(suited)) & royal).count_ones();
                let needed = 5 - present as isize;
                self.draw(needed, needed.max(0) as usize).probability()
            }
            false => [a, b]
                .iter()
                .filter(|card| card.rank() >= Rank::Ten)
                .map(|card| {
                    let board = self.sight.public().of(&card.suit());
                    let suited = Hand::add(board, Hand::from(*card));
                    let present = (windows::ladder(u16::from(suited)) & royal).count_ones();
                    let needed = 5 - present as isize;
                    self.draw(needed, needed.max(0) as usize).probability()
                })
                .sum(),
        }
        .min(1.0)
    }

    /// classify every known rank into trips, pairs, and singles, then
    /// sum upgrade terms against the 4-per-rank ceiling
    fn full_house(&self) -> Probability {
        let seen = self.sight.seen();
        let trips = Rank::all().iter().filter(|r| Hand::count(&seen, r) >= 3).count();
        let pairs = Rank::all().iter().filter(|r| Hand::count(&seen, r) == 2).count();
        let singles = Rank::all().iter().filter(|r| Hand::count(&seen, r) == 1).count();
        match (trips, pairs) {
            (t, p) if t >= 2 || (t >= 1 && p >= 1) => 1.0,
            // trip made: pair any single, or back into a fresh pair
            (1, _) => {
                self.draw(1, 3 * singles).probability() + self.draw(2, 4).probability()
            }
            // two or more pairs: one card upgrades any of them
            (_, p) if p >= 2 => self.draw(1, 2 * p).probability(),
            // one pair: trip up a single alongside it, or a fresh trip
            (_, 1) => {
                self.draw(2, 3 * singles).probability() + self.draw(3, 4).probability()
            }
            // nothing yet: three of the six cards matching our ranks
            _ => self.draw(3, 6).probability(),
        }
        .min(1.0)
    }

    fn runs(&self, slots: u16, anchor: u8, per_rank: usize) -> Probability {
        windows::starts(windows::span(anchor))
            .map(|start| (slots & (windows::RUN << start)).count_ones())
            .map(|present| 5 - present as isize)
            .map(|needed| self.draw(needed, needed.max(0) as usize * per_rank))
            .map(|draw| draw.probability())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlook(s: &str) -> Outlook {
        Outlook::player(&Sight::try_from(s).unwrap())
    }

    #[test]
    fn royal_board_is_certain_everywhere() {
        let outlook = outlook("As Ks ~ Qs Js Ts");
        assert_eq!(outlook.royal_flush, 1.0);
        assert_eq!(outlook.straight_flush, 1.0);
        // categories are independent, not exclusive
        assert_eq!(outlook.flush, 1.0);
        assert_eq!(outlook.straight, 1.0);
    }

    #[test]
    fn pocket_pair_preflop() {
        let outlook = outlook("2h 2c");
        assert_eq!(outlook.pair, 1.0);
        let expected = Draw { needed: 1, qualifying: 2, population: 50, draws: 5 };
        assert_eq!(outlook.trips, expected.probability());
        let expected = Draw { needed: 2, qualifying: 2, population: 50, draws: 5 };
        assert_eq!(outlook.quads, expected.probability());
    }

    #[test]
    fn disjoint_anchors_sum() {
        // 7 and 2 share no window: five windows around the 7 plus two
        // around the 2, each needing 4 of 16 qualifying cards
        let outlook = outlook("7s 2d");
        let term = Draw { needed: 4, qualifying: 16, population: 50, draws: 5 };
        let expected = 7.0 * term.probability();
        assert!((outlook.straight - expected).abs() < 1e-12);
    }

    #[test]
    fn paired_board_card_completes_pair() {
        let outlook = outlook("7s 2d ~ 7h Kc Qc");
        assert_eq!(outlook.pair, 1.0);
        assert!(outlook.trips < 1.0);
    }

    #[test]
    fn made_trip_reports_certainty() {
        let outlook = outlook("7s 7d ~ 7h Kc Qc");
        assert_eq!(outlook.pair, 1.0);
        assert_eq!(outlook.trips, 1.0);
        assert!(outlook.quads < 1.0);
        let expected = Draw { needed: 1, qualifying: 1, population: 47, draws: 2 };
        assert_eq!(outlook.quads, expected.probability());
    }

    #[test]
    fn made_flush() {
        let outlook = outlook("As Ks ~ Qs 5s 2s");
        assert_eq!(outlook.flush, 1.0);
        assert!(outlook.straight < 1.0);
    }

    #[test]
    fn trip_and_pair_are_a_full_house() {
        let outlook = outlook("7s 7d ~ 7h Kc Kd");
        assert_eq!(outlook.full_house, 1.0);
    }

    #[test]
    fn wheel_draw_counts_the_mirrored_ace() {
        // A-2-3-4 on the board: one card completes the wheel
        let outlook = outlook("Ah 2c ~ 3d 4s Kc");
        let wheel = Draw { needed: 1, qualifying: 4, population: 47, draws: 2 };
        assert!(outlook.straight >= wheel.probability());
    }

    #[test]
    fn river_leaves_no_draws() {
        let outlook = outlook("7s 2d ~ 9h Kc Qc 3d 8s");
        assert_eq!(outlook.straight, 0.0);
        assert_eq!(outlook.flush, 0.0);
        assert_eq!(outlook.pair, 0.0);
    }
}

use super::draw::Draw;
use super::outlook::Outlook;
use super::windows;
use crate::Probability;
use crate::cards::Hand;
use crate::cards::Rank;
use crate::cards::Sight;
