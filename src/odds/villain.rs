/// Single-opponent category detectors, anchored on the community
/// cards alone since an opponent's pocket is invisible. The player's
/// hole cards never qualify as outs but do count as seen, and the
/// opponent effectively draws two extra cards: the hidden pocket on
/// top of the remaining runout. Outlook::villains() spreads the
/// single-opponent result across the field.
pub(crate) struct Villain<'a> {
    sight: &'a Sight,
}

impl<'a> From<&'a Sight> for Villain<'a> {
    fn from(sight: &'a Sight) -> Self {
        Self { sight }
    }
}

impl Villain<'_> {
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
            // the hidden pocket plus the remaining runout
            draws: self.sight.street().n_to_come() + 2,
        }
    }

    /// remaining copies of a rank an opponent could hold
    fn outs(&self, rank: &Rank) -> usize {
        4 - Hand::count(&self.sight.seen(), rank)
    }

    fn n_oak(&self, target: usize) -> Probability {
        let public = self.sight.public();
        Rank::all()
            .iter()
            .filter(|rank| Hand::count(&public, rank) > 0)
            .map(|rank| (Hand::count(&public, rank), self.outs(rank)))
            .map(|(current, outs)| self.draw(target as isize - current as isize, outs))
            .map(|draw| draw.probability())
            .sum::<Probability>()
            .min(1.0)
    }

    fn flush(&self) -> Probability {
        let public = self.sight.public();
        let pocket = self.sight.pocket();
        Suit::all()
            .iter()
            .filter(|suit| public.of(suit).size() > 0)
            .map(|suit| (public.of(suit).size(), pocket.of(suit).size()))
            .map(|(current, dead)| self.draw(5 - current as isize, 13 - current - dead))
            .map(|draw| draw.probability())
            .sum::<Probability>()
            .min(1.0)
    }

    /// every window on the ladder, qualifying cards discounted by
    /// whatever the player holds of the missing ranks
    fn straight(&self) -> Probability {
        let slots = windows::ladder(u16::from(*self.sight.public()));
        windows::starts((1, 14))
            .map(|start| self.window(slots, start, None))
            .map(|draw| draw.probability())
            .sum::<Probability>()
            .min(1.0)
    }

    fn straight_flush(&self) -> Probability {
        Suit::all()
            .iter()
            .filter(|suit| self.sight.public().of(suit).size() > 0)
            .map(|suit| {
                let slots = windows::ladder(u16::from(self.sight.public().of(suit)));
                windows::starts((1, 14))
                    .map(|start| self.window(slots, start, Some(*suit)))
                    .map(|draw| draw.probability())
                    .sum::<Probability>()
            })
            .sum::<Probability>()
            .min(1.0)
    }

    fn royal_flush(&self) -> Probability {
        Suit::all()
            .iter()
            .filter(|suit| self.sight.public().of(suit).size() > 0)
            .map(|suit| {
                let slots = windows::ladder(u16::from(self.sight.public().of(suit)));
                self.window(slots, windows::ROYAL, Some(*suit))
            })
            .map(|draw| draw.probability())
            .sum::<Probability>()
            .min(1.0)
    }

    /// board-only classification; the upgrade table mirrors the
    /// player's, with outs discounted by the player's dead cards
    fn full_house(&self) -> Probability {
        let public = self.sight.public();
        let trips = Rank::all().iter().filter(|r| Hand::count(&public, r) >= 3).count();
        let pairs = Rank::all().iter().filter(|r| Hand::count(&public, r) == 2).count();
        let single_outs = Rank::all()
            .iter()
            .filter(|r| Hand::count(&public, r) == 1)
            .map(|r| self.outs(r))
            .sum::<usize>();
        let pair_outs = Rank::all()
            .iter()
            .filter(|r| Hand::count(&public, r) == 2)
            .map(|r| self.outs(r))
            .sum::<usize>();
        match (trips, pairs) {
            (t, p) if t >= 2 || (t >= 1 && p >= 1) => 1.0,
            (1, _) => self.draw(1, single_outs).probability() + self.draw(2, 4).probability(),
            (_, p) if p >= 2 => self.draw(1, pair_outs).probability(),
            (_, 1) => self.draw(2, single_outs).probability() + self.draw(3, 4).probability(),
            _ => self.draw(3, 4).probability(),
        }
        .min(1.0)
    }

    fn window(&self, slots: u16, start: u8, suit: Option<Suit>) -> Draw {
        let mut needed = 0isize;
        let mut qualifying = 0usize;
        for slot in start..start + 5 {
            if slots & (1 << slot) == 0 {
                needed += 1;
                let rank = windows::rank(slot);
                qualifying += match suit {
                    None => self.outs(&rank),
                    Some(suit) => {
                        let card = Card::from((rank, suit));
                        !self.sight.seen().contains(&card) as usize
                    }
                };
            }
        }
        self.draw(needed, qualifying)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn villain(s: &str) -> Outlook {
        Villain::from(&Sight::try_from(s).unwrap()).outlook()
    }

    #[test]
    fn board_trip_is_everybodys_trip() {
        let outlook = villain("As Kd ~ 7c 7h 7s");
        assert_eq!(outlook.trips, 1.0);
        assert_eq!(outlook.pair, 1.0);
    }

    #[test]
    fn dead_cards_shrink_outs() {
        // we hold two sevens, so an opponent pairing the board seven
        // has one out instead of three
        let held = villain("7s 7d ~ 7h Kc Qc");
        let clean = villain("As 2d ~ 7h Kc Qc");
        assert!(held.trips < clean.trips);
    }

    #[test]
    fn our_quads_leave_none_behind() {
        // all four sevens are seen, so only the deuce can quad up
        let outlook = villain("7s 7d ~ 7h 7c 2c");
        let deuce = Draw { needed: 3, qualifying: 3, population: 47, draws: 4 };
        assert_eq!(outlook.quads, deuce.probability());
    }

    #[test]
    fn board_royal_is_shared() {
        let outlook = villain("2h 3d ~ As Ks Qs Js Ts");
        assert_eq!(outlook.royal_flush, 1.0);
        assert_eq!(outlook.straight, 1.0);
        assert_eq!(outlook.flush, 1.0);
    }

    #[test]
    fn blocked_royal_is_impossible() {
        // we hold the As: no opponent royal in spades, and no other
        // suit has board presence beyond nothing
        let outlook = villain("As 2d ~ Ks Qs Js 3c 4h");
        assert_eq!(outlook.royal_flush, 0.0);
    }

    #[test]
    fn paired_board_threatens_full_houses() {
        let paired = villain("As Kd ~ 7c 7h 2s");
        let dry = villain("As Kd ~ 7c 5h 2s");
        assert!(paired.full_house > dry.full_house);
    }
}

use super::draw::Draw;
use super::outlook::Outlook;
use super::windows;
use crate::Probability;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Rank;
use crate::cards::Sight;
use crate::cards::Suit;
