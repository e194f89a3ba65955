//! Straight-window machinery shared by the player and villain detectors.
//!
//! Ranks live on a 15-slot ladder where slot r holds face value r
//! (2..=14) and slot 1 mirrors the Ace so that A-2-3-4-5 reads as a
//! run of five consecutive slots. A straight window is 5 consecutive
//! slots; anchored spans bound which windows a hole card can complete.

/// 5 consecutive slots, shift into place with `RUN << start`
pub const RUN: u16 = 0b11111;
/// the fixed T-J-Q-K-A window
pub const ROYAL: u8 = 10;

/// project a 13-bit rank mask onto the 15-slot ladder, mirror the Ace
pub fn ladder(ranks: u16) -> u16 {
    (ranks << 2) | (((ranks >> 12) & 1) << 1)
}

/// whether two hole cards can participate in the same straight:
/// within four ranks of each other, or an Ace with a wheel card.
/// equal ranks contribute one card between them, so they do not share.
pub fn shared(a: Rank, b: Rank) -> bool {
    if a == b {
        false
    } else if a == Rank::Ace && b.value() <= 5 {
        true
    } else if b == Rank::Ace && a.value() <= 5 {
        true
    } else {
        a.value().abs_diff(b.value()) <= 4
    }
}

/// slot span of the windows anchored around one card, clamped to the
/// ladder. an Ace anchors both ends, so it opens the whole ladder.
pub fn span(anchor: u8) -> (u8, u8) {
    if anchor == 14 {
        (1, 14)
    } else {
        (anchor.saturating_sub(4).max(1), (anchor + 4).min(14))
    }
}

/// start slots of every 5-slot window inside the span
pub fn starts((lo, hi): (u8, u8)) -> impl Iterator<Item = u8> {
    lo..=hi - 4
}

/// the rank occupying a ladder slot; slot 1 is the mirrored Ace
pub fn rank(slot: u8) -> Rank {
    Rank::lift(slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;

    #[test]
    fn wheel_mirror() {
        let slots = ladder(u16::from(Hand::from("Ac 2d 3h")));
        assert!(slots & (1 << 1) != 0); // mirrored ace
        assert!(slots & (1 << 14) != 0);
        assert!(slots & (1 << 2) != 0);
        assert_eq!((slots & (RUN << 1)).count_ones(), 3); // A 2 3 in the wheel
    }

    #[test]
    fn sharing() {
        assert!(shared(Rank::Seven, Rank::Ten));
        assert!(shared(Rank::Ace, Rank::Five));
        assert!(shared(Rank::Ace, Rank::Ten));
        assert!(!shared(Rank::Ace, Rank::Eight));
        assert!(!shared(Rank::Seven, Rank::Two));
        assert!(!shared(Rank::Seven, Rank::Seven));
    }

    #[test]
    fn spans_clamp() {
        assert_eq!(span(14), (1, 14));
        assert_eq!(span(2), (1, 6));
        assert_eq!(span(13), (9, 14));
        assert_eq!(span(7), (3, 11));
    }

    #[test]
    fn window_counts() {
        assert_eq!(starts(span(7)).count(), 5);
        assert_eq!(starts(span(2)).count(), 2);
        assert_eq!(starts(span(14)).count(), 10);
    }

    #[test]
    fn slot_ranks() {
        assert_eq!(rank(1), Rank::Ace);
        assert_eq!(rank(14), Rank::Ace);
        assert_eq!(rank(2), Rank::Two);
        assert_eq!(rank(13), Rank::King);
    }
}

use crate::cards::Rank;
