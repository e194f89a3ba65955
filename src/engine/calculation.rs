/// One atomic engine invocation: the player's completion odds, the
/// field's, and the recommended action. Stateless; nothing is carried
/// between hands or between recalculations within a hand, so racing
/// invocations can only ever disagree about which result to display,
/// never about what a result contains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub player: Outlook,
    pub villains: Option<Outlook>,
    pub decision: Decision,
}

impl From<(Sight, Stakes)> for Calculation {
    fn from((sight, stakes): (Sight, Stakes)) -> Self {
        log::info!("calculating {} on the {} ({})", sight, sight.street(), stakes);
        let player = Outlook::player(&sight);
        let villains = Outlook::villains(&sight, stakes.opponents());
        let decision = Decision::make(&player, villains.as_ref(), &stakes);
        log::debug!("equity {:.4}", Decision::equity(&player));
        Self {
            player,
            villains,
            decision,
        }
    }
}

impl std::fmt::Display for Calculation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "yours:")?;
        write!(f, "{}", self.player)?;
        match self.villains {
            None => writeln!(f, "theirs: unknown before the flop")?,
            Some(ref villains) => {
                writeln!(f, "theirs (any opponent):")?;
                write!(f, "{}", villains)?;
            }
        }
        write!(f, "{}", self.decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn invocations_are_pure() {
        for _ in 0..16 {
            let sight = Sight::random();
            let stakes = Stakes::default();
            let once = Calculation::from((sight, stakes));
            let again = Calculation::from((sight, stakes));
            assert_eq!(once, again);
        }
    }

    #[test]
    fn preflop_has_no_villain_estimate() {
        let sight = Sight::try_from("As Kd").unwrap();
        let calculation = Calculation::from((sight, Stakes::default()));
        assert!(calculation.villains.is_none());
    }
}

use super::decision::Decision;
use super::stakes::Stakes;
use crate::cards::Sight;
use crate::odds::Outlook;
