use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiOutlook {
    pub pair: Probability,
    pub trips: Probability,
    pub straight: Probability,
    pub flush: Probability,
    pub full_house: Probability,
    pub quads: Probability,
    pub straight_flush: Probability,
    pub royal_flush: Probability,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiDecision {
    pub action: String,
    pub amount: Chips,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiCalculation {
    pub player: ApiOutlook,
    pub villains: Option<ApiOutlook>,
    pub decision: ApiDecision,
}

impl From<Outlook> for ApiOutlook {
    fn from(outlook: Outlook) -> Self {
        Self {
            pair: outlook.pair,
            trips: outlook.trips,
            straight: outlook.straight,
            flush: outlook.flush,
            full_house: outlook.full_house,
            quads: outlook.quads,
            straight_flush: outlook.straight_flush,
            royal_flush: outlook.royal_flush,
        }
    }
}

impl From<Decision> for ApiDecision {
    fn from(decision: Decision) -> Self {
        Self {
            // Display is colored for the terminal; the wire gets the bare name
            action: format!("{:?}", decision.action),
            amount: decision.amount,
        }
    }
}

impl From<Calculation> for ApiCalculation {
    fn from(calculation: Calculation) -> Self {
        Self {
            player: calculation.player.into(),
            villains: calculation.villains.map(ApiOutlook::from),
            decision: calculation.decision.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Sight;
    use crate::engine::Stakes;

    #[test]
    fn serializes_to_json() {
        let sight = Sight::try_from("Ah Kh ~ Qh Jh 10h").unwrap();
        let calculation = Calculation::from((sight, Stakes::default()));
        let response = ApiCalculation::from(calculation);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"royal_flush\":1.0"));
        assert!(json.contains("\"action\""));
    }
}

use crate::engine::Calculation;
use crate::engine::Decision;
use crate::odds::Outlook;
use crate::Chips;
use crate::Probability;
