use serde::{Deserialize, Serialize};

/// Wire form of one advisory request. Cards travel as text ("Ah", "10c");
/// everything but the pocket may be omitted and falls back to defaults.
#[derive(Debug, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub pocket: Vec<String>,
    #[serde(default)]
    pub board: Vec<String>,
    pub opponents: Option<usize>,
    pub small_blind: Option<Chips>,
    pub bet: Option<Chips>,
}

impl TryFrom<CalculationRequest> for (Sight, Stakes) {
    type Error = anyhow::Error;
    fn try_from(request: CalculationRequest) -> Result<Self> {
        let pocket = request
            .pocket
            .iter()
            .map(|s| s.parse::<Card>())
            .collect::<Result<Vec<Card>>>()?;
        let board = request
            .board
            .iter()
            .map(|s| s.parse::<Card>())
            .collect::<Result<Vec<Card>>>()?;
        let sight = Sight::new(pocket, board)?;
        let stakes = Stakes::new(
            request.opponents.unwrap_or(1),
            request.small_blind.unwrap_or(Stakes::SMALL_BLIND),
            request.bet.unwrap_or(0),
        )?;
        Ok((sight, stakes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_the_gaps() {
        let request = CalculationRequest {
            pocket: vec!["Ah".into(), "Kh".into()],
            board: vec![],
            opponents: None,
            small_blind: None,
            bet: None,
        };
        let (sight, stakes) = <(Sight, Stakes)>::try_from(request).unwrap();
        assert_eq!(sight, Sight::try_from("Ah Kh").unwrap());
        assert_eq!(stakes, Stakes::default());
    }

    #[test]
    fn rejects_malformed_cards() {
        let request = CalculationRequest {
            pocket: vec!["Ah".into(), "Xx".into()],
            board: vec![],
            opponents: None,
            small_blind: None,
            bet: None,
        };
        assert!(<(Sight, Stakes)>::try_from(request).is_err());
    }

    #[test]
    fn rejects_too_many_opponents() {
        let request = CalculationRequest {
            pocket: vec!["Ah".into(), "Kh".into()],
            board: vec![],
            opponents: Some(9),
            small_blind: None,
            bet: None,
        };
        assert!(<(Sight, Stakes)>::try_from(request).is_err());
    }
}

use crate::cards::Card;
use crate::cards::Sight;
use crate::engine::Stakes;
use crate::Chips;
use anyhow::Result;
