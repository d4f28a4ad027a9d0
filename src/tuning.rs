//! Data-driven game balance
//!
//! Defaults reproduce the classic board; a JSON blob can override any
//! knob without recompiling. The sim treats this as read-only after
//! session construction.

use serde::{Deserialize, Serialize};

/// Game balance knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Concurrently active enemies
    pub enemy_count: u32,
    /// Score that ends the scoring phase
    pub score_goal: u32,
    /// Points per star
    pub star_score: u32,
    /// Star lifetime before it relocates (ms)
    pub star_expire_ms: u32,
    /// Key lifetime before it relocates (ms)
    pub key_expire_ms: u32,
    /// Enemy speed range (pixels per second)
    pub enemy_speed_min: f32,
    pub enemy_speed_max: f32,
    /// Player start cell
    pub player_start_row: u32,
    pub player_start_col: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            enemy_count: 3,
            score_goal: 500,
            star_score: 100,
            star_expire_ms: 5000,
            key_expire_ms: 3000,
            enemy_speed_min: 50.0,
            enemy_speed_max: 150.0,
            player_start_row: 5,
            player_start_col: 2,
        }
    }
}

impl Tuning {
    /// Parse a tuning override from JSON; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_board() {
        let tuning = Tuning::default();
        assert_eq!(tuning.enemy_count, 3);
        assert_eq!(tuning.score_goal, 500);
        assert_eq!(tuning.star_score, 100);
        assert_eq!(tuning.star_expire_ms, 5000);
        assert_eq!(tuning.key_expire_ms, 3000);
    }

    #[test]
    fn json_round_trip() {
        let tuning = Tuning::default();
        let json = tuning.to_json().unwrap();
        let back = Tuning::from_json(&json).unwrap();
        assert_eq!(back.score_goal, tuning.score_goal);
        assert_eq!(back.enemy_speed_max, tuning.enemy_speed_max);
    }

    #[test]
    fn partial_json_keeps_defaults_for_the_rest() {
        let tuning = Tuning::from_json(r#"{"enemy_count": 6}"#).unwrap();
        assert_eq!(tuning.enemy_count, 6);
        assert_eq!(tuning.score_goal, 500);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(Tuning::from_json("not json").is_err());
    }
}
