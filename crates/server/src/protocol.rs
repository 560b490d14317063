//! Protocol module - JSON bodies of the score API
//!
//! Request fields are kept as raw [`serde_json::Value`]s so that a body with a
//! wrong field type still reaches validation and gets a `{"message": ...}`
//! answer instead of a deserializer error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SubmitError;
use crate::types::{GameId, NewScore};

/// Body of `POST /api/scores`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreRequest {
    #[serde(default)]
    pub player_name: Option<Value>,
    #[serde(default)]
    pub score: Option<Value>,
    #[serde(default)]
    pub game: Option<Value>,
}

impl SubmitScoreRequest {
    /// Check the body and turn it into a score ready to persist.
    ///
    /// Name and score come first, then the game, so a body missing both
    /// reports the missing fields.
    pub fn validate(&self) -> Result<NewScore, SubmitError> {
        let player_name = parse_player_name(self.player_name.as_ref())?;
        let score = parse_score(self.score.as_ref())?;
        let game = parse_game(self.game.as_ref())?;
        Ok(NewScore {
            player_name,
            score,
            game,
        })
    }
}

/// Names are trimmed. A numeric name is kept as its decimal text.
fn parse_player_name(value: Option<&Value>) -> Result<String, SubmitError> {
    match value {
        Some(Value::String(name)) if !name.trim().is_empty() => Ok(name.trim().to_string()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(SubmitError::MissingPlayerName),
    }
}

/// Falsy values (absent, null, false, 0, "") count as missing. Numbers must be
/// non-negative integers; strings must hold one.
fn parse_score(value: Option<&Value>) -> Result<u32, SubmitError> {
    let parsed = match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return Err(SubmitError::MissingScore),
        Some(Value::String(s)) if s.is_empty() => return Err(SubmitError::MissingScore),
        Some(Value::Number(n)) => {
            if n.as_f64() == Some(0.0) {
                return Err(SubmitError::MissingScore);
            }
            n.as_u64()
        }
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        Some(_) => None,
    };

    let invalid = || SubmitError::InvalidScore(value.map(Value::to_string).unwrap_or_default());
    match parsed {
        Some(0) => Err(SubmitError::MissingScore),
        Some(n) => u32::try_from(n).map_err(|_| invalid()),
        None => Err(invalid()),
    }
}

fn parse_game(value: Option<&Value>) -> Result<GameId, SubmitError> {
    match value {
        None | Some(Value::Null) => Ok(GameId::default()),
        Some(Value::String(s)) => {
            GameId::from_str(s).ok_or_else(|| SubmitError::UnknownGame(s.clone()))
        }
        Some(other) => Err(SubmitError::UnknownGame(other.to_string())),
    }
}

/// Query of `GET /api/scores`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoresQuery {
    #[serde(default)]
    pub game: Option<String>,
}

/// Body of every error answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Body of `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    pub games: Vec<GameId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> SubmitScoreRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_valid_body() {
        let new_score = request(json!({"playerName": "  ada ", "score": 120, "game": "hangman"}))
            .validate()
            .unwrap();
        assert_eq!(new_score.player_name, "ada");
        assert_eq!(new_score.score, 120);
        assert_eq!(new_score.game, GameId::Hangman);
    }

    #[test]
    fn test_game_defaults_to_tetris() {
        let new_score = request(json!({"playerName": "ada", "score": 1}))
            .validate()
            .unwrap();
        assert_eq!(new_score.game, GameId::Tetris);
    }

    #[test]
    fn test_numeric_string_score() {
        let new_score = request(json!({"playerName": "ada", "score": " 300 "}))
            .validate()
            .unwrap();
        assert_eq!(new_score.score, 300);
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            request(json!({"score": 10})).validate(),
            Err(SubmitError::MissingPlayerName)
        );
        assert_eq!(
            request(json!({"playerName": "   ", "score": 10})).validate(),
            Err(SubmitError::MissingPlayerName)
        );
        assert_eq!(
            request(json!({"playerName": false, "score": 10})).validate(),
            Err(SubmitError::MissingPlayerName)
        );
        // A zero score is never stored, whether sent as a number or as text
        for falsy in [json!(null), json!(false), json!(0), json!(""), json!("0")] {
            assert_eq!(
                request(json!({"playerName": "ada", "score": falsy})).validate(),
                Err(SubmitError::MissingScore)
            );
        }
        assert_eq!(
            request(json!({"playerName": "ada"})).validate(),
            Err(SubmitError::MissingScore)
        );
    }

    #[test]
    fn test_numeric_player_name() {
        let new_score = request(json!({"playerName": 7, "score": 10}))
            .validate()
            .unwrap();
        assert_eq!(new_score.player_name, "7");
    }

    #[test]
    fn test_invalid_scores() {
        for bad in [json!(-5), json!(1.5), json!("abc"), json!(true), json!([1]), json!(5_000_000_000u64)] {
            let err = request(json!({"playerName": "ada", "score": bad}))
                .validate()
                .unwrap_err();
            assert!(matches!(err, SubmitError::InvalidScore(_)), "{bad}: {err:?}");
        }
    }

    #[test]
    fn test_unknown_game() {
        assert_eq!(
            request(json!({"playerName": "ada", "score": 5, "game": "chess"})).validate(),
            Err(SubmitError::UnknownGame("chess".to_string()))
        );
        assert!(matches!(
            request(json!({"playerName": "ada", "score": 5, "game": 3})).validate(),
            Err(SubmitError::UnknownGame(_))
        ));
    }

    #[test]
    fn test_api_info_serializes_game_ids() {
        let info = ApiInfo {
            message: "ok".to_string(),
            games: GameId::ALL.to_vec(),
        };
        let v = serde_json::to_value(&info).unwrap();
        assert_eq!(v["games"], json!(["tetris", "hangman"]));
    }
}
