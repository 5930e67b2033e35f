use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::config::settings::DEFAULT_STATUS;

/// Well-known status labels written by the automation scripts.
/// Any other string is accepted and passed through untouched.
pub mod status {
    pub const NOT_STARTED: &str = "尚未開始";
    pub const IDLE: &str = "空閒";
    pub const IN_PROGRESS: &str = "進行中";
    pub const FINISHED: &str = "比賽結束";
}

/// One physical court and the match currently on it.
///
/// This is a read view over a persisted record. Scores are kept as raw JSON
/// because the recognizer writes them as strings ("5") while other writers
/// use numbers or `null`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub player1: String,
    #[serde(default)]
    pub score1: Option<Value>,
    #[serde(default)]
    pub player2: String,
    #[serde(default)]
    pub score2: Option<Value>,
    #[serde(default)]
    pub next_players: String,
    #[serde(default = "default_status")]
    pub status: String,
    /// Fields owned by the external scripts (match numbers and the like)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

impl Court {
    /// Empty court with the given 1-based position, e.g. "Court 3"
    pub fn blank(number: usize, status: &str) -> Self {
        Self {
            id: format!("Court {}", number),
            player1: String::new(),
            score1: None,
            player2: String::new(),
            score2: None,
            next_players: String::new(),
            status: status.to_string(),
            extra: Map::new(),
        }
    }

    pub fn has_score(&self) -> bool {
        is_set(&self.score1) || is_set(&self.score2)
    }
}

fn is_set(score: &Option<Value>) -> bool {
    !matches!(score, None | Some(Value::Null))
}

/// Persisted record layout: id, player1, score1, player2, score2,
/// nextPlayers, status, then any script-owned fields
impl From<Court> for Value {
    fn from(court: Court) -> Self {
        let mut record = json!({
            "id": court.id,
            "player1": court.player1,
            "score1": court.score1,
            "player2": court.player2,
            "score2": court.score2,
            "nextPlayers": court.next_players,
            "status": court.status,
        });
        if let Value::Object(fields) = &mut record {
            fields.extend(court.extra);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_court() {
        let court = Court::blank(7, status::NOT_STARTED);

        assert_eq!(court.id, "Court 7");
        assert_eq!(court.score1, None);
        assert_eq!(court.score2, None);
        assert!(!court.has_score());
    }

    #[test]
    fn test_record_uses_camel_case_and_nulls() {
        let record = Value::from(Court::blank(1, status::NOT_STARTED));

        assert_eq!(
            record,
            json!({
                "id": "Court 1",
                "player1": "",
                "score1": null,
                "player2": "",
                "score2": null,
                "nextPlayers": "",
                "status": "尚未開始"
            })
        );
        let keys: Vec<&String> = record.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["id", "player1", "score1", "player2", "score2", "nextPlayers", "status"]);
    }

    #[test]
    fn test_view_accepts_recognizer_string_scores() {
        let raw = json!({
            "id": "Court 2",
            "player1": "Roger Federer",
            "score1": "5",
            "player2": "Andy Roddick",
            "score2": "3",
            "nextPlayers": "Jo-W Tsonga vs David Ferrer",
            "status": "比賽結束",
            "current_match_number": 1,
            "next_match_number": null
        });

        let court: Court = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(court.status, status::FINISHED);
        assert_eq!(court.score1, Some(json!("5")));
        assert!(court.has_score());
        assert_eq!(court.extra.get("current_match_number"), Some(&json!(1)));
        assert_eq!(Value::from(court), raw);
    }

    #[test]
    fn test_null_scores_are_not_scores() {
        let court: Court =
            serde_json::from_value(json!({ "id": "Court 4", "score1": null, "score2": null }))
                .unwrap();

        assert!(!court.has_score());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let court: Court = serde_json::from_value(json!({ "id": "Court 9" })).unwrap();

        assert_eq!(court, Court::blank(9, DEFAULT_STATUS));
    }
}
