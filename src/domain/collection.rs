use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::models::Court;

/// Ordered list of court records, exactly as persisted.
///
/// Records are kept as raw JSON so whatever the scripts write is served
/// back unchanged. The length is fixed when the collection is first
/// initialized but is not enforced afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourtCollection {
    records: Vec<Value>,
}

impl CourtCollection {
    /// `count` blank courts with ids "Court 1" .. "Court {count}"
    pub fn initial(count: usize, status: &str) -> Self {
        Self::from_courts((1..=count).map(|n| Court::blank(n, status)))
    }

    pub fn from_courts<I: IntoIterator<Item = Court>>(courts: I) -> Self {
        Self {
            records: courts.into_iter().map(Value::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    /// Typed view of each record; a record that does not fit the view is
    /// reported as an error without affecting the others
    pub fn courts(&self) -> impl Iterator<Item = Result<Court, serde_json::Error>> + '_ {
        self.records.iter().map(|r| Court::deserialize(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status;
    use serde_json::json;

    #[test]
    fn test_initial_collection_ids_and_defaults() {
        let collection = CourtCollection::initial(12, status::NOT_STARTED);

        assert_eq!(collection.len(), 12);
        for (i, court) in collection.courts().enumerate() {
            let court = court.unwrap();
            assert_eq!(court.id, format!("Court {}", i + 1));
            assert_eq!(court.status, status::NOT_STARTED);
            assert_eq!(court.score1, None);
            assert_eq!(court.score2, None);
        }
    }

    #[test]
    fn test_initial_collection_of_other_sizes() {
        assert!(CourtCollection::initial(0, status::IDLE).is_empty());

        let three = CourtCollection::initial(3, status::IDLE);
        assert_eq!(three.len(), 3);
        assert_eq!(three.records()[2]["id"], "Court 3");
    }

    #[test]
    fn test_records_are_kept_verbatim() {
        let raw = json!([
            { "id": "Court 1", "player1": "Andy Murray", "score1": "6", "status": "進行中" },
            { "id": "Court 2", "player1": 42 },
            "not even an object"
        ]);

        let collection: CourtCollection = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(collection.len(), 3);
        assert_eq!(serde_json::to_value(&collection).unwrap(), raw);
        let views: Vec<_> = collection.courts().collect();
        assert!(views[0].is_ok());
        assert!(views[1].is_err());
        assert!(views[2].is_err());
    }

    #[test]
    fn test_non_array_document_is_rejected() {
        let result = serde_json::from_value::<CourtCollection>(json!({ "id": "Court 1" }));
        assert!(result.is_err());
    }
}
