use serde::{Deserialize, Serialize};

/// One recorded EMG sample set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// Unique id, assigned at creation
    pub id: String,
    /// Owning user's id; not validated against the users collection
    pub user_id: String,
    /// Sensor magnitudes in recording order; may be empty
    pub values: Vec<f64>,
    pub muscle_group: String,
    /// RFC 3339 recording timestamp
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_field_names_are_camel_case() {
        let reading = Reading {
            id: "mdzz4f8q1kkkkkkkkkkk".to_string(),
            user_id: "mdzz1x2k3abcdefghijk".to_string(),
            values: vec![20.0, 45.0, 28.0],
            muscle_group: "Biceps".to_string(),
            timestamp: "2025-11-03T09:20:01.003Z".to_string(),
        };

        let json = serde_json::to_string(&reading).unwrap();
        assert!(json.contains("\"userId\""));
        assert!(json.contains("\"muscleGroup\""));
        assert!(!json.contains("user_id"));

        let back: Reading = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reading);
    }

    #[test]
    fn test_empty_values_are_allowed() {
        let json = r#"{"id":"a","userId":"b","values":[],"muscleGroup":"General","timestamp":"2025-11-03T09:20:01.003Z"}"#;
        let reading: Reading = serde_json::from_str(json).unwrap();
        assert!(reading.values.is_empty());
    }
}
