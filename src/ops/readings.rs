use chrono::{DateTime, SecondsFormat, Utc};

use crate::constants::{DEFAULT_LATEST_LIMIT, DEFAULT_MUSCLE_GROUP};
use crate::error::Result;
use crate::id::generate_id;
use crate::models::Reading;

use super::Database;

impl Database {
    /// Record one EMG sample set for a user.
    ///
    /// The user id is not checked against the users collection; readings
    /// for unknown ids are stored as given.
    pub async fn add_emg_data(
        &self,
        user_id: &str,
        values: Vec<f64>,
        muscle_group: Option<&str>,
    ) -> Result<Reading> {
        self.initialize().await;
        let mut readings = self.load_readings().await?;

        let reading = Reading {
            id: generate_id(),
            user_id: user_id.to_string(),
            values,
            muscle_group: muscle_group.unwrap_or(DEFAULT_MUSCLE_GROUP).to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        readings.push(reading.clone());
        self.store_readings(readings).await?;

        Ok(reading)
    }

    /// All readings recorded for a user, in insertion order
    pub async fn get_user_emg_data(&self, user_id: &str) -> Result<Vec<Reading>> {
        let readings = self.load_readings().await?;
        Ok(readings
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect())
    }

    /// The most recent readings for a user, newest first.
    ///
    /// Sorted by timestamp descending with a stable sort, so readings with
    /// equal timestamps keep their insertion order. The limit defaults to
    /// [`DEFAULT_LATEST_LIMIT`].
    pub async fn get_latest_emg_data(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Reading>> {
        let mut readings = self.get_user_emg_data(user_id).await?;
        readings.sort_by(|a, b| parse_timestamp(&b.timestamp).cmp(&parse_timestamp(&a.timestamp)));
        readings.truncate(limit.unwrap_or(DEFAULT_LATEST_LIMIT));
        Ok(readings)
    }
}

/// Parse a stored RFC 3339 timestamp; unparsable values sort oldest
fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
