//! Stored document shapes and their conversions to domain entities.

pub mod post;
pub mod user;

use blog_core::error::RepoError;
use chrono::{DateTime, Utc};
use mongodb::bson;
use uuid::Uuid;

pub(crate) fn parse_uuid(field: &'static str, raw: &str) -> Result<Uuid, RepoError> {
    Uuid::parse_str(raw)
        .map_err(|e| RepoError::Serialization(format!("{field} '{raw}' is not a UUID: {e}")))
}

pub(crate) fn to_bson_date(ts: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(ts.timestamp_millis())
}

pub(crate) fn from_bson_date(ts: bson::DateTime) -> Result<DateTime<Utc>, RepoError> {
    DateTime::from_timestamp_millis(ts.timestamp_millis())
        .ok_or_else(|| RepoError::Serialization(format!("timestamp {ts:?} out of range")))
}
