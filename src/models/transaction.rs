use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Link from a transaction to its organization.
///
/// Older payloads carry the organization's position in the org list, newer ones
/// its `_id`. Both are accepted and resolved by [`crate::models::Organizations`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrgRef {
    Index(usize),
    Id(String),
}

impl From<usize> for OrgRef {
    fn from(value: usize) -> Self {
        OrgRef::Index(value)
    }
}

impl From<&str> for OrgRef {
    fn from(value: &str) -> Self {
        OrgRef::Id(value.to_string())
    }
}

// Represents a single incoming or outgoing movement of money.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub company: String,
    #[serde(rename = "orgId")]
    pub org: OrgRef,
    #[serde(serialize_with = "serialize_date", deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    /// Signed amount in currency units; negative is an outflow.
    pub amount: f64,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        company: impl Into<String>,
        org: impl Into<OrgRef>,
        date: NaiveDate,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            company: company.into(),
            org: org.into(),
            date,
            amount,
        }
    }

    pub fn is_incoming(&self) -> bool {
        self.amount > 0.0
    }

    pub fn is_outgoing(&self) -> bool {
        self.amount < 0.0
    }
}

/// Parses `YYYY-MM-DD` or a full RFC 3339 timestamp (taken as its UTC date).
pub fn parse_iso_date(raw: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|e| format!("invalid date '{}': {}", raw, e))
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_iso_date(&raw).map_err(serde::de::Error::custom)
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
}
