//! Need Records
//!
//! Data structures for a single need listing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a need, numeric or textual depending on the source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NeedId {
    Number(u64),
    Text(String),
}

impl fmt::Display for NeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeedId::Number(n) => write!(f, "{}", n),
            NeedId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for NeedId {
    fn from(n: u64) -> Self {
        NeedId::Number(n)
    }
}

impl From<&str> for NeedId {
    fn from(s: &str) -> Self {
        NeedId::Text(s.to_string())
    }
}

/// Urgency level of a need.
///
/// Ordered `Critical > High > Medium > Low`. Anything else is kept verbatim
/// in `Other` and ranks below `Low`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Urgency {
    Critical,
    High,
    Medium,
    Low,
    Other(String),
}

impl Urgency {
    /// Sort rank, higher is more urgent
    pub fn rank(&self) -> i8 {
        match self {
            Urgency::Critical => 3,
            Urgency::High => 2,
            Urgency::Medium => 1,
            Urgency::Low => 0,
            Urgency::Other(_) => -1,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Urgency::Critical => "Critical",
            Urgency::High => "High",
            Urgency::Medium => "Medium",
            Urgency::Low => "Low",
            Urgency::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Urgency::Other(_))
    }
}

impl From<&str> for Urgency {
    fn from(s: &str) -> Self {
        match s {
            "Critical" => Urgency::Critical,
            "High" => Urgency::High,
            "Medium" => Urgency::Medium,
            "Low" => Urgency::Low,
            other => Urgency::Other(other.to_string()),
        }
    }
}

impl From<String> for Urgency {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Critical" | "High" | "Medium" | "Low" => Urgency::from(s.as_str()),
            _ => Urgency::Other(s),
        }
    }
}

impl From<Urgency> for String {
    fn from(u: Urgency) -> Self {
        match u {
            Urgency::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One need listing (matches the catalog shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeedRecord {
    pub id: NeedId,
    pub name: String,
    /// "City, Region"
    pub location: String,
    pub category: String,
    pub urgency: Urgency,
    pub description: String,
    pub contact: String,
    pub volunteers: u32,
    /// Percentage in [0, 100]
    pub funded: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_rank_order() {
        assert!(Urgency::Critical.rank() > Urgency::High.rank());
        assert!(Urgency::High.rank() > Urgency::Medium.rank());
        assert!(Urgency::Medium.rank() > Urgency::Low.rank());
        assert!(Urgency::Low.rank() > Urgency::from("Urgent!!").rank());
    }

    #[test]
    fn test_unknown_urgency_kept_verbatim() {
        let u = Urgency::from("severe");
        assert_eq!(u, Urgency::Other("severe".to_string()));
        assert_eq!(u.as_str(), "severe");
        assert!(!u.is_known());
        // Matching is case-sensitive, like the catalog values
        assert!(!Urgency::from("critical").is_known());
    }

    #[test]
    fn test_record_deserializes_with_unknown_urgency() {
        let json = r#"{
            "id": 7,
            "name": "Flood relief",
            "location": "Kerala, India",
            "category": "Medical",
            "urgency": "Extreme",
            "description": "Families affected by floods",
            "contact": "+91 98765 43210",
            "volunteers": 4,
            "funded": 35
        }"#;
        let record: NeedRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, NeedId::Number(7));
        assert_eq!(record.urgency, Urgency::Other("Extreme".to_string()));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["urgency"], "Extreme");
    }

    #[test]
    fn test_need_id_accepts_text() {
        let id: NeedId = serde_json::from_str(r#""64f1c2""#).unwrap();
        assert_eq!(id, NeedId::Text("64f1c2".to_string()));
        assert_eq!(id.to_string(), "64f1c2");
    }
}
