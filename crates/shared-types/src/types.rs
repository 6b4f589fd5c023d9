use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Wire value used when no disputed amount could be resolved.
pub const AMOUNT_SENTINEL: i64 = -1;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DisputeSummary {
    pub user_info: UserInfo,
    pub amount: Amount,
    pub legitimacy_evidence: LegitimacyEvidence,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserInfo {
    pub name: Option<String>,        // Most frequent PERSON entity, null when none was tagged
    pub credit_card: Option<String>, // Last four digits from "ending in NNNN"
}

/// Disputed amount as resolved from the document text.
///
/// On the wire this keeps the historical loose shape: a number when an
/// amount was resolved from a `$`-prefixed money entity, the raw
/// whitespace-delimited token when only the `$` fallback scan found
/// something, and `-1` when nothing was found.
///
/// A document that genuinely states an amount of `-1` cannot be told apart
/// from [`Amount::NotFound`] once serialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Amount {
    Resolved(f64),
    RawToken(String),
    #[default]
    NotFound,
}

impl Amount {
    pub fn is_found(&self) -> bool {
        !matches!(self, Amount::NotFound)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Amount::Resolved(value) => serializer.serialize_f64(*value),
            Amount::RawToken(token) => serializer.serialize_str(token),
            Amount::NotFound => serializer.serialize_i64(AMOUNT_SENTINEL),
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum WireAmount {
            Number(f64),
            Token(String),
        }

        match WireAmount::deserialize(deserializer)? {
            WireAmount::Number(value) if value == AMOUNT_SENTINEL as f64 => Ok(Amount::NotFound),
            WireAmount::Number(value) if value.is_finite() => Ok(Amount::Resolved(value)),
            WireAmount::Number(value) => Err(de::Error::custom(format!(
                "amount must be finite, got {}",
                value
            ))),
            WireAmount::Token(token) => Ok(Amount::RawToken(token)),
        }
    }
}

/// The three buckets of legitimacy evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceCategory {
    IdentityVerification,
    DeliveryConfirmation,
    PaymentVerification,
}

impl EvidenceCategory {
    pub const ALL: [EvidenceCategory; 3] = [
        EvidenceCategory::IdentityVerification,
        EvidenceCategory::DeliveryConfirmation,
        EvidenceCategory::PaymentVerification,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceCategory::IdentityVerification => "identity_verification",
            EvidenceCategory::DeliveryConfirmation => "delivery_confirmation",
            EvidenceCategory::PaymentVerification => "payment_verification",
        }
    }
}

impl std::fmt::Display for EvidenceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evidence snippets per category. Every list is present even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LegitimacyEvidence {
    pub identity_verification: Vec<String>,
    pub delivery_confirmation: Vec<String>,
    pub payment_verification: Vec<String>,
}

impl LegitimacyEvidence {
    pub fn get(&self, category: EvidenceCategory) -> &[String] {
        match category {
            EvidenceCategory::IdentityVerification => &self.identity_verification,
            EvidenceCategory::DeliveryConfirmation => &self.delivery_confirmation,
            EvidenceCategory::PaymentVerification => &self.payment_verification,
        }
    }

    pub fn set(&mut self, category: EvidenceCategory, snippets: Vec<String>) {
        match category {
            EvidenceCategory::IdentityVerification => self.identity_verification = snippets,
            EvidenceCategory::DeliveryConfirmation => self.delivery_confirmation = snippets,
            EvidenceCategory::PaymentVerification => self.payment_verification = snippets,
        }
    }

    pub fn is_empty(&self) -> bool {
        EvidenceCategory::ALL
            .iter()
            .all(|category| self.get(*category).is_empty())
    }
}

/// Result of running the extraction pipeline over one uploaded document.
///
/// `Unreadable` serializes to an empty JSON object (`{}`), which is what
/// callers receive when the PDF could not be read at all.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Parsed(DisputeSummary),
    Unreadable,
}

impl ParseOutcome {
    pub fn summary(&self) -> Option<&DisputeSummary> {
        match self {
            ParseOutcome::Parsed(summary) => Some(summary),
            ParseOutcome::Unreadable => None,
        }
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self, ParseOutcome::Unreadable)
    }
}

impl Serialize for ParseOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParseOutcome::Parsed(summary) => summary.serialize(serializer),
            ParseOutcome::Unreadable => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_summary() -> DisputeSummary {
        DisputeSummary {
            user_info: UserInfo {
                name: Some("John Smith".to_string()),
                credit_card: Some("1234".to_string()),
            },
            amount: Amount::Resolved(45.0),
            legitimacy_evidence: LegitimacyEvidence {
                identity_verification: vec![],
                delivery_confirmation: vec!["The package was delivered to the customer.".to_string()],
                payment_verification: vec![],
            },
        }
    }

    #[test]
    fn test_summary_wire_shape() {
        let value = serde_json::to_value(sample_summary()).unwrap();
        assert_eq!(
            value,
            json!({
                "user_info": { "name": "John Smith", "credit_card": "1234" },
                "amount": 45.0,
                "legitimacy_evidence": {
                    "identity_verification": [],
                    "delivery_confirmation": ["The package was delivered to the customer."],
                    "payment_verification": []
                }
            })
        );
    }

    #[test]
    fn test_amount_variants_serialize_to_loose_shape() {
        assert_eq!(serde_json::to_string(&Amount::Resolved(120.0)).unwrap(), "120.0");
        assert_eq!(
            serde_json::to_string(&Amount::RawToken("USD$45".to_string())).unwrap(),
            "\"USD$45\""
        );
        assert_eq!(serde_json::to_string(&Amount::NotFound).unwrap(), "-1");
    }

    #[test]
    fn test_amount_deserializes_sentinel_as_not_found() {
        let amount: Amount = serde_json::from_str("-1").unwrap();
        assert_eq!(amount, Amount::NotFound);

        let amount: Amount = serde_json::from_str("19.99").unwrap();
        assert_eq!(amount, Amount::Resolved(19.99));

        let amount: Amount = serde_json::from_str("\"$19.99*\"").unwrap();
        assert_eq!(amount, Amount::RawToken("$19.99*".to_string()));
    }

    #[test]
    fn test_missing_user_info_serializes_as_null() {
        let summary = DisputeSummary {
            user_info: UserInfo::default(),
            amount: Amount::NotFound,
            legitimacy_evidence: LegitimacyEvidence::default(),
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert!(value["user_info"]["name"].is_null());
        assert!(value["user_info"]["credit_card"].is_null());
        assert_eq!(value["amount"], json!(-1));
    }

    #[test]
    fn test_unreadable_outcome_is_empty_object() {
        assert_eq!(serde_json::to_string(&ParseOutcome::Unreadable).unwrap(), "{}");
    }

    #[test]
    fn test_parsed_outcome_is_transparent() {
        let summary = sample_summary();
        let outcome = serde_json::to_value(ParseOutcome::Parsed(summary.clone())).unwrap();
        assert_eq!(outcome, serde_json::to_value(summary).unwrap());
    }

    #[test]
    fn test_summary_roundtrip() {
        let summary = sample_summary();
        let json = serde_json::to_string(&summary).unwrap();
        let back: DisputeSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn test_evidence_set_and_get_by_category() {
        let mut evidence = LegitimacyEvidence::default();
        assert!(evidence.is_empty());

        evidence.set(
            EvidenceCategory::PaymentVerification,
            vec!["Card ending in 1234 was charged.".to_string()],
        );
        assert_eq!(evidence.get(EvidenceCategory::PaymentVerification).len(), 1);
        assert!(evidence.get(EvidenceCategory::IdentityVerification).is_empty());
        assert!(!evidence.is_empty());
    }

    #[test]
    fn test_category_names_match_wire_keys() {
        for category in EvidenceCategory::ALL {
            let key = serde_json::to_value(category).unwrap();
            assert_eq!(key, json!(category.as_str()));
        }
    }
}
