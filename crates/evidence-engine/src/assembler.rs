//! Shapes extracted values into the wire summary

use shared_types::{Amount, DisputeSummary, EvidenceCategory, LegitimacyEvidence, UserInfo};

/// Build a [`DisputeSummary`]. Categories missing from `evidence` are left
/// as empty lists.
pub fn assemble(
    name: Option<String>,
    credit_card: Option<String>,
    amount: Amount,
    evidence: impl IntoIterator<Item = (EvidenceCategory, Vec<String>)>,
) -> DisputeSummary {
    let mut legitimacy_evidence = LegitimacyEvidence::default();
    for (category, snippets) in evidence {
        legitimacy_evidence.set(category, snippets);
    }

    DisputeSummary {
        user_info: UserInfo { name, credit_card },
        amount,
        legitimacy_evidence,
    }
}
