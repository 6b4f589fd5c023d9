//! Wire types for dispute document summaries
//!
//! Shared between the evidence engine (which produces them) and the upload
//! server (which serializes them back to callers).

pub mod types;

pub use types::{
    Amount, DisputeSummary, EvidenceCategory, LegitimacyEvidence, ParseOutcome, UserInfo,
    AMOUNT_SENTINEL,
};
