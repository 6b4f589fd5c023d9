//! Pattern catalogs for legitimacy evidence and card details

use shared_types::EvidenceCategory;

use crate::matcher::TokenConstraint::{IsDigitOfLength, Lower, LowerIn, Wildcard};
use crate::matcher::{PatternSet, TokenPattern};

/// Single words that point at identity or account verification
pub const IDENTITY_KEYWORDS: &[&str] = &[
    "verify",
    "verification",
    "avs",
    "address",
    "authorized",
    "tokenized",
    "logging",
    "authentication",
    "pass",
];

/// Single words that point at shipment or receipt of goods
pub const DELIVERY_KEYWORDS: &[&str] = &[
    "deliver",
    "shipped",
    "package",
    "arrival",
    "received",
    "fulfilled",
];

/// Single words that point at a valid, authorized payment
pub const PAYMENT_KEYWORDS: &[&str] = &["billed", "authorization", "charged", "recurring"];

pub const IDENTITY_VERIFICATION: PatternSet = PatternSet {
    name: "identity_verification",
    patterns: &[
        TokenPattern(&[LowerIn(IDENTITY_KEYWORDS)]),
        TokenPattern(&[Lower("ip"), Lower("address")]),
        TokenPattern(&[Lower("billing"), Lower("address")]),
        TokenPattern(&[Lower("shipping"), Lower("address")]),
        TokenPattern(&[Lower("logged"), Lower("in")]),
        TokenPattern(&[Lower("tracking")]),
        TokenPattern(&[Lower("satisfied"), Wildcard, Lower("checks")]),
    ],
};

pub const DELIVERY_CONFIRMATION: PatternSet = PatternSet {
    name: "delivery_confirmation",
    patterns: &[
        TokenPattern(&[LowerIn(DELIVERY_KEYWORDS)]),
        TokenPattern(&[Lower("delivered"), Lower("to")]),
        TokenPattern(&[Lower("tracking"), Lower("number")]),
    ],
};

pub const PAYMENT_VERIFICATION: PatternSet = PatternSet {
    name: "payment_verification",
    patterns: &[
        TokenPattern(&[LowerIn(PAYMENT_KEYWORDS)]),
        TokenPattern(&[Lower("payment"), Lower("method")]),
        TokenPattern(&[Lower("order"), Lower("summary")]),
        TokenPattern(&[Lower("ending"), Lower("in")]),
        TokenPattern(&[Lower("charge"), Wildcard, Lower("valid")]),
    ],
};

/// "ending in 1234"
pub const CREDIT_CARD: PatternSet = PatternSet {
    name: "credit_card",
    patterns: &[TokenPattern(&[
        Lower("ending"),
        Lower("in"),
        IsDigitOfLength(4),
    ])],
};

/// Pattern set used to collect evidence for `category`.
pub fn evidence_patterns(category: EvidenceCategory) -> &'static PatternSet {
    match category {
        EvidenceCategory::IdentityVerification => &IDENTITY_VERIFICATION,
        EvidenceCategory::DeliveryConfirmation => &DELIVERY_CONFIRMATION,
        EvidenceCategory::PaymentVerification => &PAYMENT_VERIFICATION,
    }
}
