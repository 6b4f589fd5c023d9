//! Word lists backing the rule-based analyzer

use std::collections::HashSet;

/// Leading punctuation split off a whitespace-delimited chunk.
pub const PREFIX_CHARS: &[char] = &['$', '€', '£', '(', '[', '{', '"', '\'', '“', '‘', '#'];

/// Trailing punctuation split off a whitespace-delimited chunk.
pub const SUFFIX_CHARS: &[char] = &[
    '.', ',', ';', ':', '!', '?', ')', ']', '}', '"', '\'', '”', '’',
];

pub const CURRENCY_SYMBOLS: &[&str] = &["$", "€", "£"];

/// Words that turn a preceding number into a money amount.
pub const CURRENCY_WORDS: &[&str] = &[
    "dollars", "dollar", "usd", "cents", "cent", "bucks", "eur", "euros", "euro",
];

/// Magnitude words that extend a money amount ("$2 million").
pub const SCALE_WORDS: &[&str] = &["thousand", "million", "billion", "k", "m", "mm", "bn"];

/// Abbreviations whose trailing period belongs to the token.
pub const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "mx", "dr", "jr", "sr", "prof", "inc", "ltd", "co", "corp", "llc", "st",
    "ave", "no", "vs", "etc", "approx", "dept", "e.g", "i.e",
];

pub const HONORIFICS: &[&str] = &["mr", "mrs", "ms", "mx", "dr", "miss", "prof"];

pub const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion",
];

/// Capitalized words that are never part of a person's name.
///
/// Dispute documents are full of title-cased headings ("Order Summary",
/// "Billing Address"), so the commerce vocabulary matters as much as the
/// function words.
pub const COMMON_WORDS: &[&str] = &[
    // function words and salutations
    "a", "an", "the", "and", "or", "but", "nor", "of", "to", "in", "on", "at", "for", "from",
    "by", "with", "as", "into", "onto", "about", "after", "before", "between", "under", "over",
    "is", "was", "were", "are", "be", "been", "being", "am", "has", "have", "had", "do", "does",
    "did", "will", "would", "shall", "should", "can", "could", "may", "might", "must", "this",
    "that", "these", "those", "it", "its", "we", "our", "ours", "you", "your", "yours", "he",
    "him", "his", "she", "her", "hers", "they", "them", "their", "i", "my", "me", "us", "if",
    "then", "than", "so", "not", "no", "yes", "all", "any", "each", "every", "per", "via", "here",
    "there", "when", "where", "which", "who", "whom", "what", "why", "how", "also", "only",
    "dear", "hello", "hi", "thank", "thanks", "please", "regards", "sincerely", "best", "re",
    "subject", "attn", "cc", "fw", "fwd",
    // calendar
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec", "monday", "tuesday", "wednesday", "thursday", "friday",
    "saturday", "sunday", "today", "yesterday", "tomorrow", "date", "time", "day", "month",
    "year",
    // cards, payments and disputes
    "order", "orders", "invoice", "receipt", "payment", "payments", "pay", "paid", "card",
    "cards", "credit", "debit", "visa", "mastercard", "amex", "american", "express", "discover",
    "paypal", "stripe", "bank", "account", "accounts", "customer", "customers", "merchant",
    "cardholder", "buyer", "seller", "dispute", "disputes", "disputed", "chargeback",
    "chargebacks", "claim", "claims", "case", "reason", "code", "amount", "total", "subtotal",
    "tax", "fee", "fees", "balance", "due", "transaction", "transactions", "charge", "charges",
    "charged", "billed", "bill", "billing", "refund", "refunds", "refunded", "return",
    "returns", "cancel", "cancelled", "canceled", "cancellation", "subscription", "recurring",
    "authorization", "authorized", "authentication", "verification", "verified", "verify",
    "avs", "cvv", "cvc", "ending", "purchase", "purchased", "price", "quantity", "qty",
    // shipping and delivery
    "shipping", "shipped", "ship", "shipment", "delivery", "delivered", "deliver", "package",
    "packages", "tracking", "carrier", "ups", "usps", "fedex", "dhl", "signature", "arrival",
    "received", "fulfilled", "fulfillment", "address", "street", "st", "avenue", "ave", "road",
    "rd", "suite", "apt", "city", "state", "zip", "postal", "country", "united", "states",
    "usa", "kingdom",
    // documents and companies
    "summary", "details", "detail", "information", "info", "item", "items", "product",
    "products", "service", "services", "support", "team", "company", "inc", "llc", "ltd",
    "corp", "store", "shop", "online", "website", "web", "email", "e-mail", "phone", "name",
    "number", "id", "ip", "status", "confirmation", "evidence", "document", "documents", "page",
    "exhibit", "attachment", "note", "notes", "response", "rebuttal", "statement", "policy",
    "terms", "conditions", "description", "log", "logs", "login", "logged", "user", "username",
    "new", "north", "south", "east", "west",
];

/// Immutable word sets used by the tokenizer and entity recognizer.
#[derive(Debug, Clone)]
pub struct Lexicon {
    common_words: HashSet<&'static str>,
    honorifics: HashSet<&'static str>,
    abbreviations: HashSet<&'static str>,
    currency_words: HashSet<&'static str>,
    scale_words: HashSet<&'static str>,
}

impl Lexicon {
    /// The built-in English lexicon.
    pub fn english() -> Self {
        Self {
            common_words: COMMON_WORDS.iter().copied().collect(),
            honorifics: HONORIFICS.iter().copied().collect(),
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
            currency_words: CURRENCY_WORDS.iter().copied().collect(),
            scale_words: SCALE_WORDS.iter().copied().collect(),
        }
    }

    /// Add words that should never be tagged as part of a name.
    pub fn with_common_words(mut self, words: &[&'static str]) -> Self {
        self.common_words.extend(words.iter().copied());
        self
    }

    pub fn is_common_word(&self, lower: &str) -> bool {
        self.common_words.contains(strip_period(lower))
    }

    pub fn is_honorific(&self, lower: &str) -> bool {
        self.honorifics.contains(strip_period(lower))
    }

    /// `stem` is the token text without its trailing period, lowercased.
    pub fn is_abbreviation(&self, stem: &str) -> bool {
        self.abbreviations.contains(stem)
    }

    pub fn is_currency_symbol(&self, text: &str) -> bool {
        CURRENCY_SYMBOLS.contains(&text)
    }

    pub fn is_currency_word(&self, lower: &str) -> bool {
        self.currency_words.contains(lower)
    }

    pub fn is_scale_word(&self, lower: &str) -> bool {
        self.scale_words.contains(lower)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

fn strip_period(word: &str) -> &str {
    word.strip_suffix('.').unwrap_or(word)
}
