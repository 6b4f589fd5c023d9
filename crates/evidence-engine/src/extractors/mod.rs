//! Field extractors run over a parsed document

pub mod context;
pub mod numeric;
pub mod person;

pub use context::sentence_context;
pub use numeric::{card_digits, first_dollar_token, resolve_amount};
pub use person::most_frequent_person;
