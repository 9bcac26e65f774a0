//! Quote record types.

use serde::{Deserialize, Serialize};

/// A single attributed quotation.
///
/// Created once at load time and never mutated afterwards. Equality is
/// plain value equality; there is no identity field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Name of the person the quote is attributed to.
    pub author: String,
    /// Short biographical note for the author. May be empty.
    #[serde(rename = "authorProfile", default)]
    pub author_profile: String,
    /// The quotation text itself.
    pub message: String,
}

/// One randomly selected quote paired with the dataset size.
///
/// Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// The selected quote.
    pub quote: Quote,
    /// Total number of quotes in the dataset at response time.
    pub total_quotes: usize,
}
