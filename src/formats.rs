use serde::{Deserialize, Serialize};

/// One catalogue listing entry.
///
/// Every field is carried verbatim from the markup apart from trimming the
/// surrounding whitespace: `price` keeps its currency symbol and
/// `availability` keeps the site's free-text phrasing ("In stock").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub price: String,
    pub availability: String,
}
