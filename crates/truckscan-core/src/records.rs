//! The flattened output row produced for every successfully detailed business.

use serde::Serialize;

/// Column order of the exported file. Matches the field order of [`TruckRecord`].
pub const EXPORT_COLUMNS: [&str; 11] = [
    "name",
    "phone",
    "rating",
    "review_count",
    "address",
    "city",
    "zip_code",
    "categories",
    "price",
    "url",
    "coordinates",
];

/// Placeholder for a missing price tier or coordinate component.
pub const NOT_AVAILABLE: &str = "N/A";

/// One food truck listing, ready for export.
///
/// Missing provider fields are `None` (an empty cell) rather than a reason to
/// drop the row. `price` and each `coordinates` component fall back to
/// [`NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TruckRecord {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    /// Display address lines joined with `", "`.
    pub address: String,
    /// The city query string the business was found under.
    pub city: String,
    pub zip_code: Option<String>,
    /// Category titles joined with `", "`.
    pub categories: String,
    pub price: String,
    pub url: Option<String>,
    /// `"<lat>, <lon>"`.
    pub coordinates: String,
}
