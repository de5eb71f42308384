//! Yelp Fusion API request parameters and response types.
//!
//! Only the fields the collector reads are modelled. Every detail field is
//! optional on the wire; a missing field must never fail deserialization of
//! the whole business.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// businesses/search
// ---------------------------------------------------------------------------

/// Fixed query parameters sent with every business search.
///
/// `location` is supplied per call; everything else is constant for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub categories: String,
    pub limit: u32,
    pub sort_by: String,
    /// Search radius in meters.
    pub radius: u32,
    pub attributes: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            categories: "foodtrucks,mexican,tacos".to_string(),
            limit: 50,
            sort_by: "rating".to_string(),
            radius: 40_000,
            attributes: "mobile".to_string(),
        }
    }
}

/// Response body of `GET /businesses/search`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub businesses: Vec<BusinessSummary>,
}

/// A single search hit. Only `id` is needed to drive the detail lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessSummary {
    pub id: String,
}

// ---------------------------------------------------------------------------
// businesses/{id}
// ---------------------------------------------------------------------------

/// Response body of `GET /businesses/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusinessDetail {
    #[serde(default)]
    pub name: Option<String>,
    /// Human-formatted phone, e.g. `"(956) 555-0100"`. Often an empty string.
    #[serde(default)]
    pub display_phone: Option<String>,
    /// E.164 phone, e.g. `"+19565550100"`.
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    /// Price tier, `"$"` through `"$$$$"`.
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl BusinessDetail {
    /// `true` when the body carried none of the fields the collector reads,
    /// e.g. a bare `{}`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.display_phone.is_none()
            && self.phone.is_none()
            && self.rating.is_none()
            && self.review_count.is_none()
            && self.location.is_none()
            && self.categories.is_none()
            && self.price.is_none()
            && self.url.is_none()
            && self.coordinates.is_none()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub display_address: Option<Vec<String>>,
    #[serde(default)]
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub title: Option<String>,
}

/// Both components can be `null` for businesses without a fixed location.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Coordinates {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}
