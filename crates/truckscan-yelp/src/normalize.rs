//! Flattening of a Yelp [`BusinessDetail`] into a [`truckscan_core::TruckRecord`].
//!
//! Normalization never fails: absent fields become `None`, empty strings,
//! or [`NOT_AVAILABLE`]. Callers skip details that are entirely empty (see
//! [`BusinessDetail::is_empty`]); anything else yields exactly one row.

use truckscan_core::{TruckRecord, NOT_AVAILABLE};

use crate::types::{BusinessDetail, Coordinates};

/// Converts a business detail into an output row tagged with the `city`
/// query it was found under.
#[must_use]
pub fn normalize_business(detail: BusinessDetail, city: &str) -> TruckRecord {
    let phone = detail
        .display_phone
        .filter(|p| !p.is_empty())
        .or_else(|| detail.phone.filter(|p| !p.is_empty()));

    let (address, zip_code) = match detail.location {
        Some(location) => (
            location.display_address.unwrap_or_default().join(", "),
            location.zip_code,
        ),
        None => (String::new(), None),
    };

    let categories = detail
        .categories
        .unwrap_or_default()
        .into_iter()
        .filter_map(|c| c.title)
        .collect::<Vec<_>>()
        .join(", ");

    TruckRecord {
        name: detail.name,
        phone,
        rating: detail.rating,
        review_count: detail.review_count,
        address,
        city: city.to_owned(),
        zip_code,
        categories,
        price: detail.price.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        url: detail.url,
        coordinates: format_coordinates(detail.coordinates.as_ref()),
    }
}

/// Renders `"<lat>, <lon>"`, substituting [`NOT_AVAILABLE`] per missing component.
///
/// Whole numbers keep their `.0` (`30.0`, not `30`).
fn format_coordinates(coordinates: Option<&Coordinates>) -> String {
    let component = |value: Option<f64>| {
        value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{v:?}"))
    };
    let (lat, lon) = coordinates.map_or((None, None), |c| (c.latitude, c.longitude));
    format!("{}, {}", component(lat), component(lon))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
