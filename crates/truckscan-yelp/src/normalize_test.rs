use serde_json::json;

use super::*;

fn detail_from(value: serde_json::Value) -> BusinessDetail {
    serde_json::from_value(value).expect("fixture should deserialize")
}

fn taco_king() -> BusinessDetail {
    detail_from(json!({
        "id": "abc",
        "name": "Taco King",
        "display_phone": "(956) 555-0100",
        "phone": "+19565550100",
        "rating": 4.5,
        "review_count": 120,
        "location": {
            "display_address": ["123 Main St", "Laredo, TX 78040"],
            "zip_code": "78040"
        },
        "categories": [{ "alias": "tacos", "title": "Tacos" }],
        "price": "$",
        "url": "http://example.com",
        "coordinates": { "latitude": 27.5, "longitude": -99.5 }
    }))
}

#[test]
fn normalizes_complete_business() {
    let record = normalize_business(taco_king(), "Laredo, TX");

    assert_eq!(record.name.as_deref(), Some("Taco King"));
    assert_eq!(record.phone.as_deref(), Some("(956) 555-0100"));
    assert_eq!(record.rating, Some(4.5));
    assert_eq!(record.review_count, Some(120));
    assert_eq!(record.address, "123 Main St, Laredo, TX 78040");
    assert_eq!(record.city, "Laredo, TX");
    assert_eq!(record.zip_code.as_deref(), Some("78040"));
    assert_eq!(record.categories, "Tacos");
    assert_eq!(record.price, "$");
    assert_eq!(record.url.as_deref(), Some("http://example.com"));
    assert_eq!(record.coordinates, "27.5, -99.5");
}

#[test]
fn name_only_business_fills_defaults() {
    let record = normalize_business(detail_from(json!({ "name": "Pharr Tacos" })), "Pharr, TX");

    assert_eq!(record.name.as_deref(), Some("Pharr Tacos"));
    assert_eq!(record.phone, None);
    assert_eq!(record.rating, None);
    assert_eq!(record.review_count, None);
    assert_eq!(record.address, "");
    assert_eq!(record.city, "Pharr, TX");
    assert_eq!(record.zip_code, None);
    assert_eq!(record.categories, "");
    assert_eq!(record.price, "N/A");
    assert_eq!(record.url, None);
    assert_eq!(record.coordinates, "N/A, N/A");
}

#[test]
fn explicit_nulls_are_treated_as_missing() {
    let record = normalize_business(
        detail_from(json!({
            "name": "Elote Cart",
            "price": null,
            "location": { "display_address": null, "zip_code": null },
            "categories": null,
            "coordinates": { "latitude": null, "longitude": -97.1 }
        })),
        "Mission, TX",
    );

    assert_eq!(record.price, "N/A");
    assert_eq!(record.address, "");
    assert_eq!(record.categories, "");
    assert_eq!(record.coordinates, "N/A, -97.1");
}

#[test]
fn blank_display_phone_falls_back_to_raw_phone() {
    let record = normalize_business(
        detail_from(json!({ "display_phone": "", "phone": "+19565550100" })),
        "Laredo, TX",
    );
    assert_eq!(record.phone.as_deref(), Some("+19565550100"));
}

#[test]
fn blank_phones_become_none() {
    let record = normalize_business(
        detail_from(json!({ "display_phone": "", "phone": "" })),
        "Laredo, TX",
    );
    assert_eq!(record.phone, None);
}

#[test]
fn multiple_categories_are_joined_in_order() {
    let record = normalize_business(
        detail_from(json!({
            "categories": [
                { "alias": "foodtrucks", "title": "Food Trucks" },
                { "alias": "mexican", "title": "Mexican" }
            ]
        })),
        "McAllen, TX",
    );
    assert_eq!(record.categories, "Food Trucks, Mexican");
}

#[test]
fn categories_without_title_are_dropped() {
    let record = normalize_business(
        detail_from(json!({
            "name": "Taco King",
            "categories": [{ "alias": "tacos" }]
        })),
        "Laredo, TX",
    );
    assert_eq!(record.name.as_deref(), Some("Taco King"));
    assert_eq!(record.categories, "");
}

#[test]
fn whole_number_coordinates_keep_decimal_point() {
    let record = normalize_business(
        detail_from(json!({
            "name": "Round Numbers",
            "coordinates": { "latitude": 30.0, "longitude": -97.0 }
        })),
        "El Paso, TX",
    );
    assert_eq!(record.coordinates, "30.0, -97.0");
}
