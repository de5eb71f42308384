use super::*;

fn test_client(base_url: &str) -> YelpClient {
    YelpClient::with_base_url("test-key", 30, "truckscan-test/0.1", base_url)
        .expect("client construction should not fail")
}

#[test]
fn search_url_carries_fixed_parameters() {
    let client = test_client("https://api.yelp.com/v3");
    let url = client.search_url("Laredo", &SearchParams::default());
    assert_eq!(
        url.as_str(),
        "https://api.yelp.com/v3/businesses/search?location=Laredo\
         &categories=foodtrucks%2Cmexican%2Ctacos&limit=50&sort_by=rating\
         &radius=40000&attributes=mobile"
    );
}

#[test]
fn search_url_encodes_location() {
    let client = test_client("https://api.yelp.com/v3");
    let url = client.search_url("El Paso, TX", &SearchParams::default());
    assert!(
        url.as_str().contains("location=El+Paso%2C+TX"),
        "location should be form-encoded: {url}"
    );
}

#[test]
fn endpoint_url_tolerates_trailing_slash() {
    let client = test_client("https://api.yelp.com/v3/");
    let url = client.endpoint_url(&["businesses", "abc"]);
    assert_eq!(url.as_str(), "https://api.yelp.com/v3/businesses/abc");
}

#[test]
fn endpoint_url_encodes_business_id_as_single_segment() {
    let client = test_client("https://api.yelp.com/v3");
    let url = client.endpoint_url(&["businesses", "taco/king?x"]);
    assert_eq!(
        url.as_str(),
        "https://api.yelp.com/v3/businesses/taco%2Fking%3Fx"
    );
}

#[test]
fn rejects_unparseable_base_url() {
    let result = YelpClient::with_base_url("k", 30, "ua", "not a url");
    assert!(matches!(result, Err(YelpError::InvalidBaseUrl { .. })));
}

#[test]
fn rejects_cannot_be_a_base_url() {
    let result = YelpClient::with_base_url("k", 30, "ua", "mailto:trucks@example.com");
    assert!(matches!(result, Err(YelpError::InvalidBaseUrl { .. })));
}
