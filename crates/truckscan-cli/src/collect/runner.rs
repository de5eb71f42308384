//! The sequential search → detail loop behind a collection run.
//!
//! Request failures never escape this module. A failed search counts as "no
//! businesses for this city"; a failed or empty detail fetch skips that
//! business. Both are tallied in the returned [`CollectionSummary`].

use truckscan_core::TruckRecord;
use truckscan_yelp::{normalize_business, Pacer, SearchParams, Sleep, YelpClient};

/// Requests attempted during a run. Incremented before each request is sent,
/// so failed requests are counted too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CallCounters {
    pub search: u32,
    pub detail: u32,
}

impl CallCounters {
    pub(crate) fn total(self) -> u32 {
        self.search.saturating_add(self.detail)
    }
}

/// Everything a collection run produced.
#[derive(Debug, Default)]
pub(crate) struct CollectionSummary {
    /// One row per successfully detailed business, in city order then
    /// search-result order.
    pub records: Vec<TruckRecord>,
    pub calls: CallCounters,
    pub failed_searches: usize,
    pub failed_details: usize,
}

/// Searches each city in order, fetches details for every hit, and pauses
/// between businesses and cities as configured on `pacer`.
pub(crate) async fn collect_trucks<S: Sleep>(
    client: &YelpClient,
    cities: &[String],
    params: &SearchParams,
    pacer: &Pacer<S>,
) -> CollectionSummary {
    let mut summary = CollectionSummary::default();

    for city in cities {
        summary.calls.search += 1;
        tracing::info!(
            city = %city,
            search_calls = summary.calls.search,
            detail_calls = summary.calls.detail,
            "searching food trucks"
        );

        let businesses = match client.search_businesses(city, params).await {
            Ok(businesses) => businesses,
            Err(e) => {
                tracing::warn!(
                    city = %city,
                    error = %e,
                    "search failed; no businesses for this city"
                );
                summary.failed_searches += 1;
                Vec::new()
            }
        };

        for business in businesses {
            summary.calls.detail += 1;
            match client.get_business(&business.id).await {
                Ok(detail) if detail.is_empty() => {
                    tracing::warn!(
                        city = %city,
                        business_id = %business.id,
                        "detail body empty; skipping business"
                    );
                    summary.failed_details += 1;
                }
                Ok(detail) => {
                    let record = normalize_business(detail, city);
                    tracing::info!(
                        name = record.name.as_deref().unwrap_or("-"),
                        phone = record.phone.as_deref().unwrap_or("-"),
                        address = %record.address,
                        search_calls = summary.calls.search,
                        detail_calls = summary.calls.detail,
                        "found"
                    );
                    summary.records.push(record);
                }
                Err(e) => {
                    tracing::warn!(
                        city = %city,
                        business_id = %business.id,
                        error = %e,
                        "detail fetch failed; skipping business"
                    );
                    summary.failed_details += 1;
                }
            }
            pacer.after_business().await;
        }

        pacer.after_city().await;
    }

    summary
}
