//! Collection command handler for the CLI.
//!
//! Builds the Yelp client from config, runs the city loop, exports the
//! records, and prints a summary. Any failure of the run itself is logged and
//! reported here rather than propagated, so the process still exits normally.

mod runner;

use std::path::{Path, PathBuf};

use anyhow::Context;
use truckscan_core::AppConfig;
use truckscan_yelp::{Pacer, SearchParams, YelpClient};

pub(crate) use runner::{collect_trucks, CallCounters, CollectionSummary};

use crate::export;

/// Runs a full collection: search, detail, export, summary.
///
/// When `dry_run` is `true` the cities are printed and no request is made.
/// A failed run is logged and printed, never returned.
pub(crate) async fn run_collect(
    config: &AppConfig,
    cities: &[String],
    output_dir: &Path,
    dry_run: bool,
) -> anyhow::Result<()> {
    if dry_run {
        println!(
            "dry-run: would search {} cities: [{}]",
            cities.len(),
            cities.join("; ")
        );
        return Ok(());
    }

    println!("Starting food truck search in {} cities...", cities.len());
    match collect_and_export(config, cities, output_dir).await {
        Ok((summary, path)) => println!("{}", render_summary(&summary, path.as_deref())),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "collection run failed");
            eprintln!("\nError: {e:#}");
        }
    }
    Ok(())
}

/// Collects every configured city and writes the CSV when anything was found.
///
/// Returns the export path, or `None` when no records were collected.
pub(crate) async fn collect_and_export(
    config: &AppConfig,
    cities: &[String],
    output_dir: &Path,
) -> anyhow::Result<(CollectionSummary, Option<PathBuf>)> {
    let api_key = config
        .yelp_api_key
        .as_deref()
        .context("YELP_API_KEY is not set")?;
    let client = YelpClient::with_base_url(
        api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.api_base_url,
    )
    .context("failed to build Yelp client")?;
    let pacer = Pacer::new(config.business_delay_ms, config.city_delay_ms);

    let summary = collect_trucks(&client, cities, &SearchParams::default(), &pacer).await;

    if summary.records.is_empty() {
        return Ok((summary, None));
    }

    let now = chrono::Local::now().naive_local();
    let path = export::export_records(output_dir, &summary.records, now)?;
    Ok((summary, Some(path)))
}

/// Human-readable end-of-run report.
pub(crate) fn render_summary(summary: &CollectionSummary, path: Option<&Path>) -> String {
    let Some(path) = path else {
        return "\nNo food trucks found".to_string();
    };

    let CallCounters { search, detail } = summary.calls;
    let mut out = String::from("\nSearch completed!\n");
    out.push_str("Total API calls made:\n");
    out.push_str(&format!("- Search calls: {search}\n"));
    out.push_str(&format!("- Detail calls: {detail}\n"));
    out.push_str(&format!("- Total calls: {}\n", summary.calls.total()));
    if summary.failed_searches > 0 || summary.failed_details > 0 {
        out.push_str(&format!(
            "- Failed: {} searches, {} details\n",
            summary.failed_searches, summary.failed_details
        ));
    }
    out.push_str(&format!("\nFood trucks found: {}\n", summary.records.len()));
    out.push_str(&format!("\nCSV saved to: {}", path.display()));
    out
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
