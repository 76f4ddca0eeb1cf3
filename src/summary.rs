use crate::composer::{PlatformUrlMap, SearchTermSet};
use crate::models::SearchPreferences;
use crate::platforms::LocationSlug;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;

/// MIME type of the downloadable summary
pub const SUMMARY_MIME_TYPE: &str = "text/plain";

/// Timestamp format written into the summary header
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d at %H:%M:%S";

const RULE_WIDTH: usize = 60;

const INSTRUCTIONS: &str = "INSTRUCTIONS:
1. Copy any URL above
2. Paste it into your web browser
3. Press Enter to search
4. Look for 'For Sale By Owner' or 'FSBO' listings
5. Contact sellers directly

TIP: Check these sites daily as good deals go fast!
";

/// Acreage echoed the way the form printed floats: at least one decimal
/// place ("1.0", "2.5"), scientific notation below 1e-4 and from 1e16 up
/// ("1e-05", "1e+16")
pub fn format_acres(acres: f64) -> String {
    if acres.is_nan() {
        return "nan".to_string();
    }
    if acres.is_infinite() {
        return if acres > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = acres.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{:e}", acres);
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        return format!("{}e{}{:0>2}", mantissa, sign, digits);
    }

    let plain = acres.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}

/// Dollar amount with thousands separators ("100,000")
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn features_line(prefs: &SearchPreferences) -> String {
    if prefs.features.is_empty() {
        "None specified".to_string()
    } else {
        prefs
            .features
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The "search configuration" lines, shared with the terminal display
pub fn configuration_lines(prefs: &SearchPreferences) -> Vec<String> {
    vec![
        format!("Location: {}", prefs.location),
        format!(
            "Size: {} - {} acres",
            format_acres(prefs.min_acres),
            format_acres(prefs.max_acres)
        ),
        format!("Max Price: ${}", format_price(prefs.max_price)),
        format!("Land Type: {}", prefs.land_type),
        format!("Financing: {}", prefs.financing),
        format!("Features: {}", features_line(prefs)),
    ]
}

/// Search terms numbered from 1
pub fn numbered_terms(terms: &SearchTermSet) -> Vec<String> {
    terms
        .iter()
        .enumerate()
        .map(|(i, term)| format!("{}. {}", i + 1, term))
        .collect()
}

/// Render the downloadable text summary.
///
/// Pure formatting: identical inputs and timestamp give identical output.
pub fn render_summary(
    prefs: &SearchPreferences,
    terms: &SearchTermSet,
    urls: &PlatformUrlMap,
    timestamp: &str,
) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut doc = format!(
        "LAND SEARCH URLS - {}\nGenerated on: {}\n{}\n\nSEARCH CONFIGURATION:\n{}\n\nSEARCH TERMS USED:\n{}\n\nSEARCH URLS:\n{}\n\n",
        prefs.location.to_uppercase(),
        timestamp,
        rule,
        configuration_lines(prefs).join("\n"),
        numbered_terms(terms).join("\n"),
        rule,
    );

    for entry in urls.iter() {
        doc.push_str(&format!("{}:\n{}\n\n", entry.platform.label(), entry.url));
    }

    doc.push_str(INSTRUCTIONS);
    doc
}

/// Download name: `land_search_urls_<slug>_<YYYYMMDD>.txt`
pub fn download_filename(location: &str, date: NaiveDate) -> String {
    format!(
        "land_search_urls_{}_{}.txt",
        LocationSlug::new(location).loc_url,
        date.format("%Y%m%d")
    )
}

/// Write a rendered summary into `dir` and return the file path
pub async fn write_summary(dir: &Path, filename: &str, summary: &str) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(filename);
    tokio::fs::write(&path, summary)
        .await
        .with_context(|| format!("Failed to write summary to {}", path.display()))?;

    info!("💾 Saved search URLs to {} ({})", path.display(), SUMMARY_MIME_TYPE);
    Ok(path)
}
