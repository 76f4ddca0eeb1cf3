use crate::models::{Feature, LandType, SearchPreferences};
use crate::platforms::templates::TEMPLATE_VERSION;
use crate::platforms::{Platform, QueryContext, SearchPlatform};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Generic FSBO phrases every search starts from
pub const BASE_TERMS: [&str; 5] = [
    "land for sale by owner",
    "FSBO land",
    "owner financed land",
    "raw land for sale",
    "vacant land owner",
];

pub const SMALL_LOT_TERMS: [&str; 2] = ["small lot for sale", "building lot owner"];
pub const LARGE_TRACT_TERMS: [&str; 2] = ["acreage for sale", "large tract owner"];

pub const WATERFRONT_TERM: &str = "waterfront land owner";
pub const HUNTING_TERM: &str = "hunting land FSBO";
pub const OWNER_CARRY_TERM: &str = "owner will carry land";

const SMALL_LOT_MAX_ACRES: f64 = 5.0;
const LARGE_TRACT_MIN_ACRES: f64 = 10.0;

/// Deduplicated search phrases.
///
/// Kept sorted so iteration and the representative term are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchTermSet(BTreeSet<String>);

impl SearchTermSet {
    /// Any single term stands in for the whole set where a site takes one
    /// query. We pick the lexicographically smallest.
    pub fn representative(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.0.contains(term)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<String> for SearchTermSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One generated link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformUrl {
    pub platform: Platform,
    pub url: String,
}

/// Search links in the fixed platform order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlatformUrlMap(Vec<PlatformUrl>);

impl PlatformUrlMap {
    pub fn get(&self, platform: Platform) -> Option<&str> {
        self.0
            .iter()
            .find(|entry| entry.platform == platform)
            .map(|entry| entry.url.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlatformUrl> {
        self.0.iter()
    }
}

/// Result of one full recomputation for a preference snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedSearch {
    pub preferences: SearchPreferences,
    pub terms: SearchTermSet,
    pub urls: PlatformUrlMap,
    /// Revision of the URL templates the links were built from
    pub template_version: u32,
}

/// Derive the set of search phrases for a preference set
pub fn derive_search_terms(prefs: &SearchPreferences) -> SearchTermSet {
    let mut terms: Vec<String> = BASE_TERMS.iter().map(|t| t.to_string()).collect();

    // First match wins when the bounds contradict each other
    if prefs.max_acres <= SMALL_LOT_MAX_ACRES {
        terms.extend(SMALL_LOT_TERMS.iter().map(|t| t.to_string()));
    } else if prefs.min_acres >= LARGE_TRACT_MIN_ACRES {
        terms.extend(LARGE_TRACT_TERMS.iter().map(|t| t.to_string()));
    }

    // Most features have no matching phrase
    for feature in &prefs.features {
        if feature.is_waterfront() {
            terms.push(WATERFRONT_TERM.to_string());
        } else if *feature == Feature::Hunting {
            terms.push(HUNTING_TERM.to_string());
        } else if *feature == Feature::OwnerFinancing {
            terms.push(OWNER_CARRY_TERM.to_string());
        }
    }

    if prefs.land_type != LandType::Any {
        terms.push(format!("{} land FSBO", prefs.land_type));
    }

    let set: SearchTermSet = terms.into_iter().collect();
    debug!(terms = set.len(), "Derived search terms");
    set
}

/// Build one search URL per platform, in platform order
pub fn build_platform_urls(prefs: &SearchPreferences, terms: &SearchTermSet) -> PlatformUrlMap {
    let term = terms.representative().unwrap_or_default();
    debug!(location = %prefs.location, term, "Building platform URLs");

    let ctx = QueryContext::new(&prefs.location, term);
    PlatformUrlMap(
        Platform::ALL
            .into_iter()
            .map(|platform| PlatformUrl {
                platform,
                url: platform.search_url(&ctx),
            })
            .collect(),
    )
}

/// Recompute terms and URLs for the current preferences
pub fn compose(prefs: &SearchPreferences) -> ComposedSearch {
    let terms = derive_search_terms(prefs);
    let urls = build_platform_urls(prefs, &terms);
    ComposedSearch {
        preferences: prefs.clone(),
        terms,
        urls,
        template_version: TEMPLATE_VERSION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Financing;

    fn prefs(min_acres: f64, max_acres: f64) -> SearchPreferences {
        SearchPreferences {
            min_acres,
            max_acres,
            ..SearchPreferences::default()
        }
    }

    #[test]
    fn small_lot_bracket() {
        let terms = derive_search_terms(&prefs(0.5, 5.0));
        for t in SMALL_LOT_TERMS {
            assert!(terms.contains(t));
        }
        for t in LARGE_TRACT_TERMS {
            assert!(!terms.contains(t));
        }
        assert_eq!(terms.len(), 7);
    }

    #[test]
    fn large_tract_bracket() {
        let terms = derive_search_terms(&prefs(10.0, 40.0));
        for t in LARGE_TRACT_TERMS {
            assert!(terms.contains(t));
        }
        assert!(!terms.contains(SMALL_LOT_TERMS[0]));
    }

    #[test]
    fn contradictory_bounds_take_small_lot() {
        let terms = derive_search_terms(&prefs(15.0, 3.0));
        assert!(terms.contains("small lot for sale"));
        assert!(!terms.contains("acreage for sale"));
    }

    #[test]
    fn middle_range_adds_no_bracket() {
        let terms = derive_search_terms(&prefs(1.0, 20.0));
        assert_eq!(terms.len(), BASE_TERMS.len());
    }

    #[test]
    fn unmapped_features_add_nothing() {
        let p = SearchPreferences {
            features: vec![Feature::Fenced, Feature::Well, Feature::CornerLot],
            ..SearchPreferences::default()
        };
        assert_eq!(derive_search_terms(&p).len(), BASE_TERMS.len());
    }

    #[test]
    fn mapped_features_add_their_phrase_once() {
        let p = SearchPreferences {
            features: vec![
                Feature::Creek,
                Feature::Pond,
                Feature::WaterAccess,
                Feature::OwnerFinancing,
            ],
            ..SearchPreferences::default()
        };
        let terms = derive_search_terms(&p);
        assert!(terms.contains(WATERFRONT_TERM));
        assert!(terms.contains(OWNER_CARRY_TERM));
        assert_eq!(terms.iter().filter(|t| *t == WATERFRONT_TERM).count(), 1);
        assert_eq!(terms.len(), BASE_TERMS.len() + 2);
    }

    #[test]
    fn land_type_phrase() {
        let p = SearchPreferences {
            land_type: LandType::Ranch,
            ..SearchPreferences::default()
        };
        let terms = derive_search_terms(&p);
        assert_eq!(terms.iter().filter(|t| t.contains("ranch land FSBO")).count(), 1);

        let any = derive_search_terms(&SearchPreferences::default());
        assert!(!any.iter().any(|t| t.ends_with(" land FSBO")));
    }

    #[test]
    fn financing_is_not_consulted() {
        let base = derive_search_terms(&SearchPreferences::default());
        let p = SearchPreferences {
            financing: Financing::OwnerFinancing,
            ..SearchPreferences::default()
        };
        assert_eq!(derive_search_terms(&p), base);
    }

    #[test]
    fn representative_is_smallest_term() {
        let terms = derive_search_terms(&SearchPreferences::default());
        assert_eq!(terms.representative(), Some("FSBO land"));
        assert_eq!(SearchTermSet::default().representative(), None);
    }

    #[test]
    fn urls_follow_platform_order() {
        let result = compose(&SearchPreferences::default());
        let order: Vec<Platform> = result.urls.iter().map(|e| e.platform).collect();
        assert_eq!(order, Platform::ALL.to_vec());
        assert_eq!(
            result.urls.get(Platform::Craigslist),
            Some("https://austintx.craigslist.org/search/rea?query=FSBO+land&sort=date")
        );
    }
}
