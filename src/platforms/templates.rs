//! Outbound URL templates for each listing site.
//!
//! These strings follow the sites' own query parsers and are the only thing
//! that should change when a site moves its search pages. Placeholders:
//!
//! - `{loc_url}`   hyphenated location slug, used in path segments
//! - `{loc_clean}` hyphen-free slug, used as a subdomain
//! - `{term}`      representative search term, query-encoded
//! - `{fsbo_query}` the fixed FSBO phrase, query-encoded

use crate::platforms::types::QueryContext;

/// Bump whenever any template below changes
pub const TEMPLATE_VERSION: u32 = 1;

pub const CRAIGSLIST: &str =
    "https://{loc_clean}.craigslist.org/search/rea?query={term}&sort=date";

pub const FACEBOOK_MARKETPLACE: &str =
    "https://www.facebook.com/marketplace/{loc_url}/search?query={fsbo_query}";

pub const LANDWATCH: &str = "https://www.landwatch.com/land-for-sale/{loc_url}";

pub const LAND_AND_FARM: &str = "https://www.landandfarm.com/search/{loc_url}-land-for-sale/";

pub const ZILLOW_FSBO: &str = "https://www.zillow.com/homes/for_sale/{loc_url}_rb/?searchQueryState=%7B%22usersSearchTerm%22%3A%22{loc_url}%20land%20for%20sale%20by%20owner%22%7D";

pub const LOOPNET: &str = "https://www.loopnet.com/search/vacant-land-for-sale/{loc_url}/";

pub const LANDHUB: &str = "https://www.landhub.com/land-for-sale/{loc_url}";

pub const LANDS_OF_AMERICA: &str = "https://www.landsofamerica.com/land-for-sale/{loc_url}/";

/// Substitute every placeholder in `template`
pub fn render(template: &str, ctx: &QueryContext) -> String {
    template
        .replace("{loc_url}", &ctx.slug.loc_url)
        .replace("{loc_clean}", &ctx.slug.loc_clean)
        .replace("{term}", &ctx.term_query)
        .replace("{fsbo_query}", &ctx.fsbo_query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_placeholder() {
        let ctx = QueryContext::new("Austin TX", "FSBO land");
        assert_eq!(
            render(CRAIGSLIST, &ctx),
            "https://austintx.craigslist.org/search/rea?query=FSBO+land&sort=date"
        );
        assert_eq!(
            render(FACEBOOK_MARKETPLACE, &ctx),
            "https://www.facebook.com/marketplace/austin-tx/search?query=land+for+sale+by+owner"
        );
    }

    #[test]
    fn zillow_keeps_its_literal_escapes() {
        let ctx = QueryContext::new("Austin TX", "FSBO land");
        assert_eq!(
            render(ZILLOW_FSBO, &ctx),
            "https://www.zillow.com/homes/for_sale/austin-tx_rb/?searchQueryState=%7B%22usersSearchTerm%22%3A%22austin-tx%20land%20for%20sale%20by%20owner%22%7D"
        );
    }

    #[test]
    fn empty_location_degrades_to_empty_segments() {
        let ctx = QueryContext::new("", "FSBO land");
        assert_eq!(
            render(CRAIGSLIST, &ctx),
            "https://.craigslist.org/search/rea?query=FSBO+land&sort=date"
        );
        assert_eq!(render(LANDHUB, &ctx), "https://www.landhub.com/land-for-sale/");
    }
}
