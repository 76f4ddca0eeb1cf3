use crate::platforms::types::QueryContext;

/// Common trait for every listing site we link out to
/// New sites only need a name and a way to turn a query context into a URL
pub trait SearchPlatform: Send + Sync {
    /// Build the outbound search URL for this site
    fn search_url(&self, ctx: &QueryContext) -> String;

    /// Get the name of the listing site
    fn platform_name(&self) -> &'static str;
}
