use crate::platforms::templates;
use crate::platforms::traits::SearchPlatform;
use crate::platforms::types::QueryContext;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Listing sites we generate search links for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Craigslist,
    FacebookMarketplace,
    LandWatch,
    LandAndFarm,
    ZillowFsbo,
    LoopNet,
    LandHub,
    LandsOfAmerica,
}

impl Platform {
    /// Fixed display order
    pub const ALL: [Platform; 8] = [
        Platform::Craigslist,
        Platform::FacebookMarketplace,
        Platform::LandWatch,
        Platform::LandAndFarm,
        Platform::ZillowFsbo,
        Platform::LoopNet,
        Platform::LandHub,
        Platform::LandsOfAmerica,
    ];

    pub fn template(&self) -> &'static str {
        match self {
            Platform::Craigslist => templates::CRAIGSLIST,
            Platform::FacebookMarketplace => templates::FACEBOOK_MARKETPLACE,
            Platform::LandWatch => templates::LANDWATCH,
            Platform::LandAndFarm => templates::LAND_AND_FARM,
            Platform::ZillowFsbo => templates::ZILLOW_FSBO,
            Platform::LoopNet => templates::LOOPNET,
            Platform::LandHub => templates::LANDHUB,
            Platform::LandsOfAmerica => templates::LANDS_OF_AMERICA,
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Platform::Craigslist => "🔍",
            Platform::FacebookMarketplace => "📘",
            Platform::LandWatch => "🌍",
            Platform::LandAndFarm => "🚜",
            Platform::ZillowFsbo => "🏠",
            Platform::LoopNet => "🏢",
            Platform::LandHub => "🌲",
            Platform::LandsOfAmerica => "🇺🇸",
        }
    }

    /// Name with its icon, as shown in listings and the summary file
    pub fn label(&self) -> String {
        format!("{} {}", self.icon(), self.platform_name())
    }
}

impl SearchPlatform for Platform {
    fn search_url(&self, ctx: &QueryContext) -> String {
        templates::render(self.template(), ctx)
    }

    fn platform_name(&self) -> &'static str {
        match self {
            Platform::Craigslist => "Craigslist",
            Platform::FacebookMarketplace => "Facebook Marketplace",
            Platform::LandWatch => "LandWatch",
            Platform::LandAndFarm => "LandAndFarm",
            Platform::ZillowFsbo => "Zillow FSBO",
            Platform::LoopNet => "LoopNet",
            Platform::LandHub => "LandHub",
            Platform::LandsOfAmerica => "Lands of America",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.platform_name())
    }
}
