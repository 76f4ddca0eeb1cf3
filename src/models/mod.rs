use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a string is not part of one of the fixed vocabularies
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown feature '{0}'")]
    Feature(String),
    #[error("unknown land type '{0}'")]
    LandType(String),
    #[error("unknown financing option '{0}'")]
    Financing(String),
}

/// Desired land feature, drawn from a fixed 21-item vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Feature {
    WaterAccess,
    Creek,
    Pond,
    Well,
    Electricity,
    RoadAccess,
    Wooded,
    Cleared,
    Fenced,
    Hunting,
    Fishing,
    MineralRights,
    Timber,
    Pasture,
    Buildable,
    MobileHomeOk,
    NoRestrictions,
    OwnerFinancing,
    CashOnly,
    Surveyed,
    CornerLot,
}

impl Feature {
    /// Every feature in the order the form offers them
    pub const ALL: [Feature; 21] = [
        Feature::WaterAccess,
        Feature::Creek,
        Feature::Pond,
        Feature::Well,
        Feature::Electricity,
        Feature::RoadAccess,
        Feature::Wooded,
        Feature::Cleared,
        Feature::Fenced,
        Feature::Hunting,
        Feature::Fishing,
        Feature::MineralRights,
        Feature::Timber,
        Feature::Pasture,
        Feature::Buildable,
        Feature::MobileHomeOk,
        Feature::NoRestrictions,
        Feature::OwnerFinancing,
        Feature::CashOnly,
        Feature::Surveyed,
        Feature::CornerLot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::WaterAccess => "water access",
            Feature::Creek => "creek",
            Feature::Pond => "pond",
            Feature::Well => "well",
            Feature::Electricity => "electricity",
            Feature::RoadAccess => "road access",
            Feature::Wooded => "wooded",
            Feature::Cleared => "cleared",
            Feature::Fenced => "fenced",
            Feature::Hunting => "hunting",
            Feature::Fishing => "fishing",
            Feature::MineralRights => "mineral rights",
            Feature::Timber => "timber",
            Feature::Pasture => "pasture",
            Feature::Buildable => "buildable",
            Feature::MobileHomeOk => "mobile home ok",
            Feature::NoRestrictions => "no restrictions",
            Feature::OwnerFinancing => "owner financing",
            Feature::CashOnly => "cash only",
            Feature::Surveyed => "surveyed",
            Feature::CornerLot => "corner lot",
        }
    }

    /// Water access, creek and pond all read as waterfront land
    pub fn is_waterfront(&self) -> bool {
        matches!(self, Feature::WaterAccess | Feature::Creek | Feature::Pond)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Feature::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::Feature(s.to_string()))
    }
}

impl TryFrom<String> for Feature {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Feature> for String {
    fn from(value: Feature) -> Self {
        value.as_str().to_string()
    }
}

/// Kind of land being searched for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LandType {
    #[default]
    Any,
    Residential,
    Agricultural,
    Commercial,
    Recreational,
    Timber,
    Ranch,
}

impl LandType {
    pub const ALL: [LandType; 7] = [
        LandType::Any,
        LandType::Residential,
        LandType::Agricultural,
        LandType::Commercial,
        LandType::Recreational,
        LandType::Timber,
        LandType::Ranch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LandType::Any => "any",
            LandType::Residential => "residential",
            LandType::Agricultural => "agricultural",
            LandType::Commercial => "commercial",
            LandType::Recreational => "recreational",
            LandType::Timber => "timber",
            LandType::Ranch => "ranch",
        }
    }
}

impl fmt::Display for LandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LandType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LandType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::LandType(s.to_string()))
    }
}

impl TryFrom<String> for LandType {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LandType> for String {
    fn from(value: LandType) -> Self {
        value.as_str().to_string()
    }
}

/// Financing preference. Collected and echoed, never used to derive terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Financing {
    #[default]
    Any,
    OwnerFinancing,
    CashOnly,
    ConventionalLoanOk,
}

impl Financing {
    pub const ALL: [Financing; 4] = [
        Financing::Any,
        Financing::OwnerFinancing,
        Financing::CashOnly,
        Financing::ConventionalLoanOk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Financing::Any => "any",
            Financing::OwnerFinancing => "owner financing",
            Financing::CashOnly => "cash only",
            Financing::ConventionalLoanOk => "conventional loan ok",
        }
    }
}

impl fmt::Display for Financing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Financing {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Financing::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::Financing(s.to_string()))
    }
}

impl TryFrom<String> for Financing {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Financing> for String {
    fn from(value: Financing) -> Self {
        value.as_str().to_string()
    }
}

/// Land search preferences collected by the shell.
///
/// Built fresh for every submission and never mutated afterwards; every
/// output of the composer is a pure function of this value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPreferences {
    /// Free-text "city, state" location
    pub location: String,
    /// Minimum lot size in acres
    pub min_acres: f64,
    /// Maximum lot size in acres (not checked against `min_acres`)
    pub max_acres: f64,
    /// Price ceiling in dollars
    pub max_price: u64,
    /// Selected features, in selection order
    pub features: Vec<Feature>,
    pub land_type: LandType,
    pub financing: Financing,
}

impl Default for SearchPreferences {
    fn default() -> Self {
        Self {
            location: "Austin TX".to_string(),
            min_acres: 1.0,
            max_acres: 20.0,
            max_price: 100_000,
            features: Vec::new(),
            land_type: LandType::Any,
            financing: Financing::Any,
        }
    }
}

/// Raw values from an input shell; anything unset falls back to the defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceInput {
    pub location: Option<String>,
    pub min_acres: Option<f64>,
    pub max_acres: Option<f64>,
    pub max_price: Option<u64>,
    pub features: Vec<Feature>,
    pub land_type: Option<LandType>,
    pub financing: Option<Financing>,
}

impl SearchPreferences {
    /// Build a snapshot the way the form does: acreage clamped to zero and
    /// features kept once each, in first-selected order
    pub fn from_input(input: PreferenceInput) -> Self {
        let defaults = Self::default();

        let mut features = Vec::with_capacity(input.features.len());
        for feature in input.features {
            if !features.contains(&feature) {
                features.push(feature);
            }
        }

        Self {
            location: input.location.unwrap_or(defaults.location),
            min_acres: clamp_acres(input.min_acres.unwrap_or(defaults.min_acres)),
            max_acres: clamp_acres(input.max_acres.unwrap_or(defaults.max_acres)),
            max_price: input.max_price.unwrap_or(defaults.max_price),
            features,
            land_type: input.land_type.unwrap_or(defaults.land_type),
            financing: input.financing.unwrap_or(defaults.financing),
        }
    }
}

fn clamp_acres(acres: f64) -> f64 {
    if acres < 0.0 {
        0.0
    } else {
        acres
    }
}
