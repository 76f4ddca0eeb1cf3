use anyhow::Result;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Shell configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Location used when none is given on the command line
    pub default_location: Option<String>,
    /// Where downloaded summaries are written
    pub output_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            default_location: non_blank("LAND_SCOUT_LOCATION"),
            output_dir: non_blank("LAND_SCOUT_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        })
    }
}
