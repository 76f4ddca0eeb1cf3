use anyhow::Result;
use chrono::Local;
use clap::Parser;
use land_scout::compose;
use land_scout::config::Config;
use land_scout::models::{Feature, Financing, LandType, PreferenceInput, SearchPreferences};
use land_scout::platforms::SearchPlatform;
use land_scout::summary::{self, TIMESTAMP_FORMAT};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build FSBO land search links across listing sites
#[derive(Parser, Debug)]
#[command(name = "land-scout")]
#[command(version)]
struct Cli {
    /// Location (city, state)
    #[arg(short, long)]
    location: Option<String>,

    /// Minimum lot size in acres
    #[arg(long, allow_negative_numbers = true)]
    min_acres: Option<f64>,

    /// Maximum lot size in acres
    #[arg(long, allow_negative_numbers = true)]
    max_acres: Option<f64>,

    /// Maximum price in dollars
    #[arg(long)]
    max_price: Option<u64>,

    /// Desired feature (repeat for several)
    #[arg(short, long = "feature")]
    features: Vec<Feature>,

    /// Land type
    #[arg(long)]
    land_type: Option<LandType>,

    /// Financing preference
    #[arg(long)]
    financing: Option<Financing>,

    /// Print the composed search as JSON
    #[arg(long)]
    json: bool,

    /// Write the summary text file to the output directory
    #[arg(short, long)]
    download: bool,

    /// List the accepted features, land types and financing options
    #[arg(long)]
    list_vocabulary: bool,
}

impl Cli {
    /// Snapshot the command line, falling back to the configured location
    fn preferences(&self, config: &Config) -> SearchPreferences {
        SearchPreferences::from_input(PreferenceInput {
            location: self
                .location
                .clone()
                .or_else(|| config.default_location.clone()),
            min_acres: self.min_acres,
            max_acres: self.max_acres,
            max_price: self.max_price,
            features: self.features.clone(),
            land_type: self.land_type,
            financing: self.financing,
        })
    }
}

fn print_vocabulary() {
    let features: Vec<&str> = Feature::ALL.iter().map(|f| f.as_str()).collect();
    let land_types: Vec<&str> = LandType::ALL.iter().map(|t| t.as_str()).collect();
    let financing: Vec<&str> = Financing::ALL.iter().map(|f| f.as_str()).collect();
    println!("Features: {}", features.join(", "));
    println!("Land types: {}", land_types.join(", "));
    println!("Financing: {}", financing.join(", "));
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging on stderr so stdout stays clean for --json
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list_vocabulary {
        print_vocabulary();
        return Ok(());
    }

    let config = Config::from_env()?;
    let prefs = cli.preferences(&config);

    info!("🏞️ Land Scout - FSBO search links for {}", prefs.location);

    let result = compose(&prefs);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("📋 Your Current Search Settings");
        for line in summary::configuration_lines(&prefs) {
            println!("   {}", line);
        }
        println!();

        println!("🔍 Search Terms Being Used");
        for line in summary::numbered_terms(&result.terms) {
            println!("   {}", line);
        }
        println!();

        println!("🔗 Search These Websites");
        for entry in result.urls.iter() {
            println!("{}", entry.platform.label());
            println!("   Search for FSBO land in {}", prefs.location);
            println!("   {}", entry.url);
        }
        println!();
        println!("💡 Pro Tips: Check these sites daily, set up Google Alerts for your search terms, and be ready to act fast on good deals!");
        println!("🎯 How to Use: Open the links above to search each platform. Look for listings marked 'FSBO', 'For Sale By Owner', or 'Owner Financing'.");
    }

    if cli.download {
        let now = Local::now();
        let timestamp = now.format(TIMESTAMP_FORMAT).to_string();
        let text = summary::render_summary(&prefs, &result.terms, &result.urls, &timestamp);
        let filename = summary::download_filename(&prefs.location, now.date_naive());
        summary::write_summary(&config.output_dir, &filename, &text).await?;
    }

    info!(
        "✅ Built {} links from {} search terms ({})",
        result.urls.len(),
        result.terms.len(),
        result
            .urls
            .iter()
            .map(|e| e.platform.platform_name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}
