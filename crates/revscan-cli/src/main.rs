mod analyze;
mod catalog;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "revscan-cli")]
#[command(about = "Harvest product reviews and report a sentiment verdict")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Harvest reviews for one product and print the sentiment verdict
    Analyze {
        /// Review listing URL of the product
        url: String,

        /// Maximum number of review pages to fetch (defaults to `REVSCAN_MAX_PAGES`)
        #[arg(long)]
        max_pages: Option<u32>,

        /// Write the harvested reviews to this CSV file
        #[arg(long)]
        audit_csv: Option<PathBuf>,
    },
    /// Harvest products and reviews for every configured category into a CSV
    Catalog {
        /// Category YAML file (defaults to `REVSCAN_CATEGORIES_PATH`)
        #[arg(long)]
        categories: Option<PathBuf>,

        /// Directory for the timestamped catalog CSV
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Products to keep per category
        #[arg(long, default_value_t = 20)]
        max_products: usize,

        /// Reviews to keep per product
        #[arg(long, default_value_t = 5)]
        max_reviews: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = revscan_core::load_app_config_from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Analyze {
            url,
            max_pages,
            audit_csv,
        } => {
            let max_pages = max_pages.unwrap_or(config.max_pages);
            analyze::run_analyze(&config, &url, max_pages, audit_csv.as_deref()).await
        }
        Commands::Catalog {
            categories,
            out_dir,
            max_products,
            max_reviews,
        } => {
            let limits = revscan_scraper::CatalogLimits {
                max_products_per_category: max_products,
                max_reviews_per_product: max_reviews,
            };
            let categories_path = categories.unwrap_or_else(|| config.categories_path.clone());
            catalog::run_catalog(&config, &categories_path, &out_dir, limits).await
        }
    }
}
