mod listing;
mod rank;
mod services;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "listify")]
#[command(about = "Keyword ranking and price estimation for product listings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rank candidate SEO keywords by heuristic relevance and search competition
    Rank {
        /// Candidate keywords, in priority order
        #[arg(required = true)]
        keywords: Vec<String>,
        /// Product attribute as key=value (repeatable; overrides the attributes file)
        #[arg(long = "attr", value_parser = rank::parse_attr)]
        attrs: Vec<(String, String)>,
        /// YAML file with product attributes (category, color, material, brand, other)
        #[arg(long)]
        attributes_file: Option<PathBuf>,
        /// Only the first N keywords are scored
        #[arg(long, default_value_t = listify_seo::DEFAULT_MAX_KEYWORDS)]
        max_keywords: usize,
    },
    /// Estimate a retail price range from web search results
    Price {
        /// Product title to search for
        #[arg(long)]
        title: String,
        /// Product category, prepended to the search query
        #[arg(long)]
        category: Option<String>,
    },
    /// Build a listing from a model's product analysis JSON
    Listing {
        /// File with the model response, or `-` for stdin
        #[arg(long, default_value = "-")]
        input: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = listify_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(
        env = %config.env,
        search_configured = config.search_credentials.is_some(),
        "configuration loaded"
    );

    match cli.command {
        Commands::Rank {
            keywords,
            attrs,
            attributes_file,
            max_keywords,
        } => {
            let attributes = rank::load_attributes(attributes_file.as_deref(), &attrs)?;
            let engine = services::ranking_engine(&config)?;
            let ranked = engine.rank(&keywords, &attributes, max_keywords).await;
            print_json(&ranked)?;
        }
        Commands::Price { title, category } => {
            let estimator = services::price_estimator(&config)?;
            let estimate = estimator.estimate(&title, category.as_deref()).await;
            print_json(&estimate)?;
        }
        Commands::Listing { input } => {
            let raw = listing::read_input(&input)?;
            let analysis = listing::parse_analysis(&raw)?;
            let engine = services::ranking_engine(&config)?;
            let estimator = services::price_estimator(&config)?;
            let listing =
                listing::build_listing(analysis, &engine, &estimator, config.max_keywords).await;
            print_json(&listing)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests;
