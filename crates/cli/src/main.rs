use anyhow::{Context, Result};
use catalog::{CatalogIndex, ProductRecord};
use clap::{Parser, Subcommand};
use colored::Colorize;
use facets::{Facet, SortKey, ViewEvent};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use storefront::{
    CollectionContext, IndexSource, StorefrontConfig, StorefrontSession, ViewSummary,
    ALL_COLLECTION,
};
use tracing::info;
use url_sync::{hydrate_view, publish_view, MemoryAddress};

/// Fairway - faceted browsing for a golf club storefront
#[derive(Parser)]
#[command(name = "fairway")]
#[command(about = "Filter, sort and page through a golf club catalog", long_about = None)]
struct Cli {
    /// Catalog export file, or a directory of *.json exports
    #[arg(short, long, default_value = "data/catalog")]
    catalog: PathBuf,

    /// Optional JSON config (page size, facet vocabularies)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog the way the listing page would
    Browse {
        /// Address query string, e.g. "brand=titleist&minPrice=100"
        #[arg(long, default_value = "")]
        query: String,

        /// Sort order: bestMatch, priceLowToHigh or priceHighToLow
        #[arg(long)]
        sort: Option<SortKey>,

        /// Products per page (overrides the config)
        #[arg(long)]
        page_size: Option<usize>,

        /// Number of pages to walk forward
        #[arg(long, default_value = "1")]
        pages: usize,

        /// Collection handle to browse
        #[arg(long, default_value = ALL_COLLECTION)]
        collection: String,
    },

    /// Show how a query string hydrates and how it is written back
    Query {
        #[arg(long)]
        query: String,
    },

    /// List the facet vocabularies
    Facets,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = StorefrontConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Browse {
            query,
            sort,
            page_size,
            pages,
            collection,
        } => {
            let config = match page_size {
                Some(size) => config.with_page_size(size),
                None => config,
            };
            config.validate()?;
            let index = load_catalog(&cli.catalog)?;
            handle_browse(index, &config, &query, sort, pages, &collection).await?
        }
        Commands::Query { query } => handle_query(&query),
        Commands::Facets => handle_facets(&config),
    }

    Ok(())
}

fn load_catalog(path: &Path) -> Result<Arc<CatalogIndex>> {
    println!("Loading catalog from {}...", path.display());
    let start = Instant::now();
    let index = CatalogIndex::load(path)
        .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
    let (products, collections) = index.counts();
    println!(
        "{} Loaded {} products and {} collections in {:?}",
        "✓".green(),
        products,
        collections,
        start.elapsed()
    );
    Ok(Arc::new(index))
}

/// Handle the 'browse' command
async fn handle_browse(
    index: Arc<CatalogIndex>,
    config: &StorefrontConfig,
    query: &str,
    sort: Option<SortKey>,
    pages: usize,
    collection: &str,
) -> Result<()> {
    let context = CollectionContext::from_handle(collection, index.collections());
    let address = MemoryAddress::new(format!("/collections/{}", collection), Some(query));
    let mut session = StorefrontSession::new(IndexSource::new(index), address, config.page_size)?
        .with_collection(context);

    let mut summary = session.open().await?;
    if let Some(sort) = sort {
        summary = session.dispatch(ViewEvent::SetSort(sort))?;
    }
    println!("{}", summary.title.bold().blue());
    println!("{}", summary.subtitle);
    print_active_filters(&session, config);

    let pages = pages.max(1);
    for page in 1..=pages {
        // an empty page may be a failed fetch rather than a filter miss
        if let Some(err) = session.last_error() {
            println!("{} {}", "!".red(), err);
        }
        print_page(page, &summary);
        if page == pages || !summary.has_next_page {
            break;
        }
        summary = session.next_page().await?;
    }

    println!("{} {}", "Address:".bold(), session.address().href());
    info!("Browse finished");
    Ok(())
}

/// Handle the 'query' command
fn handle_query(query: &str) {
    let view = hydrate_view(query);

    println!("{}", "Hydrated view state:".bold().blue());
    for facet in Facet::ALL {
        let selected = view.filters.selected(facet);
        if !selected.is_empty() {
            let tokens: Vec<&str> = selected.iter().map(String::as_str).collect();
            println!("{}{}: {}", "• ".green(), facet.heading(), tokens.join(", "));
        }
    }
    println!(
        "{}Price: {} - {}",
        "• ".green(),
        view.price.min(),
        view.price.max()
    );

    match publish_view(&view) {
        Some(canonical) => println!("{} ?{}", "Canonical:".bold(), canonical),
        None => println!("{} (no query)", "Canonical:".bold()),
    }
}

/// Handle the 'facets' command
fn handle_facets(config: &StorefrontConfig) {
    for facet in Facet::ALL {
        println!("{} ({})", facet.heading().bold().blue(), facet.key());
        for option in config.vocabulary.options(facet) {
            println!("  {}{} [{}]", "• ".green(), option.label, option.value);
        }
    }
    println!("{}", "Sort".bold().blue());
    for key in SortKey::ALL {
        println!("  {}{} [{}]", "• ".green(), key.label(), key.as_str());
    }
}

fn print_active_filters<S, A>(session: &StorefrontSession<S, A>, config: &StorefrontConfig)
where
    S: storefront::CatalogSource,
    A: url_sync::AddressSurface,
{
    let view = session.view();
    if !view.has_active_filters() {
        return;
    }
    for facet in view.filters.active_facets() {
        let labels: Vec<String> = view
            .filters
            .selected(facet)
            .iter()
            .map(|token| {
                config
                    .vocabulary
                    .label_for(facet, token)
                    .unwrap_or_else(|| token.clone())
            })
            .collect();
        println!("{}{}: {}", "• ".cyan(), facet.heading(), labels.join(", "));
    }
    if !view.price.is_full() {
        println!(
            "{}Price: {} - {}",
            "• ".cyan(),
            view.price.min(),
            view.price.max()
        );
    }
}

fn print_page(page: usize, summary: &ViewSummary) {
    println!(
        "\n{} {} ({}, sorted by {})",
        "Page".bold(),
        page,
        summary.count_label,
        summary.sort_label
    );
    if let Some(message) = &summary.empty_message {
        println!("  {}", message.yellow());
        return;
    }
    for (rank, product) in summary.products.iter().enumerate() {
        println!(
            "{}. {} - {}",
            (rank + 1).to_string().green(),
            product.title,
            format_price(product)
        );
    }
}

fn format_price(product: &ProductRecord) -> String {
    match &product.price_range {
        Some(range) => format!(
            "{} {}",
            range.min_variant_price.amount, range.min_variant_price.currency_code
        ),
        None => "price on request".to_string(),
    }
}
