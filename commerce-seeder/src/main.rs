//! Fixture seeder for the commerce backend
//!
//! Loads sample products into the catalog, creates randomized orders
//! referencing them, and (unless told otherwise) deletes everything again.

use std::path::PathBuf;
use std::sync::Arc;

use catalog_service::{CatalogService, CatalogServiceConfig};
use clap::Parser;
use dotenv::dotenv;
use fixtures::FixtureHarness;
use order_service::{OrderService, OrderServiceConfig};
use tokio::signal;
use tracing::{info, debug, warn, Level};
use tracing_subscriber::{FmtSubscriber, EnvFilter, fmt::format::FmtSpan};

/// Command line arguments
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Seed file with sample products
    #[clap(long, default_value = "data/full-products.json")]
    seed_file: PathBuf,

    /// Number of randomized orders to create
    #[clap(short, long, default_value_t = 5)]
    orders: usize,

    /// Leave the created records in place instead of cleaning up
    #[clap(long)]
    keep: bool,

    /// Run against in-memory repositories instead of PostgreSQL
    #[clap(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with debug level if DEBUG=1 in .env
    let env_debug = std::env::var("DEBUG").unwrap_or_else(|_| "0".to_string());
    let log_level = if env_debug == "1" { Level::DEBUG } else { Level::INFO };

    // Create an environment filter
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .parse("catalog_service=debug,order_service=debug,fixtures=debug")?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .finish();

    // Only set the global subscriber if it hasn't been set already
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        info!("Tracing initialized");
        if env_debug == "1" {
            debug!("Debug logging enabled");
        }
    }

    info!("Starting Vendora commerce seeder...");

    // Initialize services
    let (catalog, orders) = if args.in_memory {
        info!("Using in-memory repositories");
        (Arc::new(CatalogService::new()), Arc::new(OrderService::new()))
    } else {
        // Bring the schema up to date before the services connect
        let pool = common::db::init_db_pool().await?;
        common::db::run_migrations(&pool).await?;
        pool.close().await;

        let catalog = CatalogService::with_config(&CatalogServiceConfig::from_env()).await?;
        let orders = OrderService::with_config(&OrderServiceConfig::from_env()).await?;
        (Arc::new(catalog), Arc::new(orders))
    };

    let mut harness = FixtureHarness::new(catalog, orders);

    // Seed products and create orders, stopping early on Ctrl-C so the
    // cleanup below still runs for whatever was created
    let mut interrupted = false;
    {
        let seeding = async {
            let created = harness.setup_test_data(&args.seed_file).await?;
            info!("Seeded {} products from {}", created, args.seed_file.display());

            let created_orders = harness.create_test_orders(args.orders).await?;
            info!("Created {} randomized orders", created_orders.len());

            Ok::<(), common::Error>(())
        };

        tokio::select! {
            result = seeding => {
                result?;
            }
            _ = shutdown_signal() => {
                interrupted = true;
            }
        }
    }

    if interrupted {
        warn!("Interrupted, removing partially created fixture data");
        harness.cleanup_test_data().await?;
    } else if args.keep {
        info!(
            "Keeping {} products and {} orders in place",
            harness.product_ids().len(),
            harness.order_ids().len()
        );
    } else {
        harness.cleanup_test_data().await?;
    }

    info!("Seeder finished");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting cleanup");
}
