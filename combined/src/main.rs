//! Combined binary for development - serves the admin and mobile APIs from
//! one process sharing a single database pool.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog::config::CatalogConfig;
use catalog::Catalog;

#[derive(Parser)]
#[command(name = "catalog-platform")]
#[command(about = "Combined catalog services binary for development")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run both HTTP services in a single process
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "ADMIN_SERVER_PORT", default_value = "8080")]
        admin_port: u16,
        #[arg(long, env = "API_SERVER_PORT", default_value = "8081")]
        api_port: u16,
    },
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            admin_port,
            api_port,
        } => {
            info!("Starting combined services in development mode");
            info!("  Admin API:  http://{}:{}", host, admin_port);
            info!("  Mobile API: http://{}:{}/api", host, api_port);

            // One pool and one migration run for both routers
            let catalog = Catalog::connect(&CatalogConfig::from_env()).await?;

            // Wait for either server to exit (which would indicate an error)
            tokio::select! {
                result = admin_service_lib::serve(&catalog, &host, admin_port) => {
                    error!("Admin service exited unexpectedly");
                    result?;
                }
                result = mobile_api_service_lib::serve(&catalog, &host, api_port) => {
                    error!("Mobile API service exited unexpectedly");
                    result?;
                }
            }
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateAction::Up => catalog::MigrateAction::Up,
                MigrateAction::Down => catalog::MigrateAction::Down,
                MigrateAction::Status => catalog::MigrateAction::Status,
                MigrateAction::Fresh => catalog::MigrateAction::Fresh,
            };
            catalog::run_migrations(migrate_action).await?;
        }
    }

    Ok(())
}
