use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use articled::{api, db};

#[derive(Parser)]
#[command(name = "articled")]
#[command(about = "CRUD REST API for articles backed by SQLite")]
struct Cli {
    /// Database file path (defaults to the platform data directory)
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// Run pending schema migrations and exit
    Migrate,
    /// Populate the database with starter articles
    Seed {
        /// Number of generated articles to insert (plus two fixed ones)
        #[arg(short, long, default_value = "50")]
        count: u32,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "articled=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn open_database(path: Option<PathBuf>) -> anyhow::Result<db::Database> {
    match path {
        Some(path) => db::Database::open(path),
        None => db::Database::open_default(),
    }
}

async fn serve(db: db::Database, port: u16) -> anyhow::Result<()> {
    let app = api::create_router(db);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("articled listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let db = open_database(cli.db_path)?;
    db.migrate()?;

    match cli.command {
        Some(Commands::Serve { port }) => {
            tracing::info!("Starting articled server on port {}", port);
            serve(db, port).await?;
        }
        Some(Commands::Migrate) => {
            tracing::info!("Migrations are up to date");
        }
        Some(Commands::Seed { count }) => {
            let inserted = db.seed(count)?;
            tracing::info!("Seeded {} articles", inserted);
        }
        None => {
            // Default: start server on port 3000
            tracing::info!("Starting articled server on port 3000");
            serve(db, 3000).await?;
        }
    }

    Ok(())
}
