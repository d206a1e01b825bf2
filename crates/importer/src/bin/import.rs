use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use importer::{BulkImporter, ImportReport, export};
use storage::Database;
use storage::services::ViewBuilder;

#[derive(Parser)]
#[command(name = "athletics-import")]
#[command(about = "Athletics club data importer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Import athletes (with their clubs) from a JSON file.
    Athletes { file: PathBuf },
    /// Import competitions from a JSON file.
    Competitions { file: PathBuf },
    /// Import results, creating referenced entities as needed.
    Results { file: PathBuf },
    /// Export the best performances per discipline to a JSON file.
    ExportTop {
        #[arg(long, default_value = "./top_performances.json")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("import={},importer={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Connecting to database...");
    let database = Database::new(&cli.database_url)
        .await
        .context("failed to connect to database")?;
    database
        .run_migrations()
        .await
        .context("failed to run migrations")?;

    let gateway = database.gateway();

    match cli.command {
        Commands::Athletes { file } => {
            let json = read_file(&file).await?;
            let report = BulkImporter::new(&gateway).import_athletes(&json).await?;
            log_report("athletes", &report);
        }
        Commands::Competitions { file } => {
            let json = read_file(&file).await?;
            let report = BulkImporter::new(&gateway)
                .import_competitions(&json)
                .await?;
            log_report("competitions", &report);
        }
        Commands::Results { file } => {
            let json = read_file(&file).await?;
            let report = BulkImporter::new(&gateway).import_results(&json).await?;
            log_report("results", &report);
        }
        Commands::ExportTop { output } => {
            let rows = ViewBuilder::new(&gateway).top_performances().await?;
            export::write_top_performances(&output, &rows).await?;
            tracing::info!("Exported {} rows to {}", rows.len(), output.display());
        }
    }

    Ok(())
}

async fn read_file(path: &PathBuf) -> anyhow::Result<String> {
    tracing::info!("Loading JSON from: {}", path.display());
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

fn log_report(what: &str, report: &ImportReport) {
    tracing::info!(
        "Import of {} complete: {} imported, {} skipped",
        what,
        report.imported,
        report.skipped
    );
}
