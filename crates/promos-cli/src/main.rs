mod products;

use clap::{Parser, Subcommand};
use promos_sheets::{Catalog, SheetsClient, SheetsConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "promos-cli")]
#[command(about = "Read promotional products straight from the spreadsheet")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every product in sheet order
    List,
    /// Show one product and its validation result
    Show {
        /// Product id (e.g., widget-a)
        id: String,
    },
    /// Print aggregate counts over all products
    Stats,
    /// Print the validation result for every product
    Validate {
        /// Only include products that fail validation
        #[arg(long)]
        only_invalid: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = promos_core::load_app_config()?;

    // Logs go to stderr so stdout stays pure JSON.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let client = SheetsClient::new(SheetsConfig::from_app_config(&config))?;
    let catalog = Catalog::new(client);

    let output = match cli.command {
        Commands::List => products::run_list(&catalog).await?,
        Commands::Show { id } => products::run_show(&catalog, &id).await?,
        Commands::Stats => products::run_stats(&catalog).await?,
        Commands::Validate { only_invalid } => {
            products::run_validate(&catalog, only_invalid).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
