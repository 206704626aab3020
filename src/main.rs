use anyhow::Result;
use clap::{Parser, Subcommand};

/// seaworth - SEAWORTH TRADERS website and inquiry API
#[derive(Parser)]
#[command(name = "seaworth")]
#[command(about = "SEAWORTH TRADERS brochure site with contact inquiries", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = seaworth::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    seaworth::observability::init_observability(
        "seaworth",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => seaworth::server::serve(config, host, port).await,
        Commands::Migrate => seaworth::migrate::migrate(&config).await,
        Commands::Reset => seaworth::migrate::reset(&config).await,
    }
}
