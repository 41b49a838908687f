use anyhow::Result;
use clap::{Parser, Subcommand};
use webpro::cli::SubmitArgs;

/// webpro - Showcase website and contact form service
#[derive(Parser)]
#[command(name = "webpro")]
#[command(about = "Showcase website with a contact form delivered by email", long_about = None)]
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
    /// Send a contact request to a running server
    Submit(SubmitArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = webpro::config::Config::load(cli.config.clone())?;

    webpro::observability::init_observability(
        "webpro",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => {
            config.validate().map_err(|e| anyhow::anyhow!(e))?;
            webpro::cli::serve(config, host, port).await
        }
        Commands::Submit(args) => webpro::cli::submit(args).await,
    }
}
