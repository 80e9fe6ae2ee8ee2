use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio::config::{self, ServerConfig};
use portfolio::models::Theme;
use portfolio::render::{self, PageOptions};
use portfolio::{api, content};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Personal portfolio page")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the page over HTTP
    Serve {
        /// Address to bind (overrides PORTFOLIO_HOST)
        #[arg(long)]
        host: Option<IpAddr>,

        /// Port to bind (overrides PORTFOLIO_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Start in light mode
        #[arg(long)]
        light: bool,
    },
    /// Render the page once as a standalone HTML document
    Render {
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render in light mode
        #[arg(long)]
        light: bool,
    },
}

/// Initialize tracing with output to stderr (for render) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "portfolio=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // Render may write the document to stdout
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    tracing::info!(
        "Starting portfolio server on {} (dark mode: {})",
        addr,
        config.dark_mode
    );

    let app = api::create_router_from_config(&config, content::portfolio());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Portfolio listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = matches!(cli.command, Some(Commands::Render { .. }));
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Serve { host, port, light }) => {
            let mut config = ServerConfig::from_env()?.with_address(host, port);
            if light {
                config = config.with_dark_mode(false);
            }
            serve(config).await?;
        }
        Some(Commands::Render { output, light }) => {
            let theme = if light {
                Theme::Light
            } else {
                let dark_mode = config::dark_mode_from_env()?;
                Theme::from_dark_mode(dark_mode.unwrap_or(ServerConfig::default().dark_mode))
            };
            let document = render::render_page(&content::portfolio(), &PageOptions::standalone(theme));
            render::write_document(&document, output.as_deref())?;
            if let Some(path) = output {
                tracing::info!("Wrote portfolio to {}", path.display());
            }
        }
        None => {
            serve(ServerConfig::from_env()?).await?;
        }
    }

    Ok(())
}
