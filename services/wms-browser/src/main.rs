//! WMS layer browser CLI.
//!
//! Lists the layers a WMS endpoint advertises and builds the GetMap tile
//! URLs a map overlay would use for them.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use wms_browser::{load_config, ConfigOverrides, OutputFormat, Report, WmsClient};
use wms_protocol::{ActiveOverlayMap, LayerScope, OverlaySpec};

#[derive(Parser)]
#[command(name = "wms-browser")]
#[command(about = "Browse WMS layers and build GetMap tile URLs", long_about = None)]
struct Cli {
    /// YAML service configuration file
    #[arg(short, long, env = "WMS_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: ConfigOverrides,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the capabilities document and list its layers
    Layers {
        /// Track nested <Layer> elements and skip style names
        #[arg(long)]
        nested_layers: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Print the GetMap URL for a layer
    Url {
        /// Layer name
        #[arg(short, long)]
        layer: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Switch overlays on and off and show what remains active
    Overlay {
        /// Layer to activate (repeatable)
        #[arg(long = "add")]
        add: Vec<String>,

        /// Layer to deactivate (repeatable), applied after activations
        #[arg(long = "remove")]
        remove: Vec<String>,

        /// Check activated layers against the capabilities document first
        #[arg(long)]
        verify: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
}

fn init_tracing(log_level: &str, format: LogFormat) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish())?,
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish())?,
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_format)?;

    let config = load_config(cli.config.as_deref(), cli.overrides)?;
    info!(base_url = %config.base_url, "Starting WMS browser");

    let client = WmsClient::new(config)?;

    match cli.command {
        Commands::Layers {
            nested_layers,
            output,
        } => {
            let scope = if nested_layers {
                LayerScope::Nested
            } else {
                LayerScope::Flat
            };
            let layers = client.fetch_layers(scope).await?;

            match output {
                OutputFormat::Json => println!("{}", Report::layers_json(&layers)?),
                OutputFormat::Table => {
                    if layers.is_empty() {
                        println!("No layers advertised by {}", client.config().base_url);
                    } else {
                        println!("{}", Report::layers_table(&layers));
                    }
                }
            }
        }
        Commands::Url { layer, output } => {
            let request = client.tile_request(&layer);
            match output {
                OutputFormat::Json => println!("{}", Report::tile_request_json(&request)?),
                OutputFormat::Table => println!("{}", Report::tile_request_text(&request)),
            }
        }
        Commands::Overlay {
            add,
            remove,
            verify,
            output,
        } => {
            if verify {
                client.verify_layers(&add).await?;
            }

            let mut active: ActiveOverlayMap<OverlaySpec> = ActiveOverlayMap::new();
            for layer in &add {
                active.activate(layer, client.config(), |spec| spec.clone());
            }
            for layer in &remove {
                if active.deactivate(layer).is_none() {
                    warn!(layer = %layer, "Layer was not active");
                }
            }

            match output {
                OutputFormat::Json => println!("{}", Report::overlays_json(&active)?),
                OutputFormat::Table => println!("{}", Report::overlays_table(&active)),
            }
        }
    }

    Ok(())
}
