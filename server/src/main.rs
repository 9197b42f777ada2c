mod ai_handler;
mod server_config;
mod web_server;

use std::path::PathBuf;

use clap::Parser;
use common::config::ConfigManager;
use common::{log, logger};

use server_config::{DEFAULT_CONFIG_PATH, ServerConfig};
use web_server::run_web_server;

#[derive(Parser)]
#[command(name = "tictactoe_server", about = "Serves optimal Tic-Tac-Toe moves over HTTP")]
struct Args {
    /// YAML config file; defaults are used if it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[arg(long)]
    host: Option<String>,

    #[arg(long)]
    port: Option<u16>,

    /// Directory holding index.html and other static assets
    #[arg(long)]
    static_dir: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Print the effective config as YAML and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut ServerConfig) {
        if let Some(ref host) = self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(ref static_dir) = self.static_dir {
            config.static_files_path = static_dir.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = ConfigManager::<_, ServerConfig>::from_yaml_file(args.config.clone());
    let mut config = config_manager.load()?;
    args.apply_overrides(&mut config);

    if args.print_config {
        print!("{}", config_manager.render(&config)?);
        return Ok(());
    }

    log!("Loaded config from {}", args.config.display());
    run_web_server(config).await?;

    Ok(())
}
