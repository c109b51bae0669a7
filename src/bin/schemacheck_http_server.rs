use clap::Parser;
use log::info;
use schemacheck::{load_service_config, SchemaCheckHttpServer};

/// Command line options for the HTTP server binary.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Port for the HTTP server (overrides the configured bind address port)
    #[arg(long)]
    port: Option<u16>,

    /// Path to the service configuration file
    #[arg(long)]
    config: Option<String>,
}

/// Main entry point for the SchemaCheck HTTP server.
///
/// Loads the service configuration, builds the shared state (schema
/// registry plus the optional inference capability), and runs the HTTP
/// server until the process is stopped.
///
/// # Environment Variables
///
/// * `SCHEMACHECK_CONFIG` - Path to the configuration file
///   (default: config/service_config.json)
/// * `RUST_LOG` - Log filter (default: info)
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    schemacheck::logging::init().ok();
    info!("Starting SchemaCheck HTTP Server...");

    let Cli { port, config } = Cli::parse();

    let service_config = load_service_config(config.as_deref(), port)?;
    info!("Config loaded successfully");

    let server = SchemaCheckHttpServer::new(service_config);
    server.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["test"]);
        assert_eq!(cli.port, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn port_and_config_flags() {
        let cli = Cli::parse_from(["test", "--port", "8200", "--config", "svc.json"]);
        assert_eq!(cli.port, Some(8200));
        assert_eq!(cli.config.as_deref(), Some("svc.json"));
    }
}
