use crate::error::{SchemaCheckError, SchemaCheckResult};
use crate::inference::InferenceConfig;
use serde::{Deserialize, Serialize};

/// Configuration for a SchemaCheck service instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Schema-inference capability settings
    #[serde(default)]
    pub inference: InferenceConfig,
}

fn default_bind_address() -> String {
    "127.0.0.1:9001".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            inference: InferenceConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Rewrite the bind address to use the given port.
    pub fn with_port(mut self, port: u16) -> Self {
        let host = self
            .bind_address
            .rsplit_once(':')
            .map(|(host, _)| host)
            .unwrap_or("127.0.0.1");
        self.bind_address = format!("{}:{}", host, port);
        self
    }

    /// Disable the inference capability.
    pub fn without_inference(mut self) -> Self {
        self.inference.enabled = false;
        self
    }
}

/// Load a service configuration from the given path or from the
/// `SCHEMACHECK_CONFIG` environment variable.
///
/// If the file does not exist, a default [`ServiceConfig`] is returned. A
/// file that exists but fails to parse is an error. When a `port` is
/// provided, the returned config's bind address uses it.
pub fn load_service_config(
    path: Option<&str>,
    port: Option<u16>,
) -> SchemaCheckResult<ServiceConfig> {
    use std::fs;

    let config_path = path
        .map(|p| p.to_string())
        .or_else(|| std::env::var("SCHEMACHECK_CONFIG").ok())
        .unwrap_or_else(|| "config/service_config.json".to_string());

    let mut config = match fs::read_to_string(&config_path) {
        Ok(config_str) => serde_json::from_str::<ServiceConfig>(&config_str).map_err(|e| {
            log::error!("Failed to parse service configuration: {}", e);
            SchemaCheckError::Config(format!("failed to parse {}: {}", config_path, e))
        })?,
        Err(_) => ServiceConfig::default(),
    };

    if let Some(p) = port {
        config = config.with_port(p);
    }
    Ok(config)
}
