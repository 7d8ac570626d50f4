use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path};

use crate::service::MissingKeyPolicy;

const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Response to update/delete of an unknown key: `ignore` (204) or `report` (404)
    pub missing_key: MissingKeyPolicy,
    /// Serve Swagger UI at `/swagger-ui`
    pub swagger_ui: bool,
    /// Maximum accepted request body size in bytes
    pub body_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            missing_key: MissingKeyPolicy::default(),
            swagger_ui: false,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl Config {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn parse_config(contents: &str) -> Result<Config, serde_yaml::Error> {
    serde_yaml::from_str(contents)
}

fn read_config(path: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents).map_err(|e| format!("invalid config file '{path}': {e}").into())
}

/// Layers `NOTES_*` variables, as returned by `lookup`, over `config`.
fn apply_env<F>(mut config: Config, lookup: F) -> Result<Config, Box<dyn std::error::Error>>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup("NOTES_HOST") {
        config.host = host;
    }

    if let Some(port) = lookup("NOTES_PORT") {
        config.port = port
            .parse::<u16>()
            .map_err(|e| format!("Failed to parse NOTES_PORT: {e}"))?;
    }

    if let Some(policy) = lookup("NOTES_MISSING_KEY") {
        config.missing_key = match policy.to_ascii_lowercase().as_str() {
            "ignore" => MissingKeyPolicy::Ignore,
            "report" => MissingKeyPolicy::Report,
            other => {
                return Err(format!(
                    "Failed to parse NOTES_MISSING_KEY: expected 'ignore' or 'report', got '{other}'"
                )
                .into());
            }
        };
    }

    if let Some(swagger_ui) = lookup("NOTES_SWAGGER_UI") {
        config.swagger_ui = swagger_ui
            .parse::<bool>()
            .map_err(|e| format!("Failed to parse NOTES_SWAGGER_UI: {e}"))?;
    }

    if let Some(body_limit) = lookup("NOTES_BODY_LIMIT") {
        config.body_limit = body_limit
            .parse::<usize>()
            .map_err(|e| format!("Failed to parse NOTES_BODY_LIMIT: {e}"))?;
    }

    Ok(config)
}

fn load_file(config_path: &str) -> Result<Config, Box<dyn std::error::Error>> {
    // Try env path
    if Path::new(config_path).exists() {
        return read_config(config_path);
    }

    // Fallback to config.yaml
    if Path::new("config.yaml").exists() {
        tracing::warn!(
            "Config file '{}' not found, falling back to 'config.yaml'",
            config_path
        );
        return read_config("config.yaml");
    }

    // Fallback to config.example.yaml
    if Path::new("config.example.yaml").exists() {
        tracing::warn!(
            "Config file '{}' and 'config.yaml' not found, falling back to 'config.example.yaml'",
            config_path
        );
        return read_config("config.example.yaml");
    }

    tracing::info!(
        "No config file found. Tried: '{}', 'config.yaml', 'config.example.yaml'. Using defaults",
        config_path
    );
    Ok(Config::default())
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    // Retrieve env variable
    let config_path = env::var("NOTES_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    let config = load_file(&config_path)?;

    // Environment variables take precedence over any file
    apply_env(config, |key| env::var(key).ok())
        .map_err(|e| format!("Invalid environment configuration: {e}").into())
}
