use anyhow::{Context, Result, anyhow};

const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub body_limit_bytes: usize,
    pub sanitize_property_routes: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let body_limit_bytes = match std::env::var("BODY_LIMIT_BYTES") {
            Ok(value) => value
                .parse::<usize>()
                .context("BODY_LIMIT_BYTES must be a valid byte count")?,
            Err(_) => DEFAULT_BODY_LIMIT_BYTES,
        };

        let sanitize_property_routes = match std::env::var("SANITIZE_PROPERTY_ROUTES") {
            Ok(value) => parse_flag("SANITIZE_PROPERTY_ROUTES", &value)?,
            Err(_) => true,
        };

        Ok(Self {
            port,
            body_limit_bytes,
            sanitize_property_routes,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            sanitize_property_routes: true,
        }
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}
