use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub templates_dir: String,
    pub static_dir: String,
    pub environment: Environment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Local,
    Production,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let templates_dir = env::var("TEMPLATES_DIR").unwrap_or_else(|_| "templates".to_string());

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let environment = match env::var("ENV").unwrap_or_else(|_| "local".to_string()).as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Local,
        };

        let config = Config {
            port,
            templates_dir,
            static_dir,
            environment,
        };

        // Validate configuration values
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        // Validate port range
        if self.port == 0 {
            anyhow::bail!("PORT must be greater than 0");
        }

        // Validate template directory
        if self.templates_dir.trim().is_empty() {
            anyhow::bail!("TEMPLATES_DIR cannot be empty");
        }

        // Validate static asset directory
        if self.static_dir.trim().is_empty() {
            anyhow::bail!("STATIC_DIR cannot be empty");
        }

        Ok(())
    }

    /// Glob pattern matching every template under the configured directory
    pub fn templates_glob(&self) -> String {
        format!("{}/**/*.html", self.templates_dir)
    }
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Environment::Local)
    }
}
