use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use strum::{AsRefStr, Display};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            environment: default_environment(),
        }
    }
}

impl SiteConfig {
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

fn default_base_url() -> String {
    "https://example.com".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EmailProvider {
    #[default]
    Resend,
    Smtp,
    Log,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub provider: EmailProvider,
    #[serde(default = "default_from")]
    pub from: String,
    #[serde(default = "default_to")]
    pub to: Vec<String>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub resend_api_key: String,
    #[serde(default = "default_resend_base_url")]
    pub resend_base_url: String,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::default(),
            from: default_from(),
            to: default_to(),
            timezone: default_timezone(),
            resend_api_key: String::new(),
            resend_base_url: default_resend_base_url(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
        }
    }
}

fn default_from() -> String {
    "WebPro <onboarding@resend.dev>".to_string()
}

fn default_to() -> Vec<String> {
    vec!["contact@webpro.localhost".to_string()]
}

fn default_timezone() -> String {
    "Europe/Paris".to_string()
}

fn default_resend_base_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    1025
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy environment variables (RESEND_API_KEY, BASE_URL)
    /// 2. Environment variables (WEBPRO__EMAIL__PROVIDER, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("WEBPRO")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("email.to")
                .try_parsing(true),
        );

        if let Ok(api_key) = env::var("RESEND_API_KEY") {
            builder = builder.set_override("email.resend_api_key", api_key)?;
        }
        if let Ok(base_url) = env::var("BASE_URL") {
            builder = builder.set_override("site.base_url", base_url)?;
        }
        if let Ok(environment) = env::var("ENVIRONMENT") {
            builder = builder.set_override("site.environment", environment)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.to.iter().all(|to| to.trim().is_empty()) {
            return Err("At least one email recipient is required".to_string());
        }
        if self.email.provider == EmailProvider::Resend && self.email.resend_api_key.is_empty() {
            return Err("Resend API key is required when the email provider is resend".to_string());
        }
        if time_tz::timezones::get_by_name(&self.email.timezone).is_none() {
            return Err(format!("Unknown time zone: {}", self.email.timezone));
        }
        Ok(())
    }
}
