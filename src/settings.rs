use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, str::FromStr};
use url::Url;

pub const PLACEHOLDER_STORE_URL: &str = "https://placeholder.supabase.co";
pub const PLACEHOLDER_STORE_KEY: &str = "placeholder-key";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    /// Base URL of the hosted content store (REST + auth live underneath it).
    #[serde(default)]
    pub store_url: String,

    /// Public (anon) key sent with every content store request.
    #[serde(default)]
    pub store_anon_key: String,

    /// Canonical site URL used for page metadata.
    #[serde(default = "default_site_url")]
    pub site_url: String,

    #[serde(default = "default_public_dir")]
    pub public_dir: String,

    #[serde(default = "default_redirect_delay")]
    pub redirect_delay_ms: u64,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_site_url() -> String {
    "http://localhost:8080".to_string()
}
fn default_public_dir() -> String {
    "public".to_string()
}
fn default_redirect_delay() -> u64 {
    500
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(Environment::with_prefix("APP").prefix_separator("_").ignore_empty(true));

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        // The store settings are optional: missing values become inert placeholders
        config.store_url = fill_or_env(config.store_url, "SUPABASE_URL", PLACEHOLDER_STORE_URL);
        config.store_anon_key = fill_or_env(config.store_anon_key, "SUPABASE_ANON_KEY", PLACEHOLDER_STORE_KEY);

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if Url::parse(&self.store_url).is_err() {
            errors.push("STORE_URL must be an absolute URL");
        }
        if Url::parse(&self.site_url).is_err() {
            errors.push("SITE_URL must be an absolute URL");
        }
        if self.port == 0 && self.env != AppEnvironment::Testing {
            errors.push("PORT cannot be 0");
        }
        if self.worker_count == 0 {
            errors.push("WORKER_COUNT must be at least 1");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    /// Problems that do not stop startup. Logged once tracing is up.
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if !self.store_configured() {
            warnings.push("Content store is not configured; every store call will fail");
        }
        warnings
    }

    /// False while either store setting still holds its placeholder.
    pub fn store_configured(&self) -> bool {
        self.store_url != PLACEHOLDER_STORE_URL && self.store_anon_key != PLACEHOLDER_STORE_KEY
    }
}

fn fill_or_env(current: String, env_key: &str, placeholder: &str) -> String {
    if current.trim().is_empty() {
        env::var(env_key)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| placeholder.to_string())
    } else {
        current
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for str {
    fn redact(&self) -> &str {
        if self.is_empty() {
            "[MISSING]"
        } else if self == PLACEHOLDER_STORE_KEY {
            "[PLACEHOLDER]"
        } else {
            "[REDACTED]"
        }
    }
}

impl Redact for String {
    fn redact(&self) -> &str {
        self.as_str().redact()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("store_url", &self.store_url)
            .field("store_anon_key", &self.store_anon_key.redact())
            .field("site_url", &self.site_url)
            .field("public_dir", &self.public_dir)
            .field("redirect_delay_ms", &self.redirect_delay_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            env: AppEnvironment::Testing,
            name: "Portfolio".into(),
            port: 0,
            host: "127.0.0.1".into(),
            worker_count: 1,
            store_url: "https://demo.supabase.co".into(),
            store_anon_key: "anon-key-value".into(),
            site_url: default_site_url(),
            public_dir: default_public_dir(),
            redirect_delay_ms: 500,
        }
    }

    #[test]
    fn debug_output_hides_the_anon_key() {
        let output = format!("{:?}", config());
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("anon-key-value"));
    }

    #[test]
    fn placeholders_count_as_unconfigured() {
        let mut cfg = config();
        assert!(cfg.store_configured());

        cfg.store_url = PLACEHOLDER_STORE_URL.into();
        assert!(!cfg.store_configured());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn missing_store_settings_are_reported_as_a_warning() {
        let mut cfg = config();
        assert!(cfg.warnings().is_empty());

        cfg.store_anon_key = PLACEHOLDER_STORE_KEY.into();
        let warnings = cfg.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("not configured"));
    }

    #[test]
    fn relative_store_url_is_rejected() {
        let mut cfg = config();
        cfg.store_url = "not a url".into();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn environment_names_parse_case_insensitively() {
        assert_eq!(AppEnvironment::from_str("Production").unwrap(), AppEnvironment::Production);
        assert!(AppEnvironment::from_str("staging").is_err());
    }
}
