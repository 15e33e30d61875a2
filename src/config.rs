use tracing::Level;

use crate::error::ConfigError;

/// Address of the API served by the site backend when nothing else is configured. The backend
/// listens on port 80.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1";

/// Settings resolved once at startup.
///
/// The site is shipped as a static bundle, so values are baked in at build time through the
/// `JIYER_API_BASE` and `JIYER_LOG` environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub api_base: String,
    pub log_level: Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: Level::INFO,
        }
    }
}

impl SiteConfig {
    /// Read the build-time settings, falling back to defaults.
    ///
    /// An unparseable log level is replaced by `INFO` and handed back so it can be reported once
    /// logging is up.
    pub fn from_env() -> (Self, Option<ConfigError>) {
        Self::from_values(option_env!("JIYER_API_BASE"), option_env!("JIYER_LOG"))
    }

    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> (Self, Option<ConfigError>) {
        let api_base = api_base
            .map(str::to_string)
            .or_else(page_origin)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let (log_level, err) = match log_level.map(parse_level).transpose() {
            Ok(level) => (level.unwrap_or(Level::INFO), None),
            Err(err) => (Level::INFO, Some(err)),
        };

        (Self { api_base, log_level }, err)
    }
}

fn parse_level(level: &str) -> Result<Level, ConfigError> {
    level
        .trim()
        .parse()
        .map_err(|_| ConfigError::LogLevel(level.to_string()))
}

/// On the web the API is served from the same origin as the page.
#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}
