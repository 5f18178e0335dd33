//! Configuration layer: typed CMS settings with layered precedence
//! (file → environment).

use ::config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const CONFIG_BASENAME: &str = "vetrina";
const ENV_PREFIX: &str = "VETRINA";
const DEFAULT_ENDPOINT: &str = "https://graphql.datocms.com/";

/// Settings consumed by the CMS client. The rendering core reads none of
/// these; configuration stops at the data-fetching boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct CmsSettings {
    /// Read-only API token issued by the CMS.
    pub api_token: String,
    /// GraphQL endpoint base URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Query draft content instead of published content.
    #[serde(default)]
    pub preview: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl CmsSettings {
    /// Load from an optional `vetrina.toml` beside the process and
    /// `VETRINA_*` environment variables, with the environment winning.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(CONFIG_BASENAME).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_apply_defaults() {
        let settings: CmsSettings = Config::builder()
            .set_override("api_token", "secret")
            .expect("override")
            .build()
            .expect("config")
            .try_deserialize()
            .expect("settings");

        assert_eq!(settings.api_token, "secret");
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert!(!settings.preview);
    }

    #[test]
    fn settings_require_an_api_token() {
        let result: Result<CmsSettings, _> = Config::builder()
            .build()
            .expect("config")
            .try_deserialize();
        assert!(result.is_err());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let settings: CmsSettings = Config::builder()
            .set_override("api_token", "secret")
            .expect("override")
            .set_override("endpoint", "https://graphql.example.com/")
            .expect("override")
            .set_override("preview", true)
            .expect("override")
            .build()
            .expect("config")
            .try_deserialize()
            .expect("settings");

        assert_eq!(settings.endpoint, "https://graphql.example.com/");
        assert!(settings.preview);
    }
}
