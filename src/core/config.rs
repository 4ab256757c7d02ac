use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "http://brat.io/api/v3";
pub const DEFAULT_USER_AGENT: &str = concat!("Brat Rust Crate ", env!("CARGO_PKG_VERSION"));
pub const PRIVATE_TOKEN_ENV: &str = "BRAT_API_PRIVATE_TOKEN";

pub const VALID_OPTIONS_KEYS: [&str; 7] = [
    "endpoint",
    "private_token",
    "user_agent",
    "sudo",
    "namespace",
    "api_version",
    "host",
];

/// Settings a `Client` is built with. Cloned into each client, never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub endpoint: Option<String>,
    pub private_token: Option<String>,
    pub user_agent: String,
    pub sudo: Option<String>,
    pub namespace: Option<String>,
    pub api_version: Option<String>,
    pub host: Option<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            endpoint: Some(DEFAULT_ENDPOINT.to_owned()),
            private_token: std::env::var(PRIVATE_TOKEN_ENV).ok(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            sudo: None,
            namespace: None,
            api_version: None,
            host: None,
        }
    }
}

/// Values read from the config file and `BRAT_*` environment variables.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Overrides {
    endpoint: Option<String>,
    private_token: Option<String>,
    user_agent: Option<String>,
    sudo: Option<String>,
    namespace: Option<String>,
    api_version: Option<String>,
    host: Option<String>,
}

impl Overrides {
    fn apply(self, mut config: Configuration) -> Configuration {
        config.endpoint = self.endpoint.or(config.endpoint);
        config.private_token = self.private_token.or(config.private_token);
        config.user_agent = self.user_agent.unwrap_or(config.user_agent);
        config.sudo = self.sudo.or(config.sudo);
        config.namespace = self.namespace.or(config.namespace);
        config.api_version = self.api_version.or(config.api_version);
        config.host = self.host.or(config.host);
        config
    }
}

impl Configuration {
    /// Defaults, then the YAML file at `path` (or the user config dir), then `BRAT_*` env vars.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path.map(Path::to_path_buf).or_else(default_config_path) {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let overrides: Overrides = builder
            .add_source(config::Environment::with_prefix("BRAT"))
            .build()?
            .try_deserialize()?;

        Ok(overrides.apply(Self::default()))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn options(&self) -> Vec<(&'static str, Option<&str>)> {
        VALID_OPTIONS_KEYS
            .iter()
            .map(|&key| (key, self.option(key)))
            .collect()
    }

    pub fn option(&self, key: &str) -> Option<&str> {
        match key {
            "endpoint" => self.endpoint.as_deref(),
            "private_token" => self.private_token.as_deref(),
            "user_agent" => Some(&self.user_agent),
            "sudo" => self.sudo.as_deref(),
            "namespace" => self.namespace.as_deref(),
            "api_version" => self.api_version.as_deref(),
            "host" => self.host.as_deref(),
            _ => None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_private_token(mut self, private_token: impl Into<String>) -> Self {
        self.private_token = Some(private_token.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_sudo(mut self, sudo: impl Into<String>) -> Self {
        self.sudo = Some(sudo.into());
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Endpoint with the `host`, `namespace` and `api_version` overrides applied.
    pub fn base_url(&self) -> Result<Url> {
        let endpoint = self
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or_else(|| Error::MissingCredentials("Please set an endpoint to API".to_owned()))?;

        let mut url = Url::parse(endpoint)?;

        if let Some(host) = &self.host {
            url.set_host(Some(host.as_str()))?;
        }

        if self.namespace.is_some() || self.api_version.is_some() {
            let path = format!(
                "/{}/{}",
                self.namespace.as_deref().unwrap_or("api"),
                self.api_version.as_deref().unwrap_or("v3"),
            );
            url.set_path(&path);
        }

        Ok(url)
    }
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "brat").map(|dirs| dirs.config_dir().join("config.yaml"))
}
