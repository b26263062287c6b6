use crate::Result;
use crate::attributes::DEFAULT_ENV_PREFIX;
use crate::control::{AKS_CONTROL_ID, AKS_CONTROL_TITLE, DEFAULT_TIMEOUT, ExistenceControl};
use crate::query::{DEFAULT_API_VERSION, DEFAULT_ENDPOINT};
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Log target for configuration loading
const LOG_TARGET: &str = "config";

/// File looked for in the working directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "resource-controls.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Identity of the control being run
    #[serde(default)]
    pub control: ControlConfig,

    /// How the resource is looked up
    #[serde(default)]
    pub query: QueryConfig,

    /// Where attributes come from
    #[serde(default)]
    pub attributes: AttributesConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ControlConfig {
    #[serde(default = "default_control_id")]
    pub id: String,

    #[serde(default = "default_control_title")]
    pub title: String,

    /// Severity of a failure (0.0..=1.0)
    #[serde(default = "default_impact")]
    pub impact: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QueryConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    #[serde(default)]
    pub subscription_id: String,

    /// Name of the environment variable holding the bearer token
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Upper bound on a single lookup
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AttributesConfig {
    #[serde(default = "default_env_prefix")]
    pub env_prefix: String,

    /// Output of `terraform output -json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs_file: Option<Utf8PathBuf>,
}

fn default_control_id() -> String {
    AKS_CONTROL_ID.to_string()
}

fn default_control_title() -> String {
    AKS_CONTROL_TITLE.to_string()
}

const fn default_impact() -> f64 {
    1.0
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_token_env() -> String {
    "ARM_ACCESS_TOKEN".to_string()
}

const fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

fn default_env_prefix() -> String {
    DEFAULT_ENV_PREFIX.to_string()
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            id: default_control_id(),
            title: default_control_title(),
            impact: default_impact(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_version: default_api_version(),
            subscription_id: String::new(),
            token_env: default_token_env(),
            timeout: default_timeout(),
        }
    }
}

impl Default for AttributesConfig {
    fn default() -> Self {
        Self {
            env_prefix: default_env_prefix(),
            outputs_file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `resource-controls.toml` in `base_dir` is used when present.
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!(target: LOG_TARGET, "no '{path}' found, using the default configuration");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.control.impact) {
            return Err(app_err!("control.impact must be between 0.0 and 1.0, got {}", self.control.impact));
        }

        if self.control.id.trim().is_empty() {
            return Err(app_err!("control.id must not be empty"));
        }

        if self.query.timeout.is_zero() {
            return Err(app_err!("query.timeout must be greater than zero"));
        }

        if self.query.api_version.trim().is_empty() {
            return Err(app_err!("query.api_version must not be empty"));
        }

        if self.query.token_env.trim().is_empty() {
            return Err(app_err!("query.token_env must not be empty"));
        }

        let _ = self.endpoint_url()?;
        Ok(())
    }

    /// The parsed ARM endpoint
    pub fn endpoint_url(&self) -> Result<Url> {
        Url::parse(&self.query.endpoint).into_app_err_with(|| format!("parsing query.endpoint '{}'", self.query.endpoint))
    }

    /// Build the control described by this configuration
    pub fn control(&self) -> Result<ExistenceControl> {
        Ok(ExistenceControl::new(self.control.id.as_str(), self.control.title.as_str(), self.control.impact)?
            .with_timeout(self.query.timeout))
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
