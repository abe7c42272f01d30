/*
[INPUT]:  YAML configuration file and CUSTOMER_DESK__* environment overrides
[OUTPUT]: Parsed desk configuration with defaults for every key
[POS]:    Configuration layer - API endpoint, UI timings, reference lists
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use customer_desk_adapter::{ClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

use crate::list::DEFAULT_PAGE_SIZE;
use crate::wizard::WizardSettings;

pub const ENV_PREFIX: &str = "CUSTOMER_DESK";
const APP_DIR: &str = "customer-desk";
const CONFIG_FILE: &str = "config.yaml";

/// Top-level configuration for the customer desk
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DeskConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
    /// Directory for daily-rolling log files; logs stay in memory when unset
    pub log_dir: Option<PathBuf>,
    pub reference: ReferenceData,
}

/// Customer API endpoint settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    /// Rows per list page
    pub page_size: u32,
    pub toast_duration_ms: u64,
    /// Delay before showing the saved record after create/update
    pub submit_redirect_delay_ms: u64,
    /// Delay before returning to the list after a delete
    pub delete_redirect_delay_ms: u64,
    /// Dial code filled in when a contact first becomes phone-like
    pub default_dial_code: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            toast_duration_ms: 5000,
            submit_redirect_delay_ms: 2000,
            delete_redirect_delay_ms: 1500,
            default_dial_code: "+1".to_string(),
        }
    }
}

/// Static lookup tables offered by choice fields.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReferenceData {
    pub countries: Vec<String>,
    pub dial_codes: Vec<String>,
    pub languages: Vec<String>,
    pub genders: Vec<String>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            countries: owned(&[
                "United States",
                "United Kingdom",
                "Canada",
                "Australia",
                "India",
                "Germany",
                "France",
                "Spain",
                "Italy",
                "Japan",
                "Brazil",
                "Mexico",
            ]),
            dial_codes: owned(&[
                "+1", "+44", "+61", "+91", "+49", "+33", "+34", "+39", "+81", "+55", "+52",
            ]),
            languages: owned(&[
                "English", "Spanish", "French", "German", "Italian", "Hindi", "Japanese",
                "Portuguese", "Mandarin",
            ]),
            genders: owned(&["male", "female", "other"]),
        }
    }
}

/// Values stay strings; numeric fields are converted on deserialize, so a
/// dial code such as `+44` is not turned into a number.
fn env_overrides() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
}

impl DeskConfig {
    /// `<config dir>/customer-desk/config.yaml`, or `config.yaml` when the
    /// platform has no config dir.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Load from `path` plus `CUSTOMER_DESK__*` environment overrides.
    ///
    /// An explicit path must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, env_overrides())
    }

    fn load_with_env(path: Option<&Path>, environment: config::Environment) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        let settings = config::Config::builder()
            .add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Yaml)
                    .required(required),
            )
            .add_source(environment)
            .build()
            .with_context(|| format!("read config {}", path.display()))?;

        let config: Self = settings
            .try_deserialize()
            .with_context(|| format!("parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("failed to serialize config to YAML")
    }

    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api.base_url)
            .with_context(|| format!("api.base_url is not a valid URL: {}", self.api.base_url))?;
        if self.ui.page_size == 0 {
            bail!("ui.page_size must be at least 1");
        }
        if self.api.timeout_secs == 0 {
            bail!("api.timeout_secs must be at least 1");
        }
        if self.ui.default_dial_code.trim().is_empty() {
            bail!("ui.default_dial_code must not be empty");
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api.base_url.clone(),
            timeout: Duration::from_secs(self.api.timeout_secs),
            connect_timeout: Duration::from_secs(self.api.connect_timeout_secs),
        }
    }

    pub fn wizard_settings(&self) -> WizardSettings {
        WizardSettings {
            default_dial_code: self.ui.default_dial_code.clone(),
            submit_redirect_delay: Duration::from_millis(self.ui.submit_redirect_delay_ms),
        }
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.ui.toast_duration_ms)
    }

    pub fn delete_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.ui.delete_redirect_delay_ms)
    }
}
