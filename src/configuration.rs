use crate::constant::{LOCAL_ENVIRONMENT, PRODUCTION_ENVIRONMENT};
use crate::error::BizErrorEnum;
use crate::reset_client::ResetClient;
use config::{Config, File};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub reset_api: ResetApiSettings,
    pub redirect: RedirectSettings,
    pub timings: TimingSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub name: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ResetApiSettings {
    pub base_url: String,
}

impl ResetApiSettings {
    pub fn client(self) -> Result<ResetClient, BizErrorEnum> {
        ResetClient::new(self.base_url)
    }
}

/// Targets of the redirect sequence run after a successful reset.
#[derive(Deserialize, Clone, Debug)]
pub struct RedirectSettings {
    /// Custom-scheme link handled by the native application, if installed.
    pub app_link: String,
    /// Opened unconditionally once the fallback delay has passed.
    pub web_link: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TimingSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub reveal_delay_milliseconds: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub redirect_delay_milliseconds: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub fallback_delay_milliseconds: u64,
}

impl TimingSettings {
    /// Pause between a successful response and showing the success message.
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_milliseconds)
    }

    /// Pause between showing the success message and opening the app link.
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_milliseconds)
    }

    /// Pause between opening the app link and opening the web link.
    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_delay_milliseconds)
    }
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            reveal_delay_milliseconds: 3000,
            redirect_delay_milliseconds: 2000,
            fallback_delay_milliseconds: 2000,
        }
    }
}

pub fn get_configuration() -> Result<Settings, BizErrorEnum> {
    let base_path = std::env::current_dir().map_err(|e| {
        tracing::error!("Failed to get current dir.");
        BizErrorEnum::GetCurrentDirError(e)
    })?;
    let config_dir = base_path.join("configuration");
    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| LOCAL_ENVIRONMENT.into())
        .try_into()
        .map_err(|e| {
            tracing::error!("Failed to parse APP_ENVIRONMENT: {:?}", e);
            BizErrorEnum::ParseEnvironmentVariableError(e)
        })?;
    let environment_filename = format!("{}.yaml", environment.as_str());
    // Initialise our configuration reader
    let settings = Config::builder()
        .add_source(File::from(config_dir.join("base.yaml")))
        .add_source(File::from(config_dir.join(environment_filename)))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_RESET_API__BASE_URL=https://api.example.com` would set `Settings.reset_api.base_url`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build config sources.");
            BizErrorEnum::BuildConfigSourcesError(e)
        })?;
    // Try to convert the configuration values it read into our Settings type
    settings.try_deserialize().map_err(|e| {
        tracing::error!("Failed to deserialize config file.");
        BizErrorEnum::DeserializeConfigurationFileError(e)
    })
}

/// The possible runtime environment for our application.
#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => LOCAL_ENVIRONMENT,
            Environment::Production => PRODUCTION_ENVIRONMENT,
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            LOCAL_ENVIRONMENT => Ok(Self::Local),
            PRODUCTION_ENVIRONMENT => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either 'local' or 'production'.",
                other
            )),
        }
    }
}
