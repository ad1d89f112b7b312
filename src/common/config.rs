use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use tracing::info;

use crate::common::errors::Error;
use crate::common::utils::error_message;
use crate::common::{DEFAULT_REGION, LISTEN_ADDR_DEFAULT};

/// Process settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub default_region: String,
    pub aws_profile: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let listen_addr = std::env::var("LISTEN_ADDR").unwrap_or(LISTEN_ADDR_DEFAULT.into());
        let default_region = std::env::var("DEFAULT_REGION").unwrap_or(DEFAULT_REGION.into());
        let aws_profile = std::env::var("AWS_PROFILE").ok();

        Self {
            listen_addr,
            default_region,
            aws_profile,
        }
    }
}

/// Loads the ambient AWS configuration and resolves credentials once, so an
/// unknown profile or an empty credential chain stops the process at startup.
pub async fn load_aws_config(config: &Config) -> Result<SdkConfig, Error> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(profile_name) = &config.aws_profile {
        loader = loader.profile_name(profile_name);
    }

    let sdk_config = loader.load().await;
    let provider = sdk_config
        .credentials_provider()
        .ok_or_else(|| Error::Config("no credentials provider available".into()))?;
    provider
        .provide_credentials()
        .await
        .map_err(|err| Error::Config(error_message(err)))?;

    info!(
        "AWS configuration loaded, region: {}",
        sdk_config
            .region()
            .map(|region| region.as_ref())
            .unwrap_or("<unset>")
    );

    Ok(sdk_config)
}
