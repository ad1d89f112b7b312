use aws_config::{Region, SdkConfig};

use crate::guardduty::{DetectorApi, GuardDutyDetectors};
use crate::identity::{IdentityApi, StsIdentity};

/// Builds the remote clients a status request needs.
#[cfg_attr(test, mockall::automock)]
pub trait ClientProvider: Send + Sync {
    fn detector_client(&self, region: &str) -> Box<dyn DetectorApi>;

    fn identity_client(&self, region: &str) -> Box<dyn IdentityApi>;
}

/// Clients backed by the AWS SDK, sharing one ambient configuration.
#[derive(Debug, Clone)]
pub struct SdkClients {
    config: SdkConfig,
}

impl SdkClients {
    pub fn new(config: SdkConfig) -> Self {
        Self { config }
    }

    fn guardduty_client(&self, region: &str) -> aws_sdk_guardduty::Client {
        let config = aws_sdk_guardduty::config::Builder::from(&self.config)
            .region(Region::new(region.to_string()))
            .build();

        aws_sdk_guardduty::Client::from_conf(config)
    }

    /// STS uses the ambient region; the requested region is only a fallback
    /// when none is configured.
    fn sts_client(&self, region: &str) -> aws_sdk_sts::Client {
        match self.config.region() {
            Some(_) => aws_sdk_sts::Client::new(&self.config),
            None => {
                let config = aws_sdk_sts::config::Builder::from(&self.config)
                    .region(Region::new(region.to_string()))
                    .build();
                aws_sdk_sts::Client::from_conf(config)
            }
        }
    }
}

impl ClientProvider for SdkClients {
    fn detector_client(&self, region: &str) -> Box<dyn DetectorApi> {
        Box::new(GuardDutyDetectors::new(self.guardduty_client(region)))
    }

    fn identity_client(&self, region: &str) -> Box<dyn IdentityApi> {
        Box::new(StsIdentity::new(self.sts_client(region)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_config::BehaviorVersion;

    fn sdk_clients(region: Option<&'static str>) -> SdkClients {
        let mut builder = SdkConfig::builder().behavior_version(BehaviorVersion::latest());
        if let Some(region) = region {
            builder = builder.region(Region::new(region));
        }
        SdkClients::new(builder.build())
    }

    fn region_name(region: Option<&Region>) -> Option<&str> {
        region.map(|region| region.as_ref())
    }

    #[test]
    fn guardduty_client_uses_requested_region() {
        let clients = sdk_clients(Some("us-east-1"));

        let client = clients.guardduty_client("eu-central-1");

        assert_eq!(region_name(client.config().region()), Some("eu-central-1"));
    }

    #[test]
    fn guardduty_client_without_ambient_region() {
        let clients = sdk_clients(None);

        let client = clients.guardduty_client("ap-southeast-2");

        assert_eq!(region_name(client.config().region()), Some("ap-southeast-2"));
    }

    #[test]
    fn sts_client_keeps_ambient_region() {
        let clients = sdk_clients(Some("us-east-1"));

        let client = clients.sts_client("eu-central-1");

        assert_eq!(region_name(client.config().region()), Some("us-east-1"));
    }

    #[test]
    fn sts_client_falls_back_to_requested_region() {
        let clients = sdk_clients(None);

        let client = clients.sts_client("eu-central-1");

        assert_eq!(region_name(client.config().region()), Some("eu-central-1"));
    }
}
