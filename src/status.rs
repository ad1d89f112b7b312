use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{info, warn};

use crate::clients::ClientProvider;
use crate::guardduty::resolve_detector_status;

pub const NONE_CONFIGURED: &str = "NONE_CONFIGURED";
pub const NOT_APPLICABLE: &str = "N/A";
pub const UNKNOWN_ACCOUNT: &str = "UNKNOWN";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectorStatus {
    pub detector: String,
    pub status: String,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
}

/// Detector status keyed by account id, or by [`UNKNOWN_ACCOUNT`] when the
/// caller identity could not be resolved. Holds exactly one entry.
pub type AccountStatus = BTreeMap<String, DetectorStatus>;

#[tracing::instrument(skip(clients))]
pub async fn account_status(clients: &dyn ClientProvider, region: &str) -> AccountStatus {
    let detectors = clients.detector_client(region);
    let mut status = resolve_detector_status(detectors.as_ref()).await;
    status.region = region.to_string();

    let identity = clients.identity_client(region);
    let account_id = match identity.caller_account_id().await {
        Ok(account_id) => account_id,
        Err(err) => {
            warn!("{}", err);
            status.err = Some(err.to_string());
            UNKNOWN_ACCOUNT.to_string()
        }
    };

    info!(
        "account {} detector {} status {}",
        account_id, status.detector, status.status
    );

    let mut account_status = AccountStatus::new();
    account_status.insert(account_id, status);
    account_status
}
