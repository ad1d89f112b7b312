use async_trait::async_trait;
use tracing::{debug, warn};

use crate::common::errors::Error;
use crate::common::utils::error_message;
use crate::status::{DetectorStatus, NONE_CONFIGURED, NOT_APPLICABLE};

/// GuardDuty operations for a single region.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DetectorApi: Send + Sync {
    /// First page of detector ids, in the order the service returns them.
    async fn list_detectors(&self) -> Result<Vec<String>, Error>;

    async fn detector_status(&self, detector_id: &str) -> Result<String, Error>;
}

pub struct GuardDutyDetectors {
    client: aws_sdk_guardduty::Client,
}

impl GuardDutyDetectors {
    pub fn new(client: aws_sdk_guardduty::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DetectorApi for GuardDutyDetectors {
    async fn list_detectors(&self) -> Result<Vec<String>, Error> {
        let output = self
            .client
            .list_detectors()
            .send()
            .await
            .map_err(|err| Error::ListDetectors(error_message(err)))?;

        Ok(output.detector_ids.unwrap_or_default())
    }

    async fn detector_status(&self, detector_id: &str) -> Result<String, Error> {
        let output = self
            .client
            .get_detector()
            .detector_id(detector_id)
            .send()
            .await
            .map_err(|err| Error::GetDetector {
                detector_id: detector_id.to_string(),
                message: error_message(err),
            })?;

        Ok(output
            .status
            .map(|status| status.as_str().to_string())
            .unwrap_or_default())
    }
}

/// Resolves the detector status for one region.
///
/// A listing failure returns immediately with only the error recorded. Detectors
/// are visited in listing order and each successful lookup overwrites the
/// previous one, so the result describes the last detector. A failed lookup
/// records its error and moves on; the error slot is shared, so a later
/// failure replaces an earlier one.
pub async fn resolve_detector_status(detectors: &dyn DetectorApi) -> DetectorStatus {
    let mut status = DetectorStatus::default();

    let detector_ids = match detectors.list_detectors().await {
        Ok(ids) => ids,
        Err(err) => {
            warn!("{}", err);
            status.err = Some(err.to_string());
            return status;
        }
    };

    if detector_ids.is_empty() {
        status.detector = NONE_CONFIGURED.to_string();
        status.status = NOT_APPLICABLE.to_string();
        return status;
    }

    for detector_id in detector_ids {
        match detectors.detector_status(&detector_id).await {
            Ok(detector_status) => {
                debug!("detector {}: {}", detector_id, detector_status);
                status.detector = detector_id;
                status.status = detector_status;
            }
            Err(err) => {
                warn!("{}", err);
                status.err = Some(err.to_string());
            }
        }
    }

    status
}
