use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to resolve AWS configuration: {0}")]
    Config(String),

    #[error("failed to list GuardDuty detectors: {0}")]
    ListDetectors(String),

    #[error("failed to get GuardDuty detector {detector_id}: {message}")]
    GetDetector { detector_id: String, message: String },

    #[error("failed to get caller identity: {0}")]
    CallerIdentity(String),

    #[error("caller identity response is missing the account id")]
    MissingAccount,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
