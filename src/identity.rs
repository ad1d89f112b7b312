use async_trait::async_trait;

use crate::common::errors::Error;
use crate::common::utils::error_message;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityApi: Send + Sync {
    /// Account id of the credentials the client was built with.
    async fn caller_account_id(&self) -> Result<String, Error>;
}

pub struct StsIdentity {
    client: aws_sdk_sts::Client,
}

impl StsIdentity {
    pub fn new(client: aws_sdk_sts::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityApi for StsIdentity {
    async fn caller_account_id(&self) -> Result<String, Error> {
        let output = self
            .client
            .get_caller_identity()
            .send()
            .await
            .map_err(|err| Error::CallerIdentity(error_message(err)))?;

        output.account.ok_or(Error::MissingAccount)
    }
}
