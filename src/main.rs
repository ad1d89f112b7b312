use std::sync::Arc;

use guardduty_status::api::{serve, AppState};
use guardduty_status::clients::SdkClients;
use guardduty_status::common::config::{load_aws_config, Config};
use guardduty_status::common::errors::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .init();

    let config = Config::from_env();
    let aws_config = load_aws_config(&config).await?;

    let state = AppState {
        clients: Arc::new(SdkClients::new(aws_config)),
        default_region: config.default_region.clone(),
    };

    serve(&config.listen_addr, state).await
}
