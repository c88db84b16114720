use reqwest::Client;
use tokio::task::JoinHandle;

use crate::constants::FRIENDBOT_PATH;

/// Thin client for the friendbot faucet service.
#[derive(Clone, Debug)]
pub struct FaucetClient {
    client: Client,
    base_url: String,
}

impl FaucetClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// One funding request for the given account. The response body is
    /// ignored; only the status is checked.
    pub async fn fund(&self, public_key: &str) -> Result<(), reqwest::Error> {
        let url = format!("{}/{}?addr={}", self.base_url, FRIENDBOT_PATH, public_key);
        tracing::debug!("Requesting faucet funding: {url}");
        self.client.get(&url).send().await?.error_for_status()?;
        Ok(())
    }

    /// Dispatches a funding request on a detached task. The caller must not
    /// depend on the outcome: a failed request is logged at debug level and
    /// dropped. The handle only matters to a caller that would otherwise
    /// tear the runtime down before the request is on the wire.
    pub fn fund_detached(&self, public_key: String) -> JoinHandle<()> {
        let faucet = self.clone();
        tokio::spawn(async move {
            if let Err(e) = faucet.fund(&public_key).await {
                tracing::debug!("Faucet call for {public_key} failed: {e}");
            }
        })
    }
}
