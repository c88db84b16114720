use std::fmt;
use std::path::PathBuf;

use tokio::task::JoinHandle;

use crate::config::AppConfig;
use crate::constants::STORAGE_KEY;
use crate::error::{Error, StoreError};
use crate::faucet::FaucetClient;
use crate::holder::KeyHolder;
use crate::keypair::Keypair;
use crate::platform::Platform;
use crate::store::Store;

#[derive(Debug)]
pub enum BootstrapOutcome {
    /// Headless platform, nothing was touched.
    Skipped,
    /// Keypair restored from the persisted secret, no faucet call.
    Restored,
    /// Fresh keypair generated, persisted and submitted for funding. The
    /// handle covers the detached faucet request; its outcome is
    /// intentionally ignored, but a caller about to exit the process must
    /// let it finish or the request is cancelled mid-flight.
    Created { funding: JoinHandle<()> },
}

impl fmt::Display for BootstrapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapOutcome::Skipped => write!(f, "skipped"),
            BootstrapOutcome::Restored => write!(f, "restored"),
            BootstrapOutcome::Created { .. } => write!(f, "created"),
        }
    }
}

/// One-shot wallet bootstrap: restores the bundler keypair from the
/// persistent store, or generates a fresh one, persists its secret and asks
/// the faucet to fund it.
pub struct Bootstrapper {
    platform: Platform,
    base_dir: PathBuf,
    faucet: FaucetClient,
}

impl Bootstrapper {
    pub fn new(platform: Platform, base_dir: impl Into<PathBuf>, faucet: FaucetClient) -> Self {
        Self {
            platform,
            base_dir: base_dir.into(),
            faucet,
        }
    }

    pub fn from_config(platform: Platform, config: &AppConfig) -> Self {
        Self::new(
            platform,
            config.base_dir.clone(),
            FaucetClient::new(config.faucet_url.clone()),
        )
    }

    /// Runs the bootstrap sequence. Consuming `self` keeps it a once-per-
    /// process operation.
    ///
    /// A malformed persisted secret is fatal and propagates to the caller.
    pub async fn run(self, holder: &KeyHolder) -> Result<BootstrapOutcome, Error> {
        if self.platform.is_headless() {
            tracing::info!("Headless platform, skipping wallet bootstrap");
            return Ok(BootstrapOutcome::Skipped);
        }

        let mut store = match Store::load(&self.base_dir) {
            Ok(store) => store,
            Err(StoreError::EmptyFile) => {
                tracing::warn!("Store file is empty, creating new one");
                Store::create_new(&self.base_dir)?
            }
            Err(e) => return Err(Error::Store(e)),
        };

        if let Some(secret) = store.get(STORAGE_KEY) {
            let keypair = Keypair::from_secret(secret)?;
            tracing::info!("Restored bundler key {}", keypair.public_key());
            holder.set(keypair);
            return Ok(BootstrapOutcome::Restored);
        }

        let keypair = Keypair::random();
        let public_key = keypair.public_key();
        tracing::info!("Generated bundler key {public_key}");

        holder.set(keypair.clone());
        store.insert(STORAGE_KEY, keypair.secret());
        store.save()?;

        let funding = self.faucet.fund_detached(public_key);
        Ok(BootstrapOutcome::Created { funding })
    }
}
