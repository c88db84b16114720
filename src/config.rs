use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Error;

#[derive(clap::Parser, Clone, Debug)]
pub struct Args {
    #[clap(long, env)]
    #[arg(required = true)]
    pub config: PathBuf,
    #[clap(long, env)]
    #[clap(default_value_t = false)]
    pub headless: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub faucet_url: String,
    pub base_dir: PathBuf,
}

impl AppConfig {
    pub fn load(path: PathBuf) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config(e.to_string()))?;
        toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }
}
