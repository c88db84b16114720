use thiserror::Error;

use crate::strkey::StrkeyError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed secret: `{0}`")]
    MalformedSecret(#[from] SecretError),
    #[error("Store failed: `{0}`")]
    Store(#[from] StoreError),
    #[error("Config error: `{0}`")]
    Config(String),
}

#[derive(Error, Debug)]
pub enum SecretError {
    #[error("Secret seed is not a valid strkey: `{0}`")]
    Strkey(#[from] StrkeyError),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store file is empty")]
    EmptyFile,
    #[error("File error: `{0}`")]
    File(String),
    #[error("Serialization error: `{0}`")]
    Serde(String),
}
