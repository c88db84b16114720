use crate::bootstrap::BootstrapOutcome;
use crate::error::{Error, SecretError, StoreError};

pub enum Code {
    Success(BootstrapOutcome),
    // Fatal failures
    SecretFatal(SecretError),
    StoreFatal(StoreError),
    ConfigFatal(String),
}

impl Code {
    pub fn code(&self) -> i32 {
        match self {
            Code::Success(_) => 0,
            Code::SecretFatal(_) => 1,
            Code::StoreFatal(_) => 2,
            Code::ConfigFatal(_) => 3,
        }
    }

    pub fn is_fatal(&self) -> bool {
        !matches!(self, Code::Success(_))
    }

    pub fn output_logs(&self) {
        match self {
            Code::Success(outcome) => tracing::info!("Done wallet bootstrap: {outcome}"),
            Code::SecretFatal(reason) => tracing::error!("Secret error -> {reason}"),
            Code::StoreFatal(reason) => tracing::error!("Store error -> {reason}"),
            Code::ConfigFatal(reason) => tracing::error!("Config error -> {reason}"),
        }
    }

    pub fn from_result(result: Result<BootstrapOutcome, Error>) -> Self {
        match result {
            Ok(outcome) => Code::Success(outcome),
            Err(Error::MalformedSecret(e)) => Code::SecretFatal(e),
            Err(Error::Store(e)) => Code::StoreFatal(e),
            Err(Error::Config(e)) => Code::ConfigFatal(e),
        }
    }
}
