use khademni::error::{ClientError, ConfigError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    ClientError(#[from] ClientError),
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}
