//! Error Types for Market Data

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MarketError>;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("provider rejected request: {0}")]
    Provider(String),

    #[error("no data returned for {0}")]
    NoData(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
