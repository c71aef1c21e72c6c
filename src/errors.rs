use thiserror::Error;

use crate::update::UpdateStage;

/// Everything that can go wrong while resolving or refreshing one product.
///
/// All variants are record-scoped: a batch run logs them and moves on to
/// the next product.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("{0} is not a valid product id")]
    InvalidProductId(String),

    #[error("failed to extract product id from {0}")]
    UrlExtraction(String),

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("page at {url} could not be parsed: {reason}")]
    Parse { url: String, reason: String },

    #[error("title node for {url} was not found")]
    TitleNotFound { url: String },

    #[error("price node for {url} was not found")]
    PriceNotFound { url: String },

    #[error("point node for {url} was found, but had unexpected text format: {text:?}")]
    PointFormat { url: String, text: String },

    #[error("{field} for {url} was found, but had unexpected text format: {text:?}")]
    NumericFormat {
        url: String,
        field: &'static str,
        text: String,
    },
}

impl ProductError {
    /// The update stage this error aborted, `None` for resolver errors that
    /// happen before an update starts.
    pub fn stage(&self) -> Option<UpdateStage> {
        match self {
            ProductError::InvalidProductId(_) | ProductError::UrlExtraction(_) => None,
            ProductError::Network { .. } | ProductError::HttpStatus { .. } => {
                Some(UpdateStage::Fetching)
            }
            ProductError::Parse { .. } => Some(UpdateStage::Parsing),
            ProductError::TitleNotFound { .. }
            | ProductError::PriceNotFound { .. }
            | ProductError::PointFormat { .. }
            | ProductError::NumericFormat { .. } => Some(UpdateStage::Extracting),
        }
    }
}
