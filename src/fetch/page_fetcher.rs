use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::errors::ProductError;

/// Desktop browser user agent sent with every product page request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

/// Source of raw product page bodies.
#[allow(async_fn_in_trait)]
pub trait FetchPage {
    async fn fetch_page(&self, url: &str) -> Result<String, ProductError>;
}

/// Fetches pages over HTTP with one client configured at startup.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(PageFetcher {
            client: builder.build()?,
        })
    }

    pub fn with_client(client: Client) -> Self {
        PageFetcher { client }
    }
}

impl FetchPage for PageFetcher {
    /// Returns the body decoded with the charset named in `Content-Type`
    /// (UTF-8 when absent), replacing undecodable bytes.
    async fn fetch_page(&self, url: &str) -> Result<String, ProductError> {
        let network_error = |source| ProductError::Network {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(network_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProductError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(network_error)
    }
}
