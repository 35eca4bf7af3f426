//! Remote content API: `GET {base}/menus` and `GET {base}/settings`, both JSON.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{CmsError, ContentSource, GlobalSettings, Menus};

#[derive(Debug, Clone)]
pub struct HttpContent {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContent {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn endpoint(&self, document: &str) -> String {
        format!("{}/{document}", self.base_url)
    }

    async fn fetch<T: DeserializeOwned>(&self, document: &'static str) -> Result<T, CmsError> {
        let url = self.endpoint(document);
        debug!(%url, "fetching content");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| CmsError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::Status {
                url,
                status: status.as_u16(),
            });
        }

        // Read the body as text so decode failures keep serde's message.
        let body = response
            .text()
            .await
            .map_err(|source| CmsError::Request { url, source })?;
        serde_json::from_str(&body).map_err(|source| CmsError::Decode { document, source })
    }
}

#[async_trait(?Send)]
impl ContentSource for HttpContent {
    async fn menus(&self) -> Result<Menus, CmsError> {
        self.fetch("menus").await
    }

    async fn settings(&self) -> Result<GlobalSettings, CmsError> {
        self.fetch("settings").await
    }
}
