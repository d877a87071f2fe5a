//! HTTP Wish Store
//!
//! Talks to a json-server style collaborator: `GET/POST /wishes`,
//! `PATCH/DELETE /wishes/{id}`.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{StoreError, StoreResult};
use crate::models::{NewWish, Wish, WishPatch};
use crate::query::{ListQuery, WishPage};
use crate::store::WishStore;

const COLLECTION: &str = "wishes";

/// Draft plus the client-side creation stamp
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateWishBody<'a> {
    #[serde(flatten)]
    draft: &'a NewWish,
    created_at: String,
}

/// `toISOString()`-shaped UTC timestamp
fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone)]
pub struct HttpWishStore {
    client: Client,
    base: Url,
}

impl HttpWishStore {
    pub fn new(config: &ClientConfig) -> StoreResult<Self> {
        let base = Url::parse(&config.api_base_url).map_err(|e| StoreError::InvalidUrl {
            url: config.api_base_url.clone(),
            message: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(StoreError::InvalidUrl {
                url: config.api_base_url.clone(),
                message: "not a hierarchical URL".to_string(),
            });
        }
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    fn url_for(&self, segments: &[&str]) -> StoreResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::InvalidUrl {
                url: self.base.to_string(),
                message: "not a hierarchical URL".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `{base}/wishes?_sort=..&_page=..&_per_page=..`
    pub fn list_url(&self, query: &ListQuery) -> StoreResult<Url> {
        let mut url = self.url_for(&[COLLECTION])?;
        url.query_pairs_mut().extend_pairs(query.to_pairs());
        Ok(url)
    }

    /// `{base}/wishes/{id}` with `id` encoded as one path segment
    pub fn item_url(&self, id: &str) -> StoreResult<Url> {
        self.url_for(&[COLLECTION, id])
    }

    /// Send and return the body of a 2xx response
    async fn send(&self, request: RequestBuilder) -> StoreResult<String> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait(?Send)]
impl WishStore for HttpWishStore {
    async fn list(&self, query: &ListQuery) -> StoreResult<WishPage> {
        let url = self.list_url(query)?;
        log::debug!("Fetching with URL: {}", url);
        let body = self.send(self.client.get(url)).await?;
        WishPage::from_json(&body)
    }

    async fn create(&self, draft: &NewWish) -> StoreResult<Wish> {
        let url = self.url_for(&[COLLECTION])?;
        let body = CreateWishBody {
            draft,
            created_at: timestamp_now(),
        };
        log::debug!("POST {} ({})", url, draft.title);
        let text = self.send(self.client.post(url).json(&body)).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn update(&self, id: &str, patch: &WishPatch) -> StoreResult<Wish> {
        let url = self.item_url(id)?;
        log::debug!("PATCH {}", url);
        let text = self.send(self.client.patch(url).json(patch)).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let url = self.item_url(id)?;
        log::debug!("DELETE {}", url);
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}
