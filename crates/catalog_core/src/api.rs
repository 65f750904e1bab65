use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use shared::domain::{Product, ProductDraft};
use tracing::debug;
use url::Url;

use crate::{config::Settings, error::CatalogApiError};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogApiError>;
    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, CatalogApiError>;
}

pub struct HttpCatalogApi {
    http: Client,
    list_url: Url,
    create_url: Url,
}

impl HttpCatalogApi {
    pub fn new(settings: &Settings) -> Result<Self, CatalogApiError> {
        Ok(Self {
            http: Client::new(),
            list_url: settings.list_url()?,
            create_url: settings.create_url()?,
        })
    }

    pub fn list_url(&self) -> &Url {
        &self.list_url
    }

    pub fn create_url(&self) -> &Url {
        &self.create_url
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogApiError> {
        debug!(url = %self.list_url, "fetching product list");
        let res = self.http.get(self.list_url.clone()).send().await?;
        read_json(res, &self.list_url).await
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, CatalogApiError> {
        let body = serde_json::to_vec(draft).map_err(CatalogApiError::Encode)?;
        debug!(url = %self.create_url, bytes = body.len(), "posting new product");
        let res = self
            .http
            .post(self.create_url.clone())
            .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;
        read_json(res, &self.create_url).await
    }
}

async fn read_json<T: DeserializeOwned>(
    res: reqwest::Response,
    url: &Url,
) -> Result<T, CatalogApiError> {
    let status = res.status();
    if !status.is_success() {
        return Err(CatalogApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    let bytes = res.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|source| CatalogApiError::Decode {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
