//! Remote data source access.
//!
//! [`CatalogSource`] is the seam between the pipeline and the read-only REST API.
//! [`HttpCatalog`] is the production implementation on top of a blocking
//! `reqwest` client; tests plug in in-memory sources instead.

use crate::core::config::DexConfig;
use crate::core::error::{DexNavigatorError, Result};
use crate::core::model::{
    CategoryName, EntityDetail, EntityReference, NamedResourceList, RawDetail, TypeMembership,
};
use reqwest::Url;
use serde::de::DeserializeOwned;

/// Read-only catalog API
pub trait CatalogSource: Send + Sync {
    /// `GET /type`
    fn type_names(&self) -> Result<Vec<CategoryName>>;

    /// `GET /type/{category}`
    fn type_members(&self, category: &str) -> Result<Vec<EntityReference>>;

    /// `GET /pokemon?limit={limit}`
    fn default_listing(&self, limit: usize) -> Result<Vec<EntityReference>>;

    /// `GET /pokemon/{name}`
    fn detail(&self, name: &str) -> Result<EntityDetail>;
}

pub struct HttpCatalog {
    client: reqwest::blocking::Client,
    base_url: Url,
}

impl HttpCatalog {
    pub fn new(config: &DexConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|e| DexNavigatorError::invalid_base_url(&config.api_base_url, e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(DexNavigatorError::invalid_base_url(
                &config.api_base_url,
                "URL cannot be used as a base",
            ));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("dex-navigator/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                DexNavigatorError::invalid_base_url(self.base_url.as_str(), "URL cannot be used as a base")
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        log::debug!("GET {url}");
        let response = self.client.get(url.clone()).send()?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("GET {url} -> {status}");
            return Err(DexNavigatorError::unexpected_status(url, status.as_u16()));
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| DexNavigatorError::malformed_body(url, e))
    }
}

impl CatalogSource for HttpCatalog {
    fn type_names(&self) -> Result<Vec<CategoryName>> {
        let list: NamedResourceList = self.get_json(self.endpoint(&["type"])?)?;
        Ok(list.results.into_iter().map(|resource| resource.name).collect())
    }

    fn type_members(&self, category: &str) -> Result<Vec<EntityReference>> {
        let membership: TypeMembership = self.get_json(self.endpoint(&["type", category])?)?;
        Ok(membership.into())
    }

    fn default_listing(&self, limit: usize) -> Result<Vec<EntityReference>> {
        let mut url = self.endpoint(&["pokemon"])?;
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        let list: NamedResourceList = self.get_json(url)?;
        Ok(list.into())
    }

    fn detail(&self, name: &str) -> Result<EntityDetail> {
        if name.trim().is_empty() {
            return Err(DexNavigatorError::EmptyName);
        }
        let raw: RawDetail = self.get_json(self.endpoint(&["pokemon", name])?)?;
        EntityDetail::try_from(raw)
    }
}
