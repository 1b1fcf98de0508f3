//! Link enhancer: hypermedia navigation fields.

use crate::enhancer::Enhancer;
use crate::error::GatewayError;
use crate::path::ResourcePath;
use crate::representation::Representation;
use crate::resource::Resource;
use serde_json::json;
use std::sync::Arc;

/// URL generation capability supplied by the embedder.
pub trait UrlGenerator: Send + Sync {
    /// Canonical URL for a resource within a repository.
    fn resource_url(
        &self,
        repository: &str,
        path: &ResourcePath,
    ) -> Result<String, GatewayError>;
}

/// Generator that prefixes a fixed base, e.g. `https://host/api`.
pub struct StaticPrefixUrlGenerator {
    base: String,
}

impl StaticPrefixUrlGenerator {
    pub fn new(base: &str) -> Self {
        StaticPrefixUrlGenerator {
            base: base.trim_end_matches('/').to_string(),
        }
    }
}

impl UrlGenerator for StaticPrefixUrlGenerator {
    fn resource_url(
        &self,
        repository: &str,
        path: &ResourcePath,
    ) -> Result<String, GatewayError> {
        if path.is_root() {
            return Ok(format!("{}/{}", self.base, repository));
        }
        Ok(format!("{}/{}{}", self.base, repository, path))
    }
}

/// Attaches a `links` object with the resource's canonical self link.
///
/// Generator failure fails the whole representation build; there is no
/// partial-links fallback.
pub struct LinkEnhancer {
    urls: Arc<dyn UrlGenerator>,
}

impl LinkEnhancer {
    pub fn new(urls: Arc<dyn UrlGenerator>) -> Self {
        LinkEnhancer { urls }
    }
}

impl Enhancer for LinkEnhancer {
    fn enhance(
        &self,
        data: &mut Representation,
        resource: &Resource,
    ) -> Result<(), GatewayError> {
        let self_url = self
            .urls
            .resource_url(&resource.repository, &resource.path)?;
        data.set("links", json!({ "self": self_url }));
        Ok(())
    }
}
