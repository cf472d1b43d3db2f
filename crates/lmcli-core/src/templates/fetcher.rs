//! Template fetching from the remote template store
//!
//! Templates are plain text files stored next to each other under a single base
//! URL and addressed by version and name: `<base>/<version>.<name>.template`.

use crate::error::{Result, ScaffoldError};
use crate::product::ProductConfig;
use reqwest::StatusCode;
use url::Url;

/// A (version, name) pair identifying one template file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRef {
    version: String,
    name: String,
}

impl TemplateRef {
    /// Both parts are lower-cased, the store is case-sensitive
    pub fn new(version: &str, name: &str) -> Self {
        Self {
            version: version.to_lowercase(),
            name: name.to_lowercase(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// File name of the template inside the store
    pub fn file_name(&self) -> String {
        format!("{}.{}.template", self.version, self.name)
    }
}

/// Template fetcher - retrieves raw template bytes over HTTP
pub struct TemplateFetcher {
    base_url: Url,
    client: reqwest::Client,
}

impl TemplateFetcher {
    /// Create a fetcher for the store rooted at `base_url`.
    ///
    /// Requests carry no custom headers and have no timeout or retry.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Create a fetcher from a product config
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let url_str = config.default_template_url();
        let url = Url::parse(url_str)
            .map_err(|e| ScaffoldError::InvalidTemplateUrl(format!("{} ({})", url_str, e)))?;
        Ok(Self::new(url))
    }

    /// Build a URL by appending a path segment, preserving query parameters
    fn build_url(base: &Url, path_segment: &str) -> Result<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| ScaffoldError::InvalidTemplateUrl(base.to_string()))?
            .pop_if_empty()
            .push(path_segment);
        Ok(url)
    }

    /// Resolve the full URL of a template
    pub fn template_url(&self, template: &TemplateRef) -> Result<Url> {
        Self::build_url(&self.base_url, &template.file_name())
    }

    /// Fetch a template's raw bytes.
    ///
    /// Anything other than HTTP 200 is an error, as are transport and body
    /// read failures.
    pub async fn fetch(&self, version: &str, name: &str) -> Result<Vec<u8>> {
        let url = self.template_url(&TemplateRef::new(version, name))?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ScaffoldError::Request {
                url: url.to_string(),
                source,
            })?;

        if response.status() != StatusCode::OK {
            return Err(ScaffoldError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let body = response.bytes().await.map_err(|source| ScaffoldError::Body {
            url: url.to_string(),
            source,
        })?;

        Ok(body.to_vec())
    }

    /// Get the store base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
