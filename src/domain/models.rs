use crate::domain::constants::{
    COLLECTIONS_BASE, PRODUCTS_BASE, SITEMAP_BLOGS, SITEMAP_COLLECTIONS, SITEMAP_PRODUCTS,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// One article to scaffold, as it appears in the topics file.
/// Loaded once at startup and never mutated.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Topic {
    pub title: String,
    pub slug: String,
    pub keywords: Vec<String>,
    pub target_products: Vec<String>,
    pub target_collections: Vec<String>,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct TopicFile {
    pub topics: Vec<Topic>,
}

/// Contents of `metadata.json`. Keys are camelCase on the wire; the
/// downstream generation agent consumes them as written.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: String,
    pub slug: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub publish_date: String,
    pub target_products: Vec<String>,
    pub target_collections: Vec<String>,
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SitemapUrls {
    pub products: String,
    pub collections: String,
    pub blogs: String,
}

/// Fixed external URLs passed through into `topic-config.json`.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub products_base: String,
    pub collections_base: String,
    pub sitemaps: SitemapUrls,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            products_base: PRODUCTS_BASE.to_string(),
            collections_base: COLLECTIONS_BASE.to_string(),
            sitemaps: SitemapUrls {
                products: SITEMAP_PRODUCTS.to_string(),
                collections: SITEMAP_COLLECTIONS.to_string(),
                blogs: SITEMAP_BLOGS.to_string(),
            },
        }
    }
}

/// Contents of `topic-config.json`: the topic fields at top level (same
/// snake_case keys as the input file), the derived metadata, the fetch
/// credential, and the fixed endpoint URLs.
#[derive(Debug, Deserialize, Serialize)]
pub struct TopicConfig {
    #[serde(flatten)]
    pub topic: Topic,
    pub metadata: Metadata,
    #[serde(rename = "jinaApiKey")]
    pub jina_api_key: String,
    #[serde(rename = "productsBase")]
    pub products_base: String,
    #[serde(rename = "collectionsBase")]
    pub collections_base: String,
    #[serde(rename = "sitemapUrls")]
    pub sitemap_urls: SitemapUrls,
}

#[derive(Debug, Serialize)]
pub struct ScaffoldFailure {
    pub slug: String,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct ScaffoldReport {
    pub overall: String,
    pub total: usize,
    pub succeeded: Vec<String>,
    pub failed: Vec<ScaffoldFailure>,
}
