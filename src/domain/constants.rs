//! Stable constants shared across commands and services.

pub const DEFAULT_TOPICS_FILE: &str = "article-topics.json";
pub const DEFAULT_OUTPUT_ROOT: &str = "articles";

pub const METADATA_FILE: &str = "metadata.json";
pub const TOPIC_CONFIG_FILE: &str = "topic-config.json";

pub const DEFAULT_AUTHOR: &str = "Oscillot America";

/// Environment variable holding the content-fetch bearer credential.
pub const API_KEY_ENV: &str = "JINA_API_KEY";

pub const JINA_BASE_URL: &str = "https://r.jina.ai/";

pub const PRODUCTS_BASE: &str = "https://oscillotamerica.com/products/";
pub const COLLECTIONS_BASE: &str = "https://oscillotamerica.com/collections/";

// The from/to ranges are pinned to the catalog snapshot the downstream
// generation agent was built against; they pass through into output verbatim.
pub const SITEMAP_PRODUCTS: &str =
    "https://oscillotamerica.com/sitemap_products_1.xml?from=7552589267169&to=8003189735649";
pub const SITEMAP_COLLECTIONS: &str =
    "https://oscillotamerica.com/sitemap_collections_1.xml?from=58566541363&to=412846031073";
pub const SITEMAP_BLOGS: &str = "https://oscillotamerica.com/sitemap_blogs_1.xml";

pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 30_000;
pub const MAX_FETCH_BYTES: u64 = 10 * 1024 * 1024;
