use crate::domain::constants::{METADATA_FILE, TOPIC_CONFIG_FILE};
use crate::domain::models::{
    Endpoints, Metadata, ScaffoldFailure, ScaffoldReport, Topic, TopicConfig,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize {filename}: {source}")]
    Serialize {
        filename: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolve the per-topic output directory and create it (with any missing
/// parents). Existing directories are left untouched.
pub fn ensure_directory(root: &Path, slug: &str) -> Result<PathBuf, WriteError> {
    let dir = root.join(slug);
    std::fs::create_dir_all(&dir).map_err(|e| WriteError::CreateDir {
        path: dir.clone(),
        source: e,
    })?;
    Ok(dir)
}

pub fn build_metadata(topic: &Topic, author: &str, now: DateTime<Utc>) -> Metadata {
    Metadata {
        title: topic.title.clone(),
        slug: topic.slug.clone(),
        keywords: topic.keywords.clone(),
        author: author.to_string(),
        publish_date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        target_products: topic.target_products.clone(),
        target_collections: topic.target_collections.clone(),
        description: topic.description.clone(),
    }
}

pub fn build_topic_config(
    topic: &Topic,
    metadata: Metadata,
    api_key: &str,
    endpoints: &Endpoints,
) -> TopicConfig {
    TopicConfig {
        topic: topic.clone(),
        metadata,
        jina_api_key: api_key.to_string(),
        products_base: endpoints.products_base.clone(),
        collections_base: endpoints.collections_base.clone(),
        sitemap_urls: endpoints.sitemaps.clone(),
    }
}

/// Serialize as pretty-printed JSON (2-space indentation) and write to
/// `dir/filename`, overwriting any existing file.
pub fn write_json<T: Serialize>(dir: &Path, filename: &str, value: &T) -> Result<(), WriteError> {
    let body = serde_json::to_string_pretty(value).map_err(|e| WriteError::Serialize {
        filename: filename.to_string(),
        source: e,
    })?;
    let path = dir.join(filename);
    std::fs::write(&path, body).map_err(|e| WriteError::WriteFile { path, source: e })
}

/// Scaffold one topic: ensure its directory, then write `metadata.json`
/// followed by `topic-config.json`. The two writes are independent; the
/// order only matters for log readability.
pub fn scaffold_topic(
    root: &Path,
    topic: &Topic,
    author: &str,
    api_key: &str,
    endpoints: &Endpoints,
    now: DateTime<Utc>,
) -> Result<PathBuf, WriteError> {
    let dir = ensure_directory(root, &topic.slug)?;
    let metadata = build_metadata(topic, author, now);
    write_json(&dir, METADATA_FILE, &metadata)?;
    let config = build_topic_config(topic, metadata, api_key, endpoints);
    write_json(&dir, TOPIC_CONFIG_FILE, &config)?;
    Ok(dir)
}

pub fn build_scaffold_report(
    total: usize,
    succeeded: Vec<String>,
    failed: Vec<ScaffoldFailure>,
) -> ScaffoldReport {
    let overall = if failed.is_empty() {
        "ok"
    } else {
        "needs_attention"
    }
    .to_string();
    ScaffoldReport {
        overall,
        total,
        succeeded,
        failed,
    }
}
