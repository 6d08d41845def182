use crate::domain::constants::{DEFAULT_FETCH_TIMEOUT_MS, JINA_BASE_URL, MAX_FETCH_BYTES};
use crate::services::storage::page_cache_dir;
use sha2::{Digest, Sha256};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

/// Seam for the downstream content-generation stage. An absent result means
/// "content unavailable"; callers skip enrichment and continue.
pub trait PageFetcher {
    fn fetch_page_text(&self, url: &str) -> Option<String>;
}

/// Fetches extracted page text through the Jina reader endpoint, with a
/// bearer credential, bounded response size, and a cache fallback.
pub struct JinaFetcher {
    api_key: String,
    base_url: String,
    timeout_ms: u64,
}

impl JinaFetcher {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: JINA_BASE_URL.to_string(),
            timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }

    pub fn with_endpoint(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    fn fetch_text(&self, url: &str) -> anyhow::Result<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(self.timeout_ms))
            .build()?;
        let resp = client
            .get(format!("{}{}", self.base_url, url))
            .bearer_auth(&self.api_key)
            .send()?
            .error_for_status()?;
        let mut body = Vec::new();
        resp.take(MAX_FETCH_BYTES + 1).read_to_end(&mut body)?;
        if body.len() as u64 > MAX_FETCH_BYTES {
            anyhow::bail!("response exceeded {} bytes", MAX_FETCH_BYTES);
        }
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

fn cache_path(url: &str) -> anyhow::Result<PathBuf> {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    let id = hex::encode(hasher.finalize());
    Ok(page_cache_dir()?.join(format!("{}.txt", id)))
}

impl PageFetcher for JinaFetcher {
    fn fetch_page_text(&self, url: &str) -> Option<String> {
        let cache = cache_path(url).ok();
        match self.fetch_text(url) {
            Ok(text) => {
                if let Some(cache) = &cache {
                    if let Some(parent) = cache.parent() {
                        let _ = std::fs::create_dir_all(parent);
                    }
                    let _ = std::fs::write(cache, &text);
                }
                Some(text)
            }
            Err(e) => {
                eprintln!("fetch failed for {}: {}", url, e);
                match cache {
                    Some(c) if c.exists() => std::fs::read_to_string(c).ok(),
                    _ => None,
                }
            }
        }
    }
}
