//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `topics.rs` — topic file loading, filtering, lookup, validation.
//! - `scaffold.rs` — per-topic directory + JSON artifact writing.
//! - `fetch.rs` — page-text fetcher behind the `PageFetcher` seam.
//! - `settings.rs` — env credential + optional config.toml overrides.
//! - `storage.rs` — config/cache paths + audit log.
//! - `output.rs` — JSON/text output helpers and error rendering.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod fetch;
pub mod output;
pub mod scaffold;
pub mod settings;
pub mod storage;
pub mod topics;
