//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep input/output record types in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — topic, metadata, config, and report structs.
//! - `constants.rs` — stable constants (file names, endpoint URLs).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! `Metadata` and `TopicConfig` define the on-disk contract consumed by the
//! downstream generation agent. Keep schema-impacting changes synchronized
//! with `docs/contracts/*`.

pub mod constants;
pub mod models;
