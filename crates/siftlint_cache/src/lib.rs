//! # siftlint_cache
//!
//! Lint result caching for siftlint.
//!
//! This crate persists per-file lint outcomes keyed by file identity so
//! unchanged files are not re-linted on subsequent runs.
//!
//! ## Invalidation
//!
//! Two strategies, selected by configuration:
//!
//! 1. **Metadata** (default): key is the file's modified time and byte size.
//!    Cheap, but a rewrite that preserves both goes undetected.
//! 2. **Content**: key is a BLAKE3 hash of the file content. Any content
//!    change is detected.
//!
//! The persisted store carries its strategy; a store written under one
//! strategy and loaded under another is treated as empty.
//!
//! ## Storage
//!
//! The store is encoded with `rkyv` and written with a temp-file-and-rename
//! so an interrupted flush never leaves a torn store behind. It lives either
//! as one file inside a cache directory or at an explicit single-file path.

mod entry;
mod error;
mod location;
mod manager;
mod store;
mod strategy;

pub use entry::CacheEntry;
pub use error::CacheError;
pub use location::{CacheLocation, STORE_FILE_NAME};
pub use manager::CacheManager;
pub use store::CacheStore;
pub use strategy::{FileKey, ParseStrategyError, Strategy, hash_content};
