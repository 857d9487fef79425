//! Static frontend assets.
//!
//! Thin wrappers over tower-http's file services: the entry document for `/`
//! and a directory service for everything the router does not claim.
//! Missing files answer 404; paths escaping the root are refused by `ServeDir`.

use tower_http::services::{ServeDir, ServeFile};

use crate::config::AssetsConfig;

/// Service answering `GET /`.
pub fn entry_service(config: &AssetsConfig) -> ServeFile {
    ServeFile::new(config.entry_path())
}

/// Catch-all service for `GET /<path>`.
pub fn asset_service(config: &AssetsConfig) -> ServeDir {
    ServeDir::new(&config.root)
}
