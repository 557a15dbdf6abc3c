//! # Starsite
//!
//! The landing page server: measures the bundled client build once, then
//! assembles and renders the page for every `GET /`.
//!
//! ## Modules
//!
//! - **assets**: asset store and static path resolver collaborators
//! - **size**: gzip-at-max-effort size badge for the bundle
//! - **icons** / **highlight**: opaque node sources for iconography and code
//! - **features** / **page**: the data and the page assembler
//! - **routes**: wiring onto `starsite-http`

pub mod assets;
pub mod config;
pub mod error;
pub mod features;
pub mod highlight;
pub mod icons;
pub mod page;
pub mod routes;
pub mod size;

pub use assets::{AssetStore, DirAssetStore, MemoryAssetStore, PrefixResolver, StaticPathResolver};
pub use config::SiteConfig;
pub use error::{AssetError, SiteError, SiteResult};
pub use features::{Feature, default_features};
pub use page::{PageInput, PageMeta, assemble};
pub use routes::AppState;
pub use size::{AssetSizeReporter, SizeReport, humanize_bytes};

use std::future::Future;
use std::sync::Arc;

/// Bootstrap from `config` and serve until `shutdown` resolves.
pub async fn serve(config: SiteConfig, shutdown: impl Future<Output = ()>) -> SiteResult<()> {
    config.socket_addr()?;
    let store: Arc<dyn AssetStore> = Arc::new(DirAssetStore::new(&config.asset_dir));
    // reads and gzips the bundle
    let state = {
        let config = config.clone();
        tokio::task::spawn_blocking(move || AppState::bootstrap(&config, store)).await??
    };
    let ingress = routes::ingress(&config, &state);
    ingress.run_until(state, shutdown).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serve_fails_without_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            asset_dir: dir.path().to_path_buf(),
            ..SiteConfig::default()
        };

        let err = serve(config, std::future::pending()).await.unwrap_err();
        assert!(matches!(err, SiteError::AssetUnavailable { ref path, .. } if path == "datastar.iife.js"));
    }
}
