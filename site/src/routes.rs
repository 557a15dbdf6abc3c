//! Route wiring: the landing page, static assets and the 404 fallback.

use crate::assets::{AssetStore, PrefixResolver, content_type_for};
use crate::config::SiteConfig;
use crate::error::SiteResult;
use crate::features::{Feature, default_features};
use crate::page::{PageInput, PageMeta, assemble};
use crate::size::{AssetSizeReporter, SizeReport};
use http::{Method, Request, StatusCode};
use starsite_http::response::{self, HttpResponse};
use starsite_http::HttpIngress;
use std::sync::Arc;

/// Shared, immutable per-process state. Built once; every request reads it.
pub struct AppState {
    pub meta: PageMeta,
    /// Measured once at startup.
    pub bundle: SizeReport,
    pub features: Arc<[Feature]>,
    pub resolver: PrefixResolver,
    pub store: Arc<dyn AssetStore>,
}

impl AppState {
    /// Measure the bundle and build the feature list. Fails if the bundle
    /// cannot be read or compressed.
    pub fn bootstrap(config: &SiteConfig, store: Arc<dyn AssetStore>) -> SiteResult<Self> {
        let bundle = AssetSizeReporter::report(store.as_ref(), &config.bundle_path)?;
        let resolver = PrefixResolver::new(config.static_prefix.as_str());
        let features = default_features(&resolver).into();

        Ok(Self {
            meta: config.page.clone(),
            bundle,
            features,
            resolver,
            store,
        })
    }

    /// Assemble and render the landing page.
    pub fn render_home(&self) -> String {
        assemble(&PageInput {
            size: &self.bundle.display,
            features: &self.features,
            resolver: &self.resolver,
            meta: &self.meta,
        })
        .render()
    }
}

/// Build the ingress for `state`'s configuration.
pub fn ingress(config: &SiteConfig, state: &AppState) -> HttpIngress<AppState> {
    let mut ingress = HttpIngress::new()
        .bind(config.addr.as_str())
        .route("/", home)
        .fallback(|_req, _state| async { response::not_found() });

    if state.resolver.is_local() {
        ingress = ingress.prefix(Method::GET, state.resolver.prefix(), static_asset);
    }
    ingress
}

async fn home(_req: Request<()>, state: Arc<AppState>) -> HttpResponse {
    response::html(state.render_home())
}

async fn static_asset(req: Request<()>, state: Arc<AppState>) -> HttpResponse {
    let path = req
        .uri()
        .path()
        .strip_prefix(state.resolver.prefix())
        .unwrap_or_default()
        .to_string();

    let content_type = content_type_for(&path);
    let lookup = path.clone();
    let store = state.store.clone();
    let read = tokio::task::spawn_blocking(move || store.read(&lookup)).await;

    match read {
        Ok(Ok(bytes)) => response::with_content_type(StatusCode::OK, content_type, bytes),
        Ok(Err(e)) if e.is_not_found() => response::not_found(),
        Ok(Err(e)) => {
            tracing::error!(asset = %path, error = %e, "Failed to read static asset");
            response::internal_error()
        }
        Err(e) => {
            tracing::error!(asset = %path, error = %e, "Static asset read task failed");
            response::internal_error()
        }
    }
}
