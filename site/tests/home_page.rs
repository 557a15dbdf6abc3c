use http::header::CONTENT_TYPE;
use http::{Method, StatusCode};
use http_body_util::BodyExt;
use starsite::size::compressed_len;
use starsite::{
    AppState, AssetStore, DirAssetStore, MemoryAssetStore, SiteConfig, SiteError, humanize_bytes,
    routes,
};
use starsite_http::{HttpResponse, empty_request};
use std::sync::Arc;

const BUNDLE: &str = "datastar.iife.js";
const FEATURE_ITEM: &str = "<li><div class=\"flex flex-col gap-1 justify-center items-center\">";

fn bundle_bytes() -> Vec<u8> {
    (0..20_000u32)
        .flat_map(|i| format!("function f{i}(){{return {};}}\n", i * 7919 % 104729).into_bytes())
        .collect()
}

async fn body_string(res: HttpResponse) -> String {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn boot(store: Arc<dyn AssetStore>) -> (SiteConfig, Arc<AppState>, starsite_http::Router<AppState>) {
    let config = SiteConfig::default();
    let state = AppState::bootstrap(&config, store).unwrap();
    let (_, router) = routes::ingress(&config, &state).into_router();
    (config, Arc::new(state), router)
}

#[tokio::test]
async fn get_root_renders_landing_page() {
    let bytes = bundle_bytes();
    let expected_badge = humanize_bytes(compressed_len(&bytes).unwrap());
    let store = Arc::new(MemoryAssetStore::new().with(BUNDLE, bytes));
    let (_, state, router) = boot(store);

    let res = router.dispatch(empty_request(Method::GET, "/"), state).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(
        res.headers()
            .get(CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );

    let html = body_string(res).await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches(FEATURE_ITEM).count(), 4);
    assert!(html.contains(&format!("{expected_badge} w/ all extensions")));
}

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
    let store = Arc::new(MemoryAssetStore::new().with(BUNDLE, bundle_bytes()));
    let (_, state, router) = boot(store);

    let first = router
        .dispatch(empty_request(Method::GET, "/"), state.clone())
        .await;
    let second = router.dispatch(empty_request(Method::GET, "/"), state).await;
    assert_eq!(body_string(first).await, body_string(second).await);
}

#[tokio::test]
async fn serves_static_assets_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(BUNDLE), bundle_bytes()).unwrap();
    std::fs::write(dir.path().join("tailwind.css"), "body{margin:0}").unwrap();
    let (_, state, router) = boot(Arc::new(DirAssetStore::new(dir.path())));

    let res = router
        .dispatch(empty_request(Method::GET, "/static/tailwind.css"), state.clone())
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get(CONTENT_TYPE).unwrap(),
        "text/css; charset=utf-8"
    );
    assert_eq!(body_string(res).await, "body{margin:0}");

    let res = router
        .dispatch(empty_request(Method::GET, "/static/../Cargo.toml"), state.clone())
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = router
        .dispatch(empty_request(Method::GET, "/static/missing.png"), state)
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_paths_fall_back_to_404() {
    let store = Arc::new(MemoryAssetStore::new().with(BUNDLE, bundle_bytes()));
    let (_, state, router) = boot(store);

    let res = router
        .dispatch(empty_request(Method::GET, "/essays"), state)
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[test]
fn missing_bundle_fails_bootstrap() {
    let config = SiteConfig::default();
    let err = AppState::bootstrap(&config, Arc::new(MemoryAssetStore::new()))
        .err()
        .unwrap();
    assert!(matches!(err, SiteError::AssetUnavailable { .. }));
}
